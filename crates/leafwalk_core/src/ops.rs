//! Operations composed from [`search`] and [`visit`].

use leafwalk_tree::Value;

use crate::filter::PathFilter;
use crate::leaf::Leaf;
use crate::walk::{search, visit};

/// Returns true if any admitted leaf satisfies `predicate`.
pub fn any_leaf<'v, P>(value: &'v Value, predicate: P, filter: &PathFilter) -> bool
where
    P: FnMut(&Leaf<'v>) -> bool,
{
    search(value, predicate, filter).is_found()
}

/// Returns true if no admitted leaf violates `predicate`.
///
/// Vacuously true when every leaf is filtered out.
pub fn every<'v, P>(value: &'v Value, mut predicate: P, filter: &PathFilter) -> bool
where
    P: FnMut(&Leaf<'v>) -> bool,
{
    !search(value, |leaf| !predicate(leaf), filter).is_found()
}

/// Collects every admitted leaf in traversal order.
pub fn get_leaves<'v>(value: &'v Value, filter: &PathFilter) -> Vec<Leaf<'v>> {
    map_leaves(value, |leaf| leaf, filter)
}

/// Collects `map_fn` applied to every admitted leaf, in traversal order.
pub fn map_leaves<'v, T, F>(value: &'v Value, mut map_fn: F, filter: &PathFilter) -> Vec<T>
where
    F: FnMut(Leaf<'v>) -> T,
{
    let mut result = Vec::new();
    visit(value, |leaf| result.push(map_fn(leaf)), filter);
    result
}

pub fn any_leaf_truthy(value: &Value, filter: &PathFilter) -> bool {
    any_leaf(value, Leaf::is_truthy, filter)
}

pub fn all_leaves_truthy(value: &Value, filter: &PathFilter) -> bool {
    every(value, Leaf::is_truthy, filter)
}

pub fn any_leaf_falsey(value: &Value, filter: &PathFilter) -> bool {
    any_leaf(value, Leaf::is_falsey, filter)
}

pub fn all_leaves_falsey(value: &Value, filter: &PathFilter) -> bool {
    every(value, Leaf::is_falsey, filter)
}
