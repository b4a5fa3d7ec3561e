//! The two primitive walks.
//!
//! Both walk depth-first in pre-order, children in natural enumeration
//! order, building each child's path as `parent.key`. They differ in the
//! include rule they apply (see [`PathFilter`]) and in whether they stop
//! early.

use tracing::trace;

use leafwalk_tree::{Node, Value};

use crate::filter::PathFilter;
use crate::leaf::Leaf;
use crate::path::PathCursor;

/// Result of a [`search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Some admitted leaf satisfied the predicate.
    Found,
    /// The node was walked and no admitted leaf satisfied the predicate.
    NotFound,
    /// The node itself was filtered out, so nothing below it was examined.
    Pruned,
}

impl SearchOutcome {
    #[inline]
    pub const fn is_found(self) -> bool {
        matches!(self, SearchOutcome::Found)
    }
}

impl From<SearchOutcome> for bool {
    fn from(outcome: SearchOutcome) -> Self {
        outcome.is_found()
    }
}

/// Calls `callback` for every admitted leaf of `value`.
///
/// Filtering uses [`PathFilter::admits_visit`]. A pruned container is never
/// descended into.
///
/// ```rust
/// use leafwalk_core::{PathFilter, Value, visit};
///
/// let value = Value::from(serde_json::json!({ "a": [1, 2], "b": null }));
/// let mut seen = Vec::new();
/// visit(
///     &value,
///     |leaf| seen.push(format!("{}:{}", leaf.path, leaf.value)),
///     &PathFilter::default(),
/// );
///
/// assert_eq!(seen, vec!["a.0:1", "a.1:2", "b:null"]);
/// ```
pub fn visit<'v, F>(value: &'v Value, mut callback: F, filter: &PathFilter)
where
    F: FnMut(Leaf<'v>),
{
    let mut cursor = PathCursor::new();
    visit_node(value, filter, &mut cursor, &mut callback);
}

fn visit_node<'v, F>(
    value: &'v Value,
    filter: &PathFilter,
    cursor: &mut PathCursor,
    callback: &mut F,
) where
    F: FnMut(Leaf<'v>),
{
    if !filter.admits_visit(cursor.as_str()) {
        trace!(path = cursor.as_str(), "pruned");
        return;
    }

    match value.node() {
        Node::Container(container) => {
            for (key, child) in container.entries() {
                let mark = cursor.descend(key);
                visit_node(child, filter, cursor, callback);
                cursor.ascend(mark);
            }
        }
        Node::Leaf(leaf) => callback(Leaf::new(cursor.as_str(), leaf)),
    }
}

/// Returns [`SearchOutcome::Found`] as soon as an admitted leaf satisfies
/// `predicate`; remaining siblings are not examined.
///
/// Filtering uses [`PathFilter::admits_search`].
///
/// ```rust
/// use leafwalk_core::{PathFilter, SearchOutcome, Value, search};
///
/// let value = Value::from(serde_json::json!({ "a": 1, "b": 2 }));
///
/// let outcome = search(&value, |leaf| leaf.path == "b", &PathFilter::default());
/// assert_eq!(outcome, SearchOutcome::Found);
///
/// let outcome = search(&value, |_| true, &PathFilter::new().with_exclude([""]));
/// assert_eq!(outcome, SearchOutcome::Pruned);
/// ```
pub fn search<'v, P>(value: &'v Value, mut predicate: P, filter: &PathFilter) -> SearchOutcome
where
    P: FnMut(&Leaf<'v>) -> bool,
{
    let mut cursor = PathCursor::new();
    search_node(value, filter, &mut cursor, &mut predicate)
}

fn search_node<'v, P>(
    value: &'v Value,
    filter: &PathFilter,
    cursor: &mut PathCursor,
    predicate: &mut P,
) -> SearchOutcome
where
    P: FnMut(&Leaf<'v>) -> bool,
{
    if !filter.admits_search(cursor.as_str()) {
        trace!(path = cursor.as_str(), "pruned");
        return SearchOutcome::Pruned;
    }

    match value.node() {
        Node::Container(container) => {
            for (key, child) in container.entries() {
                let mark = cursor.descend(key);
                let outcome = search_node(child, filter, cursor, predicate);
                cursor.ascend(mark);
                if outcome.is_found() {
                    return SearchOutcome::Found;
                }
            }
            SearchOutcome::NotFound
        }
        Node::Leaf(leaf) => {
            if predicate(&Leaf::new(cursor.as_str(), leaf)) {
                SearchOutcome::Found
            } else {
                SearchOutcome::NotFound
            }
        }
    }
}
