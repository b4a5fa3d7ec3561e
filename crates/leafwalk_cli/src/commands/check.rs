//! Any/all truthiness checks

use leafwalk_core::{
    PathFilter, Value, all_leaves_falsey, all_leaves_truthy, any_leaf_falsey, any_leaf_truthy,
};
use miette::Result;
use tracing::debug;

use super::prepare;
use crate::cli::{Cli, WalkArgs};
use crate::output::output_check;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quantifier {
    Any,
    All,
}

/// A truthiness check over the leaves of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    quantifier: Quantifier,
    falsey: bool,
}

impl Check {
    pub fn any(falsey: bool) -> Self {
        Self {
            quantifier: Quantifier::Any,
            falsey,
        }
    }

    pub fn all(falsey: bool) -> Self {
        Self {
            quantifier: Quantifier::All,
            falsey,
        }
    }

    fn evaluate(self, value: &Value, filter: &PathFilter) -> bool {
        match (self.quantifier, self.falsey) {
            (Quantifier::Any, false) => any_leaf_truthy(value, filter),
            (Quantifier::Any, true) => any_leaf_falsey(value, filter),
            (Quantifier::All, false) => all_leaves_truthy(value, filter),
            (Quantifier::All, true) => all_leaves_falsey(value, filter),
        }
    }

    fn describe(self) -> &'static str {
        match (self.quantifier, self.falsey) {
            (Quantifier::Any, false) => "any leaf truthy",
            (Quantifier::Any, true) => "any leaf falsey",
            (Quantifier::All, false) => "all leaves truthy",
            (Quantifier::All, true) => "all leaves falsey",
        }
    }
}

/// Runs `check` and prints its result. Returns whether the check held.
pub fn run_check(cli: &Cli, walk: &WalkArgs, check: Check) -> Result<bool> {
    let (value, filter) = prepare(cli, walk)?;

    let result = check.evaluate(&value, &filter);
    debug!("{}: {}", check.describe(), result);

    output_check(result, walk.format)?;
    Ok(result)
}
