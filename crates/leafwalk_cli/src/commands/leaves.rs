//! Leaf listing command

use leafwalk_core::get_leaves;
use miette::Result;
use tracing::debug;

use super::prepare;
use crate::cli::{Cli, WalkArgs};
use crate::output::output_leaves;

pub fn run_leaves(cli: &Cli, walk: &WalkArgs) -> Result<()> {
    let (value, filter) = prepare(cli, walk)?;

    let leaves = get_leaves(&value, &filter);
    debug!("Found {} leaves", leaves.len());

    output_leaves(&leaves, walk.format)
}
