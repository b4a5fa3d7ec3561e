//! JSON output formatter

use leafwalk_core::Leaf;
use miette::{IntoDiagnostic, Result};

pub fn output_leaves(leaves: &[Leaf<'_>]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(leaves).into_diagnostic()?);
    Ok(())
}

pub fn output_check(result: bool) -> Result<()> {
    let output = serde_json::json!({ "result": result });
    println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    Ok(())
}
