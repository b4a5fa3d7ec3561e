//! Text output formatter

use leafwalk_core::Leaf;
use miette::{IntoDiagnostic, Result};

const ROOT_LABEL: &str = "(root)";

pub fn output_leaves(leaves: &[Leaf<'_>]) -> Result<()> {
    for leaf in leaves {
        println!("{}", format_leaf(leaf)?);
    }
    Ok(())
}

/// Formats a leaf as `path<TAB>json`.
fn format_leaf(leaf: &Leaf<'_>) -> Result<String> {
    let path = if leaf.path.is_empty() {
        ROOT_LABEL
    } else {
        leaf.path.as_str()
    };
    let value = serde_json::to_string(leaf.value).into_diagnostic()?;
    Ok(format!("{}\t{}", path, value))
}
