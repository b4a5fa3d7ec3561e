//! Output formatting module

mod json;
mod text;

use leafwalk_core::Leaf;
use miette::Result;

use crate::cli::OutputFormat;

pub fn output_leaves(leaves: &[Leaf<'_>], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_leaves(leaves),
        OutputFormat::Text => text::output_leaves(leaves),
    }
}

pub fn output_check(result: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => json::output_check(result),
        OutputFormat::Text => {
            println!("{}", result);
            Ok(())
        }
    }
}
