//! Command implementations

mod check;
mod init;
mod leaves;

pub use check::{Check, run_check};
pub use init::run_init;
pub use leaves::run_leaves;

use std::path::Path;

use leafwalk_core::{PathFilter, Value, WalkConfig};
use miette::{IntoDiagnostic, Result};
use tracing::{debug, info};

use crate::cli::{Cli, WalkArgs};

/// Loads the document named by `walk` and the filter to apply to it.
fn prepare(cli: &Cli, walk: &WalkArgs) -> Result<(Value, PathFilter)> {
    let mut config = if let Some(ref path) = cli.config {
        WalkConfig::from_file(path).into_diagnostic()?
    } else {
        find_config()?
    };
    config.merge_cli(&walk.include, &walk.exclude);

    let value = if walk.file == Path::new("-") {
        leafwalk_core::read_document(std::io::stdin().lock()).into_diagnostic()?
    } else {
        leafwalk_core::load_document(&walk.file).into_diagnostic()?
    };

    Ok((value, config.filter()))
}

fn find_config() -> Result<WalkConfig> {
    if let Some(path) = WalkConfig::discover(".") {
        info!("Using config: {}", path.display());
        return WalkConfig::from_file(&path).into_diagnostic();
    }

    debug!("No config file found, using defaults");
    Ok(WalkConfig::new())
}
