//! Init command implementation

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use leafwalk_core::WalkConfig;
use miette::{IntoDiagnostic, Result};
use tracing::{debug, info};

const HEADER: &str = "\
// leafwalk configuration
//   include: paths to restrict traversal to (matched as string prefixes)
//   exclude: exact paths whose subtrees are skipped
";

/// Renders `config` as a commented JSONC document.
fn render_config(config: &WalkConfig) -> Result<String> {
    let body = serde_json::to_string_pretty(config).into_diagnostic()?;
    Ok(format!("{HEADER}{body}\n"))
}

/// Opens a fresh file at `path`, removing an existing one first when
/// `replace` is set. A symlink in the final component is never followed.
fn create_config_file(path: &Path, replace: bool) -> io::Result<File> {
    if replace {
        match fs::remove_file(path) {
            Ok(()) => debug!("Removed existing {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOFOLLOW);
    }

    options.open(path)
}

pub fn run_init(force: bool) -> Result<()> {
    let path = Path::new(WalkConfig::CONFIG_FILES[0]);
    let document = render_config(&WalkConfig::default())?;

    let mut file = match create_config_file(path, force) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            return Err(miette::miette!(
                "{} already exists; use --force to replace it",
                path.display()
            ));
        }
        Err(e) => return Err(e).into_diagnostic(),
    };

    file.write_all(document.as_bytes()).into_diagnostic()?;
    info!("Created {}", path.display());
    Ok(())
}
