//! Document loading.
//!
//! Documents are JSON with JSONC extensions (comments, trailing commas).
//! Object key order is preserved.

use std::fs;
use std::io::Read;
use std::path::Path;

use jsonc_parser::ParseOptions;
use tracing::debug;

use leafwalk_tree::Value;

use crate::WalkError;

/// Parses a JSON or JSONC document.
pub fn parse_document(text: &str) -> Result<Value, WalkError> {
    let parsed = jsonc_parser::parse_to_serde_value(text, &ParseOptions::default())
        .map_err(|e| WalkError::parse(e.to_string()))?;

    match parsed {
        Some(json) => Ok(Value::from(json)),
        None => Err(WalkError::parse("Document is empty")),
    }
}

/// Reads and parses a document file.
pub fn load_document(path: impl AsRef<Path>) -> Result<Value, WalkError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!("Loaded {} ({} bytes)", path.display(), text.len());

    parse_document(&text).map_err(|e| match e {
        WalkError::Parse(message) => {
            WalkError::parse(format!("{}: {}", path.display(), message))
        }
        other => other,
    })
}

/// Reads a whole document from `reader` and parses it.
pub fn read_document(mut reader: impl Read) -> Result<Value, WalkError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    debug!("Read document ({} bytes)", text.len());

    parse_document(&text)
}
