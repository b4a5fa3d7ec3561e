//! Walk configuration.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{PathFilter, WalkError};

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/config.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Default include/exclude lists for a walk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Paths to restrict traversal to.
    #[serde(default)]
    pub include: Vec<String>,

    /// Exact paths whose subtrees are skipped.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl WalkConfig {
    /// Candidate file names, in discovery order.
    pub const CONFIG_FILES: [&'static str; 2] = [".leafwalk.jsonc", ".leafwalk.json"];

    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first configuration file present in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, WalkError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| WalkError::config(format!("Failed to read config: {}", e)))?;

        debug!("Loading config from {}", path.display());
        Self::from_json(&content)
    }

    /// Parses configuration from JSON (comments allowed) with schema validation.
    pub fn from_json(json: &str) -> Result<Self, WalkError> {
        // Parse into Value first for validation
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| WalkError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: serde_json::Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(WalkError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        serde_json::from_value(value)
            .map_err(|e| WalkError::config(format!("Invalid config: {}", e)))
    }

    /// Replaces the configured lists with non-empty command-line lists.
    pub fn merge_cli(&mut self, include: &[String], exclude: &[String]) {
        if !include.is_empty() {
            self.include = include.to_vec();
        }
        if !exclude.is_empty() {
            self.exclude = exclude.to_vec();
        }
    }

    /// Builds the path filter. Empty lists filter nothing.
    pub fn filter(&self) -> PathFilter {
        let mut filter = PathFilter::new();
        if !self.include.is_empty() {
            filter = filter.with_include(self.include.iter().cloned());
        }
        if !self.exclude.is_empty() {
            filter = filter.with_exclude(self.exclude.iter().cloned());
        }
        filter
    }
}
