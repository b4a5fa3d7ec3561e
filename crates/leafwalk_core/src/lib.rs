//! # leafwalk_core
//!
//! Leaf traversal engine for leafwalk.
//!
//! This crate provides:
//! - The two primitive walks, [`visit`] (exhaustive) and [`search`] (short-circuiting)
//! - Include/exclude path filtering via [`PathFilter`]
//! - Operations composed from the primitives ([`every`], [`get_leaves`], [`map_leaves`], ...)
//! - JSON/JSONC document loading and configuration
//!
//! ## Example
//!
//! ```rust
//! use leafwalk_core::{PathFilter, Value, any_leaf_truthy, get_leaves};
//!
//! let value = Value::from(serde_json::json!({
//!     "a": { "i": { "p": "tset" } },
//!     "b": false,
//! }));
//!
//! let paths: Vec<String> = get_leaves(&value, &PathFilter::default())
//!     .into_iter()
//!     .map(|leaf| leaf.path)
//!     .collect();
//! assert_eq!(paths, vec!["a.i.p", "b"]);
//!
//! assert!(!any_leaf_truthy(&value, &PathFilter::new().with_include(["b"])));
//! assert!(any_leaf_truthy(&value, &PathFilter::new().with_include(["a.i"])));
//! ```

mod config;
mod error;
mod filter;
mod leaf;
mod ops;
mod path;
pub mod source;
mod walk;

pub use config::WalkConfig;
pub use error::WalkError;
pub use filter::PathFilter;
pub use leaf::Leaf;
pub use ops::{
    all_leaves_falsey, all_leaves_truthy, any_leaf, any_leaf_falsey, any_leaf_truthy, every,
    get_leaves, map_leaves,
};
pub use path::join_path;
pub use source::{load_document, parse_document, read_document};
pub use walk::{SearchOutcome, search, visit};

pub use leafwalk_tree::{Map, Value};
