//! # leafwalk_tree
//!
//! Value tree definitions for leafwalk.
//!
//! This crate provides the dynamically typed tree that the traversal engine
//! walks: nested mappings and sequences whose terminal values are leaves.
//!
//! ## Architecture
//!
//! - [`Value`] is a closed enum mirroring the JSON data model plus `Undefined`
//! - Mappings keep insertion order (`indexmap`)
//! - [`Value::node`] classifies a value once into [`Node::Container`] or [`Node::Leaf`]
//! - Truthiness and string rendering follow JavaScript rules
//!
//! ## Example
//!
//! ```rust
//! use leafwalk_tree::{Container, Node, Value};
//!
//! let value = Value::from(serde_json::json!({ "a": [1, null] }));
//!
//! match value.node() {
//!     Node::Container(Container::Mapping(map)) => assert_eq!(map.len(), 1),
//!     _ => unreachable!(),
//! }
//! assert!(value.lookup("a.1").is_some_and(Value::is_null));
//! ```

mod node;
mod serde_impl;
mod value;

pub use node::{Container, Entries, Key, Node};
pub use value::{Map, Value};
