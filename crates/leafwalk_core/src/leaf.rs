//! Leaf records.

use serde::Serialize;

use leafwalk_tree::Value;

/// A terminal value together with the path at which it was found.
///
/// Produced once per visited leaf. The value is borrowed from the tree
/// being walked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaf<'v> {
    /// Dot-joined keys from the root. Empty for a leaf at the root.
    pub path: String,

    /// The leaf value.
    pub value: &'v Value,
}

impl<'v> Leaf<'v> {
    #[inline]
    pub(crate) fn new(path: &str, value: &'v Value) -> Self {
        Self {
            path: path.to_string(),
            value,
        }
    }

    /// Returns true if the leaf value is truthy.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        self.value.is_truthy()
    }

    /// Returns true if the leaf value is falsey.
    #[inline]
    pub fn is_falsey(&self) -> bool {
        self.value.is_falsey()
    }
}
