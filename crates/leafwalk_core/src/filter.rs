//! Include/exclude path filtering.
//!
//! Matching is on raw string prefixes, not path segments: an include entry
//! `"d"` admits `"d.1"` and also `"dx"`.

use serde::{Deserialize, Serialize};

/// Restricts which paths of a tree are walked.
///
/// - **include**: when present and non-empty, only paths matching an entry
///   are walked. [`visit`](crate::visit) and [`search`](crate::search) match
///   differently, see [`PathFilter::admits_visit`] and
///   [`PathFilter::admits_search`].
/// - **exclude**: a node whose path equals an entry is pruned together with
///   its whole subtree.
///
/// The root path `""` is never pruned by the include list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    include: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclude: Option<Vec<String>>,
}

impl PathFilter {
    /// Creates a filter that admits every path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the include list.
    pub fn with_include<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the exclude list.
    pub fn with_exclude<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    pub fn include(&self) -> Option<&[String]> {
        self.include.as_deref()
    }

    pub fn exclude(&self) -> Option<&[String]> {
        self.exclude.as_deref()
    }

    /// Descent rule used by [`visit`](crate::visit).
    ///
    /// A non-root path is admitted when some include entry is a prefix of it.
    pub fn admits_visit(&self, path: &str) -> bool {
        if self.is_excluded(path) {
            return false;
        }
        match self.restricting_include(path) {
            Some(include) => include.iter().any(|entry| path.starts_with(entry.as_str())),
            None => true,
        }
    }

    /// Admission rule used by [`search`](crate::search).
    ///
    /// A non-root path is admitted when some include entry is a prefix of it
    /// or it is a prefix of some include entry, so a deep entry such as
    /// `"d.0"` lets the walk pass through `"d"`.
    pub fn admits_search(&self, path: &str) -> bool {
        if self.is_excluded(path) {
            return false;
        }
        match self.restricting_include(path) {
            Some(include) => include
                .iter()
                .any(|entry| path.starts_with(entry.as_str()) || entry.starts_with(path)),
            None => true,
        }
    }

    fn is_excluded(&self, path: &str) -> bool {
        self.exclude
            .as_deref()
            .is_some_and(|exclude| exclude.iter().any(|entry| entry == path))
    }

    /// The include list, if it constrains `path` at all.
    fn restricting_include(&self, path: &str) -> Option<&[String]> {
        if path.is_empty() {
            return None;
        }
        self.include
            .as_deref()
            .filter(|include| !include.is_empty())
    }
}
