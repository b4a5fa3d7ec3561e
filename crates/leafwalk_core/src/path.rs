//! Dotted path construction.

use leafwalk_tree::Key;

/// Joins a parent path and a child key with `.`.
///
/// The root has the empty path, so its children are addressed by their
/// bare key.
///
/// ```rust
/// use leafwalk_core::join_path;
///
/// assert_eq!(join_path("", "a"), "a");
/// assert_eq!(join_path("c.i", "0"), "c.i.0");
/// ```
pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// A path buffer shared across one traversal.
///
/// Descending appends a segment; ascending truncates back to the mark
/// returned by [`PathCursor::descend`].
#[derive(Debug, Default)]
pub(crate) struct PathCursor {
    buf: String,
}

impl PathCursor {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn as_str(&self) -> &str {
        &self.buf
    }

    /// Appends `key` and returns the length to restore afterwards.
    pub(crate) fn descend(&mut self, key: Key<'_>) -> usize {
        let mark = self.buf.len();
        if mark > 0 {
            self.buf.push('.');
        }
        match key {
            Key::Name(name) => self.buf.push_str(name),
            Key::Index(index) => self.buf.push_str(&index.to_string()),
        }
        mark
    }

    #[inline]
    pub(crate) fn ascend(&mut self, mark: usize) {
        self.buf.truncate(mark);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "b"), "b");
        assert_eq!(join_path("a", "i"), "a.i");
        assert_eq!(join_path("d", "1"), "d.1");
    }

    #[test]
    fn test_cursor_descend_and_ascend() {
        let mut cursor = PathCursor::new();
        assert_eq!(cursor.as_str(), "");

        let root_mark = cursor.descend(Key::Name("c"));
        let c_mark = cursor.descend(Key::Name("i"));
        let i_mark = cursor.descend(Key::Index(1));
        assert_eq!(cursor.as_str(), "c.i.1");

        cursor.ascend(i_mark);
        assert_eq!(cursor.as_str(), "c.i");
        cursor.ascend(c_mark);
        assert_eq!(cursor.as_str(), "c");
        cursor.ascend(root_mark);
        assert_eq!(cursor.as_str(), "");
    }

    #[test]
    fn test_cursor_matches_join_path() {
        let mut cursor = PathCursor::new();
        cursor.descend(Key::Name("d"));
        cursor.descend(Key::Index(0));

        assert_eq!(cursor.as_str(), join_path(&join_path("", "d"), "0"));
    }
}
