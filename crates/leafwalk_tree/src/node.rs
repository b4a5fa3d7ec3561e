//! Container/leaf classification.
//!
//! Every [`Value`] is classified exactly once per visit into either a
//! container, whose children are enumerated, or a leaf.

use std::fmt;
use std::iter::Enumerate;
use std::slice;

use crate::{Map, Value};

/// The shape of a value as seen by a tree walker.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A mapping or sequence to descend into.
    Container(Container<'a>),
    /// A terminal value. Includes `Null` and `Undefined`.
    Leaf(&'a Value),
}

/// A value that has children.
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
    Mapping(&'a Map),
    Sequence(&'a [Value]),
}

/// The key of a child within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// A property name of a mapping.
    Name(&'a str),
    /// A position within a sequence.
    Index(usize),
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => f.write_str(name),
            Key::Index(index) => write!(f, "{}", index),
        }
    }
}

impl Value {
    /// Classifies this value as a container or a leaf.
    #[inline]
    pub fn node(&self) -> Node<'_> {
        match self {
            Value::Object(map) => Node::Container(Container::Mapping(map)),
            Value::Array(items) => Node::Container(Container::Sequence(items)),
            leaf => Node::Leaf(leaf),
        }
    }
}

impl<'a> Container<'a> {
    /// Returns the children in natural enumeration order: insertion order
    /// for mappings, index order for sequences.
    #[inline]
    pub fn entries(self) -> Entries<'a> {
        match self {
            Container::Mapping(map) => Entries::Mapping(map.iter()),
            Container::Sequence(items) => Entries::Sequence(items.iter().enumerate()),
        }
    }

    pub fn len(self) -> usize {
        match self {
            Container::Mapping(map) => map.len(),
            Container::Sequence(items) => items.len(),
        }
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }
}

/// Iterator over the children of a [`Container`].
#[derive(Debug, Clone)]
pub enum Entries<'a> {
    Mapping(indexmap::map::Iter<'a, String, Value>),
    Sequence(Enumerate<slice::Iter<'a, Value>>),
}

impl<'a> Iterator for Entries<'a> {
    type Item = (Key<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Mapping(iter) => iter
                .next()
                .map(|(name, value)| (Key::Name(name.as_str()), value)),
            Entries::Sequence(iter) => iter.next().map(|(index, value)| (Key::Index(index), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Entries::Mapping(iter) => iter.size_hint(),
            Entries::Sequence(iter) => iter.size_hint(),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}
