//! Value definition.
//!
//! The tree type walked by the traversal engine.

use std::fmt;

use indexmap::IndexMap;

/// An insertion-ordered mapping from property names to values.
pub type Map = IndexMap<String, Value>;

/// A node of a dynamically typed value tree.
///
/// `Array` and `Object` are containers; every other variant is a leaf,
/// including `Null` and `Undefined`.
///
/// # Example
///
/// ```rust
/// use leafwalk_tree::Value;
///
/// let value = Value::from(vec![Value::from(0), Value::from("x")]);
///
/// assert!(value.is_container());
/// assert!(!value.lookup("0").is_some_and(Value::is_truthy));
/// assert!(value.lookup("1").is_some_and(Value::is_truthy));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// An absent value.
    Undefined,

    /// An explicit null.
    #[default]
    Null,

    Bool(bool),

    /// A double precision number. May be `NaN` or infinite.
    Number(f64),

    String(String),

    /// An ordered sequence.
    Array(Vec<Value>),

    /// An insertion-ordered mapping.
    Object(Map),
}

impl Value {
    /// Returns true if this value is an array or an object.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Returns true if the value is truthy under JavaScript rules.
    ///
    /// `undefined`, `null`, `false`, `0`, `-0`, `NaN` and the empty string
    /// are falsy. Everything else, including empty containers, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    /// Logical negation of [`Value::is_truthy`].
    #[inline]
    pub fn is_falsey(&self) -> bool {
        !self.is_truthy()
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Resolves a dotted path such as `"c.i.0"` against this value.
    ///
    /// The empty path resolves to `self`. Array segments must be decimal
    /// indices. Keys containing `.` cannot be addressed.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.')
            .try_fold(self, |current, segment| current.child(segment))
    }

    /// Mutable variant of [`Value::lookup`].
    pub fn lookup_mut(&mut self, path: &str) -> Option<&mut Value> {
        if path.is_empty() {
            return Some(self);
        }
        path.split('.')
            .try_fold(self, |current, segment| current.child_mut(segment))
    }

    fn child(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        }
    }

    fn child_mut(&mut self, segment: &str) -> Option<&mut Value> {
        match self {
            Value::Object(map) => map.get_mut(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get_mut(i)),
            _ => None,
        }
    }
}

/// Renders the value the way JavaScript's `String(value)` does.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => fmt_number(*n, f),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // Array joining renders holes as empty strings.
                    if !matches!(item, Value::Undefined | Value::Null) {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            Value::Object(_) => f.write_str("[object Object]"),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        // Exponent form with an explicit sign: 1e+21, 1.5e-7.
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exponent)
            }
            _ => f.write_str(&formatted),
        }
    } else if n.fract() == 0.0 {
        write!(f, "{:.0}", n)
    } else {
        write!(f, "{}", n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Converts a JSON value, keeping object key order.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::undefined(Value::Undefined, false)]
    #[case::null(Value::Null, false)]
    #[case::false_(Value::Bool(false), false)]
    #[case::true_(Value::Bool(true), true)]
    #[case::zero(Value::Number(0.0), false)]
    #[case::negative_zero(Value::Number(-0.0), false)]
    #[case::nan(Value::Number(f64::NAN), false)]
    #[case::non_zero(Value::Number(-3.5), true)]
    #[case::infinity(Value::Number(f64::INFINITY), true)]
    #[case::empty_string(Value::from(""), false)]
    #[case::non_empty_string(Value::from("0"), true)]
    #[case::empty_array(Value::Array(Vec::new()), true)]
    #[case::empty_object(Value::Object(Map::new()), true)]
    fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
        assert_eq!(value.is_falsey(), !expected);
    }

    #[rstest]
    #[case::undefined(Value::Undefined, "undefined")]
    #[case::null(Value::Null, "null")]
    #[case::bool(Value::Bool(false), "false")]
    #[case::integer(Value::from(42), "42")]
    #[case::negative_zero(Value::Number(-0.0), "0")]
    #[case::fraction(Value::Number(1.5), "1.5")]
    #[case::small_fraction(Value::Number(0.000001), "0.000001")]
    #[case::tiny(Value::Number(1e-7), "1e-7")]
    #[case::tiny_negative(Value::Number(-1.5e-10), "-1.5e-10")]
    #[case::below_exponent_threshold(Value::Number(1e20), "100000000000000000000")]
    #[case::huge(Value::Number(1e21), "1e+21")]
    #[case::huge_fraction_mantissa(Value::Number(-2.5e300), "-2.5e+300")]
    #[case::nan(Value::Number(f64::NAN), "NaN")]
    #[case::neg_infinity(Value::Number(f64::NEG_INFINITY), "-Infinity")]
    #[case::string(Value::from("tset"), "tset")]
    #[case::array(Value::from(json!([1, null, "a", [2, 3]])), "1,,a,2,3")]
    #[case::object(Value::from(json!({"a": 1})), "[object Object]")]
    fn test_display(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let value = Value::from(json!({ "z": 1, "a": 2, "m": 3 }));
        let Value::Object(map) = value else {
            panic!("Expected Object variant");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_lookup() {
        let value = Value::from(json!({ "c": { "i": ["adf", false] } }));

        assert_eq!(value.lookup(""), Some(&value));
        assert_eq!(value.lookup("c.i.0"), Some(&Value::from("adf")));
        assert_eq!(value.lookup("c.i.1"), Some(&Value::Bool(false)));
        assert_eq!(value.lookup("c.i.2"), None);
        assert_eq!(value.lookup("c.i.x"), None);
        assert_eq!(value.lookup("c.i.0.deeper"), None);
    }

    #[test]
    fn test_lookup_mut_replaces_leaf() {
        let mut value = Value::from(json!({ "d": [{ "t": "test" }] }));

        if let Some(slot) = value.lookup_mut("d.0.t") {
            *slot = Value::Undefined;
        }

        assert_eq!(value.lookup("d.0.t"), Some(&Value::Undefined));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_collect_object() {
        let value: Value = [("a", Value::from(1)), ("b", Value::Null)]
            .into_iter()
            .collect();

        assert_eq!(value, Value::from(json!({ "a": 1, "b": null })));
    }
}
