//! Behavioural tests for the leaf traversal operations.
//!
//! Covers document-order listing, truthiness checks, and include/exclude
//! filtering over three reference trees.

use leafwalk_core::{
    PathFilter, Value, all_leaves_falsey, all_leaves_truthy, any_leaf_falsey, any_leaf_truthy,
    get_leaves, map_leaves, search, visit,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn truthy() -> Value {
    Value::from(json!({
        "a": {
            "i": { "p": "tset" },
            "j": "asd",
        },
        "b": false,
        "c": {
            "i": ["adf", false],
        },
        "d": [
            { "t": "test" },
            { "t": null },
        ],
    }))
}

fn all_truthy() -> Value {
    Value::from(json!({
        "a": {
            "i": { "p": "tset" },
            "j": "asd",
        },
        "b": "wer",
        "c": {
            "i": ["adf", "adf"],
        },
        "d": [
            { "t": "test" },
            { "t": "erw" },
        ],
    }))
}

fn falsey() -> Value {
    let mut value = Value::from(json!({
        "a": {
            "i": { "p": false },
            "j": null,
        },
        "b": null,
        "c": {
            "i": [null, false, null],
        },
    }));
    for path in ["a.j", "c.i.2"] {
        *value.lookup_mut(path).expect("fixture path exists") = Value::Undefined;
    }
    value
}

/// Returns `value` with the leaf at `path` replaced.
fn with(mut value: Value, path: &str, replacement: Value) -> Value {
    *value.lookup_mut(path).expect("fixture path exists") = replacement;
    value
}

fn no_filter() -> PathFilter {
    PathFilter::default()
}

mod get_leaves_op {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn returns_all_leaves() {
        assert_eq!(get_leaves(&truthy(), &no_filter()).len(), 7);
    }

    #[test]
    fn returns_path_value_records() {
        let value = truthy();
        let actual: Vec<(String, Value)> = get_leaves(&value, &no_filter())
            .into_iter()
            .map(|leaf| (leaf.path, leaf.value.clone()))
            .collect();

        let expected = vec![
            ("a.i.p".to_string(), Value::from("tset")),
            ("a.j".to_string(), Value::from("asd")),
            ("b".to_string(), Value::Bool(false)),
            ("c.i.0".to_string(), Value::from("adf")),
            ("c.i.1".to_string(), Value::Bool(false)),
            ("d.0.t".to_string(), Value::from("test")),
            ("d.1.t".to_string(), Value::Null),
        ];
        assert_eq!(actual, expected);
    }
}

mod any_leaf_falsey_op {
    use super::*;

    #[test]
    fn false_when_all_leaves_truthy() {
        assert!(!any_leaf_falsey(&all_truthy(), &no_filter()));
    }

    #[test]
    fn true_when_one_leaf_falsey() {
        let value = with(all_truthy(), "c.i.1", Value::Undefined);
        assert!(any_leaf_falsey(&value, &no_filter()));
    }
}

mod all_leaves_falsey_op {
    use super::*;

    #[test]
    fn true_when_all_leaves_falsey() {
        assert!(all_leaves_falsey(&falsey(), &no_filter()));
    }

    #[test]
    fn false_when_one_leaf_truthy() {
        let value = with(falsey(), "c.i.1", Value::from("test"));
        assert!(!all_leaves_falsey(&value, &no_filter()));
    }
}

mod map_leaves_op {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_leaves_in_order() {
        let actual = map_leaves(
            &truthy(),
            |leaf| (format!("{}Y", leaf.path), format!("{}X", leaf.value)),
            &no_filter(),
        );

        let expected: Vec<(String, String)> = [
            ("a.i.pY", "tsetX"),
            ("a.jY", "asdX"),
            ("bY", "falseX"),
            ("c.i.0Y", "adfX"),
            ("c.i.1Y", "falseX"),
            ("d.0.tY", "testX"),
            ("d.1.tY", "nullX"),
        ]
        .into_iter()
        .map(|(path, value)| (path.to_string(), value.to_string()))
        .collect();
        assert_eq!(actual, expected);
    }
}

mod visit_op {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn visits_all_leaves() {
        let mut actual = String::new();
        let mut count = 0;

        visit(
            &truthy(),
            |leaf| {
                count += 1;
                actual.push_str(&format!("{}:{}_", leaf.path, leaf.value));
            },
            &no_filter(),
        );

        assert_eq!(
            actual,
            "a.i.p:tset_a.j:asd_b:false_c.i.0:adf_c.i.1:false_d.0.t:test_d.1.t:null_"
        );
        assert_eq!(count, 7);
    }
}

mod all_leaves_truthy_op {
    use super::*;

    #[test]
    fn true_if_all_leaves_truthy() {
        assert!(all_leaves_truthy(&all_truthy(), &no_filter()));
    }

    #[test]
    fn false_if_one_leaf_falsey() {
        let value = with(all_truthy(), "d.0.t", Value::Undefined);
        assert!(!all_leaves_truthy(&value, &no_filter()));

        let value = with(all_truthy(), "a.i.p", Value::from(""));
        assert!(!all_leaves_truthy(&value, &no_filter()));
    }
}

mod any_leaf_truthy_op {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn false_if_all_leaves_falsey() {
        assert!(!any_leaf_truthy(&falsey(), &no_filter()));
    }

    #[test]
    fn true_if_any_leaf_truthy_deep() {
        let value = with(falsey(), "a.i.p", Value::from("test"));
        assert!(any_leaf_truthy(&value, &no_filter()));
    }

    #[test]
    fn true_if_any_leaf_truthy_deep_array() {
        let value = with(falsey(), "c.i.1", Value::from("test"));
        assert!(any_leaf_truthy(&value, &no_filter()));
    }

    #[rstest]
    #[case::leaf("b", false)]
    #[case::array_element("c.i.0", true)]
    #[case::falsey_array_element("c.i.1", false)]
    #[case::container("d", true)]
    #[case::deep_container("d.0", true)]
    #[case::null_container("d.1", false)]
    fn respects_include_list(#[case] include: &str, #[case] expected: bool) {
        let filter = PathFilter::new().with_include([include]);
        assert_eq!(any_leaf_truthy(&truthy(), &filter), expected);
    }

    #[rstest]
    #[case::whole_subtrees(&["a", "c", "d"], false)]
    #[case::array_element(&["a", "c", "d.0"], false)]
    #[case::leaf(&["a", "c", "d.0.t"], false)]
    #[case::other_leaf(&["a", "c", "d.1.t"], true)]
    fn respects_exclude_list(#[case] exclude: &[&str], #[case] expected: bool) {
        let filter = PathFilter::new().with_exclude(exclude.iter().copied());
        assert_eq!(any_leaf_truthy(&truthy(), &filter), expected);
    }

    #[test]
    fn include_reaches_nested_whitelisted_container() {
        let value = Value::from(json!({ "a": { "i": { "p": "tset" } }, "b": false }));

        assert!(!any_leaf_truthy(&value, &PathFilter::new().with_include(["b"])));
        assert!(any_leaf_truthy(&value, &PathFilter::new().with_include(["a.i"])));
    }

    #[test]
    fn all_leaves_excluded() {
        let value = Value::from(json!({ "a": 1, "b": 2 }));
        let filter = PathFilter::new().with_exclude(["a", "b"]);

        assert!(!any_leaf_truthy(&value, &filter));
    }
}

mod search_op {
    use super::*;

    #[test]
    fn stops_at_first_match() {
        let value = Value::Array(vec![Value::Bool(true), Value::from("CRASH_IF_EVALUATED")]);

        let outcome = search(
            &value,
            |leaf| {
                assert_ne!(leaf.path, "1", "second element must not be evaluated");
                leaf.value == &Value::Bool(true)
            },
            &no_filter(),
        );

        assert!(outcome.is_found());
    }
}

#[test]
fn null_is_a_leaf() {
    let value = Value::from(json!({ "a": null }));
    let leaves = get_leaves(&value, &no_filter());

    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].value, &Value::Null);
}

#[test]
fn include_lists_differ_between_visit_and_search() {
    let value = truthy();
    let filter = PathFilter::new().with_include(["d.0"]);

    // visit cannot descend through "d", which is not prefixed by "d.0".
    assert!(get_leaves(&value, &filter).is_empty());
    assert!(any_leaf_truthy(&value, &filter));
}
