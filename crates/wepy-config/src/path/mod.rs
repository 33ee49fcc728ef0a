//! Dotted key-path access into nested mappings
//!
//! A path such as `build.web.htmlOutput` addresses the `htmlOutput` entry of
//! the `web` mapping inside the `build` mapping. Only the last segment is a
//! leaf; every earlier segment names an intermediate container. Objects and
//! class instances (through their fields) are both descended into.

use wepy_core::{Map, Value};

/// Split a dotted path into its segments.
///
/// Empty segments are kept as empty keys, so `"a..b"` yields `a`, `""`, `b`.
pub fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('.')
}

/// Read the value stored at `path`.
///
/// Returns `None` when the leaf is absent, or when the walk is cut short by
/// an intermediate segment that is missing or holds neither an object nor
/// an instance.
pub fn get_value<'a>(container: &'a Map, path: &str) -> Option<&'a Value> {
    let (parents, leaf) = split_leaf(path);
    let mut current = container;

    for segment in parents {
        current = match current.get(segment)? {
            Value::Object(map) => map,
            Value::Instance(instance) => &instance.fields,
            _ => return None,
        };
    }

    current.get(leaf)
}

/// Write `value` at `path`, creating intermediate mappings as needed.
///
/// An intermediate segment that is absent or holds a value that is not
/// object-typed (a string, number, boolean or function) is replaced by a
/// fresh empty mapping before descending. Object-typed segments are kept:
/// objects and instances are written into, while `null` and arrays are left
/// intact and the write is skipped, since neither can hold a named key.
/// This never fails.
pub fn set_value<'a>(container: &'a mut Map, path: &str, value: Value) -> &'a mut Map {
    let (parents, leaf) = split_leaf(path);
    let mut current: &mut Map = &mut *container;

    for segment in parents {
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(Value::object);

        match child_map(slot) {
            Some(map) => current = map,
            None => return container,
        }
    }

    current.insert(leaf.to_string(), value);
    container
}

/// Mapping to descend into at an intermediate slot, coercing non-object values
fn child_map(slot: &mut Value) -> Option<&mut Map> {
    if slot.type_of() != "object" {
        *slot = Value::object();
    }

    match slot {
        Value::Object(map) => Some(map),
        Value::Instance(instance) => Some(&mut instance.fields),
        _ => None,
    }
}

/// Split `path` into its intermediate segments and its leaf
fn split_leaf(path: &str) -> (Vec<&str>, &str) {
    let mut segments: Vec<&str> = split_path(path).collect();
    let leaf = segments.pop().unwrap_or("");
    (segments, leaf)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::from),
        ]
    }

    fn arb_primitive() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<bool>().prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            "[a-z]{0,8}".prop_map(Value::from),
        ]
    }

    proptest! {
        // A write is always readable back at the same path
        #[test]
        fn set_then_get_identity(
            segments in prop::collection::vec("[a-zA-Z]{1,6}", 1..6),
            value in arb_scalar(),
        ) {
            let path = segments.join(".");
            let mut config = Map::new();
            set_value(&mut config, &path, value.clone());
            prop_assert_eq!(get_value(&config, &path), Some(&value));
        }

        // Writing through a primitive prefix coerces it and still round-trips
        #[test]
        fn set_through_primitive_prefix(
            prefix in "[a-z]{1,6}",
            rest in prop::collection::vec("[a-z]{1,6}", 1..4),
            blocker in arb_primitive(),
            value in arb_scalar(),
        ) {
            let mut config = Map::new();
            set_value(&mut config, &prefix, blocker);

            let path = format!("{}.{}", prefix, rest.join("."));
            set_value(&mut config, &path, value.clone());

            prop_assert!(get_value(&config, &prefix).unwrap().is_mapping());
            prop_assert_eq!(get_value(&config, &path), Some(&value));
        }
    }
}
