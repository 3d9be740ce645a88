//! Nested mappings and the container view used to walk them.
//!
//! A JSON array is treated as a mapping keyed by its decimal indices, so
//! `["x", "y"]` and `{"0": "x", "1": "y"}` walk identically.

use std::borrow::Cow;

use serde_json::{Map, Value};

/// A nested string-keyed mapping. Values are scalars or further containers.
pub type Mapping = Map<String, Value>;

/// Borrowed view over a value that holds keyed children.
#[derive(Clone, Copy, Debug)]
pub enum Container<'a> {
    /// A JSON object.
    Map(&'a Mapping),
    /// A JSON array, keyed by index.
    List(&'a [Value]),
}

impl<'a> Container<'a> {
    /// View `value` as a container, or `None` for scalars.
    pub fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Container::Map(map)),
            Value::Array(items) => Some(Container::List(items)),
            _ => None,
        }
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        match self {
            Container::Map(map) => map.len(),
            Container::List(items) => items.len(),
        }
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up a direct child by key.
    ///
    /// List keys must be canonical decimal indices: `"01"` does not match
    /// index 1.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        match self {
            Container::Map(map) => map.get(key),
            Container::List(items) => {
                let idx: usize = key.parse().ok()?;
                if idx.to_string() != key {
                    return None;
                }
                items.get(idx)
            }
        }
    }

    /// Returns `true` if `key` names a direct child.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over `(key, value)` pairs.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (Cow<'a, str>, &'a Value)> + 'a> {
        match *self {
            Container::Map(map) => Box::new(map.iter().map(|(k, v)| (Cow::Borrowed(k.as_str()), v))),
            Container::List(items) => Box::new(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (Cow::Owned(i.to_string()), v)),
            ),
        }
    }
}

impl<'a> From<&'a Mapping> for Container<'a> {
    fn from(map: &'a Mapping) -> Self {
        Container::Map(map)
    }
}

/// Strict (kind-and-value) equality between two values.
///
/// Unlike `Value`'s `PartialEq`, an object and an array with the same keyed
/// content compare equal, because both are containers. Scalars compare by
/// kind first, so integer `1`, float `1.0` and string `"1"` all differ.
pub fn strictly_equal(a: &Value, b: &Value) -> bool {
    match (Container::of(a), Container::of(b)) {
        (Some(ca), Some(cb)) => {
            ca.len() == cb.len()
                && ca
                    .entries()
                    .all(|(k, va)| cb.get(&k).is_some_and(|vb| strictly_equal(va, vb)))
        }
        (None, None) => match (a, b) {
            (Value::Number(x), Value::Number(y)) => {
                // serde_json keeps integer and float representations apart.
                (x.is_f64() == y.is_f64()) && x == y
            }
            _ => a == b,
        },
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_is_keyed_by_index() {
        let value = json!(["a", "b"]);
        let view = Container::of(&value).unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view.get("1"), Some(&json!("b")));
        assert_eq!(view.get("2"), None);
        assert_eq!(view.get("01"), None);
        assert_eq!(view.get("-1"), None);

        let keys: Vec<String> = view.entries().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec!["0", "1"]);
    }

    #[test]
    fn scalars_are_not_containers() {
        assert!(Container::of(&json!(1)).is_none());
        assert!(Container::of(&json!("x")).is_none());
        assert!(Container::of(&json!(null)).is_none());
    }

    #[test]
    fn strict_equality_discriminates_kinds() {
        assert!(strictly_equal(&json!(1), &json!(1)));
        assert!(!strictly_equal(&json!(1), &json!("1")));
        assert!(!strictly_equal(&json!(1), &json!(1.0)));
        assert!(!strictly_equal(&json!(0), &json!(false)));
        assert!(!strictly_equal(&json!(null), &json!("")));
    }

    #[test]
    fn strict_equality_ignores_key_order() {
        let a: Value = serde_json::from_str(r#"{"x": 1, "y": {"p": true, "q": null}}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"y": {"q": null, "p": true}, "x": 1}"#).unwrap();
        assert!(strictly_equal(&a, &b));
    }

    #[test]
    fn object_and_list_with_same_keys_are_equal() {
        assert!(strictly_equal(&json!({"0": "a", "1": "b"}), &json!(["a", "b"])));
        assert!(!strictly_equal(&json!({"0": "a"}), &json!(["a", "b"])));
    }
}
