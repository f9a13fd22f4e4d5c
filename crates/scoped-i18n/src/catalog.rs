use serde_json::{Map, Value};
use std::sync::{Arc, PoisonError, RwLock};

/// The translation dictionary shared by a translator and its children.
///
/// The dictionary is never mutated in place. [`Catalog::add`] builds a new
/// merged dictionary and swaps it in, so a snapshot taken by a reader stays
/// consistent for as long as the reader holds it.
#[derive(Debug)]
pub struct Catalog {
    dictionary: RwLock<Arc<Value>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Value::Object(Map::new()))
    }
}

impl Catalog {
    /// A catalog over `dictionary`. Anything but a json object is replaced
    /// by an empty dictionary.
    pub fn new(dictionary: Value) -> Self {
        let dictionary = match dictionary {
            Value::Object(_) => dictionary,
            Value::Null => Value::Object(Map::new()),
            other => {
                tracing::warn!(
                    "translations must be a json object, using an empty dictionary instead of {}",
                    other
                );
                Value::Object(Map::new())
            }
        };

        Self {
            dictionary: RwLock::new(Arc::new(dictionary)),
        }
    }

    /// The current dictionary
    pub fn snapshot(&self) -> Arc<Value> {
        let dictionary = self
            .dictionary
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&dictionary)
    }

    /// Deep merges `dictionaries` over the current dictionary, later ones
    /// winning, and replaces it. Sources that are not json objects are
    /// skipped, so the dictionary stays an object.
    pub fn add<I>(&self, dictionaries: I)
    where
        I: IntoIterator<Item = Value>,
    {
        let mut dictionary = self
            .dictionary
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let mut merged = Value::clone(&dictionary);
        let mut added = 0;
        for source in dictionaries {
            match source {
                Value::Object(_) => {
                    merge(&mut merged, source);
                    added += 1;
                }
                Value::Null => {}
                other => {
                    tracing::warn!("ignoring non-object translations added to the catalog: {}", other);
                }
            }
        }

        *dictionary = Arc::new(merged);
        tracing::debug!("merged {added} dictionaries into the catalog");
    }
}

/// Recursive merge: objects merge key by key, any other value in `source`
/// overwrites what is in `target`
pub fn merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}

/// Wraps `value` so it sits at the dotted `scope` path:
/// `nest("a.b", v)` is `{"a": {"b": v}}`
pub fn nest(scope: &str, value: Value) -> Value {
    scope
        .split('.')
        .rev()
        .fold(value, |inner, segment| {
            let mut map = Map::new();
            map.insert(segment.to_owned(), inner);
            Value::Object(map)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn merge_is_recursive() {
        let mut target = json!({"a": {"b": 1, "keep": true}});
        merge(&mut target, json!({"a": {"c": 2}}));
        assert_eq!(target, json!({"a": {"b": 1, "keep": true, "c": 2}}));

        merge(&mut target, json!({"a": {"b": 9}}));
        assert_eq!(target, json!({"a": {"b": 9, "keep": true, "c": 2}}));
    }

    #[test]
    fn merge_overwrites_non_objects() {
        let mut target = json!({"list": ["a", "b"], "text": {"nested": 1}});
        merge(&mut target, json!({"list": ["a", "b", "c"], "text": "flat"}));
        assert_eq!(target, json!({"list": ["a", "b", "c"], "text": "flat"}));
    }

    #[test]
    fn nest_under_scope() {
        assert_eq!(nest("a.b", json!({"k": "v"})), json!({"a": {"b": {"k": "v"}}}));
        assert_eq!(nest("single", json!(1)), json!({"single": 1}));
    }

    #[test]
    fn add_swaps_snapshot() {
        let catalog = Catalog::new(json!({"a": {"b": 1}}));
        let before = catalog.snapshot();

        catalog.add([json!({"a": {"c": 2}}), json!({"d": 3})]);

        assert_eq!(*before, json!({"a": {"b": 1}}));
        assert_eq!(*catalog.snapshot(), json!({"a": {"b": 1, "c": 2}, "d": 3}));
    }

    #[test]
    fn add_skips_non_object_sources() {
        let catalog = Catalog::new(json!({"a": {"b": "kept"}}));

        catalog.add([Value::Null]);
        assert_eq!(*catalog.snapshot(), json!({"a": {"b": "kept"}}));

        catalog.add([json!("oops"), json!(["x"]), json!(3), json!({"c": 1})]);
        assert_eq!(*catalog.snapshot(), json!({"a": {"b": "kept"}, "c": 1}));
    }

    #[test]
    fn non_object_dictionary_is_replaced() {
        assert_eq!(*Catalog::new(json!("nope")).snapshot(), json!({}));
        assert_eq!(*Catalog::new(Value::Null).snapshot(), json!({}));
        assert_eq!(*Catalog::default().snapshot(), json!({}));
    }
}
