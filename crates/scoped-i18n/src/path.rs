use serde_json::{Map, Value};

/// Result of walking a dotted path. `Found(&Value::Null)` is a found value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Value),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<&'a Value> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Walks `path` segment by segment. Arrays are indexed by numeric segments.
pub fn find<'a>(dictionary: &'a Value, path: &str) -> Lookup<'a> {
    let mut current = dictionary;

    for segment in path.split('.') {
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|index| items.get(index)),
            _ => None,
        };

        match next {
            Some(value) => current = value,
            None => return Lookup::NotFound,
        }
    }

    Lookup::Found(current)
}

/// [`find`] rooted at a map instead of a value
pub(crate) fn find_in<'a>(map: &'a Map<String, Value>, path: &str) -> Lookup<'a> {
    let (head, rest) = match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    };

    match (map.get(head), rest) {
        (Some(value), Some(rest)) => find(value, rest),
        (Some(value), None) => Lookup::Found(value),
        (None, _) => Lookup::NotFound,
    }
}
