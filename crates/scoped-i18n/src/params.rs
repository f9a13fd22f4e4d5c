use serde_json::{Map, Value};

/// Picks the `one` or `other` form of a translation
pub const COUNT: &str = "count";

/// Overrides the instance scope for a single lookup
pub const SCOPE: &str = "$scope";

/// Interpolation data for a single lookup
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn with_count(self, count: impl Into<Value>) -> Self {
        self.with(COUNT, count)
    }

    pub fn with_scope(self, scope: impl Into<String>) -> Self {
        self.with(SCOPE, scope.into())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn count(&self) -> Option<&Value> {
        self.0.get(COUNT)
    }

    /// The call scope, when it is a non-empty string
    pub fn scope(&self) -> Option<&str> {
        self.0
            .get(SCOPE)
            .and_then(Value::as_str)
            .filter(|scope| !scope.is_empty())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Params {
    fn from(map: Map<String, Value>) -> Self {
        Params(map)
    }
}

/// Anything but a json object gives empty params
impl From<Value> for Params {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Params(map),
            _ => Params::default(),
        }
    }
}
