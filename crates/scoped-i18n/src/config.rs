use crate::hooks::Hooks;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Construction options for a [`crate::Translator`].
///
/// The data fields can be deserialized, e.g. from a json settings file:
///
/// ```json
/// { "translations": { "greeting": "Hi %{name}" }, "scope": "en" }
/// ```
///
/// Hooks and modifiers are registered with the builder methods.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub translations: Value,
    pub scope: Option<String>,
    #[serde(skip)]
    pub(crate) hooks: Hooks,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn translations(mut self, translations: Value) -> Self {
        self.translations = translations;
        self
    }

    /// Uses anything serializable as the dictionary. Serialization failures
    /// and non-object dictionaries fall back to an empty dictionary.
    pub fn translations_from<T: Serialize + ?Sized>(self, translations: &T) -> Self {
        match to_dictionary(translations) {
            Ok(dictionary) => self.translations(dictionary),
            Err(err) => {
                tracing::warn!("unusable translations, starting with an empty dictionary: {err}");
                self.translations(Value::Object(Map::new()))
            }
        }
    }

    pub fn try_translations_from<T: Serialize + ?Sized>(self, translations: &T) -> Result<Self> {
        Ok(self.translations(to_dictionary(translations)?))
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    pub fn on_missing<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, Option<&str>, &Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.hooks.missing = Some(Arc::new(hook));
        self
    }

    pub fn on_empty<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, &Value, Option<&str>, &Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.hooks.empty = Some(Arc::new(hook));
        self
    }

    pub fn on_template_error<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, Option<&str>, &str) -> Option<Value> + Send + Sync + 'static,
    {
        self.hooks.template_error = Some(Arc::new(hook));
        self
    }

    pub fn modifier<F>(mut self, modifier: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        self.hooks.modifiers.push(Arc::new(modifier));
        self
    }
}

fn to_dictionary<T: Serialize + ?Sized>(translations: &T) -> Result<Value> {
    match serde_json::to_value(translations)? {
        dictionary @ Value::Object(_) => Ok(dictionary),
        Value::Null => Ok(Value::Object(Map::new())),
        Value::Bool(_) => Err(Error::NotAnObject("boolean")),
        Value::Number(_) => Err(Error::NotAnObject("number")),
        Value::String(_) => Err(Error::NotAnObject("string")),
        Value::Array(_) => Err(Error::NotAnObject("array")),
    }
}
