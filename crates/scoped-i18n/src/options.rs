use crate::Params;
use inline_tags::TemplateTable;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Turns the rendered pieces of a templated translation into the final value
pub type Transformer = Arc<dyn Fn(Vec<Value>) -> Value + Send + Sync>;

/// Per-call options for [`crate::Translate::translate`]
#[derive(Clone, Default)]
pub struct TranslateOptions {
    pub(crate) params: Option<Params>,
    pub(crate) templates: TemplateTable<Value>,
    pub(crate) transformer: Option<Transformer>,
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(mut self, params: impl Into<Params>) -> Self {
        self.params = Some(params.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params
            .get_or_insert_with(Params::default)
            .insert(name, value);
        self
    }

    pub fn count(self, count: impl Into<Value>) -> Self {
        self.param(crate::params::COUNT, count)
    }

    pub fn scope(self, scope: impl Into<String>) -> Self {
        self.param(crate::params::SCOPE, scope.into())
    }

    /// Adds a template, overriding a predefined one of the same name
    pub fn template<F, S>(mut self, name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&str) -> S + Send + Sync + 'static,
        S: Into<Value> + 'static,
    {
        self.templates = self.templates.with(name, render);
        self
    }

    pub fn templates(mut self, templates: TemplateTable<Value>) -> Self {
        self.templates = templates;
        self
    }

    /// Replaces the default transformer, which concatenates all pieces
    /// into one string
    pub fn transformer<F>(mut self, transformer: F) -> Self
    where
        F: Fn(Vec<Value>) -> Value + Send + Sync + 'static,
    {
        self.transformer = Some(Arc::new(transformer));
        self
    }

    pub fn get_params(&self) -> Option<&Params> {
        self.params.as_ref()
    }
}

impl From<Params> for TranslateOptions {
    fn from(params: Params) -> Self {
        TranslateOptions::new().params(params)
    }
}

impl fmt::Debug for TranslateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslateOptions")
            .field("params", &self.params)
            .field("templates", &self.templates)
            .field("transformer", &self.transformer.is_some())
            .finish()
    }
}

/// Joins rendered pieces into a single string value
pub(crate) fn join_values(pieces: Vec<Value>) -> Value {
    let mut joined = String::new();
    for piece in pieces {
        match piece {
            Value::String(s) => joined.push_str(&s),
            Value::Null => {}
            other => joined.push_str(&other.to_string()),
        }
    }
    Value::String(joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_collects_params() {
        let options = TranslateOptions::new()
            .param("name", "Martin")
            .count(3)
            .scope("page");

        let params = options.get_params().expect("params");
        assert_eq!(params.get("name"), Some(&json!("Martin")));
        assert_eq!(params.count(), Some(&json!(3)));
        assert_eq!(params.scope(), Some("page"));
    }

    #[test]
    fn templates_accumulate() {
        let options = TranslateOptions::new()
            .template("a", |text: &str| text.to_owned())
            .template("b", |text: &str| json!([text]));
        assert_eq!(options.templates.len(), 2);
        assert!(options.templates.contains("b"));
    }

    #[test]
    fn join_values_flattens() {
        assert_eq!(
            join_values(vec![json!("a"), json!(1), Value::Null, json!("b")]),
            json!("a1b")
        );
    }
}
