use serde_json::Value;

/// Template misconfiguration found while injecting templates
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Templates must be configured, but the following template name is not: {0}")]
    UnknownTemplateName(String),

    /// `kind` is a typeof-style name of the json value: `boolean`,
    /// `number`, `string`, or `object` for null, arrays and objects
    #[error("Templates must be functions, instead got: {kind} ({rendered})")]
    InvalidTemplateType { kind: &'static str, rendered: String },
}

impl TemplateError {
    pub fn unknown_name(name: impl Into<String>) -> Self {
        TemplateError::UnknownTemplateName(name.into())
    }

    pub fn invalid_type(value: &Value) -> Self {
        TemplateError::InvalidTemplateType {
            kind: type_name(value),
            rendered: value.to_string(),
        }
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Null | Value::Array(_) | Value::Object(_) => "object",
    }
}
