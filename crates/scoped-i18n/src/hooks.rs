use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Called with `(keys, scope, translations)` when no alternative resolved
pub type MissingHook = Arc<dyn Fn(&str, Option<&str>, &Value) -> Option<Value> + Send + Sync>;

/// Called with `(keys, value, scope, translations)` when the resolved value
/// is null or an empty string. `value` is passed through as found.
pub type EmptyHook =
    Arc<dyn Fn(&str, &Value, Option<&str>, &Value) -> Option<Value> + Send + Sync>;

/// Called with `(keys, scope, message)` when template injection fails. Its
/// return value becomes the translation.
pub type TemplateErrorHook =
    Arc<dyn Fn(&str, Option<&str>, &str) -> Option<Value> + Send + Sync>;

/// Post-processes resolved strings
pub type Modifier = Arc<dyn Fn(String) -> String + Send + Sync>;

/// Callbacks of a translator. Hooks are replaced on registration, modifiers
/// accumulate and run in registration order.
#[derive(Clone, Default)]
pub struct Hooks {
    pub(crate) missing: Option<MissingHook>,
    pub(crate) empty: Option<EmptyHook>,
    pub(crate) template_error: Option<TemplateErrorHook>,
    pub(crate) modifiers: Vec<Modifier>,
}

impl Hooks {
    pub(crate) fn modify(&self, text: String) -> String {
        self.modifiers
            .iter()
            .fold(text, |text, modifier| modifier(text))
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("missing", &self.missing.is_some())
            .field("empty", &self.empty.is_some())
            .field("template_error", &self.template_error.is_some())
            .field("modifiers", &self.modifiers.len())
            .finish()
    }
}
