use crate::catalog::Catalog;
use crate::child::ScopedTranslator;
use crate::config::Config;
use crate::hooks::Hooks;
use crate::options::{self, TranslateOptions};
use crate::{alternatives, interpolate, path, plural, Keys, Params};
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};

/// Readable fallback for a missing key: its last segment with underscores
/// turned into spaces. An absent key reads as `"undefined"`.
///
/// ```
/// assert_eq!(scoped_i18n::get_default("root.user.first_name"), "first name");
/// assert_eq!(scoped_i18n::get_default(None), "undefined");
/// ```
pub fn get_default<'a>(key: impl Into<Option<&'a str>>) -> String {
    let key = key.into().unwrap_or("undefined");
    key.rsplit('.').next().unwrap_or(key).replace('_', " ")
}

/// Lookup state shared by [`Translator`] and [`ScopedTranslator`]: the
/// catalog, the scope and the registered hooks
pub struct Context {
    catalog: Arc<Catalog>,
    scope: RwLock<Option<String>>,
    hooks: RwLock<Hooks>,
}

impl Context {
    pub(crate) fn new(catalog: Arc<Catalog>, scope: Option<String>, hooks: Hooks) -> Self {
        Self {
            catalog,
            scope: RwLock::new(scope.filter(|scope| !scope.is_empty())),
            hooks: RwLock::new(hooks),
        }
    }

    pub(crate) fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub(crate) fn scope(&self) -> Option<String> {
        self.scope
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set_scope(&self, scope: Option<&str>) {
        let scope = scope.filter(|scope| !scope.is_empty()).map(str::to_owned);
        *self.scope.write().unwrap_or_else(PoisonError::into_inner) = scope;
    }

    pub(crate) fn hooks(&self) -> Hooks {
        self.hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn update_hooks(&self, update: impl FnOnce(&mut Hooks)) {
        let mut hooks = self.hooks.write().unwrap_or_else(PoisonError::into_inner);
        update(&mut hooks);
    }

    #[profiling::function]
    pub(crate) fn translate(&self, keys: &Keys, options: Option<&TranslateOptions>) -> Option<Value> {
        let params = options.and_then(TranslateOptions::get_params);
        let scope = self.scope();
        // hooks run without any lock held, they may call back into us
        let hooks = self.hooks();
        let dictionary = self.catalog.snapshot();

        let candidates = alternatives(keys, params, scope.as_deref());
        tracing::trace!("looking up {keys} via {candidates:?}");

        let Some(found) = candidates
            .iter()
            .find_map(|candidate| path::find(&dictionary, candidate).found())
        else {
            return Some(self.missing(keys, scope.as_deref(), &hooks, &dictionary));
        };

        let value = plural::resolve_one_other(found, params);
        match value {
            Value::String(text) if !text.is_empty() => {
                self.render(keys, text, options, scope.as_deref(), &hooks)
            }
            Value::Null | Value::String(_) => {
                Some(self.empty(keys, value, scope.as_deref(), &hooks, &dictionary))
            }
            _ => Some(value.clone()),
        }
    }

    pub(crate) fn has(&self, keys: &Keys, params: Option<&Params>) -> bool {
        let dictionary = self.catalog.snapshot();
        let scope = self.scope();

        alternatives(keys, params, scope.as_deref())
            .iter()
            .filter_map(|candidate| path::find(&dictionary, candidate).found())
            .any(|value| !is_empty(value))
    }

    fn missing(&self, keys: &Keys, scope: Option<&str>, hooks: &Hooks, dictionary: &Value) -> Value {
        let joined = keys.joined();
        tracing::debug!("missing translation for '{}' (scope: {:?})", joined, scope);

        hooks
            .missing
            .as_ref()
            .and_then(|hook| hook(&joined, scope, dictionary))
            .filter(|value| !value.is_null())
            .unwrap_or_else(|| Value::String(get_default(keys.last())))
    }

    fn empty(
        &self,
        keys: &Keys,
        value: &Value,
        scope: Option<&str>,
        hooks: &Hooks,
        dictionary: &Value,
    ) -> Value {
        let joined = keys.joined();
        tracing::debug!("empty translation for '{}' (scope: {:?})", joined, scope);

        hooks
            .empty
            .as_ref()
            .and_then(|hook| hook(&joined, value, scope, dictionary))
            .filter(|value| !value.is_null())
            .unwrap_or_else(|| Value::String(get_default(keys.last())))
    }

    fn render(
        &self,
        keys: &Keys,
        text: &str,
        options: Option<&TranslateOptions>,
        scope: Option<&str>,
        hooks: &Hooks,
    ) -> Option<Value> {
        let text = match options.and_then(TranslateOptions::get_params) {
            Some(params) => interpolate(text, params.as_map()).into_owned(),
            None => text.to_owned(),
        };
        let text = hooks.modify(text);

        if !inline_tags::is_eligible(&text) {
            return Some(Value::String(text));
        }

        let default_options = TranslateOptions::default();
        let options = options.unwrap_or(&default_options);
        let injected = match &options.transformer {
            Some(transformer) => {
                inline_tags::inject_with(&text, &options.templates, |pieces| transformer(pieces))
            }
            None => inline_tags::inject_with(&text, &options.templates, options::join_values),
        };

        match injected {
            Ok(value) => Some(value),
            Err(err) => {
                let joined = keys.joined();
                tracing::warn!("template injection failed for '{}': {}", joined, err);
                hooks
                    .template_error
                    .as_ref()
                    .and_then(|hook| hook(&joined, scope, &err.to_string()))
            }
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Lookup operations shared by root and scoped translators
pub trait Translate {
    fn context(&self) -> &Context;

    /// Deep merges `dictionaries` into the translations
    fn add<I>(&self, dictionaries: I) -> &Self
    where
        I: IntoIterator<Item = Value>,
        Self: Sized;

    /// Resolves `keys` to a translation.
    ///
    /// Strings are interpolated with the params and rendered through the
    /// templates when they contain `<t name=..>` markup. Other values are
    /// returned as stored. Missing and empty values resolve to whatever the
    /// matching hook returns, or to [`get_default`] of the last key.
    ///
    /// Only a template failure can yield `None`, when the template error
    /// hook returns nothing.
    fn translate(&self, keys: impl Into<Keys>, options: Option<&TranslateOptions>) -> Option<Value> {
        self.context().translate(&keys.into(), options)
    }

    /// Alias of [`Translate::translate`]
    fn t(&self, keys: impl Into<Keys>, options: Option<&TranslateOptions>) -> Option<Value> {
        self.translate(keys, options)
    }

    /// Whether any alternative of `keys` holds a non-empty value. Hooks are
    /// not called.
    fn has(&self, keys: impl Into<Keys>, params: Option<&Params>) -> bool {
        self.context().has(&keys.into(), params)
    }

    /// A snapshot of the whole dictionary
    fn translations(&self) -> Arc<Value> {
        self.context().catalog().snapshot()
    }

    fn scope(&self) -> Option<String> {
        self.context().scope()
    }

    fn set_scope(&self, scope: Option<&str>) {
        self.context().set_scope(scope)
    }

    fn on_missing<F>(&self, hook: F) -> &Self
    where
        F: Fn(&str, Option<&str>, &Value) -> Option<Value> + Send + Sync + 'static,
        Self: Sized,
    {
        self.context()
            .update_hooks(|hooks| hooks.missing = Some(Arc::new(hook)));
        self
    }

    fn on_empty<F>(&self, hook: F) -> &Self
    where
        F: Fn(&str, &Value, Option<&str>, &Value) -> Option<Value> + Send + Sync + 'static,
        Self: Sized,
    {
        self.context()
            .update_hooks(|hooks| hooks.empty = Some(Arc::new(hook)));
        self
    }

    fn on_template_error<F>(&self, hook: F) -> &Self
    where
        F: Fn(&str, Option<&str>, &str) -> Option<Value> + Send + Sync + 'static,
        Self: Sized,
    {
        self.context()
            .update_hooks(|hooks| hooks.template_error = Some(Arc::new(hook)));
        self
    }

    /// Appends a post-processor for resolved strings
    fn modify<F>(&self, modifier: F) -> &Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
        Self: Sized,
    {
        self.context()
            .update_hooks(|hooks| hooks.modifiers.push(Arc::new(modifier)));
        self
    }

    /// A child translator scoped under `scope`, sharing these translations
    fn spawn(&self, scope: &str) -> ScopedTranslator {
        ScopedTranslator::new(self.context(), scope)
    }
}

/// The root translator, owner of the translation catalog
pub struct Translator {
    context: Context,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::new(Config::default())
    }
}

impl Translator {
    pub fn new(config: Config) -> Self {
        let Config {
            translations,
            scope,
            hooks,
        } = config;

        Self {
            context: Context::new(Arc::new(Catalog::new(translations)), scope, hooks),
        }
    }
}

impl Translate for Translator {
    fn context(&self) -> &Context {
        &self.context
    }

    fn add<I>(&self, dictionaries: I) -> &Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.context.catalog().add(dictionaries);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn translator() -> Translator {
        Translator::new(Config::new().translations(json!({
            "root": {
                "user": {"name": "Martin", "empty": "", "nothing": null},
                "wait": {"one": "Wait one day", "other": "Wait %{count} days"},
                "number": 3,
                "flag": false,
                "object": {"a": 1},
                "bold": "Hi <t name='b'>there</t>",
            },
            "en": {"title": "My App"},
            "page": {"title": "My Page"},
        })))
    }

    #[test]
    fn defaults() {
        assert_eq!(get_default("root.user.age"), "age");
        assert_eq!(get_default("first_name"), "first name");
        assert_eq!(get_default(""), "");
        assert_eq!(get_default(None), "undefined");
    }

    #[test]
    fn plain_lookup() {
        let i18n = translator();
        assert_eq!(i18n.translate("root.user.name", None), Some(json!("Martin")));
        assert_eq!(i18n.t("root.user.name", None), Some(json!("Martin")));
    }

    #[test]
    fn non_strings_returned_as_is() {
        let i18n = translator();
        assert_eq!(i18n.translate("root.number", None), Some(json!(3)));
        assert_eq!(i18n.translate("root.flag", None), Some(json!(false)));
        assert_eq!(i18n.translate("root.object", None), Some(json!({"a": 1})));
        assert_eq!(
            i18n.translate("root.wait", None),
            Some(json!({"one": "Wait one day", "other": "Wait %{count} days"}))
        );
    }

    #[test]
    fn one_other() {
        let i18n = translator();
        let t = |count: Value| i18n.translate("root.wait", Some(&TranslateOptions::new().count(count)));
        assert_eq!(t(json!(1)), Some(json!("Wait one day")));
        assert_eq!(t(json!(2)), Some(json!("Wait 2 days")));
        assert_eq!(t(json!("two")), Some(json!("Wait two days")));
    }

    #[test]
    fn missing_falls_back_to_default() {
        let i18n = translator();
        assert_eq!(i18n.translate("root.user.age", None), Some(json!("age")));
        assert_eq!(i18n.translate(["a.first", "b.second_one"], None), Some(json!("second one")));
        assert_eq!(i18n.translate(None::<&str>, None), Some(json!("undefined")));
    }

    #[test]
    fn missing_hook_value_wins() {
        let i18n = translator();
        i18n.on_missing(|keys, _, _| Some(json!(format!("MISSING {keys}"))));
        assert_eq!(i18n.translate("nope", None), Some(json!("MISSING nope")));

        // a null answer still falls back
        i18n.on_missing(|_, _, _| Some(Value::Null));
        assert_eq!(i18n.translate("no_pe", None), Some(json!("no pe")));
    }

    #[test]
    fn empty_values() {
        let i18n = translator();
        assert_eq!(i18n.translate("root.user.empty", None), Some(json!("empty")));
        assert_eq!(i18n.translate("root.user.nothing", None), Some(json!("nothing")));

        i18n.on_empty(|_, value, _, _| Some(json!(format!("was {value}"))));
        assert_eq!(i18n.translate("root.user.empty", None), Some(json!("was \"\"")));
        assert_eq!(i18n.translate("root.user.nothing", None), Some(json!("was null")));
    }

    #[test]
    fn hooks_are_replaced() {
        let i18n = translator();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = first.clone();
        i18n.on_missing(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            None
        });
        let counter = second.clone();
        i18n.on_missing(move |_, _, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            None
        });

        i18n.translate("missing", None);
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn scope_precedence() {
        let i18n = translator();
        assert_eq!(i18n.translate("title", None), Some(json!("title")));

        i18n.set_scope(Some("en"));
        assert_eq!(i18n.translate("title", None), Some(json!("My App")));
        assert_eq!(
            i18n.translate("title", Some(&TranslateOptions::new().scope("page"))),
            Some(json!("My Page"))
        );

        i18n.set_scope(None);
        assert_eq!(i18n.scope(), None);
    }

    #[test]
    fn templates() {
        let i18n = translator();
        assert_eq!(i18n.translate("root.bold", None), Some(json!("Hi <b>there</b>")));
    }

    #[test]
    fn has_values() {
        let i18n = translator();
        assert!(i18n.has("root.user.name", None));
        assert!(i18n.has("root.number", None));
        assert!(i18n.has(["nope", "root.flag"], None));
        assert!(!i18n.has("root.user.empty", None));
        assert!(!i18n.has("root.user.nothing", None));
        assert!(!i18n.has("root.user.age", None));
        assert!(!i18n.has(None::<&str>, None));
    }

    #[test]
    fn add_merges() {
        let i18n = Translator::default();
        i18n.add([json!({"a": {"b": 1}})]).add([json!({"a": {"c": 2}})]);
        assert_eq!(i18n.translate("a.b", None), Some(json!(1)));
        assert_eq!(i18n.translate("a.c", None), Some(json!(2)));

        i18n.add([json!({"a": {"b": 9}})]);
        assert_eq!(i18n.translate("a.b", None), Some(json!(9)));
        assert_eq!(i18n.translate("a.c", None), Some(json!(2)));
    }

    #[test]
    fn add_ignores_non_objects() {
        let i18n = Translator::new(Config::new().translations(json!({"a": {"b": "kept"}})));
        i18n.add([Value::Null]).add([json!("oops")]);

        assert_eq!(*i18n.translations(), json!({"a": {"b": "kept"}}));
        assert_eq!(i18n.translate("a.b", None), Some(json!("kept")));
    }

    #[test]
    fn hook_may_reenter() {
        let i18n = Arc::new(translator());
        let inner = Arc::downgrade(&i18n);
        i18n.on_missing(move |_, _, _| {
            inner
                .upgrade()
                .and_then(|i18n| i18n.translate("root.user.name", None))
        });
        assert_eq!(i18n.translate("nope", None), Some(json!("Martin")));
    }
}
