use crate::catalog;
use crate::translator::{Context, Translate};
use serde_json::Value;
use std::sync::Arc;

/// A translator scoped under its parent's scope.
///
/// Reads and writes go to the parent's catalog. Hooks start out as the
/// parent's at spawn time and can be overridden without touching the
/// parent.
pub struct ScopedTranslator {
    context: Context,
}

impl ScopedTranslator {
    pub(crate) fn new(parent: &Context, scope: &str) -> Self {
        let scope = join_scopes(parent.scope().as_deref(), scope);
        tracing::debug!("spawned scoped translator {:?}", scope);

        Self {
            context: Context::new(Arc::clone(parent.catalog()), scope, parent.hooks()),
        }
    }
}

impl Translate for ScopedTranslator {
    fn context(&self) -> &Context {
        &self.context
    }

    /// Adds `dictionaries` to the shared catalog, nested under this
    /// translator's scope
    fn add<I>(&self, dictionaries: I) -> &Self
    where
        I: IntoIterator<Item = Value>,
    {
        let scope = self.context.scope();
        let dictionaries = dictionaries
            .into_iter()
            .map(|dictionary| match (scope.as_deref(), dictionary) {
                (Some(scope), dictionary @ Value::Object(_)) => catalog::nest(scope, dictionary),
                // left for the catalog to reject
                (_, dictionary) => dictionary,
            });

        self.context.catalog().add(dictionaries);
        self
    }
}

fn join_scopes(parent: Option<&str>, own: &str) -> Option<String> {
    let scopes: Vec<&str> = [parent, Some(own)]
        .into_iter()
        .flatten()
        .filter(|scope| !scope.is_empty())
        .collect();

    if scopes.is_empty() {
        None
    } else {
        Some(scopes.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, Translator};
    use serde_json::json;

    #[test]
    fn scope_chain() {
        assert_eq!(join_scopes(None, "page"), Some("page".to_owned()));
        assert_eq!(join_scopes(Some("en"), "page"), Some("en.page".to_owned()));
        assert_eq!(join_scopes(Some("en"), ""), Some("en".to_owned()));
        assert_eq!(join_scopes(None, ""), None);
    }

    #[test]
    fn add_round_trip() {
        let parent = Translator::default();
        let child = parent.spawn("x");
        child.add([json!({"k": "v"})]);

        assert_eq!(parent.translate("x.k", None), Some(json!("v")));
        assert_eq!(child.translate("k", None), Some(json!("v")));
    }

    #[test]
    fn grandchild_writes_once_namespaced() {
        let root = Translator::new(Config::new().scope("en"));
        let grandchild = root.spawn("page").spawn("header");
        assert_eq!(grandchild.scope().as_deref(), Some("en.page.header"));

        grandchild.add([json!({"title": "Welcome"})]);
        assert_eq!(
            *root.translations(),
            json!({"en": {"page": {"header": {"title": "Welcome"}}}})
        );
        assert_eq!(grandchild.translate("title", None), Some(json!("Welcome")));
    }

    #[test]
    fn non_object_add_keeps_namespace() {
        let root = Translator::default();
        let child = root.spawn("x");
        child.add([json!({"k": "v"})]);
        child.add([Value::Null, json!("oops")]);

        assert_eq!(*root.translations(), json!({"x": {"k": "v"}}));
        assert_eq!(child.translate("k", None), Some(json!("v")));
    }

    #[test]
    fn unscoped_child_adds_at_root() {
        let root = Translator::default();
        let orphan = root.spawn("");
        assert_eq!(orphan.scope(), None);

        orphan.add([json!({"top": "level"})]);
        assert_eq!(root.translate("top", None), Some(json!("level")));
    }
}
