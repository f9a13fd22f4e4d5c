use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Names that are always available, see [`TemplateTable::predefined`]
pub const PREDEFINED_NAMES: [&str; 5] = ["b", "u", "i", "span", "br"];

pub type RenderFn<T> = Arc<dyn Fn(&str) -> T + Send + Sync>;

/// An entry in a [`TemplateTable`]
pub enum Template<T> {
    /// Renders the content of a template slot
    Render(RenderFn<T>),

    /// A value that was configured where a function was expected. It is
    /// kept in the table so injection can report it.
    Value(Value),
}

impl<T> Template<T> {
    pub fn render<F>(render: F) -> Self
    where
        F: Fn(&str) -> T + Send + Sync + 'static,
    {
        Template::Render(Arc::new(render))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Template::Render(_))
    }
}

impl<T> Clone for Template<T> {
    fn clone(&self) -> Self {
        match self {
            Template::Render(render) => Template::Render(Arc::clone(render)),
            Template::Value(value) => Template::Value(value.clone()),
        }
    }
}

impl<T> fmt::Debug for Template<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Render(_) => write!(f, "Template::Render(..)"),
            Template::Value(value) => write!(f, "Template::Value({value})"),
        }
    }
}

/// Template name to template, in insertion order
pub struct TemplateTable<T> {
    entries: IndexMap<String, Template<T>>,
}

impl<T> Default for TemplateTable<T> {
    fn default() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }
}

impl<T> Clone for TemplateTable<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> fmt::Debug for TemplateTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<T> TemplateTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a render function under `name`
    pub fn with<F, S>(mut self, name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&str) -> S + Send + Sync + 'static,
        S: Into<T> + 'static,
        T: 'static,
    {
        self.insert(
            name,
            Template::render(move |text: &str| render(text).into()),
        );
        self
    }

    /// Adds a non-callable entry under `name`
    pub fn with_value(mut self, name: impl Into<String>, value: Value) -> Self {
        self.insert(name, Template::Value(value));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, template: Template<T>) -> Option<Template<T>> {
        self.entries.insert(name.into(), template)
    }

    pub fn get(&self, name: &str) -> Option<&Template<T>> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template<T>)> {
        self.entries.iter().map(|(name, template)| (name.as_str(), template))
    }

    /// `overrides` entries layered over this table. Names already present
    /// keep their position.
    pub fn merged(&self, overrides: &TemplateTable<T>) -> TemplateTable<T> {
        let mut merged = self.clone();
        for (name, template) in overrides.iter() {
            merged.insert(name, template.clone());
        }
        merged
    }
}

impl<T> TemplateTable<T>
where
    T: From<String> + 'static,
{
    /// `b`, `u`, `i` and `span` wrap their content in the html element of
    /// the same name, `br` renders a line break
    pub fn predefined() -> Self {
        TemplateTable::new()
            .with("b", |text: &str| format!("<b>{text}</b>"))
            .with("u", |text: &str| format!("<u>{text}</u>"))
            .with("i", |text: &str| format!("<i>{text}</i>"))
            .with("span", |text: &str| format!("<span>{text}</span>"))
            .with("br", |_: &str| "<br/>".to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(table: &TemplateTable<String>, name: &str, text: &str) -> Option<String> {
        match table.get(name)? {
            Template::Render(render) => Some(render(text)),
            Template::Value(_) => None,
        }
    }

    #[test]
    fn predefined_names() {
        let table = TemplateTable::<String>::predefined();
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, PREDEFINED_NAMES);

        assert_eq!(render(&table, "b", "x").as_deref(), Some("<b>x</b>"));
        assert_eq!(render(&table, "span", "x").as_deref(), Some("<span>x</span>"));
        assert_eq!(render(&table, "br", "ignored").as_deref(), Some("<br/>"));
    }

    #[test]
    fn merged_overrides_win() {
        let custom = TemplateTable::new()
            .with("b", |text: &str| format!("**{text}**"))
            .with("link", |text: &str| format!("[{text}]"));
        let merged = TemplateTable::<String>::predefined().merged(&custom);

        assert_eq!(merged.len(), 6);
        assert_eq!(render(&merged, "b", "x").as_deref(), Some("**x**"));
        assert_eq!(render(&merged, "link", "x").as_deref(), Some("[x]"));
        // overridden entries keep their original slot
        assert_eq!(merged.iter().next().map(|(name, _)| name), Some("b"));
    }

    #[test]
    fn value_entries_are_not_callable() {
        let table = TemplateTable::<String>::new().with_value("custom", json!("invalid"));
        let entry = table.get("custom").expect("entry");
        assert!(!entry.is_callable());
        assert_eq!(format!("{entry:?}"), "Template::Value(\"invalid\")");
    }
}
