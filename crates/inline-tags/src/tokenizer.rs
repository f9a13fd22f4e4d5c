//! Splits a translation into literal and template slots.
//!
//! Two partitions of the same (br-normalized) string are produced:
//!
//! - `contents`: literal text at even positions, template content at odd
//!   positions. Self-closing markers get an empty content slot.
//! - `names`: the same string split around every opening marker, keeping
//!   the captured template name, so odd positions hold the names in order.
//!
//! `names[i]` is the template wrapping `contents[i]` for every odd `i`.
//!
//! Example: `Hi<t name='br' /><t name='link'>Click</t> Here`
//!
//! ```text
//! contents: ["Hi", "", "", "Click", " Here"]
//! names:    ["Hi", "br", "", "link", "Click</t> Here"]
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Any opening marker, open/close or self-closing. Captures the name.
static TEMPLATE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<t name=['"]?([A-Za-z0-9_-]*?)['"]? ?/? ?>"#).expect("template name regex")
});

/// `<t name='x'>content</t>`. Captures the content.
static OPEN_CLOSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<t name=['"]?[A-Za-z0-9_-]+['"]?\s?>(.*?)</t>"#).expect("open/close regex")
});

/// `<t name='x' />`, also matches a lone opening marker once pairs are gone
static SELF_CLOSING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<t name=['"]?[A-Za-z0-9_-]+['"]? ?/? ?>"#).expect("self-closing regex")
});

static BR_OPEN_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<t name=['"]?br+['"]? ?>"#).expect("br regex"));

const BR_SELF_CLOSING: &str = "<t name='br' />";

/// Parallel content/name partitions of a translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    contents: Vec<String>,
    names: Vec<String>,
}

impl Tokens {
    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The template wrapping the content at `index`, when `index` is a
    /// template slot
    pub fn template_name(&self, index: usize) -> Option<&str> {
        if index % 2 == 1 {
            self.names.get(index).map(String::as_str)
        } else {
            None
        }
    }

    /// Template names in order of appearance
    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().skip(1).step_by(2).map(String::as_str)
    }

    /// No markup was found, the only token is the original string
    pub fn is_passthrough(&self) -> bool {
        self.contents.len() == 1
    }

    pub fn into_contents(self) -> Vec<String> {
        self.contents
    }
}

/// Rewrites bare `<t name='br'>` openers into the self-closing form
pub fn normalize_br(translation: &str) -> Cow<'_, str> {
    BR_OPEN_ONLY.replace_all(translation, BR_SELF_CLOSING)
}

pub(crate) fn has_markup(translation: &str) -> bool {
    TEMPLATE_NAME.is_match(translation)
}

pub fn tokenize(translation: &str) -> Tokens {
    let translation = normalize_br(translation);
    let names = split_keeping_group(&TEMPLATE_NAME, &translation);

    let mut contents = Vec::new();
    for chunk in split_keeping_group(&OPEN_CLOSE, &translation) {
        for (i, part) in SELF_CLOSING.split(&chunk).enumerate() {
            if i != 0 {
                // content slot of the self-closing marker we just split on
                contents.push(String::new());
            }
            contents.push(part.to_owned());
        }
    }

    Tokens { contents, names }
}

/// Splits around every match, keeping capture group 1 of each match in
/// between the surrounding pieces
fn split_keeping_group(re: &Regex, haystack: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in re.captures_iter(haystack) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        parts.push(haystack[last..whole.start()].to_owned());
        parts.push(
            caps.get(1)
                .map(|group| group.as_str().to_owned())
                .unwrap_or_default(),
        );
        last = whole.end();
    }

    parts.push(haystack[last..].to_owned());
    parts
}
