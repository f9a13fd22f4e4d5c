#![forbid(unsafe_code)]

//! Scoped key-value translation lookup.
//!
//! A [`Translator`] owns a nested json dictionary of translations and
//! resolves dotted keys against it. Lookups try the call scope and the
//! instance scope before the bare key, pick `one`/`other` forms from a
//! `count` parameter, interpolate `%{name}`-style placeholders and finally
//! render inline `<t name='..'>` markup through template functions.
//!
//! Missing and empty translations never fail: they fall back to a readable
//! default derived from the key, or to whatever the registered hooks return.

mod alternatives;
mod catalog;
mod child;
mod config;
mod error;
mod global;
mod hooks;
mod interpolate;
mod key;
mod options;
mod params;
mod path;
mod plural;
mod translator;

pub use alternatives::alternatives;
pub use catalog::{merge, nest, Catalog};
pub use child::ScopedTranslator;
pub use config::Config;
pub use error::{Error, Result};
pub use global::{global, init_global};
pub use hooks::{EmptyHook, Hooks, MissingHook, Modifier, TemplateErrorHook};
pub use interpolate::interpolate;
pub use key::Keys;
pub use options::{TranslateOptions, Transformer};
pub use params::Params;
pub use path::{find, Lookup};
pub use plural::{coerce_count, resolve_one_other};
pub use translator::{get_default, Context, Translate, Translator};

/// Re-export commonly used types for convenience
pub use inline_tags::{Template, TemplateError, TemplateTable};
pub use serde_json::{json, Value};
