//! Inline template markup for translation strings.
//!
//! A translation can mark parts of its text with `<t name='link'>click</t>`
//! or with the self-closing `<t name='br' />` form. This crate splits such a
//! string into literal and template slots and renders every template slot
//! with a named template function, so the caller decides what the markup
//! turns into (html, rich text runs, ...).

mod error;
mod inject;
mod table;
mod tokenizer;

pub use error::TemplateError;
pub use inject::{inject, inject_with, is_eligible, join_pieces};
pub use table::{RenderFn, Template, TemplateTable, PREDEFINED_NAMES};
pub use tokenizer::{normalize_br, tokenize, Tokens};
