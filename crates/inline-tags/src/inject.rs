use crate::error::TemplateError;
use crate::table::{Template, TemplateTable};
use crate::tokenizer::{self, Tokens};

/// Whether `translation` contains at least one template marker
pub fn is_eligible(translation: &str) -> bool {
    tokenizer::has_markup(translation)
}

/// The default transformer, concatenates all pieces
pub fn join_pieces(pieces: Vec<String>) -> String {
    pieces.concat()
}

/// Injects `templates` (layered over the predefined ones) and joins the
/// result into a single string
pub fn inject(
    translation: &str,
    templates: &TemplateTable<String>,
) -> Result<String, TemplateError> {
    inject_with(translation, templates, join_pieces)
}

/// Renders every template slot of `translation` and hands the ordered
/// pieces to `transformer`.
///
/// Literal slots become `T::from(text)`. Nothing is rendered unless every
/// referenced name exists and every table entry is callable.
pub fn inject_with<T, R, F>(
    translation: &str,
    templates: &TemplateTable<T>,
    transformer: F,
) -> Result<R, TemplateError>
where
    T: From<String> + 'static,
    F: FnOnce(Vec<T>) -> R,
{
    let tokens = tokenizer::tokenize(translation);
    let templates = TemplateTable::predefined().merged(templates);

    validate(&tokens, &templates)?;

    let pieces = tokens
        .contents()
        .iter()
        .enumerate()
        .map(|(index, part)| {
            match tokens.template_name(index).and_then(|name| templates.get(name)) {
                Some(Template::Render(render)) => render(part),
                _ => T::from(part.clone()),
            }
        })
        .collect();

    Ok(transformer(pieces))
}

fn validate<T>(tokens: &Tokens, templates: &TemplateTable<T>) -> Result<(), TemplateError> {
    if let Some(name) = tokens.template_names().find(|name| !templates.contains(name)) {
        return Err(TemplateError::unknown_name(name));
    }

    let invalid = templates.iter().find_map(|(_, template)| match template {
        Template::Value(value) => Some(value),
        Template::Render(_) => None,
    });

    match invalid {
        Some(value) => Err(TemplateError::invalid_type(value)),
        None => Ok(()),
    }
}
