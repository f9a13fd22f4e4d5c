/// Errors from the fallible configuration helpers. Lookups themselves never
/// fail, see [`crate::Translate::translate`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("translations must be a json object, got {0}")]
    NotAnObject(&'static str),

    #[error("the global translator is already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, Error>;
