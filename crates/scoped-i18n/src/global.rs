use crate::{Config, Error, Result, Translator};
use once_cell::sync::OnceCell;
use tracing::info;

/// Process wide translator. Set once, never replaced.
static GLOBAL_TRANSLATOR: OnceCell<Translator> = OnceCell::new();

/// Initialize the global translator with `config`. Fails when it was
/// already initialized, either by an earlier call or by [`global`].
pub fn init_global(config: Config) -> Result<&'static Translator> {
    info!("Initializing global translator");

    let mut config = Some(config);
    let translator = GLOBAL_TRANSLATOR.get_or_init(|| Translator::new(config.take().unwrap_or_default()));

    if config.is_some() {
        return Err(Error::AlreadyInitialized);
    }

    Ok(translator)
}

/// The global translator, created empty on first use
pub fn global() -> &'static Translator {
    GLOBAL_TRANSLATOR.get_or_init(|| {
        info!("Creating empty global translator");
        Translator::default()
    })
}
