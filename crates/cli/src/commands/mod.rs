pub mod ask;
pub mod chat;
pub mod doctor;
pub mod format;
pub mod onboard;
pub mod serve;
pub mod topics;

use std::sync::Arc;

use dsamentor_config::AppConfig;
use dsamentor_knowledge::ExplanationCatalog;
use dsamentor_tutor::Tutor;

/// Load config and build a tutor around the configured provider.
pub(crate) fn load_tutor() -> dsamentor_core::Result<(AppConfig, Tutor)> {
    let config = AppConfig::load()?;
    let catalog = Arc::new(ExplanationCatalog::builtin());
    let router = dsamentor_providers::build_from_config(&config, catalog);
    let provider = router.default().ok_or_else(|| dsamentor_core::Error::Config {
        message: format!("unknown provider '{}'", config.provider),
    })?;
    Ok((config, Tutor::new(provider)))
}
