//! Provider router: selects the reply generator named in config.

use crate::gemini::GeminiProvider;
use crate::local::LocalTutorProvider;
use dsamentor_core::error::ProviderError;
use dsamentor_core::provider::Provider;
use dsamentor_knowledge::ExplanationCatalog;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Holds every available provider and knows which one is the default.
pub struct ProviderRouter {
    providers: HashMap<String, Arc<dyn Provider>>,
    default_provider: String,
}

impl ProviderRouter {
    /// Create a new router with a default provider.
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Register a provider.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn Provider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Get the default provider.
    pub fn default(&self) -> Option<Arc<dyn Provider>> {
        self.providers.get(&self.default_provider).cloned()
    }

    pub fn default_name(&self) -> &str {
        &self.default_provider
    }

    /// Get a specific provider by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers.get(name).cloned()
    }

    /// List all registered provider names, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Health-check every registered provider, in name order.
    pub async fn check_all(&self) -> Vec<(String, Result<bool, ProviderError>)> {
        let mut report = Vec::new();
        for name in self.list() {
            if let Some(provider) = self.get(name) {
                report.push((name.to_string(), provider.health_check().await));
            }
        }
        report
    }
}

/// Build providers from configuration.
///
/// Both providers are always registered so `doctor` can check each one;
/// `config.provider` picks the default.
pub fn build_from_config(
    config: &dsamentor_config::AppConfig,
    catalog: Arc<ExplanationCatalog>,
) -> ProviderRouter {
    let mut router = ProviderRouter::new(&config.provider);

    let local = LocalTutorProvider::new(catalog)
        .with_delay(Duration::from_millis(config.tutor.reply_delay_ms));
    router.register("local", Arc::new(local));

    let gemini = GeminiProvider::new(config.gemini.api_key.clone().unwrap_or_default())
        .with_base_url(&config.gemini.api_url)
        .with_model(&config.gemini.model)
        .with_timeout(Duration::from_secs(config.gemini.timeout_secs));
    router.register("gemini", Arc::new(gemini));

    router
}
