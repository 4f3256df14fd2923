//! Application state wiring the presets to the backend.
//!
//! AppState holds one dispatcher per preset, all sharing a single backend
//! client (one HTTP connection pool). Configuration is resolved once here;
//! nothing reads the environment after startup.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use secrecy::SecretString;

use promptform_core::dispatch::Dispatcher;
use promptform_core::llm::BoxTextGenerator;
use promptform_core::presets::PresetRegistry;
use promptform_infra::config::load_global_config;
use promptform_infra::credentials::resolve_api_token;
use promptform_infra::llm::HuggingFaceGenerator;
use promptform_types::config::GlobalConfig;

/// Shared application state holding the preset registry and dispatchers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PresetRegistry>,
    pub dispatchers: Arc<HashMap<String, Dispatcher>>,
    pub model_id: String,
}

impl AppState {
    /// Initialize the application state: resolve the API token, load the
    /// config file, and wire one dispatcher per built-in preset.
    ///
    /// Fails fast when the token is absent -- the process must not start
    /// serving without a credential.
    pub async fn init(config_path: &Path) -> anyhow::Result<Self> {
        let token = resolve_api_token()?;
        let config = load_global_config(config_path).await;
        Ok(Self::from_parts(token, config))
    }

    /// Wire the state from an already-resolved token and configuration.
    pub fn from_parts(token: SecretString, config: GlobalConfig) -> Self {
        let mut generator = HuggingFaceGenerator::new(token, config.model_id.clone());
        if let Some(base_url) = &config.base_url {
            generator = generator.with_base_url(base_url.clone());
        }
        let generator = Arc::new(BoxTextGenerator::new(generator));

        let registry = PresetRegistry::builtin();
        let params = config.generation_params();

        tracing::debug!(
            model = %config.model_id,
            max_new_tokens = params.max_new_tokens,
            "wiring dispatchers"
        );

        let dispatchers = registry
            .iter()
            .map(|preset| {
                (
                    preset.name.clone(),
                    Dispatcher::new(preset.clone(), params, Arc::clone(&generator)),
                )
            })
            .collect();

        Self {
            registry: Arc::new(registry),
            dispatchers: Arc::new(dispatchers),
            model_id: config.model_id,
        }
    }

    /// Look up the dispatcher for a preset name.
    pub fn dispatcher(&self, preset: &str) -> Option<&Dispatcher> {
        self.dispatchers.get(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_wires_all_presets() {
        let state = AppState::from_parts(
            SecretString::from("test-token"),
            GlobalConfig::default(),
        );
        assert_eq!(state.dispatchers.len(), 4);
        assert!(state.dispatcher("customer-support").is_some());
        assert!(state.dispatcher("unknown").is_none());
        assert_eq!(state.model_id, "meta-llama/Meta-Llama-3-8B-Instruct");
    }
}
