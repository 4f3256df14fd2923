//! Global configuration types for Promptform.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls
//! the backend model and generation parameters. All fields have defaults
//! matching the original deployment, so a missing file is fully usable.

use serde::{Deserialize, Serialize};

use crate::generation::GenerationParams;

/// Environment variable holding the Hugging Face bearer token.
pub const TOKEN_ENV_VAR: &str = "HUGGINGFACEHUB_API_TOKEN";

/// Top-level configuration for the Promptform service.
///
/// Loaded from `config.toml` in the working directory (or `--config`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Hugging Face model identifier to dispatch to.
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Maximum number of tokens the backend may generate per request.
    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    /// Sampling temperature for every request.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Override the Inference API base URL (proxies, self-hosted endpoints).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

fn default_model_id() -> String {
    "meta-llama/Meta-Llama-3-8B-Instruct".to_string()
}

fn default_max_new_tokens() -> u32 {
    200
}

fn default_temperature() -> f64 {
    0.6
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            base_url: None,
        }
    }
}

impl GlobalConfig {
    /// The fixed generation parameters derived from this configuration.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            max_new_tokens: self.max_new_tokens,
            temperature: self.temperature,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.model_id, "meta-llama/Meta-Llama-3-8B-Instruct");
        assert_eq!(config.max_new_tokens, 200);
        assert!((config.temperature - 0.6).abs() < f64::EPSILON);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_global_config_deserialize_with_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.model_id, "meta-llama/Meta-Llama-3-8B-Instruct");
        assert_eq!(config.max_new_tokens, 200);
    }

    #[test]
    fn test_global_config_deserialize_with_values() {
        let toml_str = r#"
model_id = "mistralai/Mistral-7B-Instruct-v0.3"
max_new_tokens = 512
temperature = 0.9
base_url = "http://localhost:8080"
"#;
        let config: GlobalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.model_id, "mistralai/Mistral-7B-Instruct-v0.3");
        assert_eq!(config.max_new_tokens, 512);
        assert!((config.temperature - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn test_generation_params_from_config() {
        let config = GlobalConfig {
            max_new_tokens: 128,
            temperature: 0.2,
            ..GlobalConfig::default()
        };
        let params = config.generation_params();
        assert_eq!(params.max_new_tokens, 128);
        assert!((params.temperature - 0.2).abs() < f64::EPSILON);
    }

    #[test]
    fn test_global_config_serde_roundtrip() {
        let config = GlobalConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GlobalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model_id, config.model_id);
        assert_eq!(parsed.max_new_tokens, config.max_new_tokens);
    }
}
