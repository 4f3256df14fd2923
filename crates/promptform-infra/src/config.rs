//! Global configuration loader for Promptform.
//!
//! Reads `config.toml` from the given path and deserializes it into
//! [`GlobalConfig`]. Falls back to the built-in defaults when the file is
//! missing or malformed: the service must stay runnable with nothing but
//! the API token set.

use std::path::Path;

use promptform_types::config::GlobalConfig;

/// Load global configuration from a `config.toml` path.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(config_path: &Path) -> GlobalConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}
