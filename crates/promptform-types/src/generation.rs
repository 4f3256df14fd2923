//! Text-generation request parameters and backend error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sampling parameters for a single-shot text generation call.
///
/// These are process-wide constants established at startup; they are not
/// request-configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Maximum number of tokens the backend may generate.
    pub max_new_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 200,
            temperature: 0.6,
        }
    }
}

/// Errors from backend text-generation operations.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("backend error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited")]
    RateLimited,

    #[error("model is loading, retry later{}", .estimated_time_s.map(|t| format!(" (~{t:.0}s)")).unwrap_or_default())]
    ModelLoading { estimated_time_s: Option<f64> },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("empty response from backend")]
    EmptyResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_defaults_match_service_constants() {
        let params = GenerationParams::default();
        assert_eq!(params.max_new_tokens, 200);
        assert!((params.temperature - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_generate_error_display() {
        let err = GenerateError::Api {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "backend error (HTTP 500): boom");
    }

    #[test]
    fn test_model_loading_display() {
        let err = GenerateError::ModelLoading {
            estimated_time_s: Some(20.0),
        };
        assert!(err.to_string().contains("~20s"));

        let err = GenerateError::ModelLoading {
            estimated_time_s: None,
        };
        assert_eq!(err.to_string(), "model is loading, retry later");
    }
}
