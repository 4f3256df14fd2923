//! HuggingFaceGenerator -- concrete [`TextGenerator`] implementation for
//! the Hugging Face Inference API.
//!
//! Sends single-shot text-generation requests to `POST /models/{model_id}`
//! with bearer authentication. No streaming, no retries: one request per
//! dispatch, whatever the API returns is the result.
//!
//! The API token is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

pub mod types;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use promptform_core::llm::TextGenerator;
use promptform_types::generation::{GenerateError, GenerationParams};

use self::types::{HfErrorBody, HfGeneration, HfParameters, HfRequest};

/// Default Inference API endpoint.
const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Hugging Face Inference API text-generation backend.
///
/// # API Token Security
///
/// The token is stored as a [`SecretString`] and is only exposed when
/// constructing the Authorization header. It never appears in Debug
/// output, Display output, or tracing logs.
pub struct HuggingFaceGenerator {
    client: reqwest::Client,
    api_token: SecretString,
    base_url: String,
    model: String,
}

impl HuggingFaceGenerator {
    /// Create a new Hugging Face generator.
    ///
    /// # Arguments
    ///
    /// * `api_token` - Hugging Face API token wrapped in SecretString
    /// * `model` - Model identifier (e.g. "meta-llama/Meta-Llama-3-8B-Instruct")
    pub fn new(api_token: SecretString, model: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_token,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// The full URL for this generator's model endpoint.
    fn url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }

    /// Map a non-success status and its body into a [`GenerateError`].
    fn map_error(status: u16, body: &str) -> GenerateError {
        let parsed: HfErrorBody = serde_json::from_str(body).unwrap_or_default();
        match status {
            401 | 403 => GenerateError::AuthenticationFailed,
            429 => GenerateError::RateLimited,
            503 => GenerateError::ModelLoading {
                estimated_time_s: parsed.estimated_time,
            },
            _ => GenerateError::Api {
                status,
                message: parsed.error.unwrap_or_else(|| body.to_string()),
            },
        }
    }
}

// HuggingFaceGenerator intentionally does NOT derive Debug to prevent
// accidental exposure of internal state including the API token.

impl TextGenerator for HuggingFaceGenerator {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerateError> {
        let body = HfRequest {
            inputs: prompt,
            parameters: HfParameters {
                max_new_tokens: params.max_new_tokens,
                temperature: params.temperature,
                return_full_text: false,
            },
        };

        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(Self::map_error(status.as_u16(), &error_body));
        }

        let generations: Vec<HfGeneration> = response
            .json()
            .await
            .map_err(|e| GenerateError::Deserialization(format!("failed to parse response: {e}")))?;

        match generations.into_iter().next() {
            Some(generation) => Ok(generation.generated_text),
            None => Err(GenerateError::EmptyResponse),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_generator() -> HuggingFaceGenerator {
        HuggingFaceGenerator::new(
            SecretString::from("test-token-not-real"),
            "meta-llama/Meta-Llama-3-8B-Instruct".to_string(),
        )
    }

    #[test]
    fn test_generator_name_and_model() {
        let generator = make_generator();
        assert_eq!(generator.name(), "huggingface");
        assert_eq!(generator.model(), "meta-llama/Meta-Llama-3-8B-Instruct");
    }

    #[test]
    fn test_default_url() {
        let generator = make_generator();
        assert_eq!(
            generator.url(),
            "https://api-inference.huggingface.co/models/meta-llama/Meta-Llama-3-8B-Instruct"
        );
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let generator = make_generator().with_base_url("http://localhost:8080/".to_string());
        assert_eq!(
            generator.url(),
            "http://localhost:8080/models/meta-llama/Meta-Llama-3-8B-Instruct"
        );
    }

    #[test]
    fn test_map_error_authentication() {
        let err = HuggingFaceGenerator::map_error(401, r#"{"error": "Unauthorized"}"#);
        assert!(matches!(err, GenerateError::AuthenticationFailed));
        let err = HuggingFaceGenerator::map_error(403, "");
        assert!(matches!(err, GenerateError::AuthenticationFailed));
    }

    #[test]
    fn test_map_error_rate_limited() {
        let err = HuggingFaceGenerator::map_error(429, "");
        assert!(matches!(err, GenerateError::RateLimited));
    }

    #[test]
    fn test_map_error_model_loading() {
        let err = HuggingFaceGenerator::map_error(
            503,
            r#"{"error": "Model is currently loading", "estimated_time": 20.0}"#,
        );
        assert!(matches!(
            err,
            GenerateError::ModelLoading {
                estimated_time_s: Some(t)
            } if (t - 20.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn test_map_error_other_status_uses_error_message() {
        let err = HuggingFaceGenerator::map_error(500, r#"{"error": "boom"}"#);
        match err {
            GenerateError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_map_error_other_status_falls_back_to_raw_body() {
        let err = HuggingFaceGenerator::map_error(502, "bad gateway");
        match err {
            GenerateError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "bad gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
