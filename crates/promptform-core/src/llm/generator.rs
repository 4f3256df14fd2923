//! TextGenerator trait definition.
//!
//! This is the single abstraction the dispatcher depends on: one-shot
//! prompt-in, text-out. Uses native async fn in traits (RPITIT, Rust 2024
//! edition); `BoxTextGenerator` provides the object-safe wrapper.

use promptform_types::generation::{GenerateError, GenerationParams};

/// Trait for text-generation backends.
///
/// The dispatcher depends only on `generate`: a blocking (from the
/// caller's perspective) single-shot completion with fixed parameters.
/// No streaming, no token counting, no capability negotiation.
///
/// Implementations live in promptform-infra (e.g. `HuggingFaceGenerator`).
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name (e.g. "huggingface").
    fn name(&self) -> &str;

    /// Model identifier the backend is bound to.
    fn model(&self) -> &str;

    /// Send the prompt and return the generated text, unmodified.
    fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> impl std::future::Future<Output = Result<String, GenerateError>> + Send;
}
