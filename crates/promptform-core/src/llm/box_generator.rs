//! BoxTextGenerator -- object-safe dynamic dispatch wrapper for TextGenerator.
//!
//! 1. Define an object-safe `TextGeneratorDyn` trait with boxed futures
//! 2. Blanket-impl `TextGeneratorDyn` for all `T: TextGenerator`
//! 3. `BoxTextGenerator` wraps `Box<dyn TextGeneratorDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use promptform_types::generation::{GenerateError, GenerationParams};

use super::generator::TextGenerator;

/// Object-safe version of [`TextGenerator`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch; a blanket
/// implementation covers every `TextGenerator`.
pub trait TextGeneratorDyn: Send + Sync {
    fn name(&self) -> &str;

    fn model(&self) -> &str;

    fn generate_boxed<'a>(
        &'a self,
        prompt: &'a str,
        params: &'a GenerationParams,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerateError>> + Send + 'a>>;
}

impl<T: TextGenerator> TextGeneratorDyn for T {
    fn name(&self) -> &str {
        TextGenerator::name(self)
    }

    fn model(&self) -> &str {
        TextGenerator::model(self)
    }

    fn generate_boxed<'a>(
        &'a self,
        prompt: &'a str,
        params: &'a GenerationParams,
    ) -> Pin<Box<dyn Future<Output = Result<String, GenerateError>> + Send + 'a>> {
        Box::pin(self.generate(prompt, params))
    }
}

/// Type-erased text generator.
///
/// `TextGenerator` uses RPITIT, so it cannot be a trait object directly.
/// `BoxTextGenerator` wraps any implementation behind dynamic dispatch so
/// application state can hold the backend without a generic parameter.
pub struct BoxTextGenerator {
    inner: Box<dyn TextGeneratorDyn + Send + Sync>,
}

impl BoxTextGenerator {
    /// Wrap a concrete `TextGenerator` in a type-erased box.
    pub fn new<T: TextGenerator + 'static>(generator: T) -> Self {
        Self {
            inner: Box::new(generator),
        }
    }

    /// Human-readable backend name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Model identifier the backend is bound to.
    pub fn model(&self) -> &str {
        self.inner.model()
    }

    /// Send the prompt and return the generated text, unmodified.
    pub async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, GenerateError> {
        self.inner.generate_boxed(prompt, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGenerator;

    impl TextGenerator for EchoGenerator {
        fn name(&self) -> &str {
            "echo"
        }

        fn model(&self) -> &str {
            "echo-1"
        }

        async fn generate(
            &self,
            prompt: &str,
            _params: &GenerationParams,
        ) -> Result<String, GenerateError> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test]
    async fn test_box_generator_delegates() {
        let boxed = BoxTextGenerator::new(EchoGenerator);
        assert_eq!(boxed.name(), "echo");
        assert_eq!(boxed.model(), "echo-1");

        let out = boxed
            .generate("hello", &GenerationParams::default())
            .await
            .unwrap();
        assert_eq!(out, "hello");
    }
}
