//! The prompt dispatcher: render a preset's template, forward the result
//! to the backend, return the backend's text.
//!
//! One dispatch = one form submission = one outbound call. The dispatcher
//! holds no mutable state, so it is safe under concurrent invocation; each
//! call allocates its own rendered prompt. No caching, no retries, no rate
//! limiting.

use std::collections::HashMap;
use std::sync::Arc;

use promptform_types::error::DispatchError;
use promptform_types::generation::GenerationParams;
use promptform_types::preset::Preset;

use crate::llm::BoxTextGenerator;

/// Renders field values into a preset's template and dispatches the
/// rendered prompt to the backend.
///
/// Generation parameters are fixed at construction; they are never
/// request-configurable. The backend is shared (one HTTP client pool
/// across all presets).
pub struct Dispatcher {
    preset: Preset,
    params: GenerationParams,
    generator: Arc<BoxTextGenerator>,
}

impl Dispatcher {
    pub fn new(preset: Preset, params: GenerationParams, generator: Arc<BoxTextGenerator>) -> Self {
        Self {
            preset,
            params,
            generator,
        }
    }

    /// The preset this dispatcher serves.
    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// Render the template without calling the backend.
    ///
    /// Fails with [`DispatchError::MissingField`] when a placeholder has
    /// no supplied value. Used by `dispatch` and by the CLI `render`
    /// command.
    pub fn render(&self, fields: &HashMap<String, String>) -> Result<String, DispatchError> {
        self.preset
            .template
            .render(fields)
            .map_err(DispatchError::from)
    }

    /// Render the template and forward the prompt to the backend.
    ///
    /// On success returns the backend's text unmodified: no trimming, no
    /// post-processing. A missing field fails before any network call.
    pub async fn dispatch(&self, fields: &HashMap<String, String>) -> Result<String, DispatchError> {
        let prompt = self.render(fields)?;

        tracing::debug!(
            preset = %self.preset.name,
            prompt_bytes = prompt.len(),
            "dispatching prompt"
        );

        let response = self
            .generator
            .generate(&prompt, &self.params)
            .await
            .inspect_err(|err| {
                tracing::warn!(preset = %self.preset.name, error = %err, "backend call failed");
            })?;

        Ok(response)
    }
}
