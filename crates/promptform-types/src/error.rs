//! Dispatch and startup error types.

use thiserror::Error;

use crate::generation::GenerateError;
use crate::template::TemplateError;

/// Errors surfaced by a prompt dispatch.
///
/// Substitution failures and backend failures flow through the same type
/// so callers have one error path with distinguishable sub-kinds, instead
/// of the historical in-band "Error generating response: ..." string.
/// [`DispatchError::legacy_text`] reproduces that string for UI copy.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A template placeholder had no corresponding field value.
    /// Raised before any network call is attempted.
    #[error("missing field '{name}'")]
    MissingField { name: String },

    /// The backend call failed.
    #[error("backend call failed: {0}")]
    Backend(#[from] GenerateError),

    /// A template error other than a missing field escaped rendering.
    ///
    /// Templates are parsed and validated at startup, so rendering can
    /// only fail on a missing field; this variant exists to keep the
    /// [`TemplateError`] conversion total and is unreachable in practice.
    #[error("template error: {0}")]
    Template(TemplateError),
}

impl DispatchError {
    /// The user-visible error copy of the original scripts:
    /// `Error generating response: {cause}`.
    pub fn legacy_text(&self) -> String {
        match self {
            DispatchError::MissingField { name } => {
                format!("Error generating response: missing field '{name}'")
            }
            DispatchError::Backend(err) => format!("Error generating response: {err}"),
            DispatchError::Template(err) => format!("Error generating response: {err}"),
        }
    }
}

impl From<TemplateError> for DispatchError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::MissingField { name } => DispatchError::MissingField { name },
            other => DispatchError::Template(other),
        }
    }
}

/// Fatal configuration errors raised before the service starts.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(
        "Hugging Face API token not found. Ensure that the environment or .env file contains '{0}'"
    )]
    MissingToken(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_text_missing_field() {
        let err = DispatchError::MissingField {
            name: "complaint".to_string(),
        };
        assert_eq!(
            err.legacy_text(),
            "Error generating response: missing field 'complaint'"
        );
    }

    #[test]
    fn test_legacy_text_backend() {
        let err = DispatchError::Backend(GenerateError::RateLimited);
        assert!(err.legacy_text().starts_with("Error generating response: "));
    }

    #[test]
    fn test_template_missing_field_maps_to_missing_field() {
        let err: DispatchError = TemplateError::MissingField {
            name: "question".to_string(),
        }
        .into();
        assert!(matches!(err, DispatchError::MissingField { ref name } if name == "question"));
    }

    #[test]
    fn test_other_template_error_maps_to_template_variant() {
        let err: DispatchError = TemplateError::UnclosedPlaceholder(3).into();
        assert!(matches!(err, DispatchError::Template(_)));
        assert!(err.legacy_text().starts_with("Error generating response: "));
    }

    #[test]
    fn test_startup_error_names_env_var() {
        let err = StartupError::MissingToken("HUGGINGFACEHUB_API_TOKEN");
        assert!(err.to_string().contains("HUGGINGFACEHUB_API_TOKEN"));
    }
}
