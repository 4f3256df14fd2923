//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use promptform_types::error::DispatchError;
use promptform_types::generation::GenerateError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// No preset with the requested name.
    UnknownPreset(String),
    /// A dispatch failed (missing field or backend failure).
    Dispatch(DispatchError),
}

impl From<DispatchError> for AppError {
    fn from(e: DispatchError) -> Self {
        AppError::Dispatch(e)
    }
}

impl AppError {
    /// HTTP status, machine code, and message for this error.
    pub fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::UnknownPreset(name) => (
                StatusCode::NOT_FOUND,
                "PRESET_NOT_FOUND",
                format!("No preset named '{name}'"),
            ),
            AppError::Dispatch(DispatchError::MissingField { name }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MISSING_FIELD",
                format!("Missing field '{name}'"),
            ),
            AppError::Dispatch(DispatchError::Backend(err)) => match err {
                GenerateError::AuthenticationFailed => (
                    StatusCode::UNAUTHORIZED,
                    "UPSTREAM_AUTH",
                    "Backend rejected the API token".to_string(),
                ),
                GenerateError::RateLimited => (
                    StatusCode::TOO_MANY_REQUESTS,
                    "UPSTREAM_RATE_LIMITED",
                    err.to_string(),
                ),
                GenerateError::ModelLoading { .. } => (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "MODEL_LOADING",
                    err.to_string(),
                ),
                _ => (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", err.to_string()),
            },
            // Unreachable in practice: templates are validated at startup.
            AppError::Dispatch(DispatchError::Template(err)) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TEMPLATE_ERROR",
                err.to_string(),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        let envelope = ApiResponse::error(code, &message);
        (status, envelope).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_preset_is_404() {
        let (status, code, _) = AppError::UnknownPreset("nope".to_string()).parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, "PRESET_NOT_FOUND");
    }

    #[test]
    fn test_missing_field_is_422() {
        let err = AppError::Dispatch(DispatchError::MissingField {
            name: "complaint".to_string(),
        });
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(code, "MISSING_FIELD");
        assert!(message.contains("complaint"));
    }

    #[test]
    fn test_backend_auth_is_401() {
        let err = AppError::Dispatch(DispatchError::Backend(
            GenerateError::AuthenticationFailed,
        ));
        let (status, _, _) = err.parts();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_model_loading_is_503() {
        let err = AppError::Dispatch(DispatchError::Backend(GenerateError::ModelLoading {
            estimated_time_s: None,
        }));
        let (status, code, _) = err.parts();
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(code, "MODEL_LOADING");
    }

    #[test]
    fn test_template_error_is_500() {
        use promptform_types::template::TemplateError;

        let err = AppError::Dispatch(DispatchError::Template(
            TemplateError::UnclosedPlaceholder(0),
        ));
        let (status, code, _) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "TEMPLATE_ERROR");
    }

    #[test]
    fn test_other_backend_error_is_502() {
        let err = AppError::Dispatch(DispatchError::Backend(GenerateError::Http(
            "connection refused".to_string(),
        )));
        let (status, code, _) = err.parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(code, "BACKEND_ERROR");
    }
}
