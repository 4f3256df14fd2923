//! JSON API handlers: preset listing and prompt dispatch.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use promptform_types::preset::PresetInfo;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// Request body for `POST /api/v1/generate/{preset}`.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Field values keyed by placeholder name.
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

/// Response payload for a successful generation.
#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub preset: String,
    pub model: String,
    pub response: String,
}

/// GET /api/v1/presets -- list the available presets.
pub async fn list_presets(State(state): State<AppState>) -> ApiResponse<Vec<PresetInfo>> {
    ApiResponse::success(state.registry.infos())
}

/// POST /api/v1/generate/{preset} -- render and dispatch one prompt.
pub async fn generate(
    State(state): State<AppState>,
    Path(preset): Path<String>,
    Json(body): Json<GenerateRequest>,
) -> Result<ApiResponse<GenerateResponse>, AppError> {
    let dispatcher = state
        .dispatcher(&preset)
        .ok_or_else(|| AppError::UnknownPreset(preset.clone()))?;

    let response = dispatcher.dispatch(&body.fields).await?;

    Ok(ApiResponse::success(GenerateResponse {
        preset,
        model: state.model_id.clone(),
        response,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_fields_default_to_empty() {
        let body: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(body.fields.is_empty());

        let body: GenerateRequest =
            serde_json::from_str(r#"{"fields": {"complaint": "broken"}}"#).unwrap();
        assert_eq!(body.fields["complaint"], "broken");
    }
}
