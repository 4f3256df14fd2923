//! Wire types for the Hugging Face Inference API text-generation task.

use serde::{Deserialize, Serialize};

/// Request body for `POST /models/{model_id}`.
#[derive(Debug, Serialize)]
pub struct HfRequest<'a> {
    pub inputs: &'a str,
    pub parameters: HfParameters,
}

/// Generation parameters as the Inference API expects them.
///
/// `return_full_text: false` asks the API for the continuation only,
/// matching the hosted-endpoint behavior the service was built against.
#[derive(Debug, Serialize)]
pub struct HfParameters {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub return_full_text: bool,
}

/// One element of the success response array.
#[derive(Debug, Deserialize)]
pub struct HfGeneration {
    pub generated_text: String,
}

/// Error body returned with non-2xx statuses.
///
/// On 503 the API includes `estimated_time` (seconds) while the model is
/// being loaded onto an inference worker.
#[derive(Debug, Default, Deserialize)]
pub struct HfErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}
