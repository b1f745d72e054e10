use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Format tag attached to every generation response.
pub const OUTPUT_FORMAT: &str = "MIDI";

/// Body of `POST /generate`. Required fields are `Option` so that presence
/// is checked by the handler (missing fields are a 400, not a serde reject).
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub input_data: Option<String>,
    #[serde(default)]
    pub input_type: Option<String>,
    #[serde(default)]
    pub params: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub job_id: String,
    pub format: String,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub job_id: String,
    pub format: String,
    pub result: Value,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
