use super::types::{ErrorResponse, GenerateRequest, GenerateResponse, ResultResponse, OUTPUT_FORMAT};
use crate::{cache::ResultCache, generator::Generator, models::ModelLoader, Error, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<ModelLoader>,
    pub generator: Arc<dyn Generator>,
    pub cache: Arc<ResultCache>,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn reply(status: StatusCode, error: &Error) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
}

fn require<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::validation(name)),
    }
}

pub async fn list_models(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.loader.supported_models())
}

pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> std::result::Result<Json<GenerateResponse>, ErrorReply> {
    // Validate before touching the loader
    let (model_name, input_data, input_type) = match (
        require(&request.model, "model"),
        require(&request.input_data, "input_data"),
        require(&request.input_type, "input_type"),
    ) {
        (Ok(m), Ok(d), Ok(t)) => (m, d, t),
        (Err(e), ..) | (_, Err(e), _) | (.., Err(e)) => {
            warn!("Rejected generation request: {}", e);
            return Err(reply(StatusCode::BAD_REQUEST, &e));
        }
    };

    info!("Received generation request for model: {}", model_name);

    let model = match state.loader.load(model_name) {
        Ok(model) => model,
        Err(e) => {
            // Unknown model names are a client error, not a crash
            warn!("Failed to load model {}: {}", model_name, e);
            return Err(reply(StatusCode::BAD_REQUEST, &e));
        }
    };

    match state
        .generator
        .generate(&model, input_data, input_type, &request.params)
        .await
    {
        Ok(output) => {
            let job_id = Uuid::new_v4().to_string();
            state
                .cache
                .store(&job_id, output)
                .map_err(|e| reply(StatusCode::INTERNAL_SERVER_ERROR, &e))?;
            info!("Stored generation result for job: {}", job_id);
            Ok(Json(GenerateResponse {
                job_id,
                format: OUTPUT_FORMAT.to_string(),
                model: model_name.to_string(),
            }))
        }
        Err(e) => {
            error!("Generation failed for model {}: {}", model_name, e);
            Err(reply(StatusCode::INTERNAL_SERVER_ERROR, &e))
        }
    }
}

pub async fn get_result(
    State(state): State<AppState>,
    Path(job_id): Path<String>,
) -> std::result::Result<Json<ResultResponse>, ErrorReply> {
    match state.cache.get(&job_id) {
        Ok(Some(result)) => Ok(Json(ResultResponse {
            job_id,
            format: OUTPUT_FORMAT.to_string(),
            result,
        })),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No result for job id: {job_id}"),
            }),
        )),
        Err(e) => {
            error!("Result lookup failed for job {}: {}", job_id, e);
            Err(reply(StatusCode::INTERNAL_SERVER_ERROR, &e))
        }
    }
}
