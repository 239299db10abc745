//! Request handlers and error-to-status mapping

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::ServiceError;
use crate::llm_engine::provider::GenerationResult;
use crate::server::AppState;
use crate::transcript::TranscriptEntry;

/// Request body shared by both analysis endpoints
#[derive(Debug, Deserialize)]
pub struct MeetingRequest {
    pub entries: Vec<TranscriptEntry>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Backend reachability is informational; the service itself is up
    pub backend: String,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend = match state.digest.backend_status().await {
        Ok(version) => format!("ok ({})", version),
        Err(e) => {
            log::warn!("Backend health probe failed: {}", e);
            "unreachable".to_string()
        }
    };

    Json(HealthResponse {
        status: "healthy",
        backend,
    })
}

pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<MeetingRequest>,
) -> Result<Json<GenerationResult>, ApiError> {
    let result = state.digest.generate_summary(&request.entries).await?;
    log::info!("Summarized meeting with {} entries", request.entries.len());
    Ok(Json(result))
}

pub async fn qa(
    State(state): State<AppState>,
    Json(request): Json<MeetingRequest>,
) -> Result<Json<GenerationResult>, ApiError> {
    let result = state.digest.generate_qa(&request.entries).await?;
    log::info!(
        "Generated QA for meeting with {} entries",
        request.entries.len()
    );
    Ok(Json(result))
}

/// Wrapper carrying a core error across the axum response boundary
#[derive(Debug)]
pub struct ApiError(ServiceError);

impl From<ServiceError> for ApiError {
    fn from(error: ServiceError) -> Self {
        Self(error)
    }
}

pub fn status_for(error: &ServiceError) -> StatusCode {
    match error {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::PromptRender(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ServiceError::BackendUnreachable(_) | ServiceError::BackendTimeout(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        ServiceError::BackendResponse(_) => StatusCode::BAD_GATEWAY,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            log::error!("Request failed: {}", self.0);
        } else {
            log::debug!("Request rejected: {}", self.0);
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ServiceError::Validation("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ServiceError::PromptRender("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_for(&ServiceError::BackendUnreachable("x".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&ServiceError::BackendTimeout("x".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&ServiceError::BackendResponse("x".into())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_meeting_request_decoding() {
        let request: MeetingRequest = serde_json::from_str(
            r#"{"entries":[{"id":1,"time":{"begin":"0","end":"4"},"name":"B","text":"hello"}]}"#,
        )
        .unwrap();
        assert_eq!(request.entries.len(), 1);
        assert_eq!(request.entries[0].time.begin, "0");
        assert_eq!(request.entries[0].name, "B");
    }
}
