use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::application::ports::TranscriptionBackend;
use crate::domain::{AudioPayload, ErrorKind, GatewayError};
use crate::presentation::state::AppState;

/// Success envelope: the transcript and nothing else. The attempt count is
/// logged, not exposed.
#[derive(Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

/// Failure envelope. Always parseable, whatever went wrong upstream.
#[derive(Serialize)]
pub struct TranscribeErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl TranscribeErrorResponse {
    fn from_error(error: &GatewayError) -> Self {
        Self {
            error: error.kind.as_str().to_string(),
            message: error.message.clone(),
            detail: error.detail.clone(),
            status: error.status,
        }
    }
}

/// Accepts raw audio bytes and drives one transcription request to a
/// normalized envelope. The outer HTTP status is always 202 Accepted so the
/// caller parses the body without branching on transport status.
#[tracing::instrument(skip(state, headers, body))]
pub async fn transcribe_handler<B>(
    State(state): State<AppState<B>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse
where
    B: TranscriptionBackend + 'static,
{
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("audio/wav")
        .to_string();

    let payload = AudioPayload::new(body.to_vec(), content_type);
    let service = Arc::clone(&state.transcription_service);

    // The request runs on its own task so that even a panic inside the
    // orchestration still comes back as a structured envelope.
    let outcome = tokio::spawn(async move { service.transcribe(payload).await }).await;

    match outcome {
        Ok(Ok(result)) => {
            tracing::info!(attempts = result.attempts, "Returning transcript");
            (
                StatusCode::ACCEPTED,
                Json(TranscribeResponse { text: result.text }),
            )
                .into_response()
        }
        Ok(Err(error)) => {
            (
                StatusCode::ACCEPTED,
                Json(TranscribeErrorResponse::from_error(&error)),
            )
                .into_response()
        }
        Err(join_error) => {
            tracing::error!(error = %join_error, "Transcription task aborted");
            let error = GatewayError::terminal(
                ErrorKind::Internal,
                "transcription request could not be processed",
            );
            (
                StatusCode::ACCEPTED,
                Json(TranscribeErrorResponse::from_error(&error)),
            )
                .into_response()
        }
    }
}

/// Anything but POST on the transcribe route gets the same envelope shape.
pub async fn method_not_allowed_handler() -> impl IntoResponse {
    let error = GatewayError::terminal(
        ErrorKind::MethodNotAllowed,
        "only POST is accepted on this route",
    );
    (
        StatusCode::ACCEPTED,
        Json(TranscribeErrorResponse::from_error(&error)),
    )
}
