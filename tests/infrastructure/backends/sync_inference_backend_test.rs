use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use voicegate::application::ports::{BackendFailure, TranscriptionBackend};
use voicegate::domain::AudioPayload;
use voicegate::infrastructure::backends::SyncInferenceBackend;

async fn start_mock_backend(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/transcribe",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let endpoint = format!("http://{}/transcribe", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (endpoint, shutdown_tx)
}

fn payload() -> AudioPayload {
    AudioPayload::new(vec![0u8; 512], "audio/wav")
}

#[tokio::test]
async fn given_text_response_when_transcribing_then_returns_trimmed_transcript() {
    let (endpoint, shutdown_tx) =
        start_mock_backend(200, r#"{"text": "  hello from the backend  "}"#).await;

    let backend = SyncInferenceBackend::new(&endpoint, Some("test-key".to_string()));
    let result = backend.transcribe(&payload()).await;

    assert_eq!(result.unwrap(), "hello from the backend");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_503_when_transcribing_then_http_failure_with_status() {
    let (endpoint, shutdown_tx) =
        start_mock_backend(503, r#"{"error": "Model is currently loading"}"#).await;

    let backend = SyncInferenceBackend::new(&endpoint, None);
    let result = backend.transcribe(&payload()).await;

    match result {
        Err(BackendFailure::Http { status, body }) => {
            assert_eq!(status, 503);
            assert!(body.contains("loading"));
        }
        other => panic!("expected Http failure, got {:?}", other),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_success_without_text_field_when_transcribing_then_missing_text() {
    let (endpoint, shutdown_tx) = start_mock_backend(200, r#"{"confidence": 0.9}"#).await;

    let backend = SyncInferenceBackend::new(&endpoint, None);
    let result = backend.transcribe(&payload()).await;

    assert!(matches!(
        result,
        Err(BackendFailure::MissingText { status: 200, .. })
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_endpoint_when_transcribing_then_network_failure() {
    let backend = SyncInferenceBackend::new("http://127.0.0.1:1/transcribe", None);
    let result = backend.transcribe(&payload()).await;

    assert!(matches!(result, Err(BackendFailure::Network(_))));
}
