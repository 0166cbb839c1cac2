use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::TranscriptionBackend;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    health_handler, method_not_allowed_handler, transcribe_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<B>(state: AppState<B>) -> Router
where
    B: TranscriptionBackend + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let max_body = state.settings.limits.max_payload_bytes;

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/api/v1/transcribe",
            post(transcribe_handler::<B>).fallback(method_not_allowed_handler),
        )
        .layer(DefaultBodyLimit::max(max_body))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
