use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AudioProbe, GenerativeModel};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    generate_flashcards_handler, generate_notes_handler, generate_quizzes_handler,
    health_handler, upload_audio_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<M, P>(state: AppState<M, P>) -> Router
where
    M: GenerativeModel + ?Sized + 'static,
    P: AudioProbe + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/health", get(health_handler))
        .route("/upload_audio", post(upload_audio_handler::<M, P>))
        .route("/generate_notes", post(generate_notes_handler::<M, P>))
        .route("/generate_flashcards", post(generate_flashcards_handler::<M, P>))
        .route("/generate_quizzes", post(generate_quizzes_handler::<M, P>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
