use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AnswerBackend, TableLoader};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_handler, ask_handler, dashboard_handler, health_handler,
};
use crate::presentation::state::AppState;

pub fn create_router<P, B>(state: AppState<P, B>) -> Router
where
    P: TableLoader + ?Sized + 'static,
    B: AnswerBackend + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Must exceed the intake limit so oversize uploads reach the intake
    // check and get its message, not a framework 413.
    let body_limit = DefaultBodyLimit::max(state.settings.intake.max_upload_bytes * 2);

    Router::new()
        .route("/", get(dashboard_handler))
        .route("/health", get(health_handler))
        .route("/api/v1/analyze", post(analyze_handler::<P, B>))
        .route("/api/v1/ask", post(ask_handler::<P, B>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
