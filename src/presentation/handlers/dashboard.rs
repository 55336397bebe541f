use axum::response::{Html, IntoResponse};

const DASHBOARD_HTML: &str = include_str!("../../../assets/index.html");

pub async fn dashboard_handler() -> impl IntoResponse {
    Html(DASHBOARD_HTML)
}
