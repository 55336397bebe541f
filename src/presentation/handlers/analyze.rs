use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::ports::{AnswerBackend, TableLoader};
use crate::presentation::state::AppState;

use super::models::{AnalysisResponse, ErrorResponse};
use super::upload::{analysis_error_response, prepare_dataset, read_upload_form};

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<P, B>(
    State(state): State<AppState<P, B>>,
    mut multipart: Multipart,
) -> Response
where
    P: TableLoader + ?Sized + 'static,
    B: AnswerBackend + ?Sized + 'static,
{
    let form = match read_upload_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid analyze request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %form.filename, bytes = form.data.len(), "File upload received");

    let dataset = match prepare_dataset(&form) {
        Ok(dataset) => dataset,
        Err(response) => return response,
    };

    match state.analysis_service.analyze(dataset, &form.data).await {
        Ok(analysis) => {
            tracing::info!(
                rows = analysis.table.row_count(),
                columns = analysis.table.column_count(),
                "Analysis complete"
            );
            let body =
                AnalysisResponse::from_analysis(&analysis, state.settings.context.preview_rows);
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => analysis_error_response(&e),
    }
}
