use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::ports::{AnswerBackend, TableLoader};
use crate::infrastructure::observability::sanitize_question;
use crate::presentation::state::AppState;

use super::models::{AnalysisResponse, AnswerView, AskResponse, ErrorResponse};
use super::upload::{analysis_error_response, prepare_dataset, read_upload_form};

#[tracing::instrument(skip(state, multipart))]
pub async fn ask_handler<P, B>(
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
            tracing::warn!(error = %e, "Invalid ask request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response();
        }
    };

    let question = form.question.as_deref().map(str::trim).unwrap_or("");
    if question.is_empty() {
        tracing::warn!("Ask request with empty question");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Please enter a question".to_string(),
            }),
        )
            .into_response();
    }

    tracing::debug!(
        filename = %form.filename,
        question = %sanitize_question(question),
        "Processing question"
    );

    let dataset = match prepare_dataset(&form) {
        Ok(dataset) => dataset,
        Err(response) => return response,
    };

    let analysis = match state.analysis_service.analyze(dataset, &form.data).await {
        Ok(analysis) => analysis,
        Err(e) => return analysis_error_response(&e),
    };

    // Backend failures leave the analysis sections intact.
    let answer = match state.qa_service.ask(&analysis, question).await {
        Ok(result) => {
            tracing::info!(answered = result.text().is_some(), "Question answered");
            AnswerView {
                text: result.text().map(str::to_string),
                error: None,
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Answer backend failed");
            AnswerView {
                text: None,
                error: Some(format!("Answer backend failed: {}", e)),
            }
        }
    };

    let body = AskResponse {
        analysis: AnalysisResponse::from_analysis(&analysis, state.settings.context.preview_rows),
        answer,
    };
    (StatusCode::OK, Json(body)).into_response()
}
