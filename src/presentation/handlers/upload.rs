use axum::extract::Multipart;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::application::services::AnalysisError;
use crate::domain::{Dataset, UploadKind};

use super::models::ErrorResponse;

pub struct UploadForm {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
    pub question: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadFormError {
    #[error("No file uploaded")]
    MissingFile,
    #[error("Failed to read multipart: {0}")]
    Multipart(String),
}

pub async fn read_upload_form(multipart: &mut Multipart) -> Result<UploadForm, UploadFormError> {
    let mut file: Option<(String, Option<String>, Vec<u8>)> = None;
    let mut question: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadFormError::Multipart(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| UploadFormError::Multipart(e.to_string()))?;
                file = Some((filename, content_type, data.to_vec()));
            }
            Some("question") => {
                question = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| UploadFormError::Multipart(e.to_string()))?,
                );
            }
            _ => {}
        }
    }

    let (filename, content_type, data) = file.ok_or(UploadFormError::MissingFile)?;
    Ok(UploadForm {
        filename,
        content_type,
        data,
        question,
    })
}

/// CSV gate: the upload boundary accepts nothing else.
pub fn prepare_dataset(form: &UploadForm) -> Result<Dataset, Response> {
    if UploadKind::from_upload(&form.filename, form.content_type.as_deref()).is_none() {
        tracing::warn!(
            filename = %form.filename,
            content_type = ?form.content_type,
            "Rejected non-CSV upload"
        );
        return Err((
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(ErrorResponse {
                error: "Only CSV files are supported".to_string(),
            }),
        )
            .into_response());
    }
    Ok(Dataset::new(form.filename.clone(), form.data.len() as u64))
}

pub fn analysis_error_response(error: &AnalysisError) -> Response {
    match error {
        AnalysisError::Intake(_) => {
            tracing::warn!(error = %error, "Upload rejected by intake");
            (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse {
                    error: error.to_string(),
                }),
            )
                .into_response()
        }
        AnalysisError::Load(_) => {
            tracing::warn!(error = %error, "CSV parsing failed");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: error.to_string(),
                }),
            )
                .into_response()
        }
    }
}
