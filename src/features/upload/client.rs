//! Client helper for the spreadsheet import endpoint.

use crate::{
    app_lib::{ApiResponse, AppError, post_form},
    features::upload::types::UploadSummary,
};
use web_sys::FormData;

/// Uploads one spreadsheet as multipart form data under the `file` field and
/// returns the backend's import summary.
pub async fn upload_file(file: web_sys::File) -> Result<UploadSummary, AppError> {
    let form = FormData::new()
        .map_err(|_| AppError::Serialization("Failed to build upload form.".to_string()))?;
    form.append_with_blob("file", &file)
        .map_err(|_| AppError::Serialization("Failed to attach the file.".to_string()))?;

    let response: ApiResponse<UploadSummary> = post_form("/api/upload", form).await?;
    response.into_result()
}
