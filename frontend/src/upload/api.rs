use gloo_net::http::Request;
use web_sys::FormData;

use crate::env_variable_utils::BACKEND_URL;
use crate::models::{ErrorResponse, UploadResponse};

/// Sends the selected file as multipart form data under the `video` field and
/// returns the server-assigned video id.
pub async fn post_upload(file: &web_sys::File) -> Result<String, String> {
    let url = format!("{}/upload", &*BACKEND_URL);

    let form = FormData::new().map_err(|_| "Failed to build form data".to_string())?;
    form.append_with_blob("video", file)
        .map_err(|_| "Failed to attach file to form data".to_string())?;

    let response = Request::post(&url)
        .body(form)
        .map_err(|e| format!("Request error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        let parsed = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))?;
        Ok(parsed.id)
    } else {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        // Try to parse as structured error response first
        match serde_json::from_str::<ErrorResponse>(&error_text) {
            Ok(error_response) => Err(error_response.message),
            Err(_) => Err(format!("Upload failed ({}): {}", status, error_text)),
        }
    }
}
