use gloo_net::http::Request;

use crate::env_variable_utils::BACKEND_URL;
use crate::models::Video;

/// Fetches the whole catalog. The caller replaces its list wholesale on
/// success and keeps the previous one on failure.
pub async fn fetch_videos() -> Result<Vec<Video>, String> {
    let url = format!("{}/videos", &*BACKEND_URL);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if response.ok() {
        response
            .json::<Vec<Video>>()
            .await
            .map_err(|e| format!("JSON parse error: {}", e))
    } else {
        Err(format!("HTTP error: {}", response.status()))
    }
}
