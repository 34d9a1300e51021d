use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Video {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Success body of `POST /upload`. The server may send more fields; only the
/// assigned id matters to the client.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct UploadResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_ignores_extra_fields() {
        let parsed: UploadResponse =
            serde_json::from_str(r#"{"id":"vid-42","size":1024,"status":"stored"}"#).unwrap();
        assert_eq!(parsed.id, "vid-42");
    }

    #[test]
    fn videos_parse_preserves_server_order() {
        let body = r#"[
            {"id":"b","name":"second.mp4","url":"/media/b"},
            {"id":"a","name":"first.mp4","url":"/media/a"},
            {"id":"c","name":"third.avi","url":"/media/c"}
        ]"#;
        let videos: Vec<Video> = serde_json::from_str(body).unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn error_response_parses_structured_payload() {
        let parsed: ErrorResponse =
            serde_json::from_str(r#"{"message":"unsupported codec"}"#).unwrap();
        assert_eq!(parsed.message, "unsupported codec");
    }
}
