//! Service error taxonomy.
//!
//! Only two classes exist: bad input surfaces as HTTP 400; transport
//! failures in remote mode are recovered internally by the local fallback
//! and never reach the caller. Synthesis itself is total.

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("{0}")]
    Validation(String),

    #[error("remote synthesis failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl InsightError {
    pub fn missing_fields() -> Self {
        Self::Validation("Both name and location are required".to_string())
    }

    /// Map to the REST error tuple used by the route handlers.
    pub fn into_response(self) -> (StatusCode, Json<Value>) {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            // Transport errors are swallowed by the fallback; if one ever
            // escapes, surface it as a 502 rather than lying with a 400.
            Self::Transport(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(json!({ "error": self.to_string() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400_with_error_field() {
        let (status, Json(body)) = InsightError::missing_fields().into_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Both name and location are required");
    }
}
