//! Response handling shared by the processing endpoints.

use super::transport::RawResponse;
use crate::types::{AppError, AppResult, ErrorResponse, ProcessResponse};

/// Decode the answer of `/process_audio/` or `/process_youtube/`.
///
/// Error statuses surface the backend's `message` when the body is the usual
/// `{"status":"error","message":..}` object, the raw body otherwise.
pub fn parse_process_response(response: RawResponse) -> AppResult<ProcessResponse> {
    if !response.is_success() {
        let message = match serde_json::from_str::<ErrorResponse>(&response.body) {
            Ok(err) => err.message,
            Err(_) if response.body.trim().is_empty() => "Unknown error".to_string(),
            Err(_) => response.body,
        };
        return Err(AppError::Server {
            status: response.status,
            message,
        });
    }

    serde_json::from_str(&response.body)
        .map_err(|e| AppError::Decode(format!("Failed to parse response: {}", e)))
}
