//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Log Types** - Processing log shown in the UI
//! - **API Types** - Backend request/response structures
//! - **Error Types** - Frontend error handling

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Error message
    Error,
    /// Warning message
    Warning,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
            LogLevel::Warning => "log-warning",
        }
    }
}

/// A single entry of the processing log panel.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Body of a `POST /process_youtube/` request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YoutubeRequest {
    pub url: String,
}

/// Successful answer of both processing endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// `"success"` on the happy path
    pub status: String,
    pub message: String,
    pub file_name: String,
    /// Server-side working directory of the job
    pub workspace_path: String,
    /// The summary itself (Markdown)
    pub final_summary: String,
    /// Number of audio slices summarised
    pub slice_count: usize,
    /// `"youtube"` when the audio came from a YouTube URL
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub youtube_url: Option<String>,
}

/// Error body returned by the processing endpoints (HTTP 500).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

/// Answer of `GET /`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    pub message: String,
    pub version: String,
    /// Route path to human description
    #[serde(default)]
    pub endpoints: BTreeMap<String, String>,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// Request never got an HTTP answer.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// Input rejected before sending anything.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_response_deserialization() {
        let json = r#"{
            "status": "success",
            "message": "processing complete",
            "file_name": "lecture.mp3",
            "workspace_path": "/srv/app/lecture",
            "final_summary": "Key points",
            "slice_count": 4
        }"#;

        let response: ProcessResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.slice_count, 4);
        assert_eq!(response.source, None);
    }

    #[test]
    fn test_youtube_response_deserialization() {
        let json = r#"{
            "status": "success",
            "message": "processing complete",
            "file_name": "video.mp4",
            "workspace_path": "/srv/app/video",
            "final_summary": "",
            "slice_count": 0,
            "source": "youtube",
            "youtube_url": "https://youtu.be/abc"
        }"#;

        let response: ProcessResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.source.as_deref(), Some("youtube"));
        assert_eq!(response.youtube_url.as_deref(), Some("https://youtu.be/abc"));
    }

    #[test]
    fn test_api_info_deserialization() {
        let json = r#"{
            "message": "Audio Processing API",
            "version": "2.0",
            "endpoints": {
                "/process_audio/": "POST - upload audio",
                "/process_youtube/": "POST - YouTube URL"
            }
        }"#;

        let info: ApiInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.version, "2.0");
        assert_eq!(info.endpoints.len(), 2);
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (500): boom");
        assert_eq!(
            AppError::Validation("empty".into()).to_string(),
            "Validation error: empty"
        );
    }

    #[test]
    fn test_log_level_css() {
        assert_eq!(LogLevel::Error.css_class(), "log-error");
        assert_eq!(LogLevel::Success.css_class(), "log-success");
    }

    #[test]
    fn test_log_entry_now() {
        let entry = LogEntry::now(LogLevel::Warning, "slow upload");
        assert_eq!(entry.level, LogLevel::Warning);
        assert_eq!(entry.message, "slow upload");
        // HH:MM:SS
        assert_eq!(entry.timestamp.len(), 8);
        assert_eq!(entry.timestamp.matches(':').count(), 2);
    }
}
