//! YouTube URL submission to `/process_youtube/`.

use super::process::parse_process_response;
use super::transport::FetchTransport;
use crate::config::{ApiConfig, Endpoint};
use crate::types::{AppError, AppResult, ProcessResponse, YoutubeRequest};

/// Trim and sanity-check a user supplied video URL.
///
/// Only checks that it is an `http(s)` URL; whether it is really a YouTube
/// video is left to the backend.
pub fn normalize_youtube_url(input: &str) -> AppResult<String> {
    let url = input.trim();
    if url.is_empty() {
        return Err(AppError::Validation("Please enter a YouTube URL".to_string()));
    }
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(AppError::Validation(format!("Not an http(s) URL: {}", url)));
    }
    Ok(url.to_string())
}

/// Ask the backend to download and summarise a YouTube video.
pub async fn process_youtube(config: &ApiConfig, url: &str) -> AppResult<ProcessResponse> {
    let request = YoutubeRequest {
        url: normalize_youtube_url(url)?,
    };

    log::debug!("Submitting {}", request.url);

    let response = FetchTransport::from_config(config)
        .post_json(config.endpoint(Endpoint::ProcessYoutube), &request)
        .await?;

    parse_process_response(response)
}
