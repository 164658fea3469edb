//! Audio file upload to `/process_audio/`.

use web_sys::{File, FormData};

use super::process::parse_process_response;
use super::transport::FetchTransport;
use crate::config::{ApiConfig, Endpoint};
use crate::types::{AppError, AppResult, ProcessResponse};

/// Multipart field the backend reads the file from.
pub const AUDIO_FIELD: &str = "audio_file";

/// Upload an audio file and wait for its summary.
///
/// Files over the configured size limit are rejected before anything is sent.
pub async fn process_audio(config: &ApiConfig, file: File) -> AppResult<ProcessResponse> {
    config.check_file_size(file.size() as u64)?;

    let form_data = FormData::new()
        .map_err(|e| AppError::Validation(format!("Failed to create FormData: {:?}", e)))?;
    form_data
        .append_with_blob_and_filename(AUDIO_FIELD, &file, &file.name())
        .map_err(|e| AppError::Validation(format!("Failed to append file: {:?}", e)))?;

    log::debug!("Uploading {} to {}", file.name(), config.endpoint(Endpoint::ProcessAudio));

    let response = FetchTransport::from_config(config)
        .post_form(config.endpoint(Endpoint::ProcessAudio), form_data)
        .await?;

    parse_process_response(response)
}
