//! Audio file upload component.
//!
//! Handles file selection, upload to the backend and result handling.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::config::{format_size, ApiConfig};
use crate::services::process_audio;
use crate::types::{LogEntry, LogLevel, ProcessResponse};
use super::logs::push_log;

#[component]
pub fn AudioUpload(
    set_result: WriteSignal<Option<ProcessResponse>>,
    is_processing: ReadSignal<bool>,
    set_is_processing: WriteSignal<bool>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let max_size = format_size(config.max_file_size());
    let (error, set_error) = create_signal(None::<String>);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow selecting the same file again
        input.set_value("");

        set_error.set(None);
        set_result.set(None);

        let config = config.clone();
        spawn_local(async move {
            set_is_processing.set(true);
            push_log(
                set_logs,
                LogLevel::Info,
                format!("📤 Uploading {} ({})...", file.name(), format_size(file.size() as u64)),
            );

            match process_audio(&config, file).await {
                Ok(response) => {
                    push_log(
                        set_logs,
                        LogLevel::Success,
                        format!(
                            "✅ {} summarised ({} slices)",
                            response.file_name, response.slice_count
                        ),
                    );
                    set_result.set(Some(response));
                }
                Err(e) => {
                    push_log(set_logs, LogLevel::Error, format!("❌ Upload failed: {}", e));
                    set_error.set(Some(e.to_string()));
                }
            }

            set_is_processing.set(false);
        });
    };

    let trigger_file_input = move |_| {
        if is_processing.get_untracked() {
            return;
        }
        if let Some(input) = document()
            .get_element_by_id("audioInput")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            input.click();
        }
    };

    view! {
        <div class="upload-section" id="uploadZone" on:click=trigger_file_input>
            <div class="upload-icon">"🎙️"</div>
            <div class="upload-text">
                {move || if is_processing.get() {
                    "⏳ Processing, this can take a few minutes..."
                } else {
                    "Click to select an audio file"
                }}
            </div>
            <div class="upload-hint">
                "mp3, wav, m4a • up to " {max_size}
            </div>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <input
                type="file"
                id="audioInput"
                accept="audio/*"
                style="display:none"
                on:change=on_file_change
                on:click=|ev| ev.stop_propagation()
            />
        </div>
    }
}
