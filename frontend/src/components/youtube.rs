//! YouTube link form.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::config::ApiConfig;
use crate::services::process_youtube;
use crate::types::{LogEntry, LogLevel, ProcessResponse};
use super::logs::push_log;

#[component]
pub fn YoutubeForm(
    set_result: WriteSignal<Option<ProcessResponse>>,
    is_processing: ReadSignal<bool>,
    set_is_processing: WriteSignal<bool>,
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let (url, set_url) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if is_processing.get_untracked() {
            return;
        }

        set_error.set(None);
        set_result.set(None);

        let config = config.clone();
        let video_url = url.get_untracked();
        spawn_local(async move {
            set_is_processing.set(true);
            push_log(set_logs, LogLevel::Info, format!("📺 Processing {}...", video_url.trim()));

            match process_youtube(&config, &video_url).await {
                Ok(response) => {
                    push_log(
                        set_logs,
                        LogLevel::Success,
                        format!("✅ Video summarised ({} slices)", response.slice_count),
                    );
                    set_url.set(String::new());
                    set_result.set(Some(response));
                }
                Err(e) => {
                    push_log(set_logs, LogLevel::Error, format!("❌ YouTube processing failed: {}", e));
                    set_error.set(Some(e.to_string()));
                }
            }

            set_is_processing.set(false);
        });
    };

    view! {
        <form class="youtube-form" on:submit=on_submit>
            <input
                type="url"
                class="youtube-input"
                placeholder="https://www.youtube.com/watch?v=..."
                prop:value=move || url.get()
                on:input=move |ev| set_url.set(event_target_value(&ev))
                disabled=move || is_processing.get()
            />
            <button type="submit" class="btn" disabled=move || is_processing.get()>
                "Summarise video"
            </button>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>
        </form>
    }
}
