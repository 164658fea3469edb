//! Result of a processing request.

use leptos::*;

use crate::types::ProcessResponse;

#[component]
pub fn SummaryView(
    result: ReadSignal<Option<ProcessResponse>>,
    set_result: WriteSignal<Option<ProcessResponse>>,
) -> impl IntoView {
    move || {
        result.get().map(|response| {
            let source = match (response.source.as_deref(), response.youtube_url) {
                (Some("youtube"), Some(url)) => format!("YouTube • {}", url),
                _ => response.file_name.clone(),
            };
            let summary = if response.final_summary.trim().is_empty() {
                "No summary was generated.".to_string()
            } else {
                response.final_summary
            };

            view! {
                <div class="summary-section">
                    <div class="summary-header">
                        <div class="summary-title">"📝 " {response.file_name}</div>
                        <button class="btn btn-secondary" on:click=move |_| set_result.set(None)>
                            "Close"
                        </button>
                    </div>
                    <div class="summary-meta">
                        {source} " • " {response.slice_count} " slices"
                    </div>
                    <pre class="summary-text">{summary}</pre>
                </div>
            }
        })
    }
}
