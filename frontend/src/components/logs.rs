//! Processing log panel.

use leptos::*;

use crate::config::MAX_LOG_ENTRIES;
use crate::types::{LogEntry, LogLevel};

/// Append an entry to the panel and mirror it to the console.
pub fn push_log(set_logs: WriteSignal<Vec<LogEntry>>, level: LogLevel, message: impl Into<String>) {
    let entry = LogEntry::now(level, message);

    match level {
        LogLevel::Error => log::error!("{}", entry.message),
        LogLevel::Warning => log::warn!("{}", entry.message),
        LogLevel::Info | LogLevel::Success => log::info!("{}", entry.message),
    }

    set_logs.update(|logs| {
        logs.push(entry);
        if logs.len() > MAX_LOG_ENTRIES {
            logs.remove(0);
        }
    });
}

#[component]
pub fn LogsPanel(
    /// Signal for logs data
    logs: ReadSignal<Vec<LogEntry>>,
    /// Set logs signal (for clearing)
    set_logs: WriteSignal<Vec<LogEntry>>,
) -> impl IntoView {
    let logs_container = create_node_ref::<leptos::html::Div>();

    // Keep the newest entry in view
    create_effect(move |_| {
        let _ = logs.get();
        if let Some(container) = logs_container.get() {
            container.set_scroll_top(container.scroll_height());
        }
    });

    view! {
        <div class="logs-panel">
            <div class="logs-header">
                <span class="logs-title">"📋 Processing Logs"</span>
                <button
                    class="logs-clear"
                    on:click=move |_| set_logs.set(vec![])
                >
                    "Clear"
                </button>
            </div>
            <div class="logs-content" node_ref=logs_container>
                {move || {
                    logs.get()
                        .into_iter()
                        .map(|entry| view! {
                            <div class=format!("log-entry {}", entry.level.css_class())>
                                <span class="log-time">"[" {entry.timestamp} "] "</span>
                                {entry.message}
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
