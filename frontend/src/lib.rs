//! Smart Note - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for summarising recordings: upload an audio file
//! or paste a YouTube link, and the backend returns a written summary.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (environment, API health)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── AudioUpload / YoutubeForm                              │
//! │  ├── SummaryView (when a result is available)               │
//! │  └── LogsPanel (when logs exist)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The resolved [`ApiConfig`] is handed to [`App`] and shared with every
//! component through the Leptos context.
//!
//! # Modules
//!
//! - [`config`] - Backend selection and endpoint table
//! - [`types`] - Common types (LogEntry, ProcessResponse, AppError)
//! - [`components`] - UI components
//! - [`services`] - Backend communication (health, audio, YouTube)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Logs
    LogEntry, LogLevel,
    // API
    ApiInfo, ProcessResponse, YoutubeRequest,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Resolve the configuration and mount the application.
///
/// Called once from the binary entry point.
pub fn run() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Smart Note - Starting Leptos App");

    let config = ApiConfig::from_window();
    config.log_summary();

    mount_to_body(move || view! { <App config=config/> });
}

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    provide_context(config);
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let (result, set_result) = create_signal(None::<ProcessResponse>);
    let (is_processing, set_is_processing) = create_signal(false);
    let (logs, set_logs) = create_signal(Vec::<LogEntry>::new());

    view! {
        <Header/>

        <div class="container">
            <Hero/>

            <AudioUpload
                set_result=set_result
                is_processing=is_processing
                set_is_processing=set_is_processing
                set_logs=set_logs
            />

            <YoutubeForm
                set_result=set_result
                is_processing=is_processing
                set_is_processing=set_is_processing
                set_logs=set_logs
            />

            <SummaryView result=result set_result=set_result/>

            // Logs panel appears with the first entry
            <Show
                when=move || !logs.get().is_empty()
                fallback=|| view! { }
            >
                <LogsPanel logs=logs set_logs=set_logs/>
            </Show>
        </div>

        <Footer/>
    }
}
