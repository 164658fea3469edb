//! Footer component

use leptos::*;

use crate::config::ApiConfig;

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<ApiConfig>();

    view! {
        <footer>
            <div>"Smart Note • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a href=config.base_url().to_string() class="footer-link" target="_blank">
                    {config.base_url().to_string()}
                </a>
            </div>
        </footer>
    }
}
