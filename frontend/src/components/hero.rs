//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Smart Note - Voice to Text"</h1>
            <p class="subtitle">
                "Upload a recording or paste a YouTube link. "
                "The audio is sliced, transcribed and summarised into a single note."
            </p>
        </div>
    }
}
