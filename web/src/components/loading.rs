use leptos::prelude::*;
use thaw::{Spinner, SpinnerSize};

#[component]
pub fn LoadingView(message: Option<String>) -> impl IntoView {
    view! {
        <div class="loading-container">
            <Spinner size=SpinnerSize::Large />
            <p class="loading-message">
                {message.unwrap_or_else(|| "Loading, please wait...".to_string())}
            </p>
        </div>
    }
}

/// Full-page overlay shown while `busy` is set.
#[component]
pub fn BusyOverlay(busy: RwSignal<bool>, message: &'static str) -> impl IntoView {
    view! {
        <Show when=move || busy.get()>
            <div class="busy-overlay" role="status" aria-live="polite">
                <div class="busy-overlay__card">
                    <LoadingView message=Some(message.to_string()) />
                </div>
            </div>
        </Show>
    }
}
