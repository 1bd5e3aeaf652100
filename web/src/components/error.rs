use leptos::prelude::*;
use thaw::{MessageBar, MessageBarIntent};

#[component]
pub fn ErrorView(message: Option<String>) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Error>
            {message.unwrap_or_else(|| "An error occurred. Please try again.".to_string())}
        </MessageBar>
    }
}

#[component]
pub fn NoticeView(message: String) -> impl IntoView {
    view! {
        <MessageBar intent=MessageBarIntent::Warning>{message}</MessageBar>
    }
}

/// Renders the current message of `error_message`, if any.
#[component]
pub fn ErrorSlot(error_message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        error_message
            .get()
            .map(|msg| view! { <ErrorView message=Some(msg) /> })
    }
}
