use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::utils::navigation::Page;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found__code">"404"</div>
            <h1>"Page Not Found"</h1>
            <p>"The page you're looking for doesn't exist or may have been moved."</p>
            <button
                class="btn-primary"
                on:click=move |_| navigate(Page::Home.path(), Default::default())
            >
                "Go Home"
            </button>
        </div>
    }
}
