use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::navigation::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="homepage-container">
            <div class="homepage-hero">
                <h1>"fairday"</h1>
                <p>"Find the best day for your next outing"</p>
            </div>

            <ol class="homepage-steps">
                <li>"Pick a place on the map."</li>
                <li>"Tell us what you want to do and when."</li>
                <li>"Get the best day, tips and a forecast chart."</li>
            </ol>

            <div class="homepage-actions">
                <A href=Page::Maps.path()>
                    <button class="btn-primary">"Start planning"</button>
                </A>
                <A href=Page::Form.path()>
                    <button class="btn-outlined">"Skip to the form"</button>
                </A>
            </div>
        </div>
    }
}
