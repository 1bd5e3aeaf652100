use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::navigation::Page;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__container">
                <div class="navbar__brand">
                    <A href=Page::Home.path() attr:class="navbar__logo">
                        "fairday"
                    </A>
                </div>

                <div class="navbar__links">
                    <A href=Page::Maps.path() attr:class="navbar__link">
                        "Pick a place"
                    </A>
                    <A href=Page::Form.path() attr:class="navbar__link">
                        "Plan an activity"
                    </A>
                    <A href=Page::Results.path() attr:class="navbar__link navbar__link--cta">
                        "Last result"
                    </A>
                </div>
            </div>
        </nav>
    }
}
