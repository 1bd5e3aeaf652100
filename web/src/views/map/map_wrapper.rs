use leptos::{logging::error, prelude::*, task::spawn_local};
use shared_types::Coordinate;
use thaw::{Button, ButtonAppearance};

use crate::{
    clients::NominatimClient,
    components::{BusyOverlay, ErrorSlot},
    controllers::picker::{confirm_location, record_click},
    storage::SessionStore,
    utils::navigation::navigate_to,
    views::map::map_renderer::PickerMap,
};

#[component]
pub fn LocationPicker() -> impl IntoView {
    let store = SessionStore::browser();
    let center = store.selected_region();

    let picked = RwSignal::new(Option::<Coordinate>::None);
    let confirming = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);

    let on_pick = move |coordinate: Coordinate| {
        picked.set(Some(coordinate));
        if let Err(err) = record_click(&store, coordinate) {
            error!("Could not remember clicked location: {}", err);
        }
    };

    let on_confirm = move |_| {
        error_message.set(None);
        spawn_local(async move {
            match confirm_location(&store, &NominatimClient::default(), &confirming).await {
                Ok(page) => navigate_to(page),
                Err(err) => error_message.set(Some(err.user_message().to_string())),
            }
        });
    };

    view! {
        <div class="picker-page">
            <div class="picker-page__header">
                <h1>"Where are you going?"</h1>
                <p>"Click the map to drop a pin, then confirm the location."</p>
            </div>
            <ErrorSlot error_message=error_message />
            <div class="picker-page__map">
                <PickerMap center=center picked=picked on_pick=Callback::new(on_pick) />
            </div>
            <div class="picker-page__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    loading=Signal::from(confirming)
                    on_click=on_confirm
                >
                    "Confirm location"
                </Button>
            </div>
            <BusyOverlay busy=confirming message="Looking up the place name..." />
        </div>
    }
}
