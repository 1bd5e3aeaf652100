use leptos::{prelude::*, task::spawn_local};
use thaw::*;

use crate::{
    clients::HttpWeatherClient,
    components::{BusyOverlay, ErrorSlot, NoticeView},
    controllers::activity_form::{effective_location, submit_activity, FormInput},
    storage::SessionStore,
    utils::navigation::{navigate_to, Page},
};

#[component]
pub fn ActivityForm() -> impl IntoView {
    let store = SessionStore::browser();

    let activity = RwSignal::new(String::new());
    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error_message = RwSignal::new(Option::<String>::None);
    let planning_for = RwSignal::new(Option::<String>::None);
    let using_default_city = RwSignal::new(false);

    // Storage is only readable in the browser.
    Effect::new(move |_| {
        let location = effective_location(&store);
        using_default_city.set(location.is_fallback);
        planning_for.set(Some(location.city));
    });

    let submit = move || {
        if submitting.get_untracked() {
            return;
        }
        error_message.set(None);

        let input = FormInput {
            activity: activity.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
        };

        spawn_local(async move {
            let Some(api) = HttpWeatherClient::from_window() else {
                error_message.set(Some("Something went wrong. Please try again later.".to_string()));
                return;
            };
            match submit_activity(&input, &store, &api, &submitting).await {
                Ok(page) => navigate_to(page),
                Err(err) => error_message.set(Some(err.user_message().to_string())),
            }
        });
    };

    view! {
        <div class="activity-page">
            <div class="activity-card">
                <div class="activity-card__header">
                    <h1>"Plan an activity"</h1>
                    {move || planning_for.get().map(|city| view! {
                        <p class="activity-card__city">{format!("Checking the weather in {}", city)}</p>
                    })}
                </div>

                <Show when=move || using_default_city.get()>
                    <NoticeView message="No location was confirmed, so the forecast will use Cairo.".to_string() />
                    <a class="activity-card__link" href=Page::Maps.path()>"Pick a place on the map"</a>
                </Show>

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }>
                    <div class="activity-form-group">
                        <label>"Activity"</label>
                        <Input
                            class="activity-input"
                            placeholder="e.g. hiking, picnic, fishing"
                            value=activity
                        />
                    </div>

                    <div class="activity-form-row">
                        <div class="activity-form-group">
                            <label for="start-date">"Start date"</label>
                            <input
                                id="start-date"
                                type="date"
                                class="activity-date"
                                prop:value=move || start_date.get()
                                on:input=move |ev| start_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="activity-form-group">
                            <label for="end-date">"End date"</label>
                            <input
                                id="end-date"
                                type="date"
                                class="activity-date"
                                prop:value=move || end_date.get()
                                on:input=move |ev| end_date.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <ErrorSlot error_message=error_message />

                    <Button
                        class="activity-submit-btn"
                        appearance=ButtonAppearance::Primary
                        button_type=ButtonType::Submit
                        loading=Signal::from(submitting)
                    >
                        "Get recommendation"
                    </Button>
                </form>
            </div>
            <BusyOverlay busy=submitting message="Asking the forecaster..." />
        </div>
    }
}
