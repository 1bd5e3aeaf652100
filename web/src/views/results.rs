use leptos::{logging::error, prelude::*};
use thaw::*;

use crate::{
    components::{ErrorView, ForecastChart, LoadingView},
    controllers::{
        export::{export_csv, export_json, CSV_FILE_NAME, CSV_MIME, JSON_FILE_NAME, JSON_MIME},
        results::{
            load_result, AlternativeList, LoadedResult, RecommendationList, ResultsView,
            INDOOR_SUGGESTION, NO_ALTERNATIVES,
        },
    },
    errors::ExportError,
    storage::{KeyValueStore, SessionStore},
    utils::download::download_text,
};

#[derive(Clone, Debug, PartialEq)]
enum PageState {
    Loading,
    Failed(String),
    Ready(Box<LoadedResult>),
}

fn page_state<S: KeyValueStore>(store: &SessionStore<S>) -> PageState {
    match load_result(store) {
        Ok(loaded) => PageState::Ready(Box::new(loaded)),
        Err(err) => {
            error!("Cannot show result: {}", err);
            PageState::Failed(err.user_message().to_string())
        }
    }
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let state = RwSignal::new(PageState::Loading);

    Effect::new(move |_| state.set(page_state(&SessionStore::browser())));

    view! {
        <div class="results-page">
            <h1>"Your forecast"</h1>
            {move || match state.get() {
                PageState::Loading => view! {
                    <LoadingView message=Some("Loading your result...".to_string()) />
                }.into_any(),
                PageState::Failed(message) => view! {
                    <div class="results-section" id="summary">
                        <ErrorView message=Some(message) />
                    </div>
                }.into_any(),
                PageState::Ready(loaded) => view! { <ResultDetails loaded=*loaded /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ResultDetails(loaded: LoadedResult) -> impl IntoView {
    let view_model = ResultsView::from_result(&loaded.result);
    let export_error = RwSignal::new(Option::<String>::None);

    let json = StoredValue::new(loaded.document);
    let days = StoredValue::new(loaded.result.daily_weather);

    let report = move |outcome: Result<(), ExportError>| match outcome {
        Ok(()) => export_error.set(None),
        Err(err) => {
            error!("Export failed: {}", err);
            export_error.set(Some("The file could not be created.".to_string()));
        }
    };

    let download_json = move |_| {
        let outcome = json
            .with_value(export_json)
            .and_then(|contents| download_text(JSON_FILE_NAME, JSON_MIME, &contents));
        report(outcome);
    };

    let download_csv = move |_| {
        let outcome = days
            .with_value(|days| export_csv(days))
            .and_then(|contents| download_text(CSV_FILE_NAME, CSV_MIME, &contents));
        report(outcome);
    };

    let recommendations = match view_model.recommendations {
        RecommendationList::Items(items) => items
            .into_iter()
            .map(|item| view! { <p>{format!("- {}", item)}</p> })
            .collect_view()
            .into_any(),
        RecommendationList::IndoorSuggestion => view! { <p>{INDOOR_SUGGESTION}</p> }.into_any(),
    };

    let alternatives = match view_model.alternatives {
        AlternativeList::Days(days) => days
            .into_iter()
            .map(|day| view! { <p>{format!("- {}", day)}</p> })
            .collect_view()
            .into_any(),
        AlternativeList::NoneAvailable => view! { <p>{NO_ALTERNATIVES}</p> }.into_any(),
    };

    view! {
        <section class="results-section" id="summary">
            {view_model.summary.into_iter().map(|line| view! {
                <p><b>{format!("{}:", line.label)}</b>" "{line.value}</p>
            }).collect_view()}
        </section>

        <section class="results-section" id="recommendations">
            <h2>"Recommendations"</h2>
            {recommendations}
        </section>

        <section class="results-section" id="alternatives">
            <h2>"Alternative days"</h2>
            {alternatives}
        </section>

        <section class="results-section">
            <h2>"Forecast"</h2>
            <ForecastChart chart=view_model.chart />
        </section>

        <div class="results-actions">
            <Button appearance=ButtonAppearance::Primary on_click=download_json>
                "Download JSON"
            </Button>
            <Button appearance=ButtonAppearance::Secondary on_click=download_csv>
                "Download CSV"
            </Button>
        </div>
        {move || export_error.get().map(|msg| view! { <ErrorView message=Some(msg) /> })}
    }
}
