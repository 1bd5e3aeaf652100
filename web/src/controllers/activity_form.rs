use chrono::NaiveDate;
use leptos::logging::{error, warn};
use shared_types::{ActivityRequest, AiResult, DEFAULT_CITY};

use super::busy::{BusyGuard, BusyIndicator};
use crate::{
    clients::WeatherApi,
    errors::{ApiError, FormError},
    storage::{KeyValueStore, SessionStore},
    utils::navigation::Page,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw values as typed into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormInput {
    pub activity: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidInput {
    pub activity: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

pub fn validate(input: &FormInput) -> Result<ValidInput, FormError> {
    let activity = input.activity.trim();
    if activity.is_empty() {
        return Err(FormError::EmptyActivity);
    }

    let start = input.start_date.trim();
    let end = input.end_date.trim();
    if start.is_empty() || end.is_empty() {
        return Err(FormError::MissingDates);
    }

    let start_date = parse_date(start)?;
    let end_date = parse_date(end)?;
    if start_date > end_date {
        return Err(FormError::StartAfterEnd);
    }

    Ok(ValidInput {
        activity: activity.to_string(),
        start_date,
        end_date,
    })
}

fn parse_date(raw: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| FormError::InvalidDate(raw.to_string()))
}

#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveLocation {
    pub city: String,
    /// True when no confirmed location was found and the default city is used instead.
    pub is_fallback: bool,
}

pub fn effective_location<S: KeyValueStore>(store: &SessionStore<S>) -> EffectiveLocation {
    let stored = store.chosen_location().unwrap_or_else(|err| {
        warn!("Ignoring stored location: {}", err);
        None
    });

    match stored.and_then(|location| location.city) {
        Some(city) if !city.trim().is_empty() => EffectiveLocation {
            city,
            is_fallback: false,
        },
        _ => EffectiveLocation {
            city: DEFAULT_CITY.to_string(),
            is_fallback: true,
        },
    }
}

/// Validates the form, asks the backend for a recommendation and stores the response
/// body for the results page. Nothing is stored unless the body is a valid result.
pub async fn submit_activity<S, A, B>(
    input: &FormInput,
    store: &SessionStore<S>,
    api: &A,
    busy: &B,
) -> Result<Page, FormError>
where
    S: KeyValueStore,
    A: WeatherApi,
    B: BusyIndicator + ?Sized,
{
    let valid = validate(input)?;

    let location = effective_location(store);
    if location.is_fallback {
        warn!("No confirmed location, falling back to {}", location.city);
    }

    let request = ActivityRequest {
        city: location.city,
        activity: valid.activity,
        start_date: valid.start_date,
        end_date: valid.end_date,
    };

    let _busy = BusyGuard::show(busy);

    let body = api
        .request_recommendation(&request)
        .await
        .inspect_err(|err| error!("Weather request failed: {}", err))?;
    AiResult::from_json(&body)
        .map_err(ApiError::from)
        .inspect_err(|err| error!("Rejected weather response: {}", err))?;
    store.save_ai_result(&body)?;

    Ok(Page::Results)
}
