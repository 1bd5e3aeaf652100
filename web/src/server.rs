use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use http::{header, StatusCode};
use shared_types::{ActivityRequest, ErrorPayload};

use crate::{clients::weather::WEATHER_ENDPOINT, config::AppConfig};

const UPSTREAM_UNAVAILABLE: &str = "Weather service unavailable.";

/// Upstream service that produces the recommendations.
#[derive(Clone, Debug)]
pub struct WeatherBackend {
    client: reqwest::Client,
    url: String,
}

/// Upstream reply relayed as-is.
struct Relayed {
    status: StatusCode,
    content_type: String,
    body: String,
}

impl WeatherBackend {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.weather_backend_url.clone())
    }

    async fn forward(&self, request: &ActivityRequest) -> Result<Relayed, reqwest::Error> {
        let response = self.client.post(&self.url).json(request).send().await?;

        let status =
            StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/json")
            .to_string();
        let body = response.text().await?;

        Ok(Relayed {
            status,
            content_type,
            body,
        })
    }
}

/// `POST /api/weather`, ready to merge into the app router.
pub fn api_routes<S>(backend: WeatherBackend) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route(WEATHER_ENDPOINT, post(forward_weather))
        .with_state(backend)
}

async fn forward_weather(
    State(backend): State<WeatherBackend>,
    Json(request): Json<ActivityRequest>,
) -> Response {
    tracing::info!(
        city = %request.city,
        activity = %request.activity,
        start_date = %request.start_date,
        end_date = %request.end_date,
        "Forwarding weather request"
    );

    match backend.forward(&request).await {
        Ok(relayed) => {
            if !relayed.status.is_success() {
                tracing::warn!(status = %relayed.status, "Weather backend returned an error");
            }
            (
                relayed.status,
                [(header::CONTENT_TYPE, relayed.content_type)],
                relayed.body,
            )
                .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, url = %backend.url, "Weather backend unreachable");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorPayload {
                    error: UPSTREAM_UNAVAILABLE.to_string(),
                }),
            )
                .into_response()
        }
    }
}
