use shared_types::ActivityRequest;

use crate::errors::ApiError;

pub const WEATHER_ENDPOINT: &str = "/api/weather";

/// Source of weather recommendations for an activity request.
#[allow(async_fn_in_trait)]
pub trait WeatherApi {
    /// Returns the raw response body of a successful call.
    async fn request_recommendation(&self, request: &ActivityRequest) -> Result<String, ApiError>;
}

#[derive(Clone, Debug)]
pub struct HttpWeatherClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpWeatherClient {
    /// `origin` is scheme plus host, e.g. `http://127.0.0.1:3000`.
    pub fn new(origin: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}{}", origin.trim_end_matches('/'), WEATHER_ENDPOINT),
        }
    }

    /// Targets the server that served the current page.
    #[cfg(feature = "hydrate")]
    pub fn from_window() -> Option<Self> {
        let origin = web_sys::window()?.location().origin().ok()?;
        Some(Self::new(&origin))
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn from_window() -> Option<Self> {
        None
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl WeatherApi for HttpWeatherClient {
    async fn request_recommendation(&self, request: &ActivityRequest) -> Result<String, ApiError> {
        let response = self.client.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
