pub const WEATHER_BACKEND_URL_VAR: &str = "WEATHER_BACKEND_URL";
pub const DEFAULT_WEATHER_BACKEND_URL: &str = "http://127.0.0.1:5000/api/weather";

/// Server settings read from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Full URL of the upstream recommendation endpoint.
    pub weather_backend_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            weather_backend_url: DEFAULT_WEATHER_BACKEND_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let weather_backend_url = lookup(WEATHER_BACKEND_URL_VAR)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_WEATHER_BACKEND_URL.to_string());

        Self { weather_backend_url }
    }
}
