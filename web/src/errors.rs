use plotters::drawing::DrawingAreaErrorKind;
use shared_types::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is unavailable")]
    Unavailable,
    #[error("could not write `{key}` to local storage")]
    WriteFailed { key: &'static str },
    #[error("value stored under `{key}` is malformed: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode value for `{key}`: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("weather request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server error: {0}")]
    Status(u16),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("reverse geocoding request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("reverse geocoding returned status {0}")]
    Status(u16),
    #[error("reverse geocoding response has no address")]
    NoAddress,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error("activity is empty")]
    EmptyActivity,
    #[error("start or end date is missing")]
    MissingDates,
    #[error("`{0}` is not a YYYY-MM-DD date")]
    InvalidDate(String),
    #[error("start date is after end date")]
    StartAfterEnd,
    #[error(transparent)]
    Request(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl FormError {
    pub fn user_message(&self) -> &'static str {
        match self {
            FormError::EmptyActivity => "Please enter an activity.",
            FormError::MissingDates => "Please select both a start and an end date.",
            FormError::InvalidDate(_) => "Please enter dates as YYYY-MM-DD.",
            FormError::StartAfterEnd => "Start date cannot be after end date.",
            FormError::Request(_) | FormError::Storage(_) => {
                "Something went wrong. Please try again later."
            }
        }
    }

    /// Input errors are raised before any request is made.
    pub fn is_validation(&self) -> bool {
        !matches!(self, FormError::Request(_) | FormError::Storage(_))
    }
}

#[derive(Debug, Error)]
pub enum PickerError {
    #[error("no location has been clicked")]
    NoLocation,
    #[error(transparent)]
    Lookup(#[from] GeocodeError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl PickerError {
    pub fn user_message(&self) -> &'static str {
        match self {
            PickerError::NoLocation => "Please select a location first.",
            PickerError::Lookup(_) | PickerError::Storage(_) => {
                "Failed to fetch city name. Please try again."
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("no weather result has been stored")]
    Missing,
    #[error("stored weather result reports an error: {0}")]
    Reported(String),
    #[error("stored weather result is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ResultsError {
    pub fn user_message(&self) -> &'static str {
        "Error fetching AI weather recommendation."
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not encode JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not write CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV export buffer could not be finished: {0}")]
    Buffer(String),
    #[error("browser refused the download: {0}")]
    Download(String),
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("could not draw forecast chart: {0}")]
    Draw(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(err.to_string())
    }
}
