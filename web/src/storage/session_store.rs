use leptos::logging::warn;
use serde::{de::DeserializeOwned, Serialize};
use shared_types::{ChosenLocation, Coordinate, DEFAULT_COORDINATE};

use super::backend::{BrowserStorage, KeyValueStore};
use crate::errors::StorageError;

pub const SELECTED_REGION_KEY: &str = "selectedRegion";
pub const CHOSEN_LOCATION_KEY: &str = "chosenLocation";
pub const AI_RESULT_KEY: &str = "aiResult";

/// Typed access to the values the pages hand to each other.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    backend: S,
}

impl SessionStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn read<T: DeserializeOwned>(&self, key: &'static str) -> Result<Option<T>, StorageError> {
        match self.backend.get_item(key) {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|source| StorageError::Malformed { key, source }),
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(&self, key: &'static str, value: &T) -> Result<(), StorageError> {
        let encoded =
            serde_json::to_string(value).map_err(|source| StorageError::Encode { key, source })?;
        self.backend.set_item(key, &encoded)
    }

    /// Where the map opens. Falls back to the default centre when nothing usable is stored.
    pub fn selected_region(&self) -> Coordinate {
        match self.read::<Coordinate>(SELECTED_REGION_KEY) {
            Ok(Some(region)) => region,
            Ok(None) => DEFAULT_COORDINATE,
            Err(err) => {
                warn!("Ignoring stored map region: {}", err);
                DEFAULT_COORDINATE
            }
        }
    }

    pub fn save_selected_region(&self, region: Coordinate) -> Result<(), StorageError> {
        self.write(SELECTED_REGION_KEY, &region)
    }

    pub fn chosen_location(&self) -> Result<Option<ChosenLocation>, StorageError> {
        self.read(CHOSEN_LOCATION_KEY)
    }

    /// Stores a clicked point. Any previously resolved city is dropped.
    pub fn record_coordinate(&self, coordinate: Coordinate) -> Result<(), StorageError> {
        self.write(CHOSEN_LOCATION_KEY, &ChosenLocation::unnamed(coordinate))
    }

    pub fn save_chosen_location(&self, location: &ChosenLocation) -> Result<(), StorageError> {
        self.write(CHOSEN_LOCATION_KEY, location)
    }

    /// The last weather response body, exactly as the server sent it.
    pub fn ai_result_raw(&self) -> Option<String> {
        self.backend.get_item(AI_RESULT_KEY)
    }

    pub fn save_ai_result(&self, body: &str) -> Result<(), StorageError> {
        self.backend.set_item(AI_RESULT_KEY, body)
    }
}
