use leptos::logging::{error, warn};
use shared_types::{ChosenLocation, Coordinate};

use super::busy::{BusyGuard, BusyIndicator};
use crate::{
    clients::ReverseGeocoder,
    errors::{PickerError, StorageError},
    storage::{KeyValueStore, SessionStore},
    utils::navigation::Page,
};

/// Remembers a clicked map point. The city is resolved on confirmation.
pub fn record_click<S: KeyValueStore>(
    store: &SessionStore<S>,
    coordinate: Coordinate,
) -> Result<(), StorageError> {
    store.record_coordinate(coordinate)
}

/// Resolves the clicked point to a place name and stores it for the form page.
pub async fn confirm_location<S, G, B>(
    store: &SessionStore<S>,
    geocoder: &G,
    busy: &B,
) -> Result<Page, PickerError>
where
    S: KeyValueStore,
    G: ReverseGeocoder,
    B: BusyIndicator + ?Sized,
{
    let chosen = match store.chosen_location() {
        Ok(Some(location)) => location,
        Ok(None) => return Err(PickerError::NoLocation),
        Err(err) => {
            warn!("Ignoring stored location: {}", err);
            return Err(PickerError::NoLocation);
        }
    };
    let coordinate = chosen.coordinate();

    let city = {
        let _busy = BusyGuard::show(busy);
        geocoder
            .place_name(coordinate)
            .await
            .inspect_err(|err| error!("Reverse geocoding failed: {}", err))?
    };

    store.save_chosen_location(&ChosenLocation::named(coordinate, city))?;
    store.save_selected_region(coordinate)?;

    Ok(Page::Form)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::controllers::busy::testing::RecordingIndicator;
    use crate::errors::GeocodeError;
    use crate::storage::MemoryStorage;

    struct FakeGeocoder {
        name: Option<&'static str>,
        calls: Cell<usize>,
    }

    impl FakeGeocoder {
        fn answering(name: &'static str) -> Self {
            Self {
                name: Some(name),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                name: None,
                calls: Cell::new(0),
            }
        }
    }

    impl ReverseGeocoder for FakeGeocoder {
        async fn place_name(&self, _coordinate: Coordinate) -> Result<String, GeocodeError> {
            self.calls.set(self.calls.get() + 1);
            self.name
                .map(str::to_string)
                .ok_or(GeocodeError::NoAddress)
        }
    }

    #[tokio::test]
    async fn test_confirm_without_click_does_nothing() {
        let store = SessionStore::new(MemoryStorage::new());
        let geocoder = FakeGeocoder::answering("Cairo");
        let busy = RecordingIndicator::default();

        let err = confirm_location(&store, &geocoder, &busy).await.unwrap_err();

        assert!(matches!(err, PickerError::NoLocation));
        assert_eq!(err.user_message(), "Please select a location first.");
        assert_eq!(geocoder.calls.get(), 0);
        assert_eq!(store.chosen_location().unwrap(), None);
    }

    #[tokio::test]
    async fn test_confirm_stores_named_location_and_region() {
        let store = SessionStore::new(MemoryStorage::new());
        let point = Coordinate { lat: 24.09, lng: 32.9 };
        record_click(&store, point).unwrap();

        let geocoder = FakeGeocoder::answering("Aswan");
        let busy = RecordingIndicator::default();
        let page = confirm_location(&store, &geocoder, &busy).await.unwrap();

        assert_eq!(page, Page::Form);
        assert_eq!(
            store.chosen_location().unwrap(),
            Some(ChosenLocation::named(point, "Aswan"))
        );
        assert_eq!(store.selected_region(), point);
        assert_eq!(*busy.transitions.borrow(), vec![true, false]);
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_coordinate_only() {
        let store = SessionStore::new(MemoryStorage::new());
        let point = Coordinate { lat: 33.5, lng: 20.1 };
        record_click(&store, point).unwrap();

        let geocoder = FakeGeocoder::failing();
        let busy = RecordingIndicator::default();
        let err = confirm_location(&store, &geocoder, &busy).await.unwrap_err();

        assert!(matches!(err, PickerError::Lookup(GeocodeError::NoAddress)));
        assert_eq!(
            err.user_message(),
            "Failed to fetch city name. Please try again."
        );
        assert_eq!(
            store.chosen_location().unwrap(),
            Some(ChosenLocation::unnamed(point))
        );
        assert!(!busy.is_busy());
    }

    #[test]
    fn test_second_click_replaces_first() {
        let store = SessionStore::new(MemoryStorage::new());
        record_click(&store, Coordinate { lat: 1.0, lng: 2.0 }).unwrap();
        record_click(&store, Coordinate { lat: 3.0, lng: 4.0 }).unwrap();
        assert_eq!(
            store.chosen_location().unwrap().map(|l| l.coordinate()),
            Some(Coordinate { lat: 3.0, lng: 4.0 })
        );
    }
}
