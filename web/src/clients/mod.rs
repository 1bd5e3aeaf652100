pub mod geocode;
pub mod weather;

pub use geocode::{NominatimClient, ReverseGeocoder};
pub use weather::{HttpWeatherClient, WeatherApi};
