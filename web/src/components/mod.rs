pub mod error;
pub mod forecast_chart;
pub mod loading;
pub mod navbar;

pub use error::{ErrorSlot, ErrorView, NoticeView};
pub use forecast_chart::ForecastChart;
pub use loading::{BusyOverlay, LoadingView};
pub use navbar::Navbar;
