pub mod activity_form;
pub mod busy;
pub mod export;
pub mod picker;
pub mod results;

pub use busy::BusyIndicator;
