pub mod download;
pub mod navigation;
