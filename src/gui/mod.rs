pub mod app;
pub mod components;
pub mod models;

pub use models::{ImageWindow, WindowViewer};
