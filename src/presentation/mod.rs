// Presentation layer - HTTP routes over the application services
pub mod app_state;
pub mod error;
pub mod handlers;
