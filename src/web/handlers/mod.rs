//! Template rendering handlers for web pages.

pub mod analytics;
pub mod dashboard;
pub mod home;
pub mod not_found;

pub use analytics::analytics_handler;
pub use dashboard::dashboard_handler;
pub use home::home_handler;
