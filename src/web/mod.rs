//! Web layer for browser-based pages.
//!
//! Provides HTML pages for shortening, the dashboard, and per-link
//! analytics. Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
