//! Application layer services implementing business logic.
//!
//! Services orchestrate repository calls, validation, and business rules,
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shorten, redirect accounting, delete
//! - [`services::analytics_service::AnalyticsService`] - Click event aggregation

pub mod services;
