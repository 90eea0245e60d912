//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`geoip`] - Best-effort external geolocation lookup
//! - [`persistence`] - PostgreSQL repository implementations

pub mod geoip;
pub mod persistence;
