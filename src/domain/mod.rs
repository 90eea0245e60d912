//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click enrichment and persistence worker
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler atomically bumps the click counter, then sends a
//!    [`click_event::ClickEvent`] to a bounded channel
//! 2. [`click_worker::run_click_worker`] enriches the event (geolocation,
//!    user-agent classification) and appends it to the event log
//! 3. Worker failures are logged and swallowed; the redirect never waits

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
