//! Data Transfer Objects for API request/response serialization.

pub mod delete;
pub mod health;
pub mod shorten;
pub mod stats;
