//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Link`] - A shortened URL record with its click counter
//! - [`Click`] - One immutable click event with derived context
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! `NewLink` and `NewClick` carry only the caller-supplied fields.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
