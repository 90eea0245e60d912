//! Utility functions for code generation, URL processing, and request handling.
//!
//! This module provides helper functions used across the application:
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_normalizer`] - URL normalization and scheme handling
//! - [`client_ip`] - Client IP extraction from proxy headers
//! - [`user_agent`] - Coarse user-agent classification

pub mod client_ip;
pub mod code_generator;
pub mod url_normalizer;
pub mod user_agent;
