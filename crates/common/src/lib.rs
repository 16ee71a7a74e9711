//! Shared utilities, configuration, and error handling for Linkshelf
//!
//! This crate provides common functionality used across the Linkshelf service:
//! - Configuration management following 12-factor principles
//! - Error types and the top-level error responder
//! - Database pool and embedded migrations
//! - Request extractors and token comparison helpers

pub mod config;
pub mod crypto;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use crypto::token_matches;
pub use error::{Error, Result};
pub use extractors::ApiJson;
