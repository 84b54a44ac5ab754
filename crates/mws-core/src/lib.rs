//! Core types for the MWS Query-API client.
//!
//! This crate holds everything the transport and operation crates share:
//! the credential set ([`MwsConfig`]), the static API section table
//! ([`ApiSection`]), and the configuration error type ([`ConfigError`]).
//!
//! # Modules
//!
//! - [`config`] - Credential set and validation
//! - [`error`] - Configuration error type
//! - [`section`] - API section path/version table

pub mod config;
pub mod error;
pub mod section;

pub use config::MwsConfig;
pub use error::ConfigError;
pub use section::ApiSection;
