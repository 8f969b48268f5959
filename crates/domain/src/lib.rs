//! # Storefront Domain
//!
//! Data types for the storefront platform client.
//!
//! This crate contains:
//! - Credentials and client configuration
//! - OAuth token types
//! - Resource records, envelopes and the `Resource` schema trait
//! - The error type and `Result` alias
//!
//! ## Architecture
//! - No dependencies on other workspace crates
//! - No I/O; everything here is plain data

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
