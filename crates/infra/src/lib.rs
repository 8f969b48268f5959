//! # Storefront Infrastructure
//!
//! HTTP implementations of the storefront client.
//!
//! This crate contains:
//! - OAuth2 client-credentials token acquisition
//! - Request descriptors and the executor that sends them
//! - The customer resource client
//! - Configuration loading (environment, JSON, TOML)
//!
//! ## Architecture
//! - Built on the types in `storefront-domain`
//! - Contains all "impure" code (network I/O, file system, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod resources;

// Re-export commonly used items
pub use api::{Client, ClientBuilder, Decoded, Operation, RequestDescriptor, TokenProvider, TokenSource};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use resources::{email_filter, Customers};
