//! Authenticated request pipeline
//!
//! Token acquisition, deferred request descriptors and their execution.
//!
//! # Architecture
//!
//! ```text
//! ClientConfig ──► TokenSource::acquire ──► Client (holds Arc<Token>)
//!                                              │
//!                     RequestDescriptor ◄──────┤ create/query/list builders
//!                                              │
//!                     Executor::execute ◄──────┘ bearer token attached
//!                              │
//!                              ▼
//!                     Decoded::{Single, Page}
//! ```
//!
//! - One attempt per call, no retries
//! - Structured tracing only, no printing

pub mod auth;
pub mod client;
pub mod executor;
pub mod request;

pub use auth::{TokenProvider, TokenSource};
pub use client::{Client, ClientBuilder};
pub use executor::{Decoded, Executor};
pub use request::{Operation, RequestDescriptor};
