//! Resource schema trait
//!
//! The request pipeline is generic over the resource it talks to. A resource
//! supplies its endpoint segment, the draft accepted on create, and the
//! envelope the platform wraps a single created record in.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Schema of a platform resource
pub trait Resource: DeserializeOwned + Send + 'static {
    /// Path segment below the project key (e.g. `"customers"`)
    const ENDPOINT: &'static str;

    /// Payload sent when creating a record
    type Draft: Serialize + Send + Sync;

    /// Single-resource envelope returned by create
    type Envelope: DeserializeOwned + Send;

    /// Extract the record from its envelope
    fn from_envelope(envelope: Self::Envelope) -> Self;
}
