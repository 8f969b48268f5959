//! Customer resource records
//!
//! Mirrors of the platform's customer representation. Records are owned by
//! the platform; the client only reads them, except for the draft used to
//! create one.

use serde::{Deserialize, Serialize};

use super::resource::Resource;

/// Customer as returned by the platform
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub id: String,
    /// Optimistic-concurrency version
    pub version: i64,
    pub version_modified_at: String,
    pub last_message_sequence_number: i64,
    pub created_at: String,
    pub last_modified_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<ClientReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<ClientReference>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub addresses: Vec<Address>,
    pub shipping_address_ids: Vec<String>,
    pub billing_address_ids: Vec<String>,
    pub is_email_verified: bool,
    pub stores: Vec<StoreKeyReference>,
    pub authentication_mode: String,
}

/// API client that created or last modified a record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(alias = "IsPlatformClient")]
    pub is_platform_client: bool,
}

/// Postal address attached to a customer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub id: String,
    pub key: String,
    pub title: String,
    pub salutation: String,
    pub first_name: String,
    pub last_name: String,
    pub street_name: String,
    pub street_number: String,
    pub additional_street_info: String,
    pub postal_code: String,
    pub city: String,
    pub region: String,
    pub state: String,
    pub country: String,
    pub company: String,
    pub department: String,
    pub building: String,
    pub apartment: String,
    #[serde(rename = "pOBox")]
    pub po_box: String,
    pub phone: String,
    pub mobile: String,
    pub email: String,
    pub fax: String,
    pub additional_address_info: String,
    pub external_id: String,
}

/// Reference to a store by key
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreKeyReference {
    pub key: String,
}

/// Draft sent to create a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// `"Password"` or `"ExternalAuth"`
    pub authentication_mode: String,
}

/// Single-resource envelope returned when a customer is created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerEnvelope {
    pub customer: Customer,
}

impl Resource for Customer {
    const ENDPOINT: &'static str = "customers";

    type Draft = NewCustomer;
    type Envelope = CustomerEnvelope;

    fn from_envelope(envelope: CustomerEnvelope) -> Self {
        envelope.customer
    }
}
