//! Client configuration

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TIMEOUT_SECS, TOKEN_PATH};

/// OAuth client credentials
///
/// The secret is never serialized back out and is redacted from `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub client_id: String,
    #[serde(skip_serializing)]
    pub client_secret: String,
}

impl Credentials {
    /// Credentials from a client id and secret
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self { client_id: client_id.into(), client_secret: client_secret.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Everything needed to connect a client
///
/// Passed once to `Client::connect`. Hosts are full base URLs
/// (e.g. `https://auth.europe-west1.gcp.example.com`); a trailing `/` is
/// ignored.
///
/// Serialization is one-way: the client secret is left out, so a serialized
/// config does not deserialize again until the secret is added back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub auth_host: String,
    pub api_host: String,
    pub credentials: Credentials,
    pub project_key: String,
    /// Requested scopes, sent in this order.
    #[serde(default)]
    pub scopes: Vec<String>,
    /// Transport deadline applied to every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl ClientConfig {
    /// Full URL of the token endpoint.
    #[must_use]
    pub fn token_url(&self) -> String {
        token_url(&self.auth_host)
    }

    /// Scopes as a single space-separated string.
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }

    /// Project-scoped base URL: `{api_host}/{project_key}`.
    #[must_use]
    pub fn project_url(&self) -> String {
        format!("{}/{}", trim_host(&self.api_host), self.project_key)
    }

    /// Transport deadline, falling back to the default.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

/// Token endpoint for an auth host.
#[must_use]
pub fn token_url(auth_host: &str) -> String {
    format!("{}{}", trim_host(auth_host), TOKEN_PATH)
}

fn trim_host(host: &str) -> &str {
    host.trim_end_matches('/')
}
