//! OAuth access token types

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::StorefrontError;

/// Bearer token issued by the client-credentials grant
///
/// A token is never mutated after it is created; refreshing produces a new
/// value that replaces the old one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Opaque credential presented as `Authorization: Bearer ...`
    pub access_token: String,

    /// Token type reported by the server (normally "Bearer")
    pub token_type: String,

    /// Lifetime in seconds at the time of issue
    pub expires_in: i64,

    /// Granted scopes (space-separated)
    pub scope: String,

    /// Absolute expiry, calculated from `expires_in` when the token is
    /// received
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Token {
    /// Create a token, stamping `expires_at` relative to now
    ///
    /// A lifetime of zero or less, or one too large to represent as a
    /// timestamp, leaves `expires_at` unset.
    #[must_use]
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_in: i64,
        scope: impl Into<String>,
    ) -> Self {
        let expires_at = if expires_in > 0 { offset_from_now(expires_in) } else { None };

        Self {
            access_token: access_token.into(),
            token_type: token_type.into(),
            expires_in,
            scope: scope.into(),
            expires_at,
        }
    }

    /// Check if the token is expired or will expire within the given
    /// threshold
    ///
    /// Tokens without an expiry are treated as never expiring. Thresholds
    /// beyond the representable time range saturate.
    #[must_use]
    pub fn is_expired(&self, threshold_seconds: i64) -> bool {
        let Some(expires_at) = self.expires_at else {
            return false;
        };

        match offset_from_now(threshold_seconds) {
            Some(deadline) => deadline >= expires_at,
            None => threshold_seconds > 0,
        }
    }

    /// Seconds until expiry, if an expiry is known
    #[must_use]
    pub fn seconds_until_expiry(&self) -> Option<i64> {
        self.expires_at.map(|expires_at| (expires_at - Utc::now()).num_seconds())
    }

    /// Value for the `Authorization` header of resource calls
    #[must_use]
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// `now + seconds`, or `None` when it falls outside chrono's range
fn offset_from_now(seconds: i64) -> Option<DateTime<Utc>> {
    TimeDelta::try_seconds(seconds).and_then(|delta| Utc::now().checked_add_signed(delta))
}

/// Token endpoint response body
///
/// Standard RFC 6749 shape returned by `POST /oauth/token`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default)]
    pub scope: String,
}

impl TryFrom<TokenResponse> for Token {
    type Error = StorefrontError;

    /// Rejects negative lifetimes and lifetimes that cannot be stamped as an
    /// expiry time.
    fn try_from(response: TokenResponse) -> Result<Self, Self::Error> {
        let in_range = response.expires_in == 0
            || (response.expires_in > 0 && offset_from_now(response.expires_in).is_some());
        if !in_range {
            return Err(StorefrontError::Auth(format!(
                "expires_in out of range: {}",
                response.expires_in
            )));
        }

        Ok(Self::new(
            response.access_token,
            response.token_type,
            response.expires_in,
            response.scope,
        ))
    }
}

/// OAuth error body (RFC 6749 §5.2)
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthErrorBody {
    pub error: String,
    pub error_description: Option<String>,
}

impl std::fmt::Display for OAuthErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.error_description {
            Some(desc) => write!(f, "{}: {}", self.error, desc),
            None => write!(f, "{}", self.error),
        }
    }
}
