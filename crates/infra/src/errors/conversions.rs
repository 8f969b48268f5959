//! Conversions from external infrastructure errors into domain errors.

use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use storefront_domain::StorefrontError;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub StorefrontError);

impl From<InfraError> for StorefrontError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<StorefrontError> for InfraError {
    fn from(value: StorefrontError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoStorefrontError {
    fn into_storefront(self) -> StorefrontError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → StorefrontError */
/* -------------------------------------------------------------------------- */

impl IntoStorefrontError for HttpError {
    fn into_storefront(self) -> StorefrontError {
        if self.is_timeout() {
            return StorefrontError::transport("HTTP request timed out");
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return StorefrontError::transport(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return StorefrontError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return StorefrontError::Decode(self.to_string());
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            return StorefrontError::Transport {
                message: format!(
                    "HTTP {} {}",
                    code,
                    status.canonical_reason().unwrap_or("unknown status")
                ),
                status: Some(code),
            };
        }

        StorefrontError::transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_storefront())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → StorefrontError */
/* -------------------------------------------------------------------------- */

impl IntoStorefrontError for JsonError {
    fn into_storefront(self) -> StorefrontError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => StorefrontError::transport(format!("failed to read body: {self}")),
            Category::Syntax | Category::Data | Category::Eof => {
                StorefrontError::Decode(format!("unexpected response body: {self}"))
            }
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_storefront())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → StorefrontError */
/* -------------------------------------------------------------------------- */

impl IntoStorefrontError for TomlError {
    fn into_storefront(self) -> StorefrontError {
        StorefrontError::Config(format!("Invalid TOML format: {self}"))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        InfraError(value.into_storefront())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
