//! Client constants
//!
//! Centralized location for wire-level paths and defaults.

/// Path of the OAuth2 token endpoint below the auth host.
pub const TOKEN_PATH: &str = "/oauth/token";

/// Grant type sent to the token endpoint.
pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

/// Query parameter carrying a filter expression.
pub const WHERE_PARAM: &str = "where";

// HTTP defaults
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("storefront-client/", env!("CARGO_PKG_VERSION"));

// Environment variables read by the configuration loader
pub const ENV_AUTH_HOST: &str = "STOREFRONT_AUTH_HOST";
pub const ENV_API_HOST: &str = "STOREFRONT_API_HOST";
pub const ENV_CLIENT_ID: &str = "STOREFRONT_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "STOREFRONT_CLIENT_SECRET";
pub const ENV_PROJECT_KEY: &str = "STOREFRONT_PROJECT_KEY";
pub const ENV_SCOPES: &str = "STOREFRONT_SCOPES";
pub const ENV_TIMEOUT_SECONDS: &str = "STOREFRONT_TIMEOUT_SECONDS";
