//! Configuration loader
//!
//! Loads the client configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `STOREFRONT_AUTH_HOST`: OAuth host (token endpoint is `{host}/oauth/token`)
//! - `STOREFRONT_API_HOST`: API host
//! - `STOREFRONT_CLIENT_ID`: OAuth client id
//! - `STOREFRONT_CLIENT_SECRET`: OAuth client secret
//! - `STOREFRONT_PROJECT_KEY`: Project key
//! - `STOREFRONT_SCOPES`: Scopes, separated by spaces or commas (optional)
//! - `STOREFRONT_TIMEOUT_SECONDS`: Request timeout in seconds (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./storefront.json` or `./storefront.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use storefront_domain::constants::{
    ENV_API_HOST, ENV_AUTH_HOST, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_PROJECT_KEY, ENV_SCOPES,
    ENV_TIMEOUT_SECONDS,
};
use storefront_domain::{ClientConfig, Credentials, Result, StorefrontError};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] =
    ["storefront.json", "storefront.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `StorefrontError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<ClientConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `StorefrontError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<ClientConfig> {
    load_from_lookup(|key| std::env::var(key).ok())
}

/// Load configuration from an arbitrary key lookup
///
/// Uses the same keys as [`load_from_env`]; handy for tests and for
/// embedding applications with their own settings store.
///
/// # Errors
/// Returns `StorefrontError::Config` if required keys are missing or have
/// invalid values.
pub fn load_from_lookup<F>(lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let required = |key: &str| {
        lookup(key).filter(|value| !value.trim().is_empty()).ok_or_else(|| {
            StorefrontError::Config(format!("Missing required environment variable: {key}"))
        })
    };

    let auth_host = required(ENV_AUTH_HOST)?;
    let api_host = required(ENV_API_HOST)?;
    let client_id = required(ENV_CLIENT_ID)?;
    let client_secret = required(ENV_CLIENT_SECRET)?;
    let project_key = required(ENV_PROJECT_KEY)?;

    let scopes = lookup(ENV_SCOPES).map(|raw| parse_scopes(&raw)).unwrap_or_default();

    let timeout_seconds = lookup(ENV_TIMEOUT_SECONDS)
        .map(|raw| {
            raw.trim().parse::<u64>().map_err(|e| {
                StorefrontError::Config(format!("Invalid {ENV_TIMEOUT_SECONDS}: {e}"))
            })
        })
        .transpose()?;

    Ok(ClientConfig {
        auth_host,
        api_host,
        credentials: Credentials::new(client_id, client_secret),
        project_key,
        scopes,
        timeout_seconds,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `StorefrontError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<ClientConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(StorefrontError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            StorefrontError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| StorefrontError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<ClientConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| StorefrontError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(StorefrontError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Split a scope list on whitespace and commas, keeping order
fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|scope| !scope.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |key| map.get(key).cloned()
    }

    fn complete() -> Vec<(&'static str, &'static str)> {
        vec![
            (ENV_AUTH_HOST, "https://auth.example.com"),
            (ENV_API_HOST, "https://api.example.com"),
            (ENV_CLIENT_ID, "client"),
            (ENV_CLIENT_SECRET, "secret"),
            (ENV_PROJECT_KEY, "demo"),
        ]
    }

    #[test]
    fn test_scope_parsing_keeps_order() {
        assert_eq!(
            parse_scopes("manage_customers:demo, view_orders:demo  view_products:demo"),
            vec!["manage_customers:demo", "view_orders:demo", "view_products:demo"]
        );
        assert!(parse_scopes("  ").is_empty());
    }

    #[test]
    fn test_lookup_with_required_keys() {
        let mut pairs = complete();
        pairs.push((ENV_SCOPES, "manage_customers:demo view_orders:demo"));

        let config = load_from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.auth_host, "https://auth.example.com");
        assert_eq!(config.api_host, "https://api.example.com");
        assert_eq!(config.credentials, Credentials::new("client", "secret"));
        assert_eq!(config.project_key, "demo");
        assert_eq!(config.scope_string(), "manage_customers:demo view_orders:demo");
        assert_eq!(config.timeout_seconds, None);
    }

    #[test]
    fn test_lookup_missing_key() {
        let pairs: Vec<_> =
            complete().into_iter().filter(|(k, _)| *k != ENV_CLIENT_SECRET).collect();

        match load_from_lookup(lookup_from(&pairs)) {
            Err(StorefrontError::Config(msg)) => assert!(msg.contains(ENV_CLIENT_SECRET)),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_blank_value_counts_as_missing() {
        let mut pairs = complete();
        pairs.retain(|(k, _)| *k != ENV_PROJECT_KEY);
        pairs.push((ENV_PROJECT_KEY, "   "));

        assert!(matches!(load_from_lookup(lookup_from(&pairs)), Err(StorefrontError::Config(_))));
    }

    #[test]
    fn test_lookup_invalid_timeout() {
        let mut pairs = complete();
        pairs.push((ENV_TIMEOUT_SECONDS, "soon"));

        match load_from_lookup(lookup_from(&pairs)) {
            Err(StorefrontError::Config(msg)) => assert!(msg.contains(ENV_TIMEOUT_SECONDS)),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_timeout() {
        let mut pairs = complete();
        pairs.push((ENV_TIMEOUT_SECONDS, "12"));

        assert_eq!(load_from_lookup(lookup_from(&pairs)).unwrap().timeout_seconds, Some(12));
    }

    #[test]
    fn test_parse_config_unsupported_extension() {
        let result = parse_config("", Path::new("config.yaml"));
        match result {
            Err(StorefrontError::Config(msg)) => assert!(msg.contains("yaml")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_config_invalid_toml() {
        let result = parse_config("auth_host = ", Path::new("storefront.toml"));
        match result {
            Err(StorefrontError::Config(msg)) => assert!(msg.contains("TOML")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_missing_file() {
        let result = load_from_file(Some(PathBuf::from("/definitely/not/here/storefront.json")));
        match result {
            Err(StorefrontError::Config(msg)) => assert!(msg.contains("not found")),
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
