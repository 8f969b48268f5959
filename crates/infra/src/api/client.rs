//! Long-lived client handle
//!
//! Acquires a token once at construction and binds it to the handle. Request
//! descriptors are built from the handle's project URL and executed with the
//! handle's current token.

use std::sync::Arc;

use parking_lot::RwLock;
use storefront_domain::{ClientConfig, Credentials, Resource, Result, StorefrontError, Token};
use tracing::{info, instrument};

use super::auth::{TokenProvider, TokenSource};
use super::executor::{Decoded, Executor};
use super::request::{self, RequestDescriptor};
use crate::http::HttpClient;

/// What the client needs to re-run the token exchange
struct TokenGrant {
    auth_host: String,
    credentials: Credentials,
    scopes: Vec<String>,
}

/// Authenticated platform client
///
/// The token is shared read-only by every call. It is never refreshed
/// automatically; callers that care about expiry inspect [`Client::token`] and
/// call [`Client::refresh_token`], serializing refreshes themselves.
pub struct Client {
    api_url: String,
    project_key: String,
    executor: Executor,
    token_source: Arc<dyn TokenSource>,
    grant: TokenGrant,
    token: RwLock<Arc<Token>>,
}

impl Client {
    /// Connect with default transport settings
    ///
    /// # Errors
    ///
    /// Returns `Auth` if the token cannot be acquired and `Config` if the
    /// HTTP client cannot be built.
    pub async fn connect(config: &ClientConfig) -> Result<Self> {
        Self::builder().config(config.clone()).connect().await
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// API host the client talks to
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Project every request is scoped to
    pub fn project_key(&self) -> &str {
        &self.project_key
    }

    /// `{api_url}/{project_key}`
    pub fn project_url(&self) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), self.project_key)
    }

    /// Current token
    pub fn token(&self) -> Arc<Token> {
        self.token.read().clone()
    }

    /// Re-run the token exchange and replace the stored token
    ///
    /// Calls already in flight keep the token they started with.
    ///
    /// # Errors
    ///
    /// Returns `Auth` if the exchange fails; the previous token is kept.
    #[instrument(skip(self), fields(project_key = %self.project_key))]
    pub async fn refresh_token(&self) -> Result<Arc<Token>> {
        let token = Arc::new(
            self.token_source
                .acquire(&self.grant.auth_host, &self.grant.credentials, &self.grant.scopes)
                .await?,
        );
        *self.token.write() = Arc::clone(&token);
        info!(expires_in = token.expires_in, "access token replaced");
        Ok(token)
    }

    /// Describe creating an `R` from `draft`
    pub fn create_request<R: Resource>(&self, draft: R::Draft) -> RequestDescriptor<R> {
        request::create(&self.project_url(), draft)
    }

    /// Describe reading `R` records matching `filter`
    pub fn query_request<R: Resource>(&self, filter: &str) -> RequestDescriptor<R> {
        request::query(&self.project_url(), filter)
    }

    /// Describe reading `R` records without a filter
    pub fn list_request<R: Resource>(&self) -> RequestDescriptor<R> {
        request::list(&self.project_url())
    }

    /// Execute a descriptor with the current token
    ///
    /// # Errors
    ///
    /// See [`Executor::execute`].
    pub async fn execute<R: Resource>(&self, descriptor: RequestDescriptor<R>) -> Result<Decoded<R>> {
        let token = self.token();
        self.executor.execute(descriptor, &token).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_url", &self.api_url)
            .field("project_key", &self.project_key)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Client`]
#[derive(Default)]
pub struct ClientBuilder {
    config: Option<ClientConfig>,
    http_client: Option<HttpClient>,
    token_source: Option<Arc<dyn TokenSource>>,
}

impl ClientBuilder {
    /// Set the client configuration
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a preconfigured HTTP client instead of one built from the config
    pub fn http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Use a custom token source instead of the OAuth token endpoint
    pub fn token_source(mut self, token_source: Arc<dyn TokenSource>) -> Self {
        self.token_source = Some(token_source);
        self
    }

    /// Acquire the initial token and build the client
    ///
    /// # Errors
    ///
    /// Returns `Config` if no configuration was set or the HTTP client cannot
    /// be built, and `Auth` if the token cannot be acquired.
    #[instrument(skip(self))]
    pub async fn connect(self) -> Result<Client> {
        let config = self
            .config
            .ok_or_else(|| StorefrontError::Config("Client configuration not set".to_string()))?;

        let http = match self.http_client {
            Some(http) => http,
            None => HttpClient::builder().timeout(config.timeout()).build()?,
        };

        let token_source = self
            .token_source
            .unwrap_or_else(|| Arc::new(TokenProvider::new(http.clone())));

        let token = token_source
            .acquire(&config.auth_host, &config.credentials, &config.scopes)
            .await?;

        info!(project_key = %config.project_key, api_url = %config.api_host, "client connected");

        Ok(Client {
            api_url: config.api_host,
            project_key: config.project_key,
            executor: Executor::new(http),
            token_source,
            grant: TokenGrant {
                auth_host: config.auth_host,
                credentials: config.credentials,
                scopes: config.scopes,
            },
            token: RwLock::new(Arc::new(token)),
        })
    }
}
