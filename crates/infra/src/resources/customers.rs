//! Customer resource client
//!
//! Maps customer operations onto request descriptors and runs them through
//! the client's executor.
//!
//! # Usage
//!
//! ```no_run
//! use storefront_domain::{ClientConfig, Credentials, NewCustomer};
//! use storefront_infra::api::Client;
//!
//! # async fn example() -> storefront_domain::Result<()> {
//! let config = ClientConfig {
//!     auth_host: "https://auth.example.com".to_string(),
//!     api_host: "https://api.example.com".to_string(),
//!     credentials: Credentials::new("client-id", "client-secret"),
//!     project_key: "demo-shop".to_string(),
//!     scopes: vec!["manage_customers:demo-shop".to_string()],
//!     timeout_seconds: None,
//! };
//! let client = Client::connect(&config).await?;
//!
//! let matches = client.customers().find_by_email("jen@example.com").await?;
//! if matches.is_empty() {
//!     client
//!         .customers()
//!         .create(NewCustomer {
//!             email: "jen@example.com".to_string(),
//!             first_name: "Jen".to_string(),
//!             last_name: "Doe".to_string(),
//!             authentication_mode: "Password".to_string(),
//!         })
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```

use storefront_domain::{Customer, NewCustomer, Result};
use tracing::{debug, instrument};

use crate::api::{Client, RequestDescriptor};

/// Filter expression matching one email address exactly
///
/// The address is inserted as-is; quoting inside it is not escaped.
pub fn email_filter(email: &str) -> String {
    format!("email in (\"{email}\")")
}

/// Customer operations bound to a [`Client`]
#[derive(Debug, Clone, Copy)]
pub struct Customers<'a> {
    client: &'a Client,
}

impl Client {
    /// Customer resource operations
    pub fn customers(&self) -> Customers<'_> {
        Customers { client: self }
    }
}

impl Customers<'_> {
    /// Describe `POST {project}/customers` with `draft`
    pub fn create_request(&self, draft: NewCustomer) -> RequestDescriptor<Customer> {
        self.client.create_request(draft)
    }

    /// Describe a read restricted to an exact email match
    pub fn email_query(&self, email: &str) -> RequestDescriptor<Customer> {
        self.client.query_request(&email_filter(email))
    }

    /// Describe an unfiltered read
    pub fn list_request(&self) -> RequestDescriptor<Customer> {
        self.client.list_request()
    }

    /// Create a customer
    ///
    /// Returns a one-element vector holding the created record.
    ///
    /// # Errors
    ///
    /// Returns `Transport`, `Decode` or `Serialization` errors from the
    /// executor.
    #[instrument(skip_all)]
    pub async fn create(&self, draft: NewCustomer) -> Result<Vec<Customer>> {
        let created = self.client.execute(self.create_request(draft)).await?.into_results();
        debug!(count = created.len(), "customer created");
        Ok(created)
    }

    /// Customers whose email matches exactly
    ///
    /// Email uniqueness is enforced by the platform, not here; zero or more
    /// records may come back.
    ///
    /// # Errors
    ///
    /// Returns `Transport` or `Decode` errors from the executor.
    #[instrument(skip_all)]
    pub async fn find_by_email(&self, email: &str) -> Result<Vec<Customer>> {
        let found = self.client.execute(self.email_query(email)).await?.into_results();
        debug!(count = found.len(), "customers matched email");
        Ok(found)
    }

    /// One page of customers at the platform's default page size
    ///
    /// # Errors
    ///
    /// Returns `Transport` or `Decode` errors from the executor.
    #[instrument(skip_all)]
    pub async fn list_all(&self) -> Result<Vec<Customer>> {
        let listed = self.client.execute(self.list_request()).await?.into_results();
        debug!(count = listed.len(), "customers listed");
        Ok(listed)
    }
}
