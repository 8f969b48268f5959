//! Example: Listing customers of a project
//!
//! Loads the client configuration (environment first, then config files),
//! connects, optionally looks up one email address and prints the first page
//! of customers.
//!
//! # Setup
//!
//! 1. Set up environment variables: ```bash export
//!    STOREFRONT_AUTH_HOST=https://auth.europe-west1.gcp.example.com export
//!    STOREFRONT_API_HOST=https://api.europe-west1.gcp.example.com export
//!    STOREFRONT_CLIENT_ID=... STOREFRONT_CLIENT_SECRET=... export
//!    STOREFRONT_PROJECT_KEY=demo-shop export
//!    STOREFRONT_SCOPES="manage_customers:demo-shop" ```
//!
//! 2. Run this example: ```bash cargo run --example list_customers --
//!    [email] ```

use storefront_infra::{config, Client};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = config::load()?;
    let client = Client::connect(&config).await?;

    let token = client.token();
    println!("Connected to project {}", client.project_key());
    if let Some(seconds) = token.seconds_until_expiry() {
        println!("  Token expires in: {seconds}s");
    }
    println!("  Scope:            {}\n", token.scope);

    if let Some(email) = std::env::args().nth(1) {
        let matches = client.customers().find_by_email(&email).await?;
        println!("{} customer(s) with email {email}", matches.len());
        for customer in &matches {
            println!(
                "  {} {} {} (version {})",
                customer.id, customer.first_name, customer.last_name, customer.version
            );
        }
        println!();
    }

    let customers = client.customers().list_all().await?;
    println!("First page: {} customer(s)", customers.len());
    for customer in customers {
        println!("  {:<38} {}", customer.id, customer.email);
    }

    Ok(())
}
