#![allow(dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use storefront_domain::{ClientConfig, Credentials};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const CLIENT_ID: &str = "integration-client";
pub const CLIENT_SECRET: &str = "integration-secret-do-not-log";
pub const PROJECT_KEY: &str = "demo-shop";
pub const ACCESS_TOKEN: &str = "integration-access-token";

/// Client configuration pointing both hosts at the same mock server.
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig {
        auth_host: server.uri(),
        api_host: server.uri(),
        credentials: Credentials::new(CLIENT_ID, CLIENT_SECRET),
        project_key: PROJECT_KEY.to_string(),
        scopes: vec![format!("manage_customers:{PROJECT_KEY}"), format!("view_orders:{PROJECT_KEY}")],
        timeout_seconds: Some(5),
    }
}

/// Token endpoint answering every exchange with the same token.
pub async fn mount_token_endpoint(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 172_800,
            "scope": format!("manage_customers:{PROJECT_KEY} view_orders:{PROJECT_KEY}")
        })))
        .mount(server)
        .await;
}

/// Path of the customers collection for the test project.
pub fn customers_path() -> String {
    format!("/{PROJECT_KEY}/customers")
}

/// Customer record as the platform renders it.
pub fn customer_json(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "version": 1,
        "versionModifiedAt": "2024-03-01T10:00:00.000Z",
        "lastMessageSequenceNumber": 1,
        "createdAt": "2024-03-01T10:00:00.000Z",
        "lastModifiedAt": "2024-03-01T10:00:00.000Z",
        "lastModifiedBy": { "clientId": CLIENT_ID, "isPlatformClient": false },
        "createdBy": { "clientId": CLIENT_ID, "isPlatformClient": false },
        "email": email,
        "firstName": "Jen",
        "lastName": "Doe",
        "addresses": [],
        "shippingAddressIds": [],
        "billingAddressIds": [],
        "isEmailVerified": false,
        "stores": [],
        "authenticationMode": "Password"
    })
}

/// Paged list envelope around `results`.
pub fn page_json(results: Vec<Value>, total: u64) -> Value {
    json!({
        "limit": 20,
        "offset": 0,
        "count": results.len(),
        "total": total,
        "results": results
    })
}

/// In-memory sink for formatted tracing output.
#[derive(Clone, Default)]
pub struct LogHandle {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogHandle {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().expect("log buffer poisoned")).into_owned()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.contents().contains(needle)
    }
}

pub struct LogWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().expect("log buffer poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogHandle {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter { buffer: Arc::clone(&self.buffer) }
    }
}

/// Capture tracing output of the current thread at debug level.
///
/// The capture lasts as long as the returned guard.
pub fn capture_logs() -> (LogHandle, DefaultGuard) {
    let handle = LogHandle::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(handle.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (handle, guard)
}
