//! Authenticated execution of request descriptors
//!
//! Each call moves through `Built → AuthAttached → Sent` and ends in exactly
//! one of `Decoded`, `TransportFailed` or `DecodeFailed`. There is a single
//! attempt per call.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use storefront_domain::{PagedQueryResponse, Resource, Result, StorefrontError, Token};
use tracing::{debug, instrument, warn};

use super::request::{Operation, RequestDescriptor};
use crate::errors::InfraError;
use crate::http::HttpClient;

const APPLICATION_JSON: &str = "application/json";

/// Decoded response of one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<R> {
    /// Record unwrapped from a single-resource envelope (create)
    Single(R),
    /// Paged list envelope (query and list)
    Page(PagedQueryResponse<R>),
}

impl<R> Decoded<R> {
    /// Records as a sequence; a single record becomes a one-element vector
    pub fn into_results(self) -> Vec<R> {
        match self {
            Self::Single(record) => vec![record],
            Self::Page(page) => page.results,
        }
    }
}

/// Expected response shape, chosen by the operation before sending
#[derive(Debug, Clone, Copy)]
enum Shape {
    Single,
    Page,
}

/// Runs descriptors with a bearer token attached
#[derive(Debug, Clone)]
pub struct Executor {
    http: HttpClient,
}

impl Executor {
    /// Executor sending through `http`
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Execute a descriptor with the given token
    ///
    /// Every request carries `Authorization: Bearer ...` and
    /// `Content-Type: application/json`. Creates send the owned draft as a
    /// JSON body; reads send no body.
    ///
    /// # Errors
    ///
    /// - `Config` if the descriptor has no operation (nothing is sent)
    /// - `Serialization` if the draft cannot be encoded
    /// - `Transport` for connection failures, timeouts and non-2xx statuses
    /// - `Decode` if the body does not match the expected envelope
    #[instrument(skip(self, descriptor, token), fields(endpoint = %descriptor.endpoint()))]
    pub async fn execute<R: Resource>(
        &self,
        descriptor: RequestDescriptor<R>,
        token: &Token,
    ) -> Result<Decoded<R>> {
        let (endpoint, operation) = descriptor.into_parts();

        let Some(operation) = operation else {
            warn!(endpoint = %endpoint, "request has no method assigned");
            return Err(StorefrontError::Config(format!(
                "no method assigned to request for {endpoint}"
            )));
        };

        let operation_name = operation.name();
        let request = self
            .http
            .request(operation.method(), &endpoint)
            .header(AUTHORIZATION, token.bearer_header())
            .header(CONTENT_TYPE, APPLICATION_JSON);

        let (request, shape) = match operation {
            Operation::Create(draft) => {
                let body = serde_json::to_vec(&draft).map_err(|err| {
                    warn!(error = %err, "failed to serialize request body");
                    StorefrontError::Serialization(err.to_string())
                })?;
                (request.body(body), Shape::Single)
            }
            Operation::Query { .. } | Operation::List => (request, Shape::Page),
        };

        let response = self.http.send(request).await.inspect_err(|err| {
            warn!(operation = operation_name, error = %err, "request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .inspect_err(|err| {
                    debug!(operation = operation_name, error = %err, "error body unavailable");
                })
                .ok();
            let err = map_status_error(status, &endpoint, body.as_deref());
            warn!(operation = operation_name, %status, "request rejected");
            return Err(err);
        }

        let bytes = response.bytes().await.map_err(|err| {
            warn!(operation = operation_name, error = %err, "failed to read response body");
            StorefrontError::from(InfraError::from(err))
        })?;

        let decoded = decode::<R>(&bytes, shape).inspect_err(|err| {
            warn!(operation = operation_name, error = %err, "failed to decode response");
        })?;

        debug!(operation = operation_name, %status, "request decoded");
        Ok(decoded)
    }
}

fn decode<R: Resource>(bytes: &[u8], shape: Shape) -> Result<Decoded<R>> {
    let decoded = match shape {
        Shape::Single => serde_json::from_slice::<R::Envelope>(bytes)
            .map(|envelope| Decoded::Single(R::from_envelope(envelope))),
        Shape::Page => serde_json::from_slice::<PagedQueryResponse<R>>(bytes).map(Decoded::Page),
    };

    decoded.map_err(|err| StorefrontError::Decode(format!("unexpected response body: {err}")))
}

fn map_status_error(status: StatusCode, url: &str, body: Option<&str>) -> StorefrontError {
    let message = match body {
        None => format!("{url} returned status {status} (body unavailable)"),
        Some("") => format!("{url} returned status {status}"),
        Some(body) => format!("{url} returned status {status}: {body}"),
    };

    StorefrontError::Transport { message, status: Some(status.as_u16()) }
}
