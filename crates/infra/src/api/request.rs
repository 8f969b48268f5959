//! Deferred request descriptions
//!
//! A [`RequestDescriptor`] says what should happen (which endpoint, which
//! operation, which payload) without doing it. Builders here are pure: they
//! never touch the network and never fail.

use std::fmt;
use std::marker::PhantomData;

use reqwest::Method;
use storefront_domain::constants::WHERE_PARAM;
use storefront_domain::Resource;

/// Operation a descriptor performs
///
/// The verb and the expected response shape both follow from the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation<D> {
    /// `POST` the draft; the response is a single-resource envelope
    Create(D),
    /// `GET` with a server-side filter; the response is a paged list
    Query { filter: String },
    /// `GET` without a filter; the response is a paged list
    List,
}

impl<D> Operation<D> {
    /// HTTP verb for this operation
    pub fn method(&self) -> Method {
        match self {
            Self::Create(_) => Method::POST,
            Self::Query { .. } | Self::List => Method::GET,
        }
    }

    /// Short name used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Query { .. } => "query",
            Self::List => "list",
        }
    }
}

/// One intended call against resource `R`
///
/// The payload of a create is owned by the descriptor, so descriptors can be
/// built on one task and executed on another.
pub struct RequestDescriptor<R: Resource> {
    endpoint: String,
    operation: Option<Operation<R::Draft>>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> RequestDescriptor<R> {
    /// Descriptor for `endpoint` with no operation assigned yet
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), operation: None, _resource: PhantomData }
    }

    /// Assign the operation, replacing any previous one
    #[must_use]
    pub fn with_operation(mut self, operation: Operation<R::Draft>) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Full URL, including any query string
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Assigned operation, if any
    pub fn operation(&self) -> Option<&Operation<R::Draft>> {
        self.operation.as_ref()
    }

    /// HTTP verb, or `None` when no operation is assigned
    pub fn method(&self) -> Option<Method> {
        self.operation.as_ref().map(Operation::method)
    }

    /// Payload to be sent, for create operations
    pub fn body(&self) -> Option<&R::Draft> {
        match &self.operation {
            Some(Operation::Create(draft)) => Some(draft),
            _ => None,
        }
    }

    /// Split into endpoint and operation, handing over the payload
    pub fn into_parts(self) -> (String, Option<Operation<R::Draft>>) {
        (self.endpoint, self.operation)
    }
}

impl<R: Resource> Clone for RequestDescriptor<R>
where
    R::Draft: Clone,
{
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint.clone(),
            operation: self.operation.clone(),
            _resource: PhantomData,
        }
    }
}

// Payload omitted; only the operation name is shown.
impl<R: Resource> fmt::Debug for RequestDescriptor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestDescriptor")
            .field("endpoint", &self.endpoint)
            .field("operation", &self.operation.as_ref().map(Operation::name))
            .finish()
    }
}

/// `{project_url}/{R::ENDPOINT}`
pub fn resource_url<R: Resource>(project_url: &str) -> String {
    format!("{project_url}/{}", R::ENDPOINT)
}

/// Describe creating a record from `draft`
pub fn create<R: Resource>(project_url: &str, draft: R::Draft) -> RequestDescriptor<R> {
    RequestDescriptor::new(resource_url::<R>(project_url)).with_operation(Operation::Create(draft))
}

/// Describe a filtered read
///
/// The filter is URL-encoded into the `where` parameter. It is not validated;
/// an empty filter is sent as `where=`. Spaces are encoded as `%20` rather
/// than the form-style `+`; the platform decodes both to the same filter.
pub fn query<R: Resource>(project_url: &str, filter: &str) -> RequestDescriptor<R> {
    let endpoint = format!(
        "{}?{}={}",
        resource_url::<R>(project_url),
        WHERE_PARAM,
        urlencoding::encode(filter)
    );
    RequestDescriptor::new(endpoint)
        .with_operation(Operation::Query { filter: filter.to_string() })
}

/// Describe an unfiltered read
pub fn list<R: Resource>(project_url: &str) -> RequestDescriptor<R> {
    RequestDescriptor::new(resource_url::<R>(project_url)).with_operation(Operation::List)
}
