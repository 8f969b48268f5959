//! Response envelopes shared by all resources

use serde::{Deserialize, Serialize};

/// Paginated list envelope returned by query and list endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagedQueryResponse<T> {
    pub limit: u32,
    pub offset: u32,
    pub count: u32,
    /// Omitted by the platform when the query asked for `withTotal=false`
    #[serde(default)]
    pub total: Option<u64>,
    pub results: Vec<T>,
}

impl<T> PagedQueryResponse<T> {
    /// `true` when the page carries no records
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
