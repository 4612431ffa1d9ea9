//! Shared response envelope types for API handlers.

use serde::Serialize;

/// Envelope returned by every list endpoint: the applied paging parameters,
/// the total number of matching rows, and the page of data.
#[derive(Debug, Serialize)]
pub struct SearchResponse<T: Serialize> {
    pub offset: i64,
    pub limit: i64,
    pub total: i64,
    /// The applied sort in request-parameter form, e.g. `"id,asc"`.
    pub sort: String,
    pub data: Vec<T>,
}
