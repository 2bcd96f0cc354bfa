use crate::api_model;

/// Paths to other pages of a collection.
#[api_model(rename_all = "snake_case")]
pub struct ApiLinks {
    /// Path to first page of results.
    pub first: Option<String>,
    /// Path to next page of results.
    pub next: Option<String>,
    /// Path to previous page of results.
    pub prev: Option<String>,
    /// Path to last page of results.
    pub last: Option<String>,
}

/// Metadata about a collection request.
#[api_model(rename_all = "snake_case")]
pub struct ApiResponseMetadata {
    /// Limit of results used for the request.
    pub limit: Option<i64>,
    /// Offset into results used for the request.
    pub offset: Option<i64>,
    /// Total count of results.
    pub count: Option<i64>,
}

/// Request body naming a set of objects by UUID.
#[api_model(rename_all = "snake_case")]
pub struct ApiUuidListRequest {
    pub uuids: Option<Vec<String>>,
}
