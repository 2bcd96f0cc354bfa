use crate::api_model;
use crate::models::{ApiLinks, ApiResponseMetadata};

/// An advisory attached to a snapshot.
#[api_model(rename_all = "snake_case")]
pub struct ApiSnapshotErrata {
    pub id: Option<String>,
    /// ID of the errata, e.g. `RHSA-2024:0001`.
    pub errata_id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub issued_date: Option<String>,
    pub updated_date: Option<String>,
    /// Type of the errata (`security`, `bugfix`, `enhancement`).
    pub r#type: Option<String>,
    pub severity: Option<String>,
    /// Whether a reboot is suggested.
    pub reboot_suggested: Option<bool>,
    /// List of CVEs.
    pub cves: Option<Vec<String>>,
}

/// One page of snapshot errata.
#[api_model(rename_all = "snake_case")]
pub struct ApiSnapshotErrataCollectionResponse {
    pub data: Option<Vec<ApiSnapshotErrata>>,
    pub meta: Option<ApiResponseMetadata>,
    pub links: Option<ApiLinks>,
}
