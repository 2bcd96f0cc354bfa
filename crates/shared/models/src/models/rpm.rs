use crate::api_model;
use crate::models::{ApiLinks, ApiResponseMetadata};

/// A package contained in a repository.
#[api_model(rename_all = "snake_case")]
pub struct ApiRepositoryRpm {
    /// Identifier of the rpm.
    pub uuid: Option<String>,
    /// The rpm package name.
    pub name: Option<String>,
    /// The architecture of the rpm.
    pub arch: Option<String>,
    /// The version of the rpm.
    pub version: Option<String>,
    /// The release of the rpm.
    pub release: Option<String>,
    /// The epoch of the rpm.
    pub epoch: Option<i32>,
    /// The summary of the rpm.
    pub summary: Option<String>,
    /// The checksum of the rpm.
    pub checksum: Option<String>,
}

/// One page of repository packages.
#[api_model(rename_all = "snake_case")]
pub struct ApiRepositoryRpmCollectionResponse {
    /// List of rpms.
    pub data: Option<Vec<ApiRepositoryRpm>>,
    /// Metadata about the request.
    pub meta: Option<ApiResponseMetadata>,
    /// Links to other pages of results.
    pub links: Option<ApiLinks>,
}

/// A package name matched by an rpm search.
#[api_model(rename_all = "snake_case")]
pub struct ApiSearchRpmResponse {
    /// Package name found.
    pub package_name: Option<String>,
    /// Summary of the package found.
    pub summary: Option<String>,
    /// List of the module streams for the package.
    pub package_sources: Option<Vec<ApiPackageSourcesResponse>>,
}

/// Where a found package comes from: a plain package or a module stream.
#[api_model(rename_all = "snake_case")]
pub struct ApiPackageSourcesResponse {
    /// Type of rpm, either `package` or `module`.
    pub r#type: Option<String>,
    /// Name of the module.
    pub name: Option<String>,
    /// Stream of the module.
    pub stream: Option<String>,
    /// Context of the module.
    pub context: Option<String>,
    /// Architecture of the module.
    pub arch: Option<String>,
    /// Version of the module.
    pub version: Option<String>,
    /// Description of the module.
    pub description: Option<String>,
    /// Start date of the lifecycle.
    pub start_date: Option<String>,
    /// End date of the lifecycle.
    pub end_date: Option<String>,
}

/// A package contained in a snapshot.
#[api_model(rename_all = "snake_case")]
pub struct ApiSnapshotRpm {
    pub name: Option<String>,
    pub arch: Option<String>,
    pub version: Option<String>,
    pub release: Option<String>,
    /// Sent as a string, unlike [`ApiRepositoryRpm::epoch`].
    pub epoch: Option<String>,
    pub summary: Option<String>,
}

/// One page of snapshot packages.
#[api_model(rename_all = "snake_case")]
pub struct ApiSnapshotRpmCollectionResponse {
    pub data: Option<Vec<ApiSnapshotRpm>>,
    pub meta: Option<ApiResponseMetadata>,
    pub links: Option<ApiLinks>,
}

/// Search for package names across repositories.
#[api_model(rename_all = "snake_case")]
pub struct ApiSearchRpmRequest {
    /// URLs of repositories to search.
    pub urls: Option<Vec<String>>,
    /// List of repository UUIDs to search.
    pub uuids: Option<Vec<String>>,
    /// Search string to search rpm names.
    pub search: Option<String>,
    /// Maximum number of records to return for the search.
    pub limit: Option<i64>,
}

/// Search for package names across snapshots.
#[api_model(rename_all = "snake_case")]
pub struct ApiSnapshotSearchRpmRequest {
    /// List of snapshot UUIDs to search.
    pub uuids: Option<Vec<String>>,
    /// Search string to search rpm names.
    pub search: Option<String>,
    /// Maximum number of records to return for the search.
    pub limit: Option<i64>,
    /// Whether to include module information.
    pub include_package_sources: Option<bool>,
}

/// Check which of the given package names exist in a set of repositories.
#[api_model(rename_all = "snake_case")]
pub struct ApiDetectRpmsRequest {
    /// URLs of repositories to search.
    pub urls: Option<Vec<String>>,
    /// List of repository UUIDs to search.
    pub uuids: Option<Vec<String>>,
    /// List of rpm names to search.
    pub rpm_names: Option<Vec<String>>,
    /// Maximum number of records to return for the search.
    pub limit: Option<i64>,
}

/// Outcome of looking up package names in a set of repositories.
#[api_model(rename_all = "snake_case")]
pub struct ApiDetectRpmsResponse {
    /// Rpm names found in the given repositories.
    pub found: Option<Vec<String>>,
    /// Rpm names not found in the given repositories.
    pub missing: Option<Vec<String>>,
}
