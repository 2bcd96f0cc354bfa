use crate::api_model;

/// Descriptor of an upload in progress.
#[api_model]
pub struct ApiUpload {
    /// HREF to the unfinished upload, use with internal API.
    pub href: Option<String>,
    /// SHA256 sum of the uploaded file.
    pub sha256: Option<String>,
    /// Upload UUID, use with public API.
    pub uuid: Option<String>,
}
