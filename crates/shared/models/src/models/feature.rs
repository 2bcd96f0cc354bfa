use crate::api_model;
use std::collections::BTreeMap;

/// A feature flag pair as reported by the features endpoint.
#[api_model]
pub struct ApiFeature {
    /// Whether the current user can access the feature.
    pub accessible: Option<bool>,
    /// Whether the feature is enabled on the running server.
    pub enabled: Option<bool>,
}

/// Feature listing: feature name to its flag pair.
///
/// Decode with [`crate::decode_map`] and encode with [`crate::encode_map`].
pub type ApiFeatureSet = BTreeMap<String, ApiFeature>;
