//! Name-indexed table of the wire shapes.
//! Lets tooling pick a shape at runtime without knowing the concrete Rust type.

use crate::codec::{ApiModel, JsonField, decode_map, encode_map};
use crate::models::{
    ApiDetectRpmsRequest, ApiDetectRpmsResponse, ApiFeature, ApiLinks, ApiPackageSourcesResponse,
    ApiRepositoryRpm, ApiRepositoryRpmCollectionResponse, ApiResponseMetadata, ApiSearchRpmRequest,
    ApiSearchRpmResponse, ApiSnapshotErrata, ApiSnapshotErrataCollectionResponse, ApiSnapshotRpm,
    ApiSnapshotRpmCollectionResponse, ApiSnapshotSearchRpmRequest, ApiUpload, ApiUuidListRequest,
};
use serde_json::Value;

/// Type-erased handle to one shape.
#[derive(Debug, Clone, Copy)]
pub struct ModelDescriptor {
    pub name: &'static str,
    /// Declared wire keys; empty for map shapes.
    pub fields: &'static [&'static str],
    normalize: fn(&Value) -> Value,
}

impl ModelDescriptor {
    const fn record<T: ApiModel>() -> Self {
        Self { name: T::NAME, fields: T::FIELDS, normalize: normalize_record::<T> }
    }

    const fn map_of<T: JsonField>(name: &'static str) -> Self {
        Self { name, fields: &[], normalize: normalize_map::<T> }
    }

    /// Decodes the payload through the shape and encodes it again.
    ///
    /// Unknown keys are dropped, declared keys always appear, `null` stays `null`.
    #[must_use]
    pub fn normalize(&self, json: &Value) -> Value {
        (self.normalize)(json)
    }

    /// Whether `name` refers to this shape, ignoring case, `-` and `_`.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let mut wanted = name.chars().filter(|c| *c != '-' && *c != '_');
        let mut own = self.name.chars();
        loop {
            match (wanted.next(), own.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.eq_ignore_ascii_case(&b) => {},
                _ => return false,
            }
        }
    }
}

fn normalize_record<T: ApiModel>(json: &Value) -> Value {
    T::to_json(T::from_json(json).as_ref())
}

fn normalize_map<T: JsonField>(json: &Value) -> Value {
    encode_map(decode_map::<T>(json).as_ref())
}

/// Every shape this crate defines.
pub static MODELS: &[ModelDescriptor] = &[
    ModelDescriptor::record::<ApiFeature>(),
    ModelDescriptor::map_of::<Option<ApiFeature>>("ApiFeatureSet"),
    ModelDescriptor::record::<ApiUpload>(),
    ModelDescriptor::record::<ApiLinks>(),
    ModelDescriptor::record::<ApiResponseMetadata>(),
    ModelDescriptor::record::<ApiUuidListRequest>(),
    ModelDescriptor::record::<ApiRepositoryRpm>(),
    ModelDescriptor::record::<ApiRepositoryRpmCollectionResponse>(),
    ModelDescriptor::record::<ApiSnapshotRpm>(),
    ModelDescriptor::record::<ApiSnapshotRpmCollectionResponse>(),
    ModelDescriptor::record::<ApiSearchRpmRequest>(),
    ModelDescriptor::record::<ApiSnapshotSearchRpmRequest>(),
    ModelDescriptor::record::<ApiSearchRpmResponse>(),
    ModelDescriptor::record::<ApiPackageSourcesResponse>(),
    ModelDescriptor::record::<ApiDetectRpmsRequest>(),
    ModelDescriptor::record::<ApiDetectRpmsResponse>(),
    ModelDescriptor::record::<ApiSnapshotErrata>(),
    ModelDescriptor::record::<ApiSnapshotErrataCollectionResponse>(),
];

/// Looks a shape up by name (`ApiUpload`, `api-upload`, `api_upload`).
#[must_use]
pub fn find(name: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|descriptor| descriptor.matches(name))
}
