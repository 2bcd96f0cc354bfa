//! Wire shapes of the Content Sources API.

mod errata;
mod feature;
mod pagination;
mod rpm;
mod upload;

pub use errata::{ApiSnapshotErrata, ApiSnapshotErrataCollectionResponse};
pub use feature::{ApiFeature, ApiFeatureSet};
pub use pagination::{ApiLinks, ApiResponseMetadata, ApiUuidListRequest};
pub use rpm::{
    ApiDetectRpmsRequest, ApiDetectRpmsResponse, ApiPackageSourcesResponse, ApiRepositoryRpm,
    ApiRepositoryRpmCollectionResponse, ApiSearchRpmRequest, ApiSearchRpmResponse,
    ApiSnapshotRpm, ApiSnapshotRpmCollectionResponse, ApiSnapshotSearchRpmRequest,
};
pub use upload::ApiUpload;
