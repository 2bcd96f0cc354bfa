//! # Client Models
//!
//! Typed JSON records exchanged with the Content Sources backend.
//! Keep it lean: no I/O or transport here, just shapes and the codec that moves them
//! across the JSON boundary.
//!
//! Every record is declared with [`api_model`], which generates:
//!
//! * a shape predicate ([`ApiModel::instance_of`]) that accepts any object;
//! * a decoder ([`ApiModel::from_json`]) that never fails and propagates `null`;
//! * an encoder ([`ApiModel::to_json`]) that emits every declared key.
//!
//! ## Example
//!
//! ```rust
//! use csc_models::{ApiFeature, ApiModel};
//! use serde_json::json;
//!
//! let feature = ApiFeature::from_json(&json!({ "accessible": true })).unwrap();
//! assert_eq!(feature.accessible, Some(true));
//! assert_eq!(feature.enabled, None);
//!
//! assert_eq!(
//!     ApiFeature::to_json(Some(&feature)),
//!     json!({ "accessible": true, "enabled": null })
//! );
//! assert!(ApiFeature::from_json(&json!(null)).is_none());
//! ```

extern crate self as csc_models;

pub mod codec;
mod error;
pub mod models;
pub mod registry;

pub use crate::codec::{ApiModel, JsonField, JsonObject, decode_map, encode_map};
pub use crate::error::{ModelError, ModelErrorExt};
pub use crate::models::*;
pub use csc_derive::api_model;
pub use serde_json::Value;
