#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the client model layer.
//! This crate generates the boilerplate every wire shape would otherwise repeat:
//! the shape predicate, the decoder and the encoder of a typed JSON record, and
//! the context-aware error enums used at the crate edges.
//!
//! ## Usage
//! Consumers depend on `csc-models`, which re-exports [`api_model`] together with the
//! runtime traits the generated code implements:
//! ```toml
//! [dependencies]
//! csc-models = { path = "../crates/models" }
//! serde = "1"
//! ```
//!
//! See each macro’s docstring for examples; they are `ignore`d to avoid compiling in this crate.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemStruct, parse_macro_input};

/// Attribute macro that turns a struct of optional fields into a typed JSON record.
///
/// Every field must be declared as `Option<T>`: `Some` means the key was present on
/// the wire, `None` means it was missing or `null`.
///
/// # Injected Behaviors
///
/// * **Derives**: Adds `Debug`, `Clone`, `Default` and `PartialEq` if missing.
/// * **Wire keys**: `camelCase` by default. `#[serde(rename_all = "...")]` on the struct and
///   `#[serde(rename = "...")]` on a field are honored, then stripped.
/// * **Codec**: Implements `csc_models::ApiModel` (shape predicate, `from_json`,
///   `to_json`) and `csc_models::JsonField` so the record can nest inside other records.
/// * **Serde**: `Serialize` and `Deserialize` delegate to the codec. A wrong-typed field
///   deserializes as `None` and unknown keys are ignored; use `Option<Record>` to accept `null`.
///
/// # Arguments
///
/// * `rename_all = "snake_case"` - Overrides the wire key policy.
///
/// # Errors
/// Emits a compile-time error for enums, tuple or generic structs, fields that are not
/// `Option<T>`, unsupported rename policies, unknown or duplicated arguments, serde derives
/// on the struct and `deny_unknown_fields`.
///
/// # Example
///
/// ```rust,ignore
/// use csc_models::api_model;
///
/// #[api_model]
/// pub struct ApiFeature {
///     pub accessible: Option<bool>,
///     pub enabled: Option<bool>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro for defining error enums with attachable context.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a source field,
///   enabling the use of the `?` operator for upstream errors.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. Variants with a source (a `source` field, or a field marked `#[source]`/`#[from]`)
///    must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[csc_derive::csc_error]
/// pub enum ModelError {
///     #[error("JSON error{}: {source}", format_context(.context))]
///     Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
/// }
///
/// fn parse(text: &str) -> Result<serde_json::Value, ModelError> {
///     serde_json::from_str(text).context("Parsing upload payload")
/// }
/// ```
#[proc_macro_attribute]
pub fn csc_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}
