use std::borrow::Cow;

/// Errors raised while moving records through JSON text.
///
/// Decoding and encoding of already parsed values cannot fail; only parsing or
/// printing raw JSON text can.
#[csc_derive::csc_error]
pub enum ModelError {
    /// Malformed JSON text or a serialization failure.
    #[error("JSON error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },
}
