//! Typed record codec.
//!
//! Untyped JSON (`serde_json::Value` / [`JsonObject`]) stays inside this module: records are
//! built from it field by field and written back the same way. The rules are structural
//! passthrough only:
//!
//! * `null` in, `None` out (and the reverse on encode);
//! * a missing key and an explicit `null` both decode to an absent field;
//! * unknown keys are ignored;
//! * a value of the wrong JSON type makes that single field absent, nothing else.
//!
//! No coercion happens: numbers are never parsed from strings and strings are never trimmed.

use crate::error::{ModelError, ModelErrorExt};
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// The untyped key-value record received from, or sent to, the wire.
pub type JsonObject = Map<String, Value>;

/// A typed JSON record with optional fields.
///
/// Implemented by `#[api_model]`; do not implement it by hand.
pub trait ApiModel: Sized {
    /// Shape name, e.g. `ApiFeature`.
    const NAME: &'static str;
    /// Declared wire keys, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Builds the record from an object, taking each declared key that is present and well typed.
    fn decode_object(object: &JsonObject) -> Self;

    /// Writes every declared key; absent fields become `null`.
    fn encode_object(&self) -> JsonObject;

    /// Shape predicate. All fields are optional, so every object satisfies the shape.
    #[must_use]
    fn instance_of(_value: &JsonObject) -> bool {
        true
    }

    /// Decodes a JSON value into the record.
    ///
    /// Returns `None` for `null`. Any other value produces a record: a non-object simply
    /// has none of the declared keys.
    #[must_use]
    fn from_json(json: &Value) -> Option<Self> {
        match json {
            Value::Null => None,
            Value::Object(object) => Some(Self::decode_object(object)),
            other => {
                debug!(model = Self::NAME, kind = kind_of(other), "Decoding non-object payload");
                Some(Self::decode_object(&JsonObject::new()))
            },
        }
    }

    /// Encodes the record, propagating `None` as `null`.
    #[must_use]
    fn to_json(value: Option<&Self>) -> Value {
        value.map_or(Value::Null, Self::to_json_value)
    }

    #[must_use]
    fn to_json_value(&self) -> Value {
        Value::Object(self.encode_object())
    }

    /// Parses JSON text and decodes it.
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] if the text is not valid JSON.
    fn from_json_str(text: &str) -> Result<Option<Self>, ModelError> {
        let json: Value = serde_json::from_str(text)
            .inspect_err(|err| warn!(model = Self::NAME, %err, "Rejected malformed JSON payload"))
            .context(format!("Parsing {} payload", Self::NAME))?;
        Ok(Self::from_json(&json))
    }

    /// Encodes the record and prints it as JSON text.
    ///
    /// # Errors
    /// Returns [`ModelError::Json`] if serialization fails.
    fn to_json_string(value: Option<&Self>, pretty: bool) -> Result<String, ModelError> {
        let json = Self::to_json(value);
        let text =
            if pretty { serde_json::to_string_pretty(&json) } else { serde_json::to_string(&json) };
        text.context(format!("Printing {} payload", Self::NAME))
    }
}

/// A value that can occupy a record field.
pub trait JsonField: Sized {
    /// Returns `None` when the JSON value has the wrong type.
    fn decode_field(value: &Value) -> Option<Self>;

    fn encode_field(&self) -> Value;
}

impl JsonField for bool {
    fn decode_field(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn encode_field(&self) -> Value {
        Value::Bool(*self)
    }
}

impl JsonField for String {
    fn decode_field(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn encode_field(&self) -> Value {
        Value::String(self.clone())
    }
}

impl JsonField for i32 {
    fn decode_field(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|n| Self::try_from(n).ok())
    }

    fn encode_field(&self) -> Value {
        Value::from(*self)
    }
}

impl JsonField for i64 {
    fn decode_field(value: &Value) -> Option<Self> {
        value.as_i64()
    }

    fn encode_field(&self) -> Value {
        Value::from(*self)
    }
}

impl JsonField for u64 {
    fn decode_field(value: &Value) -> Option<Self> {
        value.as_u64()
    }

    fn encode_field(&self) -> Value {
        Value::from(*self)
    }
}

impl JsonField for f64 {
    fn decode_field(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    fn encode_field(&self) -> Value {
        Value::from(*self)
    }
}

/// Free-form JSON, passed through untouched.
impl JsonField for Value {
    fn decode_field(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn encode_field(&self) -> Value {
        self.clone()
    }
}

/// Arrays decode only if every element does.
impl<T: JsonField> JsonField for Vec<T> {
    fn decode_field(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::decode_field).collect()
    }

    fn encode_field(&self) -> Value {
        Value::Array(self.iter().map(T::encode_field).collect())
    }
}

/// String-keyed maps decode only if every value does.
impl<T: JsonField> JsonField for BTreeMap<String, T> {
    fn decode_field(value: &Value) -> Option<Self> {
        value
            .as_object()?
            .iter()
            .map(|(key, value)| T::decode_field(value).map(|decoded| (key.clone(), decoded)))
            .collect()
    }

    fn encode_field(&self) -> Value {
        Value::Object(self.iter().map(|(key, value)| (key.clone(), value.encode_field())).collect())
    }
}

/// Nullable element: `null` decodes to `Some(None)`, so collections keep the slot.
impl<T: JsonField> JsonField for Option<T> {
    fn decode_field(value: &Value) -> Option<Self> {
        if value.is_null() { Some(None) } else { T::decode_field(value).map(Some) }
    }

    fn encode_field(&self) -> Value {
        self.as_ref().map_or(Value::Null, T::encode_field)
    }
}

/// Reads one declared field. Used by `#[api_model]` expansions.
pub fn decode_field<T: JsonField>(model: &'static str, object: &JsonObject, key: &'static str) -> Option<T> {
    let value = object.get(key).filter(|value| !value.is_null())?;
    let decoded = T::decode_field(value);
    if decoded.is_none() {
        debug!(model, field = key, kind = kind_of(value), "Unexpected JSON type, field treated as absent");
    }
    decoded
}

/// Writes one declared field. Used by `#[api_model]` expansions.
pub fn encode_field<T: JsonField>(value: Option<&T>) -> Value {
    value.map_or(Value::Null, T::encode_field)
}

/// `Serialize` body of `#[api_model]` records: writes the encoded object.
///
/// # Errors
/// Returns whatever the serializer reports.
pub fn serialize_record<T: ApiModel, S: Serializer>(record: &T, serializer: S) -> Result<S::Ok, S::Error> {
    record.encode_object().serialize(serializer)
}

/// `Deserialize` body of `#[api_model]` records: buffers the input and decodes it.
///
/// `null` cannot become a bare record, so it is the only rejected input. Deserialize into
/// `Option<T>` to receive `None` for it instead.
///
/// # Errors
/// Returns an `invalid_type` error for `null`, or the deserializer's own error for input
/// that is not JSON-shaped.
pub fn deserialize_record<'de, T: ApiModel, D: Deserializer<'de>>(deserializer: D) -> Result<T, D::Error> {
    let value = Value::deserialize(deserializer)?;
    T::from_json(&value).ok_or_else(|| D::Error::invalid_type(Unexpected::Unit, &T::NAME))
}

/// Decodes a JSON object whose values are all of one shape, e.g. the feature listing.
///
/// `null` propagates as `None`. Entries whose value does not decode are skipped, and a
/// non-object payload yields an empty map.
///
/// With `T = ApiFeature` an entry holding `null` is skipped as well. Decode into
/// `Option<ApiFeature>` to keep such keys with a `None` value.
#[must_use]
pub fn decode_map<T: JsonField>(json: &Value) -> Option<BTreeMap<String, T>> {
    let object = match json {
        Value::Null => return None,
        Value::Object(object) => object,
        other => {
            debug!(kind = kind_of(other), "Decoding non-object payload as an empty map");
            return Some(BTreeMap::new());
        },
    };

    let map = object
        .iter()
        .filter_map(|(key, value)| match T::decode_field(value) {
            Some(decoded) => Some((key.clone(), decoded)),
            None => {
                debug!(entry = %key, kind = kind_of(value), "Skipping map entry with unexpected type");
                None
            },
        })
        .collect();
    Some(map)
}

/// Encodes a map of records, propagating `None` as `null`.
#[must_use]
pub fn encode_map<T: JsonField>(map: Option<&BTreeMap<String, T>>) -> Value {
    map.map_or(Value::Null, JsonField::encode_field)
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
