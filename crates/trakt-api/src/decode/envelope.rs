//! Top-level response decoding: success body or error envelope.

use std::io::Read;

use serde_json::Value;

use super::Decode;
use super::config::DecoderConfig;
use super::error::{DecodeError, DecodeErrorKind, describe};
use crate::entities::Response;

/// `status` value marking an error envelope.
const FAILURE_STATUS: &str = "failure";

/// Outcome of decoding an API response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// The expected entity.
    Success(T),
    /// The API reported a failure (`{"status":"failure","error":...}`).
    Failure(Response),
}

impl<T> Envelope<T> {
    /// Converts into a `Result`, keeping the error envelope as the error.
    ///
    /// # Errors
    ///
    /// Returns the error envelope for [`Envelope::Failure`].
    pub fn into_result(self) -> Result<T, Response> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(response) => Err(response),
        }
    }

    /// Whether the API reported a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

/// Whether `value` is an error envelope.
fn is_failure_envelope(value: &Value) -> bool {
    value
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|status| status == FAILURE_STATUS)
}

fn parse_json(bytes: &[u8]) -> Result<Value, DecodeError> {
    serde_json::from_slice(bytes)
        .map_err(|err| DecodeError::new(DecodeErrorKind::InvalidJson, "$").with_source(err))
}

/// Decodes a parsed body as `T` or as an error envelope.
///
/// # Errors
///
/// - [`DecodeErrorKind::MissingRequiredStructure`] if the top level is
///   neither a `T` nor an error envelope.
/// - Any field-level failure from decoding `T`.
pub fn decode_response_value_with<T: Decode>(
    value: &Value,
    config: &DecoderConfig,
) -> Result<Envelope<T>, DecodeError> {
    let cx = config.context();

    if is_failure_envelope(value) {
        return Response::decode(value, &cx).map(Envelope::Failure);
    }

    if !(value.is_object() || value.is_array()) {
        return Err(cx.error(DecodeErrorKind::MissingRequiredStructure {
            found: describe(value),
        }));
    }

    T::decode(value, &cx).map(Envelope::Success).map_err(|err| {
        if err.is_root_shape_mismatch() {
            err.into_missing_structure()
        } else {
            err
        }
    })
}

/// [`decode_response_value_with`] using the shared configuration.
///
/// # Errors
///
/// See [`decode_response_value_with`].
pub fn decode_response_value<T: Decode>(value: &Value) -> Result<Envelope<T>, DecodeError> {
    decode_response_value_with(value, DecoderConfig::shared())
}

/// Decodes raw body bytes as `T` or as an error envelope.
///
/// # Errors
///
/// [`DecodeErrorKind::InvalidJson`] for unparseable bytes, otherwise see
/// [`decode_response_value_with`].
pub fn decode_response_with<T: Decode>(
    bytes: &[u8],
    config: &DecoderConfig,
) -> Result<Envelope<T>, DecodeError> {
    let value = parse_json(bytes)?;
    decode_response_value_with(&value, config)
}

/// [`decode_response_with`] using the shared configuration.
///
/// # Errors
///
/// See [`decode_response_with`].
pub fn decode_response<T: Decode>(bytes: &[u8]) -> Result<Envelope<T>, DecodeError> {
    decode_response_with(bytes, DecoderConfig::shared())
}

/// Reads a body from `reader` and decodes it as `T` or as an error envelope.
///
/// # Errors
///
/// [`DecodeErrorKind::InvalidJson`] if reading or parsing fails, otherwise
/// see [`decode_response_value_with`].
pub fn decode_response_reader<T: Decode>(reader: impl Read) -> Result<Envelope<T>, DecodeError> {
    let value: Value = serde_json::from_reader(reader)
        .map_err(|err| DecodeError::new(DecodeErrorKind::InvalidJson, "$").with_source(err))?;
    decode_response_value(&value)
}

/// Decodes raw bytes as `T` without error-envelope handling.
///
/// # Errors
///
/// [`DecodeErrorKind::InvalidJson`] for unparseable bytes, or any failure
/// from decoding `T`.
pub fn decode<T: Decode>(bytes: &[u8]) -> Result<T, DecodeError> {
    let value = parse_json(bytes)?;
    T::decode(&value, &DecoderConfig::shared().context())
}
