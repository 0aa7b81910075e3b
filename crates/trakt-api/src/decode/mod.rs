//! Response decoding engine.
//!
//! Turns Trakt JSON into typed values. Every decodable type implements
//! [`Decode`]; together those impls are the registry of decoding rules,
//! while [`DecoderConfig`] carries the runtime rules (reference zone, date
//! format, integer leniency) that are shared by every decode call.

mod config;
mod context;
mod envelope;
mod episodes;
mod error;
mod scalar;
mod wire_enum;

use serde_json::Value;

pub use config::DecoderConfig;
#[allow(clippy::module_name_repetitions)]
pub use context::{DecodeContext, Fields, JsonPath};
pub use envelope::{
    Envelope, decode, decode_response, decode_response_reader, decode_response_value,
    decode_response_value_with, decode_response_with,
};
pub use episodes::EpisodeList;
#[allow(clippy::module_name_repetitions)]
pub use error::{DecodeError, DecodeErrorKind};
pub use scalar::TraktDate;
pub(crate) use wire_enum::wire_enum;

/// A type with a rule for decoding it from a JSON value.
pub trait Decode: Sized {
    /// Decodes a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] located at `cx`'s path when `value` does
    /// not match this type's rule.
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError>;

    /// Decodes an optional field value. `null` is unset.
    ///
    /// Types override this when some wire forms mean "no value" rather than
    /// an error (lenient integers, legacy empty-list markers).
    ///
    /// # Errors
    ///
    /// Same as [`Decode::decode`].
    fn decode_optional(
        value: &Value,
        cx: &DecodeContext<'_>,
    ) -> Result<Option<Self>, DecodeError> {
        if value.is_null() {
            return Ok(None);
        }
        Self::decode(value, cx).map(Some)
    }
}

/// Array elements paired with their context, `null` holes skipped.
fn present_items<'v, 'c>(
    items: &'v [Value],
    cx: &'c DecodeContext<'c>,
) -> impl Iterator<Item = (&'v Value, DecodeContext<'c>)> {
    items.iter().enumerate().filter_map(move |(i, item)| {
        let cx = cx.index(i);
        if item.is_null() {
            tracing::trace!(path = %cx.path(), "null array element, skipping");
            return None;
        }
        Some((item, cx))
    })
}

/// `null` elements are skipped; every other element must decode as `T`.
impl<T: Decode> Decode for Vec<T> {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let items = value
            .as_array()
            .ok_or_else(|| cx.shape_mismatch("array", value))?;
        present_items(items, cx)
            .map(|(item, cx)| T::decode(item, &cx))
            .collect()
    }
}

/// Raw JSON, kept as-is.
impl Decode for Value {
    fn decode(value: &Value, _cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_vec_reports_element_path() {
        // Arrange
        let value = json!([1, 2, "three"]);

        // Act
        let err = Vec::<i32>::decode(&value, &DecoderConfig::shared().context()).unwrap_err();

        // Assert
        assert_eq!(err.path(), "$[2]");
    }

    #[test]
    fn test_vec_rejects_object() {
        // Arrange
        let value = json!({ "0": 1 });

        // Act
        let err = Vec::<i32>::decode(&value, &DecoderConfig::shared().context()).unwrap_err();

        // Assert
        assert!(matches!(err.kind(), DecodeErrorKind::ShapeMismatch { .. }));
    }

    #[test]
    fn test_raw_value_is_cloned() {
        // Arrange
        let value = json!({ "nested": [1, { "a": null }] });

        // Act
        let raw = Value::decode(&value, &DecoderConfig::shared().context()).unwrap();

        // Assert
        assert_eq!(raw, value);
    }

    #[test]
    fn test_vec_skips_null_elements() {
        // Arrange
        let value = json!([1, null, 3]);

        // Act
        let items = Vec::<i32>::decode(&value, &DecoderConfig::shared().context()).unwrap();

        // Assert
        assert_eq!(items, vec![1, 3]);
    }
}
