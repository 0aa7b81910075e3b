//! Decode position tracking and object field access.

use std::fmt;

use serde_json::{Map, Value};

use super::Decode;
use super::config::DecoderConfig;
use super::error::{DecodeError, DecodeErrorKind, describe};

/// Location of a value inside the document, rendered as `$.a[0].b`.
#[derive(Debug, Clone, Copy)]
pub enum JsonPath<'a> {
    /// Document root.
    Root,
    /// Object member.
    Key(&'a JsonPath<'a>, &'a str),
    /// Array element.
    Index(&'a JsonPath<'a>, usize),
}

impl fmt::Display for JsonPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("$"),
            Self::Key(parent, key) => write!(f, "{parent}.{key}"),
            Self::Index(parent, index) => write!(f, "{parent}[{index}]"),
        }
    }
}

/// Configuration and current path for one decode call.
#[derive(Debug, Clone, Copy)]
#[allow(clippy::module_name_repetitions)]
pub struct DecodeContext<'a> {
    config: &'a DecoderConfig,
    path: JsonPath<'a>,
}

impl<'a> DecodeContext<'a> {
    /// Creates a context positioned at the document root.
    #[must_use]
    pub const fn new(config: &'a DecoderConfig) -> Self {
        Self {
            config,
            path: JsonPath::Root,
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &'a DecoderConfig {
        self.config
    }

    /// Current path.
    #[must_use]
    pub const fn path(&self) -> &JsonPath<'a> {
        &self.path
    }

    /// Descends into an object member.
    #[must_use]
    pub const fn key<'b>(&'b self, key: &'b str) -> DecodeContext<'b> {
        DecodeContext {
            config: self.config,
            path: JsonPath::Key(&self.path, key),
        }
    }

    /// Descends into an array element.
    #[must_use]
    pub const fn index(&self, index: usize) -> DecodeContext<'_> {
        DecodeContext {
            config: self.config,
            path: JsonPath::Index(&self.path, index),
        }
    }

    /// Builds an error at the current path.
    #[must_use]
    pub fn error(&self, kind: DecodeErrorKind) -> DecodeError {
        DecodeError::new(kind, self.path.to_string())
    }

    /// Builds a [`DecodeErrorKind::MalformedScalar`] error at the current path.
    #[must_use]
    pub fn malformed(&self, expected: &'static str, found: &Value) -> DecodeError {
        self.error(DecodeErrorKind::MalformedScalar {
            expected,
            found: describe(found),
        })
    }

    /// Builds a [`DecodeErrorKind::ShapeMismatch`] error at the current path.
    #[must_use]
    pub fn shape_mismatch(&self, expected: &'static str, found: &Value) -> DecodeError {
        self.error(DecodeErrorKind::ShapeMismatch {
            expected,
            found: describe(found),
        })
    }
}

/// Field access over one JSON object.
///
/// Each entity's `Decode` impl lists its wire names through [`Fields::get`];
/// that list is the entity's field table. Members not asked for are ignored.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'v, 'c> {
    map: &'v Map<String, Value>,
    cx: &'c DecodeContext<'c>,
}

impl<'v, 'c> Fields<'v, 'c> {
    /// Opens `value` as an object.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeErrorKind::ShapeMismatch`] if `value` is not an object.
    pub fn new(value: &'v Value, cx: &'c DecodeContext<'c>) -> Result<Self, DecodeError> {
        value
            .as_object()
            .map(|map| Self { map, cx })
            .ok_or_else(|| cx.shape_mismatch("object", value))
    }

    /// Decodes an optional member. Absent and `null` members yield `None`.
    ///
    /// # Errors
    ///
    /// Propagates the member's decode failure, located at the member's path.
    pub fn get<T: Decode>(&self, name: &str) -> Result<Option<T>, DecodeError> {
        match self.map.get(name) {
            None => Ok(None),
            Some(value) => T::decode_optional(value, &self.cx.key(name)),
        }
    }

    /// Context of the object itself.
    #[must_use]
    pub const fn context(&self) -> &'c DecodeContext<'c> {
        self.cx
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_path_display() {
        // Arrange
        let config = DecoderConfig::default();
        let root = config.context();
        let seasons = root.key("seasons");
        let second = seasons.index(1);
        let episodes = second.key("episodes");

        // Act
        let rendered = episodes.path().to_string();

        // Assert
        assert_eq!(rendered, "$.seasons[1].episodes");
    }

    #[test]
    fn test_fields_rejects_non_object() {
        // Arrange
        let config = DecoderConfig::default();
        let cx = config.context();
        let value = json!([1, 2]);

        // Act
        let err = Fields::new(&value, &cx).unwrap_err();

        // Assert
        assert!(matches!(err.kind(), DecodeErrorKind::ShapeMismatch { .. }));
        assert_eq!(err.path(), "$");
    }

    #[test]
    fn test_fields_missing_and_null_are_unset() {
        // Arrange
        let config = DecoderConfig::default();
        let cx = config.context();
        let value = json!({ "title": null, "extra": "ignored" });
        let fields = Fields::new(&value, &cx).unwrap();

        // Act
        let title: Option<String> = fields.get("title").unwrap();
        let overview: Option<String> = fields.get("overview").unwrap();

        // Assert
        assert!(title.is_none());
        assert!(overview.is_none());
    }

    #[test]
    fn test_fields_error_carries_member_path() {
        // Arrange
        let config = DecoderConfig::default();
        let cx = config.context();
        let value = json!({ "in_watchlist": "yes" });
        let fields = Fields::new(&value, &cx).unwrap();

        // Act
        let err = fields.get::<bool>("in_watchlist").unwrap_err();

        // Assert
        assert_eq!(err.path(), "$.in_watchlist");
    }
}
