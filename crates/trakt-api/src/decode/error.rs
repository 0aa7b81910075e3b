//! Decode failure types.

use serde_json::Value;
use thiserror::Error;

/// Longest string excerpt copied into an error message.
const EXCERPT_CHARS: usize = 32;

/// Classification of a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(clippy::module_name_repetitions)]
pub enum DecodeErrorKind {
    /// The payload is not valid JSON.
    #[error("invalid JSON document")]
    InvalidJson,
    /// A numeric, temporal, string, or boolean value matched no accepted encoding.
    #[error("malformed {expected}: found {found}")]
    MalformedScalar {
        /// Semantic type that was expected.
        expected: &'static str,
        /// Description of the offending token.
        found: String,
    },
    /// A wire string is not a member of the enumeration.
    #[error("unknown {enumeration} value \"{value}\"")]
    UnknownEnumValue {
        /// Enumeration name.
        enumeration: &'static str,
        /// Offending wire string.
        value: String,
    },
    /// A value has the wrong container kind, or a polymorphic list mixes kinds.
    #[error("shape mismatch: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Expected shape.
        expected: &'static str,
        /// Description of the offending token.
        found: String,
    },
    /// The top-level body is neither a success body nor an error envelope.
    #[error("response is neither a success body nor an error envelope: found {found}")]
    MissingRequiredStructure {
        /// Description of the top-level token.
        found: String,
    },
}

/// A decode failure with the JSON path where it was detected.
#[derive(Debug, Error)]
#[error("{kind} at {path}")]
#[allow(clippy::module_name_repetitions)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    path: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl DecodeError {
    /// Creates an error at `path` without an underlying cause.
    #[must_use]
    pub fn new(kind: DecodeErrorKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            source: None,
        }
    }

    /// Attaches the underlying parse failure.
    #[must_use]
    pub fn with_source(
        mut self,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Returns the JSON path (e.g. `$.seasons[0].episodes`).
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this is a shape mismatch on the document root.
    pub(crate) fn is_root_shape_mismatch(&self) -> bool {
        self.path == "$" && matches!(self.kind, DecodeErrorKind::ShapeMismatch { .. })
    }

    /// Re-labels a root shape mismatch as a missing envelope structure.
    pub(crate) fn into_missing_structure(self) -> Self {
        match self.kind {
            DecodeErrorKind::ShapeMismatch { found, .. } => Self {
                kind: DecodeErrorKind::MissingRequiredStructure { found },
                ..self
            },
            kind => Self { kind, ..self },
        }
    }
}

/// Describes a JSON token for error messages.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => {
            let excerpt: String = s.chars().take(EXCERPT_CHARS).collect();
            if excerpt.len() < s.len() {
                format!("string \"{excerpt}...\"")
            } else {
                format!("string \"{excerpt}\"")
            }
        }
        Value::Array(items) => format!("array of {} element(s)", items.len()),
        Value::Object(_) => String::from("object"),
    }
}
