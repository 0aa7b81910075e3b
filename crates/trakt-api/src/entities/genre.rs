use serde_json::Value;

use crate::decode::{Decode, DecodeContext, DecodeError, Fields};

/// A genre, as listed by `/genres/*`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Genre {
    /// Display name.
    pub name: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
}

impl Decode for Genre {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            name: fields.get("name")?,
            slug: fields.get("slug")?,
        })
    }
}
