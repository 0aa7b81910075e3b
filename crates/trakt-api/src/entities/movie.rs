use serde_json::Value;

use super::media::MediaBase;
use crate::decode::{Decode, DecodeContext, DecodeError, Fields, TraktDate};

/// A movie.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Movie {
    /// Members shared with shows.
    pub media: MediaBase,
    /// Release date.
    pub released: Option<TraktDate>,
    /// Trailer URL.
    pub trailer: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<i32>,
    /// Tagline.
    pub tagline: Option<String>,
    /// Synopsis.
    pub overview: Option<String>,
    /// Content rating (`"PG-13"`).
    pub certification: Option<String>,
}

impl Decode for Movie {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            media: MediaBase::from_fields(&fields)?,
            released: fields.get("released")?,
            trailer: fields.get("trailer")?,
            runtime: fields.get("runtime")?,
            tagline: fields.get("tagline")?,
            overview: fields.get("overview")?,
            certification: fields.get("certification")?,
        })
    }
}
