//! Status responses returned by write endpoints.

use serde_json::Value;

use super::media::Ratings;
use super::movie::Movie;
use super::show::TvShow;
use crate::decode::{Decode, DecodeContext, DecodeError, Fields, TraktDate};
use crate::enumerations::{Rating, RatingType};

/// Generic status body; also the error envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    /// `"success"` or `"failure"`.
    pub status: Option<String>,
    /// Human readable outcome.
    pub message: Option<String>,
    /// Error text, on failure.
    pub error: Option<String>,
}

impl Response {
    /// Whether the API reported a failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.status.as_deref() == Some("failure")
    }

    /// Best available description of the outcome.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }

    pub(crate) fn from_fields(fields: &Fields<'_, '_>) -> Result<Self, DecodeError> {
        Ok(Self {
            status: fields.get("status")?,
            message: fields.get("message")?,
            error: fields.get("error")?,
        })
    }
}

impl Decode for Response {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        Self::from_fields(&Fields::new(value, cx)?)
    }
}

/// Result of `/lists/items/add`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItemsResponse {
    /// Status members.
    pub response: Response,
    /// Items added.
    pub inserted: Option<i32>,
    /// Items already on the list.
    pub already_exist: Option<i32>,
    /// Items that could not be matched.
    pub skipped: Option<i32>,
    /// The skipped items, as sent.
    pub skipped_array: Option<Value>,
}

impl Decode for ListItemsResponse {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            response: Response::from_fields(&fields)?,
            inserted: fields.get("inserted")?,
            already_exist: fields.get("already_exist")?,
            skipped: fields.get("skipped")?,
            skipped_array: fields.get("skipped_array")?,
        })
    }
}

/// Result of a `/rate/*` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingResponse {
    /// Status members.
    pub response: Response,
    /// What was rated.
    pub r#type: Option<RatingType>,
    /// The rating that was applied.
    pub rating: Option<Rating>,
    /// Updated community ratings.
    pub ratings: Option<Ratings>,
    /// Shared to Facebook.
    pub facebook: Option<bool>,
    /// Shared to Twitter.
    pub twitter: Option<bool>,
    /// Shared to Tumblr.
    pub tumblr: Option<bool>,
    /// Shared to Path.
    pub path: Option<bool>,
}

impl Decode for RatingResponse {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            response: Response::from_fields(&fields)?,
            r#type: fields.get("type")?,
            rating: fields.get("rating")?,
            ratings: fields.get("ratings")?,
            facebook: fields.get("facebook")?,
            twitter: fields.get("twitter")?,
            tumblr: fields.get("tumblr")?,
            path: fields.get("path")?,
        })
    }
}

/// Result of a `/*/checkin` call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckinResponse {
    /// Status members.
    pub response: Response,
    /// Check-in time.
    pub timestamp: Option<TraktDate>,
    /// Checked-in show.
    pub show: Option<TvShow>,
    /// Checked-in movie.
    pub movie: Option<Movie>,
    /// Shared to Facebook.
    pub facebook: Option<bool>,
    /// Shared to Twitter.
    pub twitter: Option<bool>,
    /// Shared to Tumblr.
    pub tumblr: Option<bool>,
    /// Shared to Path.
    pub path: Option<bool>,
}

impl Decode for CheckinResponse {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            response: Response::from_fields(&fields)?,
            timestamp: fields.get("timestamp")?,
            show: fields.get("show")?,
            movie: fields.get("movie")?,
            facebook: fields.get("facebook")?,
            twitter: fields.get("twitter")?,
            tumblr: fields.get("tumblr")?,
            path: fields.get("path")?,
        })
    }
}
