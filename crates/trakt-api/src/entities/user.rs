//! User profiles and what they are watching.

use serde_json::Value;

use super::movie::Movie;
use super::show::{TvShow, TvShowEpisode};
use crate::decode::{Decode, DecodeContext, DecodeError, Fields, TraktDate};
use crate::enumerations::{Gender, MediaType};

/// Media a user is currently watching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WatchedMediaEntity {
    /// Movie or episode.
    pub r#type: Option<MediaType>,
    /// The movie, for [`MediaType::Movie`].
    pub movie: Option<Movie>,
    /// The show, for [`MediaType::TvShow`].
    pub show: Option<TvShow>,
    /// The episode, for [`MediaType::TvShow`].
    pub episode: Option<TvShowEpisode>,
}

impl Decode for WatchedMediaEntity {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            r#type: fields.get("type")?,
            movie: fields.get("movie")?,
            show: fields.get("show")?,
            episode: fields.get("episode")?,
        })
    }

    /// An array (the legacy empty marker) means nothing is being watched.
    fn decode_optional(
        value: &Value,
        cx: &DecodeContext<'_>,
    ) -> Result<Option<Self>, DecodeError> {
        match value {
            Value::Null => Ok(None),
            Value::Array(_) => {
                tracing::trace!(path = %cx.path(), "watching marker list, leaving unset");
                Ok(None)
            }
            _ => Self::decode(value, cx).map(Some),
        }
    }
}

/// A Trakt user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserProfile {
    /// Login name.
    pub username: Option<String>,
    /// Display name.
    pub full_name: Option<String>,
    /// Gender.
    pub gender: Option<Gender>,
    /// Age in years.
    pub age: Option<i32>,
    /// Free-form location.
    pub location: Option<String>,
    /// Biography.
    pub about: Option<String>,
    /// Account creation time.
    pub joined: Option<TraktDate>,
    /// Last login time.
    pub last_login: Option<TraktDate>,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Profile page URL.
    pub url: Option<String>,
    /// Whether the account is VIP.
    pub vip: Option<bool>,
    /// What the user is watching right now.
    pub watching: Option<WatchedMediaEntity>,
}

impl Decode for UserProfile {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            username: fields.get("username")?,
            full_name: fields.get("full_name")?,
            gender: fields.get("gender")?,
            age: fields.get("age")?,
            location: fields.get("location")?,
            about: fields.get("about")?,
            joined: fields.get("joined")?,
            last_login: fields.get("last_login")?,
            avatar: fields.get("avatar")?,
            url: fields.get("url")?,
            vip: fields.get("vip")?,
            watching: fields.get("watching")?,
        })
    }
}
