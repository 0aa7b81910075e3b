//! Building blocks shared by shows, episodes and movies.

use serde_json::Value;

use crate::decode::{Decode, DecodeContext, DecodeError, Fields};
use crate::enumerations::Rating;

/// Artwork URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Images {
    /// Poster image.
    pub poster: Option<String>,
    /// Fan art image.
    pub fanart: Option<String>,
    /// Person headshot.
    pub headshot: Option<String>,
    /// Episode screenshot.
    pub screen: Option<String>,
    /// Banner image.
    pub banner: Option<String>,
}

impl Decode for Images {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            poster: fields.get("poster")?,
            fanart: fields.get("fanart")?,
            headshot: fields.get("headshot")?,
            screen: fields.get("screen")?,
            banner: fields.get("banner")?,
        })
    }
}

/// Community rating summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ratings {
    /// Share of votes that were "love", 0-100.
    pub percentage: Option<i32>,
    /// Total votes.
    pub votes: Option<i32>,
    /// "love" votes.
    pub loved: Option<i32>,
    /// "hate" votes.
    pub hated: Option<i32>,
}

impl Decode for Ratings {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            percentage: fields.get("percentage")?,
            votes: fields.get("votes")?,
            loved: fields.get("loved")?,
            hated: fields.get("hated")?,
        })
    }
}

/// Community watch statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Distinct watchers.
    pub watchers: Option<i32>,
    /// Total plays.
    pub plays: Option<i32>,
    /// Plays reported by media centers.
    pub scrobbles: Option<i32>,
    /// Check-ins.
    pub checkins: Option<i32>,
    /// Users with it in their collection.
    pub collection: Option<i32>,
}

impl Decode for Stats {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            watchers: fields.get("watchers")?,
            plays: fields.get("plays")?,
            scrobbles: fields.get("scrobbles")?,
            checkins: fields.get("checkins")?,
            collection: fields.get("collection")?,
        })
    }
}

/// Fields common to [`TvShow`](super::TvShow) and [`Movie`](super::Movie).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaBase {
    /// Title.
    pub title: Option<String>,
    /// Release year.
    pub year: Option<i32>,
    /// Trakt page URL.
    pub url: Option<String>,
    /// Artwork.
    pub images: Option<Images>,
    /// Genre names.
    pub genres: Option<Vec<String>>,
    /// Community ratings.
    pub ratings: Option<Ratings>,
    /// Community statistics.
    pub stats: Option<Stats>,
    /// IMDb id (`tt0000000`).
    pub imdb_id: Option<String>,
    /// TMDb id.
    pub tmdb_id: Option<String>,
    /// Whether the authenticated user has watched it.
    pub watched: Option<bool>,
    /// Plays by the authenticated user.
    pub plays: Option<i32>,
    /// The authenticated user's simple rating.
    pub rating: Option<Rating>,
    /// The authenticated user's 1-10 rating.
    pub rating_advanced: Option<i32>,
    /// Whether it is on the authenticated user's watchlist.
    pub in_watchlist: Option<bool>,
    /// Whether it is in the authenticated user's collection.
    pub in_collection: Option<bool>,
}

impl MediaBase {
    /// Reads the shared members out of an already opened object.
    pub(crate) fn from_fields(fields: &Fields<'_, '_>) -> Result<Self, DecodeError> {
        Ok(Self {
            title: fields.get("title")?,
            year: fields.get("year")?,
            url: fields.get("url")?,
            images: fields.get("images")?,
            genres: fields.get("genres")?,
            ratings: fields.get("ratings")?,
            stats: fields.get("stats")?,
            imdb_id: fields.get("imdb_id")?,
            tmdb_id: fields.get("tmdb_id")?,
            watched: fields.get("watched")?,
            plays: fields.get("plays")?,
            rating: fields.get("rating")?,
            rating_advanced: fields.get("rating_advanced")?,
            in_watchlist: fields.get("in_watchlist")?,
            in_collection: fields.get("in_collection")?,
        })
    }
}

impl Decode for MediaBase {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        Self::from_fields(&Fields::new(value, cx)?)
    }
}
