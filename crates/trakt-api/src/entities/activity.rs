//! Activity feeds.

use serde_json::Value;

use super::list::TraktList;
use super::movie::Movie;
use super::show::{TvShow, TvShowEpisode, TvShowSeason};
use super::user::UserProfile;
use crate::decode::{Decode, DecodeContext, DecodeError, Fields, TraktDate};
use crate::enumerations::{ActivityAction, ActivityType, Rating};

/// A shout attached to an activity item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shout {
    /// Shout text.
    pub text: Option<String>,
    /// Whether the text contains spoilers.
    pub spoiler: Option<bool>,
}

impl Decode for Shout {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            text: fields.get("text")?,
            spoiler: fields.get("spoiler")?,
        })
    }
}

/// One entry of an activity feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityItem {
    /// When it happened.
    pub timestamp: Option<TraktDate>,
    /// Kind of subject.
    pub r#type: Option<ActivityType>,
    /// What the user did.
    pub action: Option<ActivityAction>,
    /// Who did it.
    pub user: Option<UserProfile>,
    /// Movie subject.
    pub movie: Option<Movie>,
    /// Show subject.
    pub show: Option<TvShow>,
    /// Episode subject.
    pub episode: Option<TvShowEpisode>,
    /// Episodes, for multi-episode actions.
    pub episodes: Option<Vec<TvShowEpisode>>,
    /// Season subject.
    pub season: Option<TvShowSeason>,
    /// Simple rating, for rating actions.
    pub rating: Option<Rating>,
    /// 1-10 rating, for rating actions.
    pub rating_advanced: Option<i32>,
    /// Shout, for shout actions.
    pub shout: Option<Shout>,
    /// List subject.
    pub list: Option<TraktList>,
}

impl Decode for ActivityItem {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            timestamp: fields.get("timestamp")?,
            r#type: fields.get("type")?,
            action: fields.get("action")?,
            user: fields.get("user")?,
            movie: fields.get("movie")?,
            show: fields.get("show")?,
            episode: fields.get("episode")?,
            episodes: fields.get("episodes")?,
            season: fields.get("season")?,
            rating: fields.get("rating")?,
            rating_advanced: fields.get("rating_advanced")?,
            shout: fields.get("shout")?,
            list: fields.get("list")?,
        })
    }
}

/// Time window an activity feed covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityTimestamps {
    /// Window start.
    pub start: Option<TraktDate>,
    /// Window end.
    pub end: Option<TraktDate>,
    /// Server time of the response.
    pub current: Option<TraktDate>,
}

impl Decode for ActivityTimestamps {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            start: fields.get("start")?,
            end: fields.get("end")?,
            current: fields.get("current")?,
        })
    }
}

/// An activity feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Activity {
    /// Covered window.
    pub timestamps: Option<ActivityTimestamps>,
    /// Entries, newest first.
    pub activity: Option<Vec<ActivityItem>>,
}

impl Decode for Activity {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            timestamps: fields.get("timestamps")?,
            activity: fields.get("activity")?,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::decode::decode_response;

    const COMMUNITY: &str = include_str!("../../../../fixtures/trakt/activity_community.json");

    #[test]
    fn test_community_fixture() {
        // Arrange & Act
        let feed = decode_response::<Activity>(COMMUNITY.as_bytes())
            .unwrap()
            .into_result()
            .unwrap();

        // Assert
        let timestamps = feed.timestamps.unwrap();
        assert_eq!(timestamps.start.map(|d| d.epoch_seconds()), Some(1_303_372_800));
        let items = feed.activity.unwrap();
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].action, Some(ActivityAction::Watching));
        assert_eq!(items[0].r#type, Some(ActivityType::Episode));
        assert_eq!(items[0].user.as_ref().unwrap().username.as_deref(), Some("justin"));
        assert_eq!(items[0].episode.as_ref().unwrap().number, Some(5));

        assert_eq!(items[1].action, Some(ActivityAction::Rating));
        assert_eq!(items[1].rating, Some(Rating::Love));
        assert_eq!(items[1].rating_advanced, Some(9));

        assert_eq!(items[2].action, Some(ActivityAction::Shout));
        let shout = items[2].shout.as_ref().unwrap();
        assert_eq!(shout.spoiler, Some(false));
    }
}
