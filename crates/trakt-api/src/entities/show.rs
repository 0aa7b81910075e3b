//! Shows, seasons and episodes.

use serde_json::Value;

use super::media::{Images, MediaBase, Ratings};
use crate::decode::{Decode, DecodeContext, DecodeError, EpisodeList, Fields, TraktDate};
use crate::enumerations::{DayOfTheWeek, Rating};

/// A season's episodes: a count, episode numbers, or full episodes.
pub type SeasonEpisodes = EpisodeList<TvShowEpisode>;

/// A TV show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TvShow {
    /// Members shared with movies.
    pub media: MediaBase,
    /// Premiere date.
    pub first_aired: Option<TraktDate>,
    /// Country of origin.
    pub country: Option<String>,
    /// Synopsis.
    pub overview: Option<String>,
    /// Episode runtime in minutes.
    pub runtime: Option<i32>,
    /// Broadcasting network.
    pub network: Option<String>,
    /// Regular air day.
    pub air_day: Option<DayOfTheWeek>,
    /// Regular air time, as sent (`"9:00pm"`).
    pub air_time: Option<String>,
    /// Content rating (`"TV-14"`).
    pub certification: Option<String>,
    /// TheTVDB id.
    pub tvdb_id: Option<String>,
    /// TVRage id.
    pub tvrage_id: Option<String>,
    /// Episodes, when the endpoint includes them.
    pub episodes: Option<Vec<TvShowEpisode>>,
    /// Most watched episodes.
    pub top_episodes: Option<Vec<TvShowEpisode>>,
    /// Seasons, when the endpoint includes them.
    pub seasons: Option<Vec<TvShowSeason>>,
}

impl Decode for TvShow {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            media: MediaBase::from_fields(&fields)?,
            first_aired: fields.get("first_aired")?,
            country: fields.get("country")?,
            overview: fields.get("overview")?,
            runtime: fields.get("runtime")?,
            network: fields.get("network")?,
            air_day: fields.get("air_day")?,
            air_time: fields.get("air_time")?,
            certification: fields.get("certification")?,
            tvdb_id: fields.get("tvdb_id")?,
            tvrage_id: fields.get("tvrage_id")?,
            episodes: fields.get("episodes")?,
            top_episodes: fields.get("top_episodes")?,
            seasons: fields.get("seasons")?,
        })
    }
}

/// One season of a show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TvShowSeason {
    /// Season number; 0 holds specials.
    pub season: Option<i32>,
    /// Episodes in whichever form the endpoint sent.
    pub episodes: Option<SeasonEpisodes>,
    /// Trakt page URL.
    pub url: Option<String>,
    /// Artwork.
    pub images: Option<Images>,
}

impl Decode for TvShowSeason {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            season: fields.get("season")?,
            episodes: fields.get("episodes")?,
            url: fields.get("url")?,
            images: fields.get("images")?,
        })
    }
}

/// One episode of a show.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TvShowEpisode {
    /// Season number.
    pub season: Option<i32>,
    /// Episode number within the season.
    pub number: Option<i32>,
    /// TheTVDB id.
    pub tvdb_id: Option<String>,
    /// Title.
    pub title: Option<String>,
    /// Synopsis.
    pub overview: Option<String>,
    /// Original air date.
    pub first_aired: Option<TraktDate>,
    /// Trakt page URL.
    pub url: Option<String>,
    /// Artwork.
    pub images: Option<Images>,
    /// Community ratings.
    pub ratings: Option<Ratings>,
    /// Whether the authenticated user has watched it.
    pub watched: Option<bool>,
    /// Plays by the authenticated user.
    pub plays: Option<i32>,
    /// The authenticated user's simple rating.
    pub rating: Option<Rating>,
    /// Whether it is on the authenticated user's watchlist.
    pub in_watchlist: Option<bool>,
    /// Whether it is in the authenticated user's collection.
    pub in_collection: Option<bool>,
}

impl Decode for TvShowEpisode {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            season: fields.get("season")?,
            number: fields.get("number")?,
            tvdb_id: fields.get("tvdb_id")?,
            title: fields.get("title")?,
            overview: fields.get("overview")?,
            first_aired: fields.get("first_aired")?,
            url: fields.get("url")?,
            images: fields.get("images")?,
            ratings: fields.get("ratings")?,
            watched: fields.get("watched")?,
            plays: fields.get("plays")?,
            rating: fields.get("rating")?,
            in_watchlist: fields.get("in_watchlist")?,
            in_collection: fields.get("in_collection")?,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;

    use super::*;
    use crate::decode::{DecodeErrorKind, DecoderConfig, decode_response};

    const SUMMARY: &str = include_str!("../../../../fixtures/trakt/show_summary.json");
    const SEASONS: &str = include_str!("../../../../fixtures/trakt/show_seasons.json");

    fn decode_value<T: Decode>(value: &Value) -> Result<T, DecodeError> {
        T::decode(value, &DecoderConfig::shared().context())
    }

    #[test]
    fn test_summary_fixture() {
        // Arrange & Act
        let show = decode_response::<TvShow>(SUMMARY.as_bytes())
            .unwrap()
            .into_result()
            .unwrap();

        // Assert
        assert_eq!(show.media.title.as_deref(), Some("The Walking Dead"));
        assert_eq!(show.media.year, Some(2010));
        assert_eq!(show.air_day, Some(DayOfTheWeek::Sunday));
        assert_eq!(show.tvdb_id.as_deref(), Some("153021"));
        assert_eq!(
            show.first_aired.map(|d| d.epoch_seconds()),
            Some(1_288_512_000)
        );
        let seasons = show.seasons.unwrap();
        assert_eq!(seasons.len(), 2);
        assert_eq!(seasons[0].episodes, Some(SeasonEpisodes::Count(13)));
        assert_eq!(seasons[1].episodes, Some(SeasonEpisodes::Numbers(vec![1, 2, 3])));
        let top = show.top_episodes.unwrap();
        assert_eq!(top[0].title.as_deref(), Some("Days Gone Bye"));
    }

    #[test]
    fn test_seasons_fixture_keeps_each_shape() {
        // Arrange & Act
        let seasons = decode_response::<Vec<TvShowSeason>>(SEASONS.as_bytes())
            .unwrap()
            .into_result()
            .unwrap();

        // Assert
        assert_eq!(seasons.len(), 3);
        let full = seasons[0].episodes.as_ref().unwrap().episodes().unwrap();
        assert_eq!(full.len(), 2);
        assert_eq!(full[0].number, Some(1));
        assert_eq!(full[1].title.as_deref(), Some("Guts"));
        assert_eq!(seasons[1].episodes, Some(SeasonEpisodes::Numbers(Vec::new())));
        assert_eq!(seasons[2].episodes, Some(SeasonEpisodes::Count(6)));
    }

    #[test]
    fn test_mixed_episodes_report_nested_path() {
        // Arrange
        let value = json!({
            "title": "Show",
            "seasons": [
                { "season": 1, "episodes": 6 },
                { "season": 2, "episodes": [1, 2, { "number": 3 }] }
            ]
        });

        // Act
        let err = decode_value::<TvShow>(&value).unwrap_err();

        // Assert
        assert!(matches!(err.kind(), DecodeErrorKind::ShapeMismatch { .. }));
        assert_eq!(err.path(), "$.seasons[1].episodes[2]");
    }

    #[test]
    fn test_absent_and_null_members_are_unset() {
        // Arrange
        let value = json!({ "season": 1, "number": null, "unknown_member": [1, 2] });

        // Act
        let episode = decode_value::<TvShowEpisode>(&value).unwrap();

        // Assert
        assert_eq!(
            episode,
            TvShowEpisode {
                season: Some(1),
                ..TvShowEpisode::default()
            }
        );
    }

    #[test]
    fn test_episode_date_string_is_gmt_minus_eight() {
        // Arrange
        let value = json!({ "first_aired": "2011-04-21" });

        // Act
        let episode = decode_value::<TvShowEpisode>(&value).unwrap();

        // Assert
        assert_eq!(
            episode.first_aired.map(|d| d.epoch_seconds()),
            Some(1_303_372_800)
        );
    }

    #[test]
    fn test_show_must_be_object() {
        // Arrange
        let value = json!(["The Walking Dead"]);

        // Act
        let err = decode_value::<TvShow>(&value).unwrap_err();

        // Assert
        assert!(matches!(err.kind(), DecodeErrorKind::ShapeMismatch { .. }));
        assert_eq!(err.path(), "$");
    }

    #[test]
    fn test_integral_float_numbers_and_counts() {
        // Arrange
        let episode = json!({ "season": 1, "number": 2.0 });
        let show = json!({ "seasons": [{ "season": 4, "episodes": 5.0 }] });

        // Act
        let episode = decode_value::<TvShowEpisode>(&episode).unwrap();
        let show = decode_value::<TvShow>(&show).unwrap();

        // Assert
        assert_eq!(episode.number, Some(2));
        let seasons = show.seasons.unwrap();
        assert_eq!(seasons[0].episodes, Some(EpisodeList::Count(5)));
    }
}
