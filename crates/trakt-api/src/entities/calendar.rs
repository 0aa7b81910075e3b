use serde_json::Value;

use super::show::{TvShow, TvShowEpisode};
use crate::decode::{Decode, DecodeContext, DecodeError, Fields, TraktDate};

/// One airing on a calendar day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarTvShowEpisode {
    /// The show.
    pub show: Option<TvShow>,
    /// The episode that airs.
    pub episode: Option<TvShowEpisode>,
}

impl Decode for CalendarTvShowEpisode {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            show: fields.get("show")?,
            episode: fields.get("episode")?,
        })
    }
}

/// Airings grouped under one calendar day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarDate {
    /// The day, sent as `yyyy-MM-dd`.
    pub date: Option<TraktDate>,
    /// Airings on that day.
    pub episodes: Option<Vec<CalendarTvShowEpisode>>,
}

impl Decode for CalendarDate {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            date: fields.get("date")?,
            episodes: fields.get("episodes")?,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::decode::{DecodeErrorKind, decode_response};

    const CALENDAR: &str = include_str!("../../../../fixtures/trakt/calendar_shows.json");

    #[test]
    fn test_calendar_fixture() {
        // Arrange & Act
        let days = decode_response::<Vec<CalendarDate>>(CALENDAR.as_bytes())
            .unwrap()
            .into_result()
            .unwrap();

        // Assert
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date.map(|d| d.epoch_seconds()), Some(1_303_372_800));
        let airings = days[0].episodes.as_ref().unwrap();
        assert_eq!(airings.len(), 1);
        assert_eq!(
            airings[0].show.as_ref().unwrap().media.title.as_deref(),
            Some("Community")
        );
        assert_eq!(airings[0].episode.as_ref().unwrap().number, Some(21));
    }

    #[test]
    fn test_bad_date_is_malformed() {
        // Arrange
        let body = br#"[{"date":"April 21st","episodes":[]}]"#;

        // Act
        let err = decode_response::<Vec<CalendarDate>>(body).unwrap_err();

        // Assert
        assert!(matches!(err.kind(), DecodeErrorKind::MalformedScalar { .. }));
        assert_eq!(err.path(), "$[0].date");
    }
}
