//! Request parameters: POST bodies and optional URI segments.

use chrono::NaiveDate;
use serde::Serialize;

use crate::decode::TraktDate;
use crate::enumerations::{ActivityAction, ActivityType, ListItemType, Rating};

/// Body of `/show/checkin`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowCheckin {
    /// TheTVDB id of the show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb_id: Option<String>,
    /// Show title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Show premiere year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Season number.
    pub season: u32,
    /// Episode number.
    pub episode: u32,
    /// Episode length in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Message shared with the check-in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ShowCheckin {
    /// Checks in to episode `episode` of season `season`.
    #[must_use]
    pub fn new(season: u32, episode: u32) -> Self {
        Self {
            season,
            episode,
            ..Self::default()
        }
    }

    /// Identifies the show by TheTVDB id.
    #[must_use]
    pub fn tvdb_id(mut self, tvdb_id: impl Into<String>) -> Self {
        self.tvdb_id = Some(tvdb_id.into());
        self
    }

    /// Identifies the show by title and year.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>, year: u32) -> Self {
        self.title = Some(title.into());
        self.year = Some(year);
        self
    }

    /// Sets the episode length in minutes.
    #[must_use]
    pub const fn duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    /// Sets the shared message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Body of `/rate/show`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowRating {
    /// TheTVDB id of the show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb_id: Option<String>,
    /// IMDb id of the show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    /// Show title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Show premiere year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Rating to apply.
    pub rating: Rating,
}

impl ShowRating {
    /// Rates a show; identify it with one of the setters.
    #[must_use]
    pub const fn new(rating: Rating) -> Self {
        Self {
            tvdb_id: None,
            imdb_id: None,
            title: None,
            year: None,
            rating,
        }
    }

    /// Identifies the show by TheTVDB id.
    #[must_use]
    pub fn tvdb_id(mut self, tvdb_id: impl Into<String>) -> Self {
        self.tvdb_id = Some(tvdb_id.into());
        self
    }

    /// Identifies the show by IMDb id.
    #[must_use]
    pub fn imdb_id(mut self, imdb_id: impl Into<String>) -> Self {
        self.imdb_id = Some(imdb_id.into());
        self
    }

    /// Identifies the show by title and year.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>, year: u32) -> Self {
        self.title = Some(title.into());
        self.year = Some(year);
        self
    }
}

/// One entry to add to a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItemRef {
    /// Kind of entry.
    #[serde(rename = "type")]
    pub kind: ListItemType,
    /// IMDb id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    /// TMDb id (movies).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<String>,
    /// TheTVDB id (shows).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvdb_id: Option<String>,
    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Year.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    /// Season number (seasons and episodes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    /// Episode number (episodes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode: Option<u32>,
}

impl ListItemRef {
    const fn of(kind: ListItemType) -> Self {
        Self {
            kind,
            imdb_id: None,
            tmdb_id: None,
            tvdb_id: None,
            title: None,
            year: None,
            season: None,
            episode: None,
        }
    }

    /// A movie, by IMDb id.
    #[must_use]
    pub fn movie(imdb_id: impl Into<String>) -> Self {
        Self {
            imdb_id: Some(imdb_id.into()),
            ..Self::of(ListItemType::Movie)
        }
    }

    /// A whole show, by TheTVDB id.
    #[must_use]
    pub fn show(tvdb_id: impl Into<String>) -> Self {
        Self {
            tvdb_id: Some(tvdb_id.into()),
            ..Self::of(ListItemType::TvShow)
        }
    }

    /// One season of a show, by TheTVDB id.
    #[must_use]
    pub fn season(tvdb_id: impl Into<String>, season: u32) -> Self {
        Self {
            tvdb_id: Some(tvdb_id.into()),
            season: Some(season),
            ..Self::of(ListItemType::TvShowSeason)
        }
    }

    /// One episode of a show, by TheTVDB id.
    #[must_use]
    pub fn episode(tvdb_id: impl Into<String>, season: u32, episode: u32) -> Self {
        Self {
            tvdb_id: Some(tvdb_id.into()),
            season: Some(season),
            episode: Some(episode),
            ..Self::of(ListItemType::TvShowEpisode)
        }
    }

    /// Adds title and year for matching.
    #[must_use]
    pub fn titled(mut self, title: impl Into<String>, year: u32) -> Self {
        self.title = Some(title.into());
        self.year = Some(year);
        self
    }
}

/// Body of `/lists/items/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItemsAdd {
    /// Slug of the target list.
    pub slug: String,
    /// Entries to add.
    pub items: Vec<ListItemRef>,
}

impl ListItemsAdd {
    /// Adds `items` to the list `slug`.
    #[must_use]
    pub fn new(slug: impl Into<String>, items: Vec<ListItemRef>) -> Self {
        Self {
            slug: slug.into(),
            items,
        }
    }
}

/// Optional segments of `/calendar/shows`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarQuery {
    /// First day (server default: today).
    pub date: Option<NaiveDate>,
    /// Number of days (server default: 7). Only sent with `date`.
    pub days: Option<u32>,
}

impl CalendarQuery {
    /// URI placeholder values.
    #[must_use]
    pub fn placeholders(&self) -> Vec<(&'static str, String)> {
        let Some(date) = self.date else {
            return Vec::new();
        };
        let mut params = vec![("date", date.format("%Y%m%d").to_string())];
        if let Some(days) = self.days {
            params.push(("days", days.to_string()));
        }
        params
    }
}

/// Filters of `/activity/community`.
///
/// Segments are positional, so earlier segments fall back to `all` when a
/// later one is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    /// Subject kinds.
    pub types: Vec<ActivityType>,
    /// Actions.
    pub actions: Vec<ActivityAction>,
    /// Window start.
    pub start: Option<TraktDate>,
    /// Window end. Only sent with `start`.
    pub end: Option<TraktDate>,
}

impl ActivityQuery {
    /// Restricts subject kinds.
    #[must_use]
    pub fn types(mut self, types: impl IntoIterator<Item = ActivityType>) -> Self {
        self.types = types.into_iter().collect();
        self
    }

    /// Restricts actions.
    #[must_use]
    pub fn actions(mut self, actions: impl IntoIterator<Item = ActivityAction>) -> Self {
        self.actions = actions.into_iter().collect();
        self
    }

    /// Restricts the time window.
    #[must_use]
    pub const fn window(mut self, start: TraktDate, end: Option<TraktDate>) -> Self {
        self.start = Some(start);
        self.end = end;
        self
    }

    /// URI placeholder values.
    #[must_use]
    pub fn placeholders(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        let needs_actions = self.start.is_some();
        let needs_types = needs_actions || !self.actions.is_empty();

        if needs_types || !self.types.is_empty() {
            params.push(("types", join_or_all(&self.types)));
        }
        if needs_actions || !self.actions.is_empty() {
            params.push(("actions", join_or_all(&self.actions)));
        }
        if let Some(start) = self.start {
            params.push(("start_ts", start.epoch_seconds().to_string()));
            if let Some(end) = self.end {
                params.push(("end_ts", end.epoch_seconds().to_string()));
            }
        }
        params
    }
}

/// Comma-joined wire values, or `all` when empty.
fn join_or_all<T: std::fmt::Display>(values: &[T]) -> String {
    if values.is_empty() {
        return String::from("all");
    }
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
