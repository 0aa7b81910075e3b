//! Endpoint descriptors: method, URI template and response shape.

use std::fmt;
use std::marker::PhantomData;

use url::Url;

use crate::entities::{
    Activity, CalendarDate, CheckinResponse, Genre, ListItemsResponse, RatingResponse, TvShow,
    TvShowEpisode, TvShowSeason, UserProfile,
};

/// Placeholder replaced by the client's API key.
pub(crate) const API_KEY_PLACEHOLDER: &str = "apikey";

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`.
    Get,
    /// `POST` with a JSON object body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
        })
    }
}

/// One API endpoint whose response decodes as `T`.
///
/// Templates are `/`-separated; a segment written as `{name}` is a
/// placeholder. `{apikey}` is always filled by the client. Other
/// placeholders without a value are dropped together with their slash.
pub struct Endpoint<T> {
    method: HttpMethod,
    template: &'static str,
    shape: PhantomData<fn() -> T>,
}

impl<T> Endpoint<T> {
    /// A `GET` endpoint.
    #[must_use]
    pub const fn get(template: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            template,
            shape: PhantomData,
        }
    }

    /// A `POST` endpoint.
    #[must_use]
    pub const fn post(template: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            template,
            shape: PhantomData,
        }
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> HttpMethod {
        self.method
    }

    /// URI template.
    #[must_use]
    pub const fn template(&self) -> &'static str {
        self.template
    }

    /// Path segments after placeholder substitution, before encoding.
    fn segments<'a>(&self, api_key: &'a str, params: &'a [(&str, String)]) -> Vec<&'a str> {
        self.template
            .split('/')
            .filter(|segment| !segment.is_empty())
            .filter_map(|segment| {
                let Some(name) = segment
                    .strip_prefix('{')
                    .and_then(|rest| rest.strip_suffix('}'))
                else {
                    return Some(segment);
                };
                if name == API_KEY_PLACEHOLDER {
                    return Some(api_key);
                }
                params
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| value.as_str())
                    .filter(|value| !value.is_empty())
            })
            .collect()
    }

    /// Renders the request URL below `base`.
    ///
    /// Returns `None` if `base` cannot carry a path.
    #[must_use]
    pub fn url(&self, base: &Url, api_key: &str, params: &[(&str, String)]) -> Option<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(self.segments(api_key, params));
        Some(url)
    }
}

impl<T> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Endpoint<T> {}

impl<T> fmt::Debug for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("method", &self.method)
            .field("template", &self.template)
            .finish()
    }
}

/// `/genres/movies`
pub const GENRES_MOVIES: Endpoint<Vec<Genre>> = Endpoint::get("/genres/movies.json/{apikey}");
/// `/genres/shows`
pub const GENRES_SHOWS: Endpoint<Vec<Genre>> = Endpoint::get("/genres/shows.json/{apikey}");
/// `/show/summary`
pub const SHOW_SUMMARY: Endpoint<TvShow> =
    Endpoint::get("/show/summary.json/{apikey}/{title}/{extended}");
/// `/show/seasons`
pub const SHOW_SEASONS: Endpoint<Vec<TvShowSeason>> =
    Endpoint::get("/show/seasons.json/{apikey}/{title}");
/// `/show/season`
pub const SHOW_SEASON: Endpoint<Vec<TvShowEpisode>> =
    Endpoint::get("/show/season.json/{apikey}/{title}/{season}");
/// `/show/checkin`
pub const SHOW_CHECKIN: Endpoint<CheckinResponse> = Endpoint::post("/show/checkin/{apikey}");
/// `/calendar/shows`
pub const CALENDAR_SHOWS: Endpoint<Vec<CalendarDate>> =
    Endpoint::get("/calendar/shows.json/{apikey}/{date}/{days}");
/// `/user/profile`
pub const USER_PROFILE: Endpoint<UserProfile> =
    Endpoint::get("/user/profile.json/{apikey}/{username}");
/// `/activity/community`
pub const ACTIVITY_COMMUNITY: Endpoint<Activity> =
    Endpoint::get("/activity/community.json/{apikey}/{types}/{actions}/{start_ts}/{end_ts}");
/// `/lists/items/add`
pub const LISTS_ITEMS_ADD: Endpoint<ListItemsResponse> =
    Endpoint::post("/lists/items/add/{apikey}");
/// `/rate/show`
pub const RATE_SHOW: Endpoint<RatingResponse> = Endpoint::post("/rate/show/{apikey}");

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn base() -> Url {
        Url::parse("https://api.trakt.tv/").unwrap()
    }

    #[test]
    fn test_api_key_is_substituted() {
        // Arrange & Act
        let url = GENRES_SHOWS.url(&base(), "k3y", &[]).unwrap();

        // Assert
        assert_eq!(url.as_str(), "https://api.trakt.tv/genres/shows.json/k3y");
    }

    #[test]
    fn test_placeholders_are_filled_in_order() {
        // Arrange
        let params = [
            ("season", String::from("2")),
            ("title", String::from("the-walking-dead")),
        ];

        // Act
        let url = SHOW_SEASON.url(&base(), "k3y", &params).unwrap();

        // Assert
        assert_eq!(
            url.path(),
            "/show/season.json/k3y/the-walking-dead/2"
        );
    }

    #[test]
    fn test_missing_placeholder_is_dropped() {
        // Arrange
        let params = [("title", String::from("the-walking-dead"))];

        // Act
        let url = SHOW_SUMMARY.url(&base(), "k3y", &params).unwrap();

        // Assert
        assert_eq!(url.path(), "/show/summary.json/k3y/the-walking-dead");
    }

    #[test]
    fn test_values_are_percent_encoded() {
        // Arrange
        let params = [("username", String::from("a b/c"))];

        // Act
        let url = USER_PROFILE.url(&base(), "k3y", &params).unwrap();

        // Assert
        assert_eq!(url.path(), "/user/profile.json/k3y/a%20b%2Fc");
    }

    #[test]
    fn test_base_path_is_kept() {
        // Arrange
        let base = Url::parse("http://127.0.0.1:8080/mock/").unwrap();

        // Act
        let url = RATE_SHOW.url(&base, "k3y", &[]).unwrap();

        // Assert
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/mock/rate/show/k3y");
        assert_eq!(RATE_SHOW.method(), HttpMethod::Post);
    }

    #[test]
    fn test_non_base_url_is_rejected() {
        // Arrange
        let base = Url::parse("mailto:someone@example.com").unwrap();

        // Act & Assert
        assert!(GENRES_MOVIES.url(&base, "k3y", &[]).is_none());
    }
}
