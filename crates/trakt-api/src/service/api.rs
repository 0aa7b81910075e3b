//! `TraktApi` trait definition.
#![allow(clippy::future_not_send)]

use super::error::TraktError;
use super::params::{ActivityQuery, CalendarQuery, ListItemsAdd, ShowCheckin, ShowRating};
use crate::entities::{
    Activity, CalendarDate, CheckinResponse, Genre, ListItemsResponse, RatingResponse, TvShow,
    TvShowEpisode, TvShowSeason, UserProfile,
};

/// Trakt API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TraktApi: Send)]
pub trait LocalTraktApi {
    /// Lists movie genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API reports a failure, or
    /// the response cannot be decoded.
    async fn genres_movies(&self) -> Result<Vec<Genre>, TraktError>;

    /// Lists show genres.
    ///
    /// # Errors
    ///
    /// Same as [`LocalTraktApi::genres_movies`].
    async fn genres_shows(&self) -> Result<Vec<Genre>, TraktError>;

    /// Fetches a show by slug, TheTVDB id or IMDb id. `extended` includes
    /// every season with full episodes.
    ///
    /// # Errors
    ///
    /// Same as [`LocalTraktApi::genres_movies`].
    async fn show_summary(&self, title: &str, extended: bool) -> Result<TvShow, TraktError>;

    /// Lists a show's seasons.
    ///
    /// # Errors
    ///
    /// Same as [`LocalTraktApi::genres_movies`].
    async fn show_seasons(&self, title: &str) -> Result<Vec<TvShowSeason>, TraktError>;

    /// Lists the episodes of one season.
    ///
    /// # Errors
    ///
    /// Same as [`LocalTraktApi::genres_movies`].
    async fn show_season(&self, title: &str, season: u32)
    -> Result<Vec<TvShowEpisode>, TraktError>;

    /// Checks in to an episode. Requires authentication.
    ///
    /// # Errors
    ///
    /// Same as [`LocalTraktApi::genres_movies`].
    async fn show_checkin(&self, checkin: &ShowCheckin) -> Result<CheckinResponse, TraktError>;

    /// Lists upcoming episodes, grouped by day.
    ///
    /// # Errors
    ///
    /// Same as [`LocalTraktApi::genres_movies`].
    async fn calendar_shows(&self, query: &CalendarQuery)
    -> Result<Vec<CalendarDate>, TraktError>;

    /// Fetches a user's profile.
    ///
    /// # Errors
    ///
    /// Same as [`LocalTraktApi::genres_movies`].
    async fn user_profile(&self, username: &str) -> Result<UserProfile, TraktError>;

    /// Fetches the community activity feed.
    ///
    /// # Errors
    ///
    /// Same as [`LocalTraktApi::genres_movies`].
    async fn activity_community(&self, query: &ActivityQuery) -> Result<Activity, TraktError>;

    /// Adds entries to one of the user's lists. Requires authentication.
    ///
    /// # Errors
    ///
    /// Same as [`LocalTraktApi::genres_movies`].
    async fn list_items_add(&self, add: &ListItemsAdd) -> Result<ListItemsResponse, TraktError>;

    /// Rates a show. Requires authentication.
    ///
    /// # Errors
    ///
    /// Same as [`LocalTraktApi::genres_movies`].
    async fn rate_show(&self, rating: &ShowRating) -> Result<RatingResponse, TraktError>;
}
