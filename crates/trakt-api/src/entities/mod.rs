//! Domain entities returned by the Trakt API.
//!
//! Every member is optional: absent and `null` members stay `None`, unknown
//! members are ignored.

mod activity;
mod calendar;
mod genre;
mod list;
mod media;
mod movie;
mod response;
mod show;
mod user;

pub use activity::{Activity, ActivityItem, ActivityTimestamps, Shout};
pub use calendar::{CalendarDate, CalendarTvShowEpisode};
pub use genre::Genre;
pub use list::{ListItem, TraktList};
pub use media::{Images, MediaBase, Ratings, Stats};
pub use movie::Movie;
pub use response::{CheckinResponse, ListItemsResponse, RatingResponse, Response};
pub use show::{SeasonEpisodes, TvShow, TvShowEpisode, TvShowSeason};
pub use user::{UserProfile, WatchedMediaEntity};
