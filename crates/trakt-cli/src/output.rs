//! Log-based summaries of decoded entities.

use trakt_api::decode::{DecoderConfig, EpisodeList, TraktDate};
use trakt_api::entities::{
    Activity, CalendarDate, CheckinResponse, Genre, ListItemsResponse, RatingResponse, Response,
    TvShow, TvShowEpisode, TvShowSeason, UserProfile,
};
use trakt_api::enumerations::{ActivityAction, ActivityType, DayOfTheWeek, Rating};

const MISSING: &str = "-";

/// Formats `date` as a calendar day in the API's reference zone.
fn day(date: Option<&TraktDate>) -> String {
    date.map_or_else(
        || String::from(MISSING),
        |d| {
            d.in_zone(DecoderConfig::shared().time_zone())
                .format("%Y-%m-%d")
                .to_string()
        },
    )
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING)
}

fn number(value: Option<i32>) -> String {
    value.map_or_else(|| String::from(MISSING), |n| n.to_string())
}

/// One-word description of a season's episode list.
fn season_episodes<E>(episodes: Option<&EpisodeList<E>>) -> String {
    match episodes {
        None => String::from(MISSING),
        Some(EpisodeList::Count(count)) => format!("{count} episodes"),
        Some(EpisodeList::Numbers(numbers)) => format!("{} numbered", numbers.len()),
        Some(EpisodeList::Episodes(episodes)) => format!("{} full", episodes.len()),
    }
}

/// Logs a genre table.
pub fn genres(genres: &[Genre]) {
    tracing::info!("Slug\t\tName");
    for genre in genres {
        tracing::info!(
            "{}\t\t{}",
            text(genre.slug.as_deref()),
            text(genre.name.as_deref())
        );
    }
}

/// Logs a show summary.
pub fn show(show: &TvShow) {
    tracing::info!(
        "{} ({})",
        text(show.media.title.as_deref()),
        number(show.media.year)
    );
    tracing::info!("First aired: {}", day(show.first_aired.as_ref()));
    tracing::info!(
        "Network: {}  Air day: {}  Air time: {}",
        text(show.network.as_deref()),
        show.air_day.map_or(MISSING, DayOfTheWeek::as_str),
        text(show.air_time.as_deref()),
    );
    if let Some(seasons) = &show.seasons {
        self::seasons(seasons);
    }
    if let Some(top) = &show.top_episodes {
        tracing::info!("Top episodes:");
        episodes(top);
    }
}

/// Logs a season table.
pub fn seasons(seasons: &[TvShowSeason]) {
    tracing::info!("Season\tEpisodes");
    for season in seasons {
        tracing::info!(
            "{}\t{}",
            number(season.season),
            season_episodes(season.episodes.as_ref())
        );
    }
}

/// Logs an episode table.
pub fn episodes(episodes: &[TvShowEpisode]) {
    tracing::info!("S\tE\tFirstAired\tTitle");
    for episode in episodes {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            number(episode.season),
            number(episode.number),
            day(episode.first_aired.as_ref()),
            text(episode.title.as_deref()),
        );
    }
}

/// Logs a calendar grouped by day.
pub fn calendar(dates: &[CalendarDate]) {
    for date in dates {
        tracing::info!("{}", day(date.date.as_ref()));
        for entry in date.episodes.iter().flatten() {
            tracing::info!(
                "  {} {}x{} {}",
                text(entry.show.as_ref().and_then(|s| s.media.title.as_deref())),
                number(entry.episode.as_ref().and_then(|e| e.season)),
                number(entry.episode.as_ref().and_then(|e| e.number)),
                text(entry.episode.as_ref().and_then(|e| e.title.as_deref())),
            );
        }
    }
}

/// Logs a user profile.
pub fn user_profile(profile: &UserProfile) {
    tracing::info!(
        "{} ({})",
        text(profile.username.as_deref()),
        text(profile.full_name.as_deref())
    );
    tracing::info!(
        "Location: {}  Joined: {}",
        text(profile.location.as_deref()),
        day(profile.joined.as_ref())
    );
    if let Some(watching) = &profile.watching {
        let title = watching
            .show
            .as_ref()
            .map(|s| &s.media)
            .or_else(|| watching.movie.as_ref().map(|m| &m.media))
            .and_then(|m| m.title.as_deref());
        tracing::info!("Watching: {}", text(title));
    }
}

/// Logs an activity feed.
pub fn activity(activity: &Activity) {
    tracing::info!("When\t\tUser\tAction\tType");
    for item in activity.activity.iter().flatten() {
        tracing::info!(
            "{}\t{}\t{}\t{}",
            day(item.timestamp.as_ref()),
            text(item.user.as_ref().and_then(|u| u.username.as_deref())),
            item.action.map_or(MISSING, ActivityAction::as_str),
            item.r#type.map_or(MISSING, ActivityType::as_str),
        );
    }
}

/// Logs the outcome of a list insertion.
pub fn list_items(response: &ListItemsResponse) {
    tracing::info!(
        "Inserted: {}  Already present: {}  Skipped: {}",
        number(response.inserted),
        number(response.already_exist),
        number(response.skipped),
    );
}

/// Logs the outcome of a rating.
pub fn rating(response: &RatingResponse) {
    status(&response.response);
    tracing::info!(
        "Rating: {}  Loved: {}  Hated: {}",
        response.rating.map_or(MISSING, Rating::as_str),
        number(response.ratings.as_ref().and_then(|r| r.loved)),
        number(response.ratings.as_ref().and_then(|r| r.hated)),
    );
}

/// Logs the outcome of a checkin.
pub fn checkin(response: &CheckinResponse) {
    status(&response.response);
    tracing::info!(
        "Checked in at {}",
        response
            .timestamp
            .map_or_else(|| String::from(MISSING), |t| t.to_string())
    );
}

/// Logs an envelope's status line.
pub fn status(response: &Response) {
    tracing::info!(
        "{}: {}",
        text(response.status.as_deref()),
        text(response.text())
    );
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};

    use super::*;

    #[test]
    fn test_genres_logs_header_and_rows() {
        // Arrange
        let list = vec![Genre {
            name: Some(String::from("Drama")),
            slug: Some(String::from("drama")),
        }];
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("Slug\t\tName")))
            .event(expect::event().with_fields(expect::msg("drama\t\tDrama")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || genres(&list));

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_seasons_describe_each_episode_form() {
        // Arrange
        let list = vec![
            TvShowSeason {
                season: Some(2),
                episodes: Some(EpisodeList::Count(13)),
                ..TvShowSeason::default()
            },
            TvShowSeason {
                season: Some(1),
                episodes: Some(EpisodeList::Numbers(vec![1, 2, 3])),
                ..TvShowSeason::default()
            },
            TvShowSeason::default(),
        ];
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("Season\tEpisodes")))
            .event(expect::event().with_fields(expect::msg("2\t13 episodes")))
            .event(expect::event().with_fields(expect::msg("1\t3 numbered")))
            .event(expect::event().with_fields(expect::msg("-\t-")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || seasons(&list));

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_episode_dates_use_reference_zone() {
        // Arrange
        let list = vec![TvShowEpisode {
            season: Some(1),
            number: Some(1),
            title: Some(String::from("Days Gone Bye")),
            first_aired: TraktDate::from_epoch_seconds(1_288_512_000),
            ..TvShowEpisode::default()
        }];
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("S\tE\tFirstAired\tTitle")))
            .event(expect::event().with_fields(expect::msg("1\t1\t2010-10-31\tDays Gone Bye")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || episodes(&list));

        // Assert
        handle.assert_finished();
    }

    #[test]
    fn test_status_prefers_error_text() {
        // Arrange
        let response = Response {
            status: Some(String::from("failure")),
            error: Some(String::from("failed authentication")),
            ..Response::default()
        };
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg("failure: failed authentication")))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || status(&response));

        // Assert
        handle.assert_finished();
    }
}
