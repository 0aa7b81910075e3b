//! Closed enumerations used by Trakt entities and request bodies.

use crate::decode::wire_enum;

wire_enum! {
    /// Action recorded in an activity feed item.
    pub enum ActivityAction {
        /// Every action (request filter only).
        All => "all",
        /// Currently watching.
        Watching => "watching",
        /// Scrobbled by a media center.
        Scrobble => "scrobble",
        /// Checked in.
        Checkin => "checkin",
        /// Marked as seen.
        Seen => "seen",
        /// Added to the collection.
        Collection => "collection",
        /// Rated.
        Rating => "rating",
        /// Added to the watchlist.
        Watchlist => "watchlist",
        /// Shouted about.
        Shout => "shout",
        /// Created a list.
        Created => "created",
        /// Added an item to a list.
        ItemAdded => "item_added",
    }
}

wire_enum! {
    /// Kind of subject in an activity feed item.
    pub enum ActivityType {
        /// Every kind (request filter only).
        All => "all",
        /// An episode.
        Episode => "episode",
        /// A show.
        Show => "show",
        /// A movie.
        Movie => "movie",
        /// A list.
        List => "list",
    }
}

wire_enum! {
    /// Day a show airs on.
    pub enum DayOfTheWeek {
        /// Sunday.
        Sunday => "Sunday",
        /// Monday.
        Monday => "Monday",
        /// Tuesday.
        Tuesday => "Tuesday",
        /// Wednesday.
        Wednesday => "Wednesday",
        /// Thursday.
        Thursday => "Thursday",
        /// Friday.
        Friday => "Friday",
        /// Saturday.
        Saturday => "Saturday",
    }
}

wire_enum! {
    /// User gender.
    pub enum Gender {
        /// Male.
        Male => "male",
        /// Female.
        Female => "female",
    }
}

wire_enum! {
    /// Kind of entry in a user list.
    pub enum ListItemType {
        /// A movie.
        Movie => "movie",
        /// A whole show.
        TvShow => "show",
        /// One season of a show.
        TvShowSeason => "season",
        /// One episode of a show.
        TvShowEpisode => "episode",
    }
}

wire_enum! {
    /// Visibility of a user list.
    pub enum ListPrivacy {
        /// Visible to everyone.
        Public => "public",
        /// Visible to friends.
        Friends => "friends",
        /// Visible to the owner only.
        Private => "private",
    }
}

wire_enum! {
    /// Kind of media being watched.
    pub enum MediaType {
        /// A movie.
        Movie => "movie",
        /// A show episode.
        TvShow => "episode",
    }
}

wire_enum! {
    /// Simple (love/hate) rating.
    pub enum Rating {
        /// Loved it.
        Love => "love",
        /// Hated it.
        Hate => "hate",
        /// Removes an existing rating.
        Unrate => "unrate",
    }
}

wire_enum! {
    /// Kind of subject a rating applies to.
    pub enum RatingType {
        /// A movie.
        Movie => "movie",
        /// A show.
        Show => "show",
        /// An episode.
        Episode => "episode",
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::{Value, json};

    use super::*;
    use crate::decode::{Decode, DecodeError, DecodeErrorKind, DecoderConfig};

    fn decode<T: Decode>(value: &Value) -> Result<T, DecodeError> {
        T::decode(value, &DecoderConfig::shared().context())
    }

    /// Every wire value decodes and re-encodes to itself.
    fn assert_round_trips<T>(all: &[T])
    where
        T: Decode + serde::Serialize + std::fmt::Debug + PartialEq + Copy,
    {
        for member in all {
            let wire = serde_json::to_value(member).unwrap();
            let decoded: T = decode(&wire).unwrap();
            assert_eq!(&decoded, member);
            assert_eq!(serde_json::to_value(decoded).unwrap(), wire);
        }
    }

    #[test]
    fn test_every_enumeration_round_trips() {
        assert_round_trips(ActivityAction::ALL);
        assert_round_trips(ActivityType::ALL);
        assert_round_trips(DayOfTheWeek::ALL);
        assert_round_trips(Gender::ALL);
        assert_round_trips(ListItemType::ALL);
        assert_round_trips(ListPrivacy::ALL);
        assert_round_trips(MediaType::ALL);
        assert_round_trips(Rating::ALL);
        assert_round_trips(RatingType::ALL);
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        // Arrange
        let value = json!("meh");

        // Act
        let err = decode::<Rating>(&value).unwrap_err();

        // Assert
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::UnknownEnumValue {
                enumeration: "Rating",
                value: String::from("meh"),
            }
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        // Arrange
        let lower = json!("thursday");
        let exact = json!("Thursday");

        // Act & Assert
        assert!(decode::<DayOfTheWeek>(&lower).is_err());
        assert_eq!(decode::<DayOfTheWeek>(&exact).unwrap(), DayOfTheWeek::Thursday);
    }

    #[test]
    fn test_non_string_is_malformed() {
        // Arrange
        let value = json!(1);

        // Act
        let err = decode::<Gender>(&value).unwrap_err();

        // Assert
        assert!(matches!(err.kind(), DecodeErrorKind::MalformedScalar { .. }));
    }

    #[test]
    fn test_display_and_from_str() {
        // Arrange & Act
        let parsed: ListItemType = "season".parse().unwrap();

        // Assert
        assert_eq!(parsed, ListItemType::TvShowSeason);
        assert_eq!(parsed.to_string(), "season");
    }
}
