//! User-curated lists.

use serde_json::Value;

use super::movie::Movie;
use super::show::{TvShow, TvShowEpisode, TvShowSeason};
use crate::decode::{Decode, DecodeContext, DecodeError, Fields};
use crate::enumerations::{ListItemType, ListPrivacy};

/// One entry of a list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    /// Kind of entry.
    pub r#type: Option<ListItemType>,
    /// Movie entry.
    pub movie: Option<Movie>,
    /// Show the entry belongs to.
    pub show: Option<TvShow>,
    /// Season entry.
    pub season: Option<TvShowSeason>,
    /// Episode entry.
    pub episode: Option<TvShowEpisode>,
}

impl Decode for ListItem {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            r#type: fields.get("type")?,
            movie: fields.get("movie")?,
            show: fields.get("show")?,
            season: fields.get("season")?,
            episode: fields.get("episode")?,
        })
    }
}

/// A user list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraktList {
    /// Display name.
    pub name: Option<String>,
    /// URL slug.
    pub slug: Option<String>,
    /// Trakt page URL.
    pub url: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Visibility.
    pub privacy: Option<ListPrivacy>,
    /// Whether entries are numbered.
    pub show_numbers: Option<bool>,
    /// Whether comments are allowed.
    pub allow_shouts: Option<bool>,
    /// Entries.
    pub items: Option<Vec<ListItem>>,
}

impl Decode for TraktList {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        let fields = Fields::new(value, cx)?;
        Ok(Self {
            name: fields.get("name")?,
            slug: fields.get("slug")?,
            url: fields.get("url")?,
            description: fields.get("description")?,
            privacy: fields.get("privacy")?,
            show_numbers: fields.get("show_numbers")?,
            allow_shouts: fields.get("allow_shouts")?,
            items: fields.get("items")?,
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;

    use super::*;
    use crate::decode::{DecodeErrorKind, DecoderConfig};

    #[test]
    fn test_list_with_items() {
        // Arrange
        let value = json!({
            "name": "Favorites",
            "slug": "favorites",
            "privacy": "friends",
            "show_numbers": true,
            "items": [
                { "type": "movie", "movie": { "title": "Inception" } },
                { "type": "season", "show": { "title": "Lost" }, "season": { "season": 1, "episodes": 25 } }
            ]
        });

        // Act
        let list = TraktList::decode(&value, &DecoderConfig::shared().context()).unwrap();

        // Assert
        assert_eq!(list.privacy, Some(ListPrivacy::Friends));
        let items = list.items.unwrap();
        assert_eq!(items[0].r#type, Some(ListItemType::Movie));
        assert_eq!(items[1].r#type, Some(ListItemType::TvShowSeason));
        assert_eq!(items[1].season.as_ref().unwrap().season, Some(1));
    }

    #[test]
    fn test_unknown_privacy_is_rejected() {
        // Arrange
        let value = json!({ "privacy": "secret" });

        // Act
        let err = TraktList::decode(&value, &DecoderConfig::shared().context()).unwrap_err();

        // Assert
        assert!(matches!(err.kind(), DecodeErrorKind::UnknownEnumValue { .. }));
        assert_eq!(err.path(), "$.privacy");
    }
}
