//! Polymorphic decoder for a season's `episodes` member.
//!
//! The API renders the same member three ways depending on the endpoint:
//!
//! ```text
//! "episodes": 24                   -> Count(24)
//! "episodes": [1, 2, 3]            -> Numbers([1, 2, 3])
//! "episodes": [{...}, {...}]       -> Episodes([...])
//! ```
//!
//! `null` elements are skipped before the form is chosen.

use serde_json::Value;

use super::context::DecodeContext;
use super::{Decode, present_items};
use super::error::DecodeError;

/// Episodes of a season in whichever form the response carried.
///
/// Exactly one form is present; order is wire order.
#[derive(Debug, Clone, PartialEq)]
pub enum EpisodeList<E> {
    /// Only the number of episodes is known.
    Count(i32),
    /// Only the episode numbers are known.
    Numbers(Vec<i32>),
    /// Full episode objects.
    Episodes(Vec<E>),
}

impl<E> EpisodeList<E> {
    /// Number of episodes, whichever form is present.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Count(n) => usize::try_from(*n).unwrap_or(0),
            Self::Numbers(numbers) => numbers.len(),
            Self::Episodes(episodes) => episodes.len(),
        }
    }

    /// Whether the season has no episodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full episode objects, if that form is present.
    #[must_use]
    pub fn episodes(&self) -> Option<&[E]> {
        match self {
            Self::Episodes(episodes) => Some(episodes),
            Self::Count(_) | Self::Numbers(_) => None,
        }
    }
}

impl<E: Decode> Decode for EpisodeList<E> {
    fn decode(value: &Value, cx: &DecodeContext<'_>) -> Result<Self, DecodeError> {
        match value {
            Value::Number(_) => i32::decode(value, cx).map(Self::Count),
            Value::Array(items) => match present_items(items, cx).next() {
                // No element to inspect: treated as an empty number list.
                None => Ok(Self::Numbers(Vec::new())),
                Some((Value::Number(_), _)) => decode_numbers(items, cx).map(Self::Numbers),
                Some((Value::Object(_), _)) => decode_objects(items, cx).map(Self::Episodes),
                Some((first, first_cx)) => {
                    Err(first_cx.shape_mismatch("episode number or episode object", first))
                }
            },
            _ => Err(cx.shape_mismatch("episode count or episode list", value)),
        }
    }
}

fn decode_numbers(items: &[Value], cx: &DecodeContext<'_>) -> Result<Vec<i32>, DecodeError> {
    present_items(items, cx)
        .map(|(item, cx)| {
            if item.is_number() {
                i32::decode(item, &cx)
            } else {
                Err(cx.shape_mismatch("episode number", item))
            }
        })
        .collect()
}

fn decode_objects<E: Decode>(items: &[Value], cx: &DecodeContext<'_>) -> Result<Vec<E>, DecodeError> {
    present_items(items, cx)
        .map(|(item, cx)| {
            if item.is_object() {
                E::decode(item, &cx)
            } else {
                Err(cx.shape_mismatch("episode object", item))
            }
        })
        .collect()
}
