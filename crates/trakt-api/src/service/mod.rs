//! Trakt v1 API client.
//!
//! Builds requests from [`Endpoint`] descriptors, sends them with
//! `reqwest`, and decodes every body through the response envelope decoder.

mod api;
mod client;
pub mod endpoint;
mod error;
mod params;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTraktApi, TraktApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TraktClient, TraktClientBuilder};
pub use endpoint::{Endpoint, HttpMethod};
#[allow(clippy::module_name_repetitions)]
pub use error::{RequestFailure, TraktError};
pub use params::{
    ActivityQuery, CalendarQuery, ListItemRef, ListItemsAdd, ShowCheckin, ShowRating,
};
