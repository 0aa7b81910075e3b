//! Request-level failures with the context they happened in.

use reqwest::StatusCode;
use serde_json::{Map, Value};

use crate::decode::DecodeError;
use crate::entities::Response;

/// What went wrong with a request.
#[derive(Debug, thiserror::Error)]
pub enum RequestFailure {
    /// Connecting, sending or reading the body failed.
    #[error("transport failure")]
    Transport(#[source] reqwest::Error),
    /// Non-2xx response whose body was not an error envelope.
    #[error("HTTP {status}: {body}")]
    Status {
        /// Response status.
        status: StatusCode,
        /// Response body, lossily decoded.
        body: String,
    },
    /// The body could not be decoded as the endpoint's shape.
    #[error("response could not be decoded")]
    Decode(#[source] DecodeError),
    /// The API answered with an error envelope.
    #[error("API error: {0}")]
    Api(String),
    /// The request body could not be encoded as a JSON object.
    #[error("request body could not be encoded")]
    Body(#[source] serde_json::Error),
    /// The base URL cannot carry an endpoint path.
    #[error("base URL cannot carry a path")]
    InvalidUrl,
}

#[derive(Debug)]
struct Inner {
    url: String,
    post_body: Option<Map<String, Value>>,
    response: Option<Response>,
    kind: RequestFailure,
}

/// A failed API call.
///
/// Carries the request URL (API key redacted), the POST body if any, and
/// the API's error envelope when one was returned.
#[derive(Debug)]
pub struct TraktError(Box<Inner>);

impl TraktError {
    pub(crate) fn new(
        url: impl Into<String>,
        post_body: Option<Map<String, Value>>,
        kind: RequestFailure,
    ) -> Self {
        Self(Box::new(Inner {
            url: url.into(),
            post_body,
            response: None,
            kind,
        }))
    }

    /// Builds an [`RequestFailure::Api`] error around an error envelope.
    pub(crate) fn api(
        url: impl Into<String>,
        post_body: Option<Map<String, Value>>,
        response: Response,
    ) -> Self {
        let message = response.text().unwrap_or("unknown error").to_owned();
        let mut err = Self::new(url, post_body, RequestFailure::Api(message));
        err.0.response = Some(response);
        err
    }

    /// Request URL with the API key segment replaced by `****`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0.url
    }

    /// JSON body that was posted, if any.
    #[must_use]
    pub fn post_body(&self) -> Option<&Map<String, Value>> {
        self.0.post_body.as_ref()
    }

    /// Error envelope returned by the API, if any.
    #[must_use]
    pub fn response(&self) -> Option<&Response> {
        self.0.response.as_ref()
    }

    /// Failure kind.
    #[must_use]
    pub fn kind(&self) -> &RequestFailure {
        &self.0.kind
    }
}

impl std::fmt::Display for TraktError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0.response.as_ref().and_then(Response::text) {
            Some(message) => write!(f, "{message} ({})", self.0.url),
            None => write!(f, "{} ({})", self.0.kind, self.0.url),
        }
    }
}

impl std::error::Error for TraktError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0.kind)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::error::Error;

    use super::*;

    #[test]
    fn test_display_prefers_api_message() {
        // Arrange
        let response = Response {
            status: Some(String::from("failure")),
            error: Some(String::from("failed authentication")),
            ..Response::default()
        };

        // Act
        let err = TraktError::api("https://api.trakt.tv/rate/show/****", None, response);

        // Assert
        assert_eq!(
            err.to_string(),
            "failed authentication (https://api.trakt.tv/rate/show/****)"
        );
        assert!(err.response().unwrap().is_failure());
        assert!(matches!(err.kind(), RequestFailure::Api(_)));
    }

    #[test]
    fn test_display_without_envelope_uses_kind() {
        // Arrange
        let kind = RequestFailure::Status {
            status: StatusCode::BAD_GATEWAY,
            body: String::from("<html>"),
        };

        // Act
        let err = TraktError::new("https://api.trakt.tv/x", None, kind);

        // Assert
        assert_eq!(
            err.to_string(),
            "HTTP 502 Bad Gateway: <html> (https://api.trakt.tv/x)"
        );
        assert!(err.response().is_none());
        assert!(err.source().is_some());
    }

    #[test]
    fn test_post_body_is_kept() {
        // Arrange
        let mut body = Map::new();
        body.insert(String::from("title"), Value::from("Lost"));

        // Act
        let err = TraktError::new("u", Some(body), RequestFailure::InvalidUrl);

        // Assert
        assert_eq!(err.post_body().unwrap()["title"], "Lost");
    }
}
