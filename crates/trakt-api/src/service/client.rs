//! `TraktClient` - Trakt v1 API client implementation.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;
use url::Url;

use super::api::TraktApi;
use super::endpoint::{self, Endpoint, HttpMethod};
use super::error::{RequestFailure, TraktError};
use super::params::{ActivityQuery, CalendarQuery, ListItemsAdd, ShowCheckin, ShowRating};
use crate::decode::{Decode, DecoderConfig, Envelope, decode_response_with};
use crate::entities::{
    Activity, CalendarDate, CheckinResponse, Genre, ListItemsResponse, RatingResponse, TvShow,
    TvShowEpisode, TvShowSeason, UserProfile,
};

/// Base URL of the SSL endpoint.
const SSL_BASE_URL: &str = "https://api.trakt.tv/";

/// Base URL of the plain HTTP endpoint.
const PLAIN_BASE_URL: &str = "http://api.trakt.tv/";

/// Default connect and read timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Stands in for the API key segment of logged and reported URLs.
const REDACTED_API_KEY: &str = "****";

/// Value of the `extended` URI segment.
const EXTENDED: &str = "extended";

/// Basic-auth credentials, also echoed into POST bodies.
#[derive(Clone)]
struct Credentials {
    username: String,
    password_sha: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Trakt API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TraktClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key substituted into every URI.
    api_key: String,
    /// Optional user credentials.
    credentials: Option<Credentials>,
    /// Application version sent with check-ins.
    app_version: String,
    /// Application build date sent with check-ins.
    app_date: Option<String>,
    /// Response decoding rules.
    decoder: DecoderConfig,
}

/// Builder for `TraktClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TraktClientBuilder {
    base_url: Option<Url>,
    use_ssl: bool,
    api_key: Option<String>,
    user_agent: Option<String>,
    credentials: Option<(String, String)>,
    connect_timeout: Duration,
    read_timeout: Duration,
    app_version: Option<String>,
    app_date: Option<String>,
    decoder: Option<DecoderConfig>,
}

impl TraktClientBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            base_url: None,
            use_ssl: true,
            api_key: None,
            user_agent: None,
            credentials: None,
            connect_timeout: DEFAULT_TIMEOUT,
            read_timeout: DEFAULT_TIMEOUT,
            app_version: None,
            app_date: None,
            decoder: None,
        }
    }

    /// Overrides the base URL (for wiremock in tests). Takes precedence
    /// over [`Self::use_ssl`].
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Selects the SSL (default) or plain HTTP endpoint.
    #[must_use]
    pub const fn use_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = use_ssl;
        self
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the User-Agent (required).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Authenticates as `username` with the SHA1 of their password.
    #[must_use]
    pub fn authentication(
        mut self,
        username: impl Into<String>,
        password_sha: impl Into<String>,
    ) -> Self {
        self.credentials = Some((username.into(), password_sha.into()));
        self
    }

    /// Sets the connect timeout (default: 60s).
    #[must_use]
    pub const fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets the read timeout (default: 60s).
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Sets the application version sent with check-ins (default: this
    /// crate's version).
    #[must_use]
    pub fn app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = Some(version.into());
        self
    }

    /// Sets the application build date sent with check-ins.
    #[must_use]
    pub fn app_date(mut self, date: impl Into<String>) -> Self {
        self.app_date = Some(date.into());
        self
    }

    /// Overrides the response decoding rules.
    #[must_use]
    pub fn decoder_config(mut self, config: DecoderConfig) -> Self {
        self.decoder = Some(config);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set or empty.
    /// - `user_agent` is not set.
    /// - The username or password SHA given to `authentication` is empty.
    /// - The base URL cannot carry a path.
    /// - `reqwest::Client` build fails.
    pub fn build(self) -> Result<TraktClient> {
        let api_key = self.api_key.context("api_key is required")?;
        if api_key.is_empty() {
            bail!("api_key must not be empty");
        }
        let user_agent = self.user_agent.context("user_agent is required")?;

        let credentials = match self.credentials {
            Some((username, _)) if username.is_empty() => bail!("username must not be empty"),
            Some((_, password_sha)) if password_sha.is_empty() => {
                bail!("password SHA must not be empty")
            }
            Some((username, password_sha)) => Some(Credentials {
                username,
                password_sha,
            }),
            None => None,
        };

        let base_url = if let Some(url) = self.base_url {
            url
        } else {
            let default = if self.use_ssl {
                SSL_BASE_URL
            } else {
                PLAIN_BASE_URL
            };
            Url::parse(default).context("invalid default base URL")?
        };
        if base_url.cannot_be_a_base() {
            bail!("base URL cannot carry a path: {base_url}");
        }

        let http_client = Client::builder()
            .user_agent(&user_agent)
            .connect_timeout(self.connect_timeout)
            .read_timeout(self.read_timeout)
            .gzip(true)
            .build()
            .context("failed to build HTTP client")?;

        Ok(TraktClient {
            http_client,
            base_url,
            api_key,
            credentials,
            app_version: self
                .app_version
                .unwrap_or_else(|| String::from(env!("CARGO_PKG_VERSION"))),
            app_date: self.app_date,
            decoder: self
                .decoder
                .unwrap_or_else(|| DecoderConfig::shared().clone()),
        })
    }
}

impl TraktClient {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> TraktClientBuilder {
        TraktClientBuilder::new()
    }

    /// Whether user credentials are configured.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Serializes `params` into a POST body, adding credentials when
    /// authenticated.
    fn post_body<P: Serialize>(&self, params: &P) -> Result<Map<String, Value>, RequestFailure> {
        let Value::Object(mut body) = serde_json::to_value(params).map_err(RequestFailure::Body)?
        else {
            return Err(RequestFailure::Body(serde::ser::Error::custom(
                "request body is not a JSON object",
            )));
        };
        if let Some(credentials) = &self.credentials {
            body.insert(
                String::from("username"),
                Value::from(credentials.username.as_str()),
            );
            body.insert(
                String::from("password"),
                Value::from(credentials.password_sha.as_str()),
            );
        }
        Ok(body)
    }

    /// [`Self::post_body`] plus the application debug strings.
    fn checkin_body<P: Serialize>(&self, params: &P) -> Result<Map<String, Value>, RequestFailure> {
        let mut body = self.post_body(params)?;
        body.insert(
            String::from("app_version"),
            Value::from(self.app_version.as_str()),
        );
        if let Some(date) = &self.app_date {
            body.insert(String::from("app_date"), Value::from(date.as_str()));
        }
        Ok(body)
    }

    /// Sends one request and decodes the body as the endpoint's shape.
    ///
    /// Non-2xx responses are still checked for an error envelope.
    #[instrument(skip_all, fields(method = %endpoint.method(), template = endpoint.template()))]
    async fn execute<T: Decode>(
        &self,
        endpoint: Endpoint<T>,
        params: &[(&str, String)],
        body: Option<Result<Map<String, Value>, RequestFailure>>,
    ) -> Result<T, TraktError> {
        let url = endpoint.url(&self.base_url, &self.api_key, params);
        let redacted = endpoint
            .url(&self.base_url, REDACTED_API_KEY, params)
            .map_or_else(|| String::from(endpoint.template()), String::from);
        let body = body.transpose().map_err(|kind| TraktError::new(&redacted, None, kind))?;
        let url = url.ok_or_else(|| {
            TraktError::new(&redacted, body.clone(), RequestFailure::InvalidUrl)
        })?;

        let mut request = match endpoint.method() {
            HttpMethod::Get => self.http_client.get(url),
            HttpMethod::Post => self.http_client.post(url),
        };
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password_sha));
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        tracing::debug!(url = %redacted, "Trakt API request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Err(TraktError::new(redacted, body, RequestFailure::Transport(err))),
        };
        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => return Err(TraktError::new(redacted, body, RequestFailure::Transport(err))),
        };

        tracing::debug!(%status, len = bytes.len(), "Trakt API response");

        match decode_response_with::<T>(&bytes, &self.decoder) {
            Ok(Envelope::Failure(response)) => {
                tracing::warn!(%status, error = ?response.text(), "Trakt API reported failure");
                Err(TraktError::api(redacted, body, response))
            }
            Ok(Envelope::Success(value)) if status.is_success() => Ok(value),
            Err(err) if status.is_success() => Err(TraktError::new(
                redacted,
                body,
                RequestFailure::Decode(err),
            )),
            Ok(Envelope::Success(_)) | Err(_) => Err(TraktError::new(
                redacted,
                body,
                RequestFailure::Status {
                    status,
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                },
            )),
        }
    }
}

impl TraktApi for TraktClient {
    #[instrument(skip_all)]
    async fn genres_movies(&self) -> Result<Vec<Genre>, TraktError> {
        self.execute(endpoint::GENRES_MOVIES, &[], None).await
    }

    #[instrument(skip_all)]
    async fn genres_shows(&self) -> Result<Vec<Genre>, TraktError> {
        self.execute(endpoint::GENRES_SHOWS, &[], None).await
    }

    #[instrument(skip_all)]
    async fn show_summary(&self, title: &str, extended: bool) -> Result<TvShow, TraktError> {
        let mut params = vec![("title", String::from(title))];
        if extended {
            params.push(("extended", String::from(EXTENDED)));
        }
        self.execute(endpoint::SHOW_SUMMARY, &params, None).await
    }

    #[instrument(skip_all)]
    async fn show_seasons(&self, title: &str) -> Result<Vec<TvShowSeason>, TraktError> {
        let params = [("title", String::from(title))];
        self.execute(endpoint::SHOW_SEASONS, &params, None).await
    }

    #[instrument(skip_all)]
    async fn show_season(
        &self,
        title: &str,
        season: u32,
    ) -> Result<Vec<TvShowEpisode>, TraktError> {
        let params = [("title", String::from(title)), ("season", season.to_string())];
        self.execute(endpoint::SHOW_SEASON, &params, None).await
    }

    #[instrument(skip_all)]
    async fn show_checkin(&self, checkin: &ShowCheckin) -> Result<CheckinResponse, TraktError> {
        let body = self.checkin_body(checkin);
        self.execute(endpoint::SHOW_CHECKIN, &[], Some(body)).await
    }

    #[instrument(skip_all)]
    async fn calendar_shows(
        &self,
        query: &CalendarQuery,
    ) -> Result<Vec<CalendarDate>, TraktError> {
        let params = query.placeholders();
        self.execute(endpoint::CALENDAR_SHOWS, &params, None).await
    }

    #[instrument(skip_all)]
    async fn user_profile(&self, username: &str) -> Result<UserProfile, TraktError> {
        let params = [("username", String::from(username))];
        self.execute(endpoint::USER_PROFILE, &params, None).await
    }

    #[instrument(skip_all)]
    async fn activity_community(&self, query: &ActivityQuery) -> Result<Activity, TraktError> {
        let params = query.placeholders();
        self.execute(endpoint::ACTIVITY_COMMUNITY, &params, None).await
    }

    #[instrument(skip_all)]
    async fn list_items_add(&self, add: &ListItemsAdd) -> Result<ListItemsResponse, TraktError> {
        let body = self.post_body(add);
        self.execute(endpoint::LISTS_ITEMS_ADD, &[], Some(body)).await
    }

    #[instrument(skip_all)]
    async fn rate_show(&self, rating: &ShowRating) -> Result<RatingResponse, TraktError> {
        let body = self.post_body(rating);
        self.execute(endpoint::RATE_SHOW, &[], Some(body)).await
    }
}
