//! trakt CLI entry point.

mod config;
mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::instrument;
use tracing_subscriber::{EnvFilter, fmt};
use trakt_api::decode::{Decode, Envelope, decode_response};
use trakt_api::entities::{
    Activity, CalendarDate, CheckinResponse, Genre, ListItemsResponse, RatingResponse, TvShow,
    TvShowEpisode, TvShowSeason, UserProfile,
};
use trakt_api::service::{CalendarQuery, TraktApi, TraktClient};

use crate::config::{API_KEY_ENV, AppConfig, resolve_config_path};

/// Trakt API command-line client.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Config directory (default: `$TRAKT_CONFIG`, else `$XDG_CONFIG_HOME/trakt`, else `~/.config/trakt`).
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Decode a saved API response offline.
    Decode(DecodeArgs),
    /// List genres.
    Genres(GenresArgs),
    /// Show lookups.
    Show(ShowCommand),
    /// Upcoming episodes grouped by day.
    Calendar(CalendarArgs),
    /// User lookups.
    User(UserCommand),
    /// Configuration commands.
    Config(ConfigCommand),
}

/// Arguments for `decode`.
#[derive(clap::Args)]
struct DecodeArgs {
    /// Response shape the file holds.
    #[arg(long, value_enum)]
    shape: Shape,

    /// JSON file to decode.
    file: PathBuf,
}

/// Response shapes accepted by `decode`.
#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    /// `/show/summary`.
    ShowSummary,
    /// `/show/seasons`.
    ShowSeasons,
    /// `/show/season`.
    ShowSeason,
    /// `/genres/movies` or `/genres/shows`.
    Genres,
    /// `/user/profile`.
    UserProfile,
    /// `/activity/community`.
    Activity,
    /// `/calendar/shows`.
    Calendar,
    /// `/lists/items/add`.
    ListItemsAdd,
    /// `/rate/show`.
    Rate,
    /// `/show/checkin`.
    Checkin,
}

/// Arguments for `genres`.
#[derive(clap::Args)]
struct GenresArgs {
    /// Genre catalogue to list.
    #[arg(value_enum)]
    kind: GenreKind,
}

/// Genre catalogues.
#[derive(Clone, Copy, ValueEnum)]
enum GenreKind {
    /// Movie genres.
    Movies,
    /// Show genres.
    Shows,
}

/// `show` subcommand group.
#[derive(clap::Args)]
struct ShowCommand {
    #[command(subcommand)]
    command: ShowSubcommands,
}

/// Show subcommands.
#[derive(Subcommand)]
enum ShowSubcommands {
    /// Fetch a show summary.
    Summary(ShowSummaryArgs),
    /// List a show's seasons.
    Seasons(ShowTitleArgs),
    /// List the episodes of one season.
    Season(ShowSeasonArgs),
}

/// Arguments naming a show.
#[derive(clap::Args)]
struct ShowTitleArgs {
    /// Show slug, TheTVDB id or IMDb id.
    #[arg(long)]
    title: String,
}

/// Arguments for `show summary`.
#[derive(clap::Args)]
struct ShowSummaryArgs {
    /// Show slug, TheTVDB id or IMDb id.
    #[arg(long)]
    title: String,

    /// Include every season with full episodes.
    #[arg(long)]
    extended: bool,
}

/// Arguments for `show season`.
#[derive(clap::Args)]
struct ShowSeasonArgs {
    /// Show slug, TheTVDB id or IMDb id.
    #[arg(long)]
    title: String,

    /// Season number.
    #[arg(long)]
    season: u32,
}

/// Arguments for `calendar`.
#[derive(clap::Args)]
struct CalendarArgs {
    /// First day (YYYY-MM-DD); today when omitted.
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Number of days; requires `--date`.
    #[arg(long, requires = "date")]
    days: Option<u32>,
}

/// `user` subcommand group.
#[derive(clap::Args)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommands,
}

/// User subcommands.
#[derive(Subcommand)]
enum UserSubcommands {
    /// Fetch a user's profile.
    Profile(UserProfileArgs),
}

/// Arguments for `user profile`.
#[derive(clap::Args)]
struct UserProfileArgs {
    /// Account name.
    #[arg(long)]
    username: String,
}

/// `config` subcommand group.
#[derive(clap::Args)]
struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommands,
}

/// Config subcommands.
#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Print the resolved configuration (secrets masked).
    Show,
}

/// Reads `path` and decodes it as `T` or an error envelope.
///
/// # Errors
///
/// Returns an error if the file cannot be read, cannot be decoded, or holds
/// an error envelope.
fn decode_file<T: Decode>(path: &Path) -> Result<T> {
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    match decode_response::<T>(&bytes)
        .with_context(|| format!("failed to decode {}", path.display()))?
    {
        Envelope::Success(value) => Ok(value),
        Envelope::Failure(response) => {
            output::status(&response);
            bail!(
                "API reported failure: {}",
                response.text().unwrap_or("unknown error")
            )
        }
    }
}

/// Runs the `decode` subcommand.
///
/// # Errors
///
/// Returns an error if the file cannot be decoded as the requested shape.
#[instrument(skip_all)]
fn run_decode(args: &DecodeArgs) -> Result<()> {
    let path = args.file.as_path();
    match args.shape {
        Shape::ShowSummary => output::show(&decode_file::<TvShow>(path)?),
        Shape::ShowSeasons => output::seasons(&decode_file::<Vec<TvShowSeason>>(path)?),
        Shape::ShowSeason => output::episodes(&decode_file::<Vec<TvShowEpisode>>(path)?),
        Shape::Genres => output::genres(&decode_file::<Vec<Genre>>(path)?),
        Shape::UserProfile => output::user_profile(&decode_file::<UserProfile>(path)?),
        Shape::Activity => output::activity(&decode_file::<Activity>(path)?),
        Shape::Calendar => output::calendar(&decode_file::<Vec<CalendarDate>>(path)?),
        Shape::ListItemsAdd => output::list_items(&decode_file::<ListItemsResponse>(path)?),
        Shape::Rate => output::rating(&decode_file::<RatingResponse>(path)?),
        Shape::Checkin => output::checkin(&decode_file::<CheckinResponse>(path)?),
    }
    Ok(())
}

/// Builds a `TraktClient` from the config file and environment.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, no API key is
/// configured, or the client fails to build.
#[instrument(skip_all)]
fn build_trakt_client(dir: Option<&PathBuf>) -> Result<TraktClient> {
    let path = resolve_config_path(dir)?;
    let config = AppConfig::load(&path)?;

    let api_key = config
        .api
        .resolve_api_key(std::env::var(API_KEY_ENV).ok())
        .with_context(|| {
            format!(
                "{API_KEY_ENV} environment variable or api.api_key in {} is required",
                path.display()
            )
        })?;

    let mut builder = TraktClient::builder()
        .api_key(api_key)
        .use_ssl(config.api.use_ssl)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
    if let Some((username, password_sha)) = config.api.credentials() {
        builder = builder.authentication(username, password_sha);
    }
    builder.build().context("failed to build Trakt client")
}

/// Runs the `genres` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_genres(args: &GenresArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_trakt_client(dir)?;
    let genres = match args.kind {
        GenreKind::Movies => client.genres_movies().await,
        GenreKind::Shows => client.genres_shows().await,
    }
    .context("Trakt genres request failed")?;

    output::genres(&genres);
    Ok(())
}

/// Runs the `show summary` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_show_summary(args: &ShowSummaryArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_trakt_client(dir)?;
    let show = client
        .show_summary(&args.title, args.extended)
        .await
        .context("Trakt show/summary request failed")?;

    output::show(&show);
    Ok(())
}

/// Runs the `show seasons` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_show_seasons(args: &ShowTitleArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_trakt_client(dir)?;
    let seasons = client
        .show_seasons(&args.title)
        .await
        .context("Trakt show/seasons request failed")?;

    output::seasons(&seasons);
    Ok(())
}

/// Runs the `show season` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_show_season(args: &ShowSeasonArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_trakt_client(dir)?;
    let episodes = client
        .show_season(&args.title, args.season)
        .await
        .context("Trakt show/season request failed")?;

    output::episodes(&episodes);
    Ok(())
}

/// Runs the `calendar` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_calendar(args: &CalendarArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_trakt_client(dir)?;
    let query = CalendarQuery {
        date: args.date,
        days: args.days,
    };

    let dates = client
        .calendar_shows(&query)
        .await
        .context("Trakt calendar/shows request failed")?;

    output::calendar(&dates);
    Ok(())
}

/// Runs the `user profile` subcommand.
///
/// # Errors
///
/// Returns an error if the client fails to build or the API request fails.
#[instrument(skip_all)]
async fn run_user_profile(args: &UserProfileArgs, dir: Option<&PathBuf>) -> Result<()> {
    let client = build_trakt_client(dir)?;
    let profile = client
        .user_profile(&args.username)
        .await
        .context("Trakt user/profile request failed")?;

    output::user_profile(&profile);
    Ok(())
}

/// Masks all but the first four characters of a secret.
fn mask(secret: Option<&str>) -> String {
    secret.map_or_else(
        || String::from("(unset)"),
        |s| {
            let visible: String = s.chars().take(4).collect();
            format!("{visible}****")
        },
    )
}

/// Runs the `config show` subcommand.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded.
#[instrument(skip_all)]
fn run_config_show(dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir)?;
    let config = AppConfig::load(&path)?;
    let env_key = std::env::var(API_KEY_ENV).ok();
    let from_env = env_key.as_deref().is_some_and(|k| !k.is_empty());
    let api_key = config.api.resolve_api_key(env_key);

    tracing::info!("Config file: {}", path.display());
    tracing::info!(
        "api_key: {}{}",
        mask(api_key.as_deref()),
        if from_env { " (from environment)" } else { "" }
    );
    tracing::info!(
        "username: {}",
        config.api.username.as_deref().unwrap_or("(unset)")
    );
    tracing::info!("password_sha: {}", mask(config.api.password_sha.as_deref()));
    tracing::info!("use_ssl: {}", config.api.use_ssl);
    Ok(())
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Decode(args) => run_decode(&args),
        Commands::Genres(args) => run_genres(&args, dir).await,
        Commands::Show(show) => match show.command {
            ShowSubcommands::Summary(args) => run_show_summary(&args, dir).await,
            ShowSubcommands::Seasons(args) => run_show_seasons(&args, dir).await,
            ShowSubcommands::Season(args) => run_show_season(&args, dir).await,
        },
        Commands::Calendar(args) => run_calendar(&args, dir).await,
        Commands::User(user) => match user.command {
            UserSubcommands::Profile(args) => run_user_profile(&args, dir).await,
        },
        Commands::Config(config) => match config.command {
            ConfigSubcommands::Show => run_config_show(dir),
        },
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        // Arrange & Act & Assert
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mask_keeps_prefix() {
        // Arrange & Act & Assert
        assert_eq!(mask(Some("5baa61e4c9b9")), "5baa****");
        assert_eq!(mask(Some("ab")), "ab****");
        assert_eq!(mask(None), "(unset)");
    }

    #[test]
    fn test_decode_file_reports_failure_envelope() {
        // Arrange
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../fixtures/trakt/error_failure.json"
        ));

        // Act
        let err = decode_file::<TvShow>(path).unwrap_err();

        // Assert
        assert!(err.to_string().contains("failed authentication"));
    }

    #[test]
    fn test_decode_file_reads_show_summary() {
        // Arrange
        let path = Path::new(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../../fixtures/trakt/show_summary.json"
        ));

        // Act
        let show = decode_file::<TvShow>(path).unwrap();

        // Assert
        assert_eq!(show.media.title.as_deref(), Some("The Walking Dead"));
    }
}
