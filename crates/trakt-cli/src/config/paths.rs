//! Config file location.
//!
//! Lookup order, first match wins:
//!
//! 1. `--dir <DIR>`: `<DIR>/config.toml`
//! 2. `TRAKT_CONFIG`: the file it names
//! 3. `XDG_CONFIG_HOME`: `$XDG_CONFIG_HOME/trakt/config.toml`
//! 4. `HOME`: `$HOME/.config/trakt/config.toml`

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Environment variable naming the config file directly.
pub const CONFIG_ENV: &str = "TRAKT_CONFIG";

const CONFIG_FILE: &str = "config.toml";
const APP_DIR: &str = "trakt";

/// Process environment relevant to config lookup.
#[derive(Debug, Default)]
struct LookupEnv {
    config: Option<String>,
    xdg_config_home: Option<String>,
    home: Option<String>,
}

impl LookupEnv {
    fn from_process() -> Self {
        // Empty values count as unset, as XDG requires.
        let var = |name| std::env::var(name).ok().filter(|v: &String| !v.is_empty());
        Self {
            config: var(CONFIG_ENV),
            xdg_config_home: var("XDG_CONFIG_HOME"),
            home: var("HOME"),
        }
    }
}

/// Resolves the config file path from `dir` and the process environment.
///
/// # Errors
///
/// Returns an error if neither `dir`, `TRAKT_CONFIG`, `XDG_CONFIG_HOME` nor
/// `HOME` yields a location.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    let path = resolve(dir.map(PathBuf::as_path), LookupEnv::from_process())?;
    tracing::debug!(path = %path.display(), "Resolved config path");
    Ok(path)
}

fn resolve(dir: Option<&Path>, env: LookupEnv) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.join(CONFIG_FILE));
    }
    if let Some(file) = env.config {
        return Ok(PathBuf::from(file));
    }
    if let Some(xdg) = env.xdg_config_home {
        return Ok(PathBuf::from(xdg).join(APP_DIR).join(CONFIG_FILE));
    }
    if let Some(home) = env.home {
        return Ok(PathBuf::from(home)
            .join(".config")
            .join(APP_DIR)
            .join(CONFIG_FILE));
    }
    bail!("cannot locate config: set --dir, {CONFIG_ENV}, XDG_CONFIG_HOME or HOME")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn env(config: Option<&str>, xdg: Option<&str>, home: Option<&str>) -> LookupEnv {
        LookupEnv {
            config: config.map(String::from),
            xdg_config_home: xdg.map(String::from),
            home: home.map(String::from),
        }
    }

    #[test]
    fn test_dir_wins_over_environment() {
        // Arrange
        let dir = Path::new("/tmp/trakt-work");
        let env = env(Some("/etc/trakt.toml"), Some("/xdg"), Some("/home/u"));

        // Act
        let path = resolve(Some(dir), env).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/trakt-work/config.toml"));
    }

    #[test]
    fn test_config_env_names_file() {
        // Arrange
        let env = env(Some("/etc/trakt.toml"), Some("/xdg"), Some("/home/u"));

        // Act
        let path = resolve(None, env).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/etc/trakt.toml"));
    }

    #[test]
    fn test_xdg_config_home_before_home() {
        // Arrange
        let env = env(None, Some("/xdg"), Some("/home/u"));

        // Act
        let path = resolve(None, env).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/xdg/trakt/config.toml"));
    }

    #[test]
    fn test_home_fallback() {
        // Arrange
        let env = env(None, None, Some("/home/u"));

        // Act
        let path = resolve(None, env).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/home/u/.config/trakt/config.toml"));
    }

    #[test]
    fn test_no_location_is_error() {
        // Arrange & Act
        let err = resolve(None, LookupEnv::default()).unwrap_err();

        // Assert
        assert!(err.to_string().contains(CONFIG_ENV));
    }
}
