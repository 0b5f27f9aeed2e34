//! Run configuration loaded from TOML.
//!
//! Every key is optional; missing keys fall back to the standard dataset
//! layout, so an empty file and no file at all are equivalent.
//!
//! ```toml
//! [inputs]
//! athletes = "olympic_athlete_bio.csv"
//! secondary_athletes = "paris/athletes.csv"
//!
//! [outputs]
//! tally = "new_medal_tally.csv"
//!
//! [target]
//! year = 2024
//! city = "paris"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use podium_model::{ReconcileOptions, TargetEditionOptions};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "PODIUM_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Input file names, relative to the input directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputFiles {
    pub athletes: String,
    pub results: String,
    pub countries: String,
    pub games: String,
    pub secondary_athletes: String,
    pub secondary_events: String,
    pub secondary_medallists: String,
    pub secondary_nocs: String,
    pub secondary_teams: String,
}

impl Default for InputFiles {
    fn default() -> Self {
        Self {
            athletes: "olympic_athlete_bio.csv".to_string(),
            results: "olympic_athlete_event_results.csv".to_string(),
            countries: "olympics_country.csv".to_string(),
            games: "olympics_games.csv".to_string(),
            secondary_athletes: "paris/athletes.csv".to_string(),
            secondary_events: "paris/events.csv".to_string(),
            secondary_medallists: "paris/medallists.csv".to_string(),
            secondary_nocs: "paris/nocs.csv".to_string(),
            secondary_teams: "paris/teams.csv".to_string(),
        }
    }
}

/// Output file names, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub athletes: String,
    pub results: String,
    pub countries: String,
    pub games: String,
    pub tally: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            athletes: "new_olympic_athlete_bio.csv".to_string(),
            results: "new_olympic_athlete_event_results.csv".to_string(),
            countries: "new_olympics_country.csv".to_string(),
            games: "new_olympics_games.csv".to_string(),
            tally: "new_medal_tally.csv".to_string(),
        }
    }
}

/// Effective configuration for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodiumConfig {
    pub inputs: InputFiles,
    pub outputs: OutputFiles,
    pub target: TargetEditionOptions,
}

impl PodiumConfig {
    /// Parses TOML text; `path` is only used in error messages.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads a config file. A named file that cannot be read is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content, path)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Loads the explicit path, else the `PODIUM_CONFIG` path, else defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path(explicit, std::env::var_os(CONFIG_ENV).map(PathBuf::from)) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn reconcile_options(&self) -> ReconcileOptions {
        ReconcileOptions::new().with_target(self.target.clone())
    }
}

fn config_path(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.filter(|path| !path.as_os_str().is_empty()))
}
