use crate::highscore::{Ephemeral, HighScoreFile, ScoreStore};
use crate::options::{Difficulty, GridSize};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    /// Difficulty preselected in the main menu
    pub(crate) difficulty: Difficulty,

    /// Side length of the playing field
    pub(crate) grid_size: GridSize,

    /// Whether to ring the terminal bell for sound cues
    pub(crate) sound: bool,

    /// Settings about data files
    pub(crate) files: FileConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            difficulty: Difficulty::default(),
            grid_size: GridSize::default(),
            sound: true,
            files: FileConfig::default(),
        }
    }
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snakegrid").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the store in which the high score should be kept: the file given
    /// in the configuration or, if that is not set, the default high score
    /// file.
    ///
    /// If `self.files.save_high_score` is `false`, or no path is configured
    /// and the default path could not be computed, the high score is only
    /// kept for the current run.
    pub(crate) fn high_score_store(&self) -> Box<dyn ScoreStore> {
        if !self.files.save_high_score {
            log::info!("Not persisting high score: disabled in configuration");
            return Box::new(Ephemeral);
        }
        match self
            .files
            .high_score_file
            .clone()
            .or_else(HighScoreFile::default_path)
        {
            Some(path) => {
                let store = HighScoreFile::new(path);
                log::info!("Using high score file {}", store.path().display());
                Box::new(store)
            }
            None => {
                log::warn!(
                    "Not persisting high score: failed to determine path to local data directory"
                );
                Box::new(Ephemeral)
            }
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    pub(crate) high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    pub(crate) save_high_score: bool,

    /// Path to write log messages to
    pub(crate) log_file: Option<PathBuf>,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    high_score_file: Option<String>,
    save_high_score: bool,
    log_file: Option<String>,
}

impl Default for RawFileConfig {
    fn default() -> RawFileConfig {
        RawFileConfig {
            high_score_file: None,
            save_high_score: true,
            log_file: None,
        }
    }
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = NoHomeDir;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, NoHomeDir> {
        Ok(FileConfig {
            high_score_file: value.high_score_file.map(expand_tilde).transpose()?,
            save_high_score: value.save_high_score,
            log_file: value.log_file.map(expand_tilde).transpose()?,
        })
    }
}

/// Replace a leading `~` path component with the user's home directory
fn expand_tilde(path: String) -> Result<PathBuf, NoHomeDir> {
    match path.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let home = dirs::home_dir().ok_or(NoHomeDir)?;
            Ok(home.join(rest.trim_start_matches('/')))
        }
        _ => Ok(PathBuf::from(path)),
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("cannot expand '~' in path: failed to determine home directory")]
pub(crate) struct NoHomeDir;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
