use crate::util::error_chain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Persistence for the high score
pub(crate) trait ScoreStore: fmt::Debug {
    /// Read the stored high score.  A store that has never been written to
    /// reports 0.
    fn load(&self) -> Result<u32, LoadError>;

    fn save(&mut self, score: u32) -> Result<(), SaveError>;
}

/// The best score achieved so far, backed by a [`ScoreStore`]
#[derive(Debug)]
pub(crate) struct HighScore {
    best: u32,
    store: Box<dyn ScoreStore>,
}

impl HighScore {
    /// Load the high score from `store`.  If it can't be read, the failure is
    /// logged and the high score starts out at 0.
    pub(crate) fn load(store: Box<dyn ScoreStore>) -> HighScore {
        let best = match store.load() {
            Ok(best) => best,
            Err(e) => {
                log::warn!("{}", error_chain(&e));
                0
            }
        };
        HighScore { best, store }
    }

    pub(crate) fn get(&self) -> u32 {
        self.best
    }

    /// Record the final score of a game.  If it beats the current high score,
    /// the new high score is saved and `true` is returned.  A failure to save
    /// is logged; the in-memory high score is updated regardless.
    pub(crate) fn submit(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        log::info!("New high score: {score} (previous: {})", self.best);
        self.best = score;
        if let Err(e) = self.store.save(score) {
            log::error!("{}", error_chain(&e));
        }
        true
    }
}

/// A JSON file holding the high score
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct HighScoreFile {
    path: PathBuf,
}

impl HighScoreFile {
    pub(crate) fn new<P: Into<PathBuf>>(path: P) -> HighScoreFile {
        HighScoreFile { path: path.into() }
    }

    /// Return the default high score file path, if the local data directory
    /// can be determined
    pub(crate) fn default_path() -> Option<PathBuf> {
        dirs::data_local_dir().map(|p| p.join("snakegrid").join("high-score.json"))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for HighScoreFile {
    fn load(&self) -> Result<u32, LoadError> {
        let src = match fs_err::read(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(LoadError::read(e)),
        };
        serde_json::from_slice::<HighScoreRecord>(&src)
            .map(|rec| rec.high_score)
            .map_err(LoadError::deserialize)
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        let record = HighScoreRecord { high_score: score };
        let mut src = serde_json::to_string(&record).map_err(SaveError::serialize)?;
        src.push('\n');
        fs_err::write(&self.path, &src).map_err(SaveError::write)?;
        Ok(())
    }
}

/// A store that remembers nothing between runs
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Ephemeral;

impl ScoreStore for Ephemeral {
    fn load(&self) -> Result<u32, LoadError> {
        Ok(0)
    }

    fn save(&mut self, _score: u32) -> Result<(), SaveError> {
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
struct HighScoreRecord {
    high_score: u32,
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn serialize(e: serde_json::Error) -> Self {
        SaveError(SaveErrorSource::Serialize(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to serialize high score")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
#[error("Failed to read high score from disk")]
pub(crate) struct LoadError(#[source] LoadErrorSource);

impl LoadError {
    fn read(e: std::io::Error) -> Self {
        LoadError(LoadErrorSource::Read(e))
    }

    fn deserialize(e: serde_json::Error) -> Self {
        LoadError(LoadErrorSource::Deserialize(e))
    }
}

#[derive(Debug, Error)]
enum LoadErrorSource {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("failed to deserialize high score")]
    Deserialize(#[source] serde_json::Error),
}
