use crate::util::EnumExt;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// How fast the snake moves
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Width of the longest difficulty name
    pub(crate) const DISPLAY_WIDTH: u16 = 6;

    /// Time between movements of the snake
    pub(crate) fn tick_period(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(200),
            Difficulty::Medium => Duration::from_millis(150),
            Difficulty::Hard => Duration::from_millis(100),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub(crate) fn increase(&mut self) {
        if let Some(d) = self.next() {
            *self = d;
        }
    }

    pub(crate) fn decrease(&mut self) {
        if let Some(d) = self.prev() {
            *self = d;
        }
    }

    /// Step to the next difficulty, going back to the easiest after the
    /// hardest
    pub(crate) fn cycle(&mut self) {
        *self = self.next().unwrap_or_else(Difficulty::min);
    }

    pub(crate) fn can_increase(self) -> bool {
        self != Difficulty::max()
    }

    pub(crate) fn can_decrease(self) -> bool {
        self != Difficulty::min()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Difficulty, ParseDifficultyError> {
        Difficulty::iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError(s.to_owned()))
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("invalid difficulty {0:?}; expected \"easy\", \"medium\", or \"hard\"")]
pub(crate) struct ParseDifficultyError(String);

/// Side length of the (square) playing field, in cells
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "u16")]
pub(crate) struct GridSize(u16);

impl GridSize {
    /// Smallest grid that still fits the starting snake with room to turn
    pub(crate) const MIN: u16 = 8;

    /// Largest grid that fits inside [`DISPLAY_SIZE`][crate::consts::DISPLAY_SIZE]
    pub(crate) const MAX: u16 = 20;

    pub(crate) fn new(size: u16) -> Option<GridSize> {
        (Self::MIN..=Self::MAX)
            .contains(&size)
            .then_some(GridSize(size))
    }

    pub(crate) fn get(self) -> u16 {
        self.0
    }

    /// Total number of cells on the grid
    pub(crate) fn area(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }
}

impl Default for GridSize {
    fn default() -> GridSize {
        GridSize(Self::MAX)
    }
}

impl TryFrom<u16> for GridSize {
    type Error = GridSizeError;

    fn try_from(value: u16) -> Result<GridSize, GridSizeError> {
        GridSize::new(value).ok_or(GridSizeError(value))
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}×{0}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("grid size must be between {min} and {max}, got {0}", min = GridSize::MIN, max = GridSize::MAX)]
pub(crate) struct GridSizeError(u16);
