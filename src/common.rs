//! Common types for the strike engine: shot outcomes, fire log entries and
//! engine errors.

use alloc::string::String;

/// Result classification of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot brought a target's health to zero.
    Hit,
    /// Shot damaged an armored target that is still standing.
    Armored,
    /// Coordinate was already resolved; no missile was spent.
    Duplicate,
}

/// Outcome of a processed shot together with the text shown to the player.
/// Presentation (color, line breaks around it) belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShotReport {
    pub outcome: ShotOutcome,
    pub message: String,
}

/// Fire log entry: the last recorded outcome at a coordinate and the cell
/// health immediately before and after that shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiredEntry {
    pub outcome: ShotOutcome,
    pub before: u8,
    pub after: u8,
}

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Errors returned by engine and catalog operations.
#[derive(Debug, PartialEq, Eq)]
pub enum GameError {
    /// Coordinate lies outside the playable interior.
    OutOfBounds { row: usize, col: usize },
    /// Shot submitted after the session already ended.
    MissionOver,
    /// Mission catalog has no entries to select from.
    EmptyCatalog,
    /// Mission grid contains no targets.
    NoTargets,
    /// Mission has a zero missile allowance.
    NoMissiles,
    /// Mission grid is wider than the single-letter addressing scheme allows.
    GridTooWide { width: usize },
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the playable grid", row, col)
            }
            GameError::MissionOver => write!(f, "The mission is already over"),
            GameError::EmptyCatalog => write!(f, "Mission catalog is empty"),
            GameError::NoTargets => write!(f, "Mission grid contains no targets"),
            GameError::NoMissiles => write!(f, "Mission has no missile allowance"),
            GameError::GridTooWide { width } => {
                write!(f, "Mission grid is {} columns wide; at most {} are addressable", width, crate::config::MAX_COLUMNS)
            }
        }
    }
}
