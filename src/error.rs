//! Error taxonomy for loading, configuration and play.

use crate::referee::FeedbackPattern;
use crate::wordbank::Word;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Dictionary loading errors. Fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse error {name}, invalid delimiter at line {line}")]
    InvalidDelimiter { name: String, line: usize },
    #[error("parse error {name}, invalid char code {found:?} at line {line} pos {column}")]
    InvalidChar {
        name: String,
        line: usize,
        column: usize,
        found: char,
    },
    #[error("parse error {name}, truncated word at line {line}")]
    Truncated { name: String, line: usize },
    #[error("{name} contains no answer words")]
    NoAnswers { name: String },
    #[error("no word sources given")]
    NoSources,
}

/// Configuration errors, reported before any game state is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid answer {0:?}: expected 5 lowercase letters")]
    InvalidAnswer(String),
    #[error("wrong answer {0}: not in the answer list")]
    UnknownAnswer(String),
}

/// Errors raised while a game is running.
#[derive(Debug, Error)]
pub enum GameError {
    /// The filter removed every candidate, including the secret itself.
    /// Scoring and constraint tracking disagree; this is a bug.
    #[error("internal invariant violated: no candidates left after {guess} [{pattern}]")]
    EmptyCandidateSet {
        guess: Word,
        pattern: FeedbackPattern,
    },
    #[error("input closed before the game finished")]
    InputClosed,
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Top-level error for the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Game(#[from] GameError),
}

impl AppError {
    /// Process exit code; each class gets its own.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Config(_) => 2,
            AppError::Load(_) => 3,
            AppError::Game(_) => 4,
        }
    }
}
