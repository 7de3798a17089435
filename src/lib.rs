// Library interface for wordle-autoplay
// The binary and the integration tests both build on these modules

pub mod candidates;
pub mod cli;
pub mod constraints;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod referee;
pub mod solver;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use candidates::CandidateSet;
pub use constraints::{ConstraintTracker, LetterSet};
pub use error::{AppError, ConfigError, GameError, LoadError};
pub use game_state::{Game, GameInterface, GamePhase, GameSummary, MAX_TURNS, Outcome, Session};
pub use referee::{Feedback, FeedbackPattern, score};
pub use solver::{EntropyReport, Selection, Strategy, entropy_of, max_entropy_guess};
pub use wordbank::{WORD_LENGTH, Word, WordBank, WordSource};
