//! Per-letter scoring of a guess against the secret.
//!
//! Scoring is single-pass: a guessed letter that occurs anywhere in the
//! secret is `Present` on every non-matching position, without counting
//! how many copies the secret really holds. `ConstraintTracker` relies on
//! this; the two must change together.

use crate::wordbank::{WORD_LENGTH, Word};
use std::fmt;

/// Feedback for one letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position
    Hit,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter does not occur in the secret
    Absent,
}

impl Feedback {
    /// Base-3 digit used for pattern keys.
    #[must_use]
    pub fn digit(self) -> usize {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Hit => 2,
        }
    }

    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Feedback::Hit => 'o',
            Feedback::Present => '?',
            Feedback::Absent => '.',
        }
    }
}

const fn pow3(n: usize) -> usize {
    if n == 0 { 1 } else { 3 * pow3(n - 1) }
}

/// Feedback for a whole guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern([Feedback; WORD_LENGTH]);

impl FeedbackPattern {
    /// Number of distinct pattern keys (3^L).
    pub const NUM_PATTERNS: usize = pow3(WORD_LENGTH);

    #[must_use]
    pub fn new(symbols: [Feedback; WORD_LENGTH]) -> Self {
        Self(symbols)
    }

    #[must_use]
    pub fn symbols(&self) -> &[Feedback; WORD_LENGTH] {
        &self.0
    }

    /// True iff every position is a hit.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&f| f == Feedback::Hit)
    }

    /// Collapse to `0..NUM_PATTERNS`, first position most significant.
    #[must_use]
    pub fn key(&self) -> usize {
        self.0.iter().fold(0, |acc, f| acc * 3 + f.digit())
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            write!(f, "{}", symbol.to_char())?;
        }
        Ok(())
    }
}

/// Score `guess` against `secret`.
#[must_use]
pub fn score(secret: &Word, guess: &Word) -> FeedbackPattern {
    let secret = secret.letters();
    let mut symbols = [Feedback::Absent; WORD_LENGTH];
    for (i, (&g, symbol)) in guess.letters().iter().zip(symbols.iter_mut()).enumerate() {
        *symbol = if g == secret[i] {
            Feedback::Hit
        } else if secret.contains(&g) {
            Feedback::Present
        } else {
            Feedback::Absent
        };
    }
    FeedbackPattern(symbols)
}

/// Pattern key of `score(secret, guess)` without building the pattern.
#[must_use]
pub fn score_key(secret: &Word, guess: &Word) -> usize {
    let secret = secret.letters();
    guess
        .letters()
        .iter()
        .enumerate()
        .fold(0, |acc, (i, g)| {
            let digit = if *g == secret[i] {
                2
            } else if secret.contains(g) {
                1
            } else {
                0
            };
            acc * 3 + digit
        })
}
