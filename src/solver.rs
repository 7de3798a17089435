use crate::candidates::CandidateSet;
use crate::error::GameError;
use crate::game_state::GameInterface;
use crate::referee::{FeedbackPattern, score_key};
use crate::trace_log;
use crate::wordbank::{Word, WordBank};
use log::debug;
use rand::Rng;
use rayon::prelude::*;

/// Input line that lists the remaining candidates instead of guessing.
pub const LIST_COMMAND: &str = "/help";

/// How the next guess is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Uniform draw from the remaining answers.
    #[default]
    Random,
    /// Guess with the highest expected information over the remaining answers.
    MaxEntropy,
    /// Guess typed in by an outside actor.
    Interactive,
}

/// Entropy details of a `MaxEntropy` pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntropyReport {
    pub bits: f64,
    /// Number of guesses that were scored; zero when one answer was left.
    pub evaluated: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub word: Word,
    pub entropy: Option<EntropyReport>,
}

impl Strategy {
    /// Pick the next guess.
    pub fn select<R, I>(
        self,
        candidates: &CandidateSet,
        bank: &WordBank,
        rng: &mut R,
        interface: &mut I,
    ) -> Result<Selection, GameError>
    where
        R: Rng,
        I: GameInterface + ?Sized,
    {
        match self {
            Strategy::Random => Ok(Selection {
                word: random_guess(candidates, bank, rng),
                entropy: None,
            }),
            Strategy::MaxEntropy => {
                let (word, report) = max_entropy_guess(candidates, bank);
                debug!(" {:.6} [bits]", report.bits);
                Ok(Selection {
                    word,
                    entropy: Some(report),
                })
            }
            Strategy::Interactive => Ok(Selection {
                word: interactive_guess(candidates, bank, interface)?,
                entropy: None,
            }),
        }
    }
}

/// Uniformly draw one remaining answer.
///
/// # Panics
/// If `candidates` is empty.
pub fn random_guess<R: Rng>(candidates: &CandidateSet, bank: &WordBank, rng: &mut R) -> Word {
    assert!(!candidates.is_empty(), "random guess from an empty candidate set");
    let pick = rng.gen_range(0..candidates.len());
    bank.get(candidates.indices()[pick])
}

/// Shannon entropy (bits) of the feedback distribution `guess` produces over
/// the remaining answers.
#[must_use]
pub fn entropy_of(guess: &Word, candidates: &CandidateSet, bank: &WordBank) -> f64 {
    let mut buckets = [0u32; FeedbackPattern::NUM_PATTERNS];
    for &j in candidates.indices() {
        buckets[score_key(&bank.get(j), guess)] += 1;
    }

    let inv_size = 1.0 / candidates.len() as f64;
    buckets
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) * inv_size;
            -p * p.log2()
        })
        .sum()
}

/// The candidate word whose feedback carries the most information. Ties go
/// to the earliest word in candidate order.
///
/// # Panics
/// If `candidates` is empty.
#[must_use]
pub fn max_entropy_guess(candidates: &CandidateSet, bank: &WordBank) -> (Word, EntropyReport) {
    assert!(!candidates.is_empty(), "entropy guess from an empty candidate set");
    if candidates.len() == 1 {
        let report = EntropyReport {
            bits: 0.0,
            evaluated: 0,
        };
        return (bank.get(candidates.indices()[0]), report);
    }

    let guesses = bank.candidates();
    let entropies: Vec<f64> = guesses
        .par_iter()
        .map(|guess| {
            let h = entropy_of(guess, candidates, bank);
            trace_log!("{guess} {h:.6}");
            h
        })
        .collect();

    let mut best = 0;
    let mut best_bits = -1.0;
    for (i, &h) in entropies.iter().enumerate() {
        if h > best_bits {
            best_bits = h;
            best = i;
        }
    }

    let report = EntropyReport {
        bits: best_bits,
        evaluated: entropies.len(),
    };
    (guesses[best], report)
}

/// Read guesses from `interface` until one names a candidate word.
pub fn interactive_guess<I: GameInterface + ?Sized>(
    candidates: &CandidateSet,
    bank: &WordBank,
    interface: &mut I,
) -> Result<Word, GameError> {
    loop {
        let Some(line) = interface.read_line()? else {
            return Err(GameError::InputClosed);
        };
        let input = line.trim();

        if input == LIST_COMMAND {
            let remaining: Vec<Word> = candidates.words(bank).collect();
            interface.display_candidates(&remaining)?;
            continue;
        }

        if let Some(index) = Word::parse(input).and_then(|word| bank.find(&word)) {
            return Ok(bank.get(index));
        }
        interface.display_rejected(input)?;
    }
}
