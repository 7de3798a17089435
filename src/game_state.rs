use crate::candidates::CandidateSet;
use crate::constraints::ConstraintTracker;
use crate::error::GameError;
use crate::referee::{FeedbackPattern, score};
use crate::solver::{EntropyReport, Selection, Strategy};
use crate::wordbank::{Word, WordBank};
use log::{debug, info};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;

/// Guesses allowed per game.
pub const MAX_TURNS: usize = 16;

/// Everything the game loop needs from the outside world.
pub trait GameInterface {
    /// Next line from the guess input channel; `None` once it is closed.
    fn read_line(&mut self) -> io::Result<Option<String>>;
    fn display_candidates(&mut self, words: &[Word]) -> io::Result<()>;
    fn display_rejected(&mut self, input: &str) -> io::Result<()>;
    fn display_turn(&mut self, report: &TurnReport) -> io::Result<()>;
    fn display_summary(&mut self, summary: &GameSummary) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    AwaitingGuess,
    AwaitingFeedback,
    Won,
    Lost,
}

impl GamePhase {
    #[must_use]
    pub fn is_over(self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// One scored guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnReport {
    /// 1-based
    pub turn: usize,
    pub guess: Word,
    pub pattern: FeedbackPattern,
    /// Candidates left after filtering
    pub remaining: usize,
    pub entropy: Option<EntropyReport>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { turns: usize },
    Lost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub secret: Word,
    pub outcome: Outcome,
    pub history: Vec<TurnReport>,
}

/// One game against a fixed secret.
///
/// `AwaitingGuess -> AwaitingFeedback -> AwaitingGuess ...` until a win or
/// until `MAX_TURNS` guesses have been scored.
#[derive(Debug)]
pub struct Game<'a> {
    bank: &'a WordBank,
    secret: Word,
    tracker: ConstraintTracker,
    candidates: CandidateSet,
    phase: GamePhase,
    pending: Option<Selection>,
    history: Vec<TurnReport>,
}

impl<'a> Game<'a> {
    /// # Panics
    /// If `secret` is not one of the bank's answers.
    #[must_use]
    pub fn new(bank: &'a WordBank, secret: Word) -> Self {
        assert!(bank.contains(&secret), "secret {secret} is not an answer");
        Self {
            bank,
            secret,
            tracker: ConstraintTracker::new(),
            candidates: CandidateSet::new(bank),
            phase: GamePhase::AwaitingGuess,
            pending: None,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[must_use]
    pub fn tracker(&self) -> &ConstraintTracker {
        &self.tracker
    }

    #[must_use]
    pub fn history(&self) -> &[TurnReport] {
        &self.history
    }

    /// Commit the next guess.
    ///
    /// # Panics
    /// Unless the game is awaiting a guess.
    pub fn submit(&mut self, selection: Selection) {
        assert_eq!(self.phase, GamePhase::AwaitingGuess, "guess submitted out of turn");
        self.pending = Some(selection);
        self.phase = GamePhase::AwaitingFeedback;
    }

    /// Score the pending guess, fold its feedback in and filter candidates.
    ///
    /// # Panics
    /// Unless a guess is pending.
    pub fn resolve(&mut self) -> Result<TurnReport, GameError> {
        assert_eq!(self.phase, GamePhase::AwaitingFeedback, "no guess to score");
        let Some(selection) = self.pending.take() else {
            unreachable!("AwaitingFeedback always holds a pending guess");
        };
        let guess = selection.word;

        let pattern = score(&self.secret, &guess);
        self.tracker.absorb(&pattern, &guess);
        let remaining = self
            .candidates
            .filter(&self.tracker, self.bank)
            .map_err(|_| GameError::EmptyCandidateSet { guess, pattern })?;

        let report = TurnReport {
            turn: self.history.len() + 1,
            guess,
            pattern,
            remaining,
            entropy: selection.entropy,
        };
        self.history.push(report);

        self.phase = if pattern.is_win() {
            GamePhase::Won
        } else if self.history.len() >= MAX_TURNS {
            GamePhase::Lost
        } else {
            GamePhase::AwaitingGuess
        };
        Ok(report)
    }

    /// # Panics
    /// While the game is still running.
    #[must_use]
    pub fn into_summary(self) -> GameSummary {
        let outcome = match self.phase {
            GamePhase::Won => Outcome::Won {
                turns: self.history.len(),
            },
            GamePhase::Lost => Outcome::Lost,
            phase => panic!("game still running ({phase:?})"),
        };
        GameSummary {
            secret: self.secret,
            outcome,
            history: self.history,
        }
    }
}

/// Totals over all games of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games: usize,
    pub wins: usize,
    /// Sum of turns over won games
    pub won_turns: usize,
}

impl SessionStats {
    fn record(&mut self, summary: &GameSummary) {
        self.games += 1;
        if let Outcome::Won { turns } = summary.outcome {
            self.wins += 1;
            self.won_turns += turns;
        }
    }

    /// Mean guesses per won game.
    #[must_use]
    pub fn average_turns(&self) -> Option<f64> {
        (self.wins > 0).then(|| self.won_turns as f64 / self.wins as f64)
    }
}

/// Strategy, RNG and optional forced secret shared by consecutive games.
pub struct Session<'a> {
    bank: &'a WordBank,
    strategy: Strategy,
    rng: ChaCha8Rng,
    answer: Option<Word>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(bank: &'a WordBank, strategy: Strategy, seed: u64, answer: Option<Word>) -> Self {
        Self {
            bank,
            strategy,
            rng: ChaCha8Rng::seed_from_u64(seed),
            answer,
        }
    }

    /// The forced answer, or a uniform draw from the answers.
    pub fn choose_secret(&mut self) -> Word {
        if let Some(answer) = self.answer {
            return answer;
        }
        let secret = self.bank.get(self.rng.gen_range(0..self.bank.answer_count()));
        debug!("answer:{secret}");
        secret
    }

    /// Play one full game.
    pub fn play_game<I: GameInterface + ?Sized>(
        &mut self,
        interface: &mut I,
    ) -> Result<GameSummary, GameError> {
        let secret = self.choose_secret();
        let mut game = Game::new(self.bank, secret);

        while !game.phase().is_over() {
            let selection =
                self.strategy
                    .select(game.candidates(), self.bank, &mut self.rng, interface)?;
            game.submit(selection);
            let report = game.resolve()?;
            interface.display_turn(&report)?;
        }

        let summary = game.into_summary();
        match summary.outcome {
            Outcome::Won { turns } => info!("solved {} in {turns} turns", summary.secret),
            Outcome::Lost => info!("gave up on {} after {MAX_TURNS} turns", summary.secret),
        }
        interface.display_summary(&summary)?;
        Ok(summary)
    }

    /// Play `games` games in a row.
    pub fn run<I: GameInterface + ?Sized>(
        &mut self,
        games: usize,
        interface: &mut I,
    ) -> Result<SessionStats, GameError> {
        let mut stats = SessionStats::default();
        for _ in 0..games {
            let summary = self.play_game(interface)?;
            stats.record(&summary);
        }
        Ok(stats)
    }
}
