use crate::referee::{Feedback, FeedbackPattern};
use crate::wordbank::{WORD_LENGTH, Word};

/// Set of letters `a..=z`, one bit per letter (`a` is bit 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterSet(u32);

impl LetterSet {
    fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase());
        1 << (letter - b'a')
    }

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Letters of `word`.
    #[must_use]
    pub fn of_word(word: &Word) -> Self {
        Self(word.letters().iter().fold(0, |acc, &c| acc | Self::bit(c)))
    }

    pub fn add(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0 & Self::bit(letter) != 0
    }

    #[must_use]
    pub fn is_subset(&self, other: &LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

/// Everything learned from the feedback of the game so far.
#[derive(Debug, Clone, Default)]
pub struct ConstraintTracker {
    fixed: [Option<u8>; WORD_LENGTH],
    must_contain: LetterSet,
    forbidden: [LetterSet; WORD_LENGTH],
}

impl ConstraintTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one turn's feedback into the tracker.
    ///
    /// A hit fixes the position. Any other symbol forbids the letter at
    /// that position; an absent letter is forbidden everywhere. Present
    /// and hit letters must appear somewhere.
    pub fn absorb(&mut self, pattern: &FeedbackPattern, guess: &Word) {
        for (i, (&c, &symbol)) in guess.letters().iter().zip(pattern.symbols()).enumerate() {
            if symbol == Feedback::Hit {
                self.fixed[i] = Some(c);
            } else {
                self.forbidden[i].add(c);
            }

            if symbol == Feedback::Absent {
                for set in &mut self.forbidden {
                    set.add(c);
                }
            } else {
                self.must_contain.add(c);
            }
        }
    }

    /// Whether `word` is consistent with everything absorbed so far.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        for (i, &c) in word.letters().iter().enumerate() {
            if self.fixed[i].is_some_and(|fixed| fixed != c) {
                return false;
            }
            if self.forbidden[i].contains(c) {
                return false;
            }
        }
        self.must_contain.is_subset(&LetterSet::of_word(word))
    }

    #[must_use]
    pub fn fixed_letter(&self, position: usize) -> Option<u8> {
        self.fixed[position]
    }

    #[must_use]
    pub fn must_contain(&self) -> LetterSet {
        self.must_contain
    }

    #[must_use]
    pub fn forbidden_at(&self, position: usize) -> LetterSet {
        self.forbidden[position]
    }
}
