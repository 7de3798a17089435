use crate::constraints::ConstraintTracker;
use crate::wordbank::{Word, WordBank};

/// Indices into the answer list that are still consistent with every
/// absorbed feedback. Only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    indices: Vec<usize>,
}

/// Returned by `filter` when nothing survives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCandidateSet;

impl CandidateSet {
    /// Every answer in `bank`.
    #[must_use]
    pub fn new(bank: &WordBank) -> Self {
        Self {
            indices: (0..bank.answer_count()).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn words<'a>(&'a self, bank: &'a WordBank) -> impl Iterator<Item = Word> + 'a {
        self.indices.iter().map(|&i| bank.get(i))
    }

    /// Drop every index whose word no longer matches `tracker`.
    ///
    /// The set is left untouched when nothing would survive; the secret
    /// always satisfies its own feedback, so that only happens on a bug.
    pub fn filter(
        &mut self,
        tracker: &ConstraintTracker,
        bank: &WordBank,
    ) -> Result<usize, EmptyCandidateSet> {
        let survivors: Vec<usize> = self
            .indices
            .iter()
            .copied()
            .filter(|&i| tracker.matches(&bank.get(i)))
            .collect();
        if survivors.is_empty() {
            return Err(EmptyCandidateSet);
        }
        self.indices = survivors;
        Ok(self.indices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::referee::score;

    fn bank() -> WordBank {
        WordBank::from_strs("crane\nslate\ntrace\ncrate\nraise\nbeast\n", "zesty\n").unwrap()
    }

    fn absorb(tracker: &mut ConstraintTracker, secret: &str, guess: &str) {
        let guess = Word::parse(guess).unwrap();
        tracker.absorb(&score(&Word::parse(secret).unwrap(), &guess), &guess);
    }

    #[test]
    fn test_starts_with_all_answers() {
        let bank = bank();
        let set = CandidateSet::new(&bank);
        assert_eq!(set.len(), bank.answer_count());
        assert_eq!(set.indices(), &[0, 1, 2, 3, 4, 5]);
        assert!(!set.contains(6)); // guess-only word
    }

    #[test]
    fn test_filter_shrinks_and_keeps_secret() {
        let bank = bank();
        let secret = bank.find(&Word::parse("crate").unwrap()).unwrap();
        let mut set = CandidateSet::new(&bank);
        let mut tracker = ConstraintTracker::new();

        for guess in ["beast", "slate", "trace"] {
            let before = set.len();
            absorb(&mut tracker, "crate", guess);
            let after = set.filter(&tracker, &bank).unwrap();
            assert!(after <= before);
            assert!(set.contains(secret));
        }
    }

    #[test]
    fn test_filter_to_zero_is_an_error() {
        let bank = bank();
        let mut set = CandidateSet::new(&bank);
        let mut tracker = ConstraintTracker::new();
        // Feedback that no answer can satisfy.
        absorb(&mut tracker, "zesty", "crane");
        absorb(&mut tracker, "zesty", "beast");
        absorb(&mut tracker, "zesty", "raise");

        assert_eq!(set.filter(&tracker, &bank), Err(EmptyCandidateSet));
        assert_eq!(set.len(), bank.answer_count());
    }

    #[test]
    fn test_words_iterates_survivors() {
        let bank = bank();
        let mut set = CandidateSet::new(&bank);
        let mut tracker = ConstraintTracker::new();
        absorb(&mut tracker, "crane", "crane");
        set.filter(&tracker, &bank).unwrap();
        let words: Vec<String> = set.words(&bank).map(|w| w.to_string()).collect();
        assert_eq!(words, vec!["crane"]);
    }
}
