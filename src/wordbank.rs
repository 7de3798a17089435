use crate::error::LoadError;
use log::info;
use std::fmt;
use std::fs;
use std::path::Path;

pub const WORD_LENGTH: usize = 5;

/// File holding the answer words.
pub const ANSWERS_FILE: &str = "easy.txt";
/// File holding the extra guess-only words.
pub const EXTENDED_FILE: &str = "hard.txt";

/// A fixed-length lowercase word.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    /// Parse `text` as a word. Returns `None` unless it is exactly
    /// `WORD_LENGTH` bytes in `a..=z`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let bytes: [u8; WORD_LENGTH] = text.as_bytes().try_into().ok()?;
        bytes.iter().all(u8::is_ascii_lowercase).then_some(Self(bytes))
    }

    #[must_use]
    pub fn letters(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        // Only ever built from validated ASCII.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self.as_str())
    }
}

/// One newline-delimited word list, named for error reporting.
pub struct WordSource {
    name: String,
    data: Vec<u8>,
}

impl WordSource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(path.display().to_string(), data))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self) -> Result<Vec<Word>, LoadError> {
        let record = WORD_LENGTH + 1;
        let mut words = Vec::with_capacity(self.data.len() / record);
        for (i, chunk) in self.data.chunks(record).enumerate() {
            let line = i + 1;
            if chunk.len() < record {
                return Err(LoadError::Truncated {
                    name: self.name.clone(),
                    line,
                });
            }
            if chunk[WORD_LENGTH] != b'\n' {
                return Err(LoadError::InvalidDelimiter {
                    name: self.name.clone(),
                    line,
                });
            }
            let mut letters = [0u8; WORD_LENGTH];
            for (j, &b) in chunk[..WORD_LENGTH].iter().enumerate() {
                if !b.is_ascii_lowercase() {
                    return Err(LoadError::InvalidChar {
                        name: self.name.clone(),
                        line,
                        column: j + 1,
                        found: char::from(b),
                    });
                }
                letters[j] = b;
            }
            words.push(Word(letters));
        }
        Ok(words)
    }
}

/// Loaded word lists. `answers` is always a prefix of `candidates`.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<Word>,
    answer_count: usize,
}

impl WordBank {
    /// Build a bank from `sources`. The first source supplies the answers,
    /// every source (the first included) supplies candidates.
    pub fn load(sources: &[WordSource]) -> Result<Self, LoadError> {
        let (first, rest) = sources.split_first().ok_or(LoadError::NoSources)?;

        let mut words = first.parse()?;
        if words.is_empty() {
            return Err(LoadError::NoAnswers {
                name: first.name.clone(),
            });
        }
        info!("{} : {} words", first.name, words.len());
        let answer_count = words.len();

        for source in rest {
            words.extend(source.parse()?);
            info!("{} : {} words", source.name, words.len());
        }

        Ok(Self {
            words,
            answer_count,
        })
    }

    /// Load `easy.txt` (and `hard.txt` when `extended`) from `dir`.
    pub fn load_dir<P: AsRef<Path>>(dir: P, extended: bool) -> Result<Self, LoadError> {
        let dir = dir.as_ref();
        let mut sources = vec![WordSource::from_file(dir.join(ANSWERS_FILE))?];
        if extended {
            sources.push(WordSource::from_file(dir.join(EXTENDED_FILE))?);
        }
        Self::load(&sources)
    }

    /// Convenience for tests and embedding: answers and extra guesses as text.
    pub fn from_strs(answers: &str, extra: &str) -> Result<Self, LoadError> {
        Self::load(&[
            WordSource::new("answers", answers),
            WordSource::new("extra", extra),
        ])
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answer_count
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.words[..self.answer_count]
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.words
    }

    /// Word at `index` in the candidate list.
    ///
    /// # Panics
    /// If `index` is out of range; callers only hold indices from this bank.
    #[must_use]
    pub fn get(&self, index: usize) -> Word {
        assert!(
            index < self.words.len(),
            "word index {index} out of range ({})",
            self.words.len()
        );
        self.words[index]
    }

    /// Whether `word` is one of the answers.
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.answers().contains(word)
    }

    /// Candidate index of `word`, if it is guessable.
    #[must_use]
    pub fn find(&self, word: &Word) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }
}
