use crate::error::ConfigError;
use crate::game_state::{GameInterface, GameSummary, MAX_TURNS, Outcome, SessionStats, TurnReport};
use crate::logging::Verbosity;
use crate::solver::Strategy;
use crate::wordbank::{ANSWERS_FILE, Word, WordBank};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DATA_DIR_NAME: &str = "wordle-autoplay";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SolverKind {
    Random,
    Entropy,
    Interactive,
}

impl From<SolverKind> for Strategy {
    fn from(kind: SolverKind) -> Self {
        match kind {
            SolverKind::Random => Strategy::Random,
            SolverKind::Entropy => Strategy::MaxEntropy,
            SolverKind::Interactive => Strategy::Interactive,
        }
    }
}

/// Wordle autoplayer: guesses a hidden word with a random, entropy or
/// human-driven strategy
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Guess selection strategy
    #[arg(long, value_enum, default_value_t = SolverKind::Random)]
    pub solver: SolverKind,

    /// RNG seed; drawn from the OS when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Force the secret word
    #[arg(long)]
    pub answer: Option<String>,

    /// Also accept guesses from hard.txt
    #[arg(long = "use-hard")]
    pub use_hard: bool,

    /// 0 = errors, 1 = info, 2 = verbose
    #[arg(long = "log-level", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub log_level: u8,

    /// Directory holding easy.txt and hard.txt
    #[arg(long = "dict-dir")]
    pub dict_dir: Option<PathBuf>,

    /// Number of games to play
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub games: u32,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub strategy: Strategy,
    pub seed: u64,
    pub answer: Option<Word>,
    pub extended: bool,
    pub verbosity: Verbosity,
    pub dict_dir: PathBuf,
    pub games: usize,
}

impl Cli {
    /// Validate flags that clap cannot check on its own.
    pub fn into_config(self) -> Result<SessionConfig, ConfigError> {
        let answer = match self.answer {
            Some(text) => Some(Word::parse(&text).ok_or(ConfigError::InvalidAnswer(text))?),
            None => None,
        };
        Ok(SessionConfig {
            strategy: self.solver.into(),
            seed: self.seed.unwrap_or_else(rand::random),
            answer,
            extended: self.use_hard,
            verbosity: Verbosity::from_level(self.log_level),
            dict_dir: resolve_dict_dir(self.dict_dir, PathBuf::from("."), dirs::data_dir()),
            games: self.games as usize,
        })
    }
}

impl SessionConfig {
    /// Check the forced answer against the loaded answers.
    pub fn check_answer(&self, bank: &WordBank) -> Result<(), ConfigError> {
        match self.answer {
            Some(answer) if !bank.contains(&answer) => {
                Err(ConfigError::UnknownAnswer(answer.to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// Explicit directory, else `cwd` if it has the answer list, else the
/// per-user data directory if it has one, else `cwd`.
fn resolve_dict_dir(explicit: Option<PathBuf>, cwd: PathBuf, data_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }
    if has_answers(&cwd) {
        return cwd;
    }
    data_dir
        .map(|dir| dir.join(DATA_DIR_NAME))
        .filter(|dir| has_answers(dir))
        .unwrap_or(cwd)
}

fn has_answers(dir: &Path) -> bool {
    dir.join(ANSWERS_FILE).is_file()
}

/// Line-based terminal front end.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    pub fn display_stats(&mut self, stats: &SessionStats) -> io::Result<()> {
        write!(self.writer, "{} games, {} won", stats.games, stats.wins)?;
        if let Some(avg) = stats.average_turns() {
            write!(self.writer, ", {avg:.3} turns on average")?;
        }
        writeln!(self.writer)
    }
}

impl CliInterface<io::StdinLock<'static>, io::Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.writer, "INPUT: ")?;
        self.writer.flush()?;
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn display_candidates(&mut self, words: &[Word]) -> io::Result<()> {
        for word in words {
            write!(self.writer, "{word} ")?;
        }
        writeln!(self.writer)
    }

    fn display_rejected(&mut self, input: &str) -> io::Result<()> {
        writeln!(self.writer, "unknown word: {input}")
    }

    fn display_turn(&mut self, report: &TurnReport) -> io::Result<()> {
        writeln!(
            self.writer,
            "{} [{}] {:3}",
            report.guess, report.pattern, report.remaining
        )
    }

    fn display_summary(&mut self, summary: &GameSummary) -> io::Result<()> {
        match summary.outcome {
            Outcome::Won { turns } => writeln!(self.writer, "won in {turns} turns"),
            Outcome::Lost => writeln!(
                self.writer,
                "lost after {MAX_TURNS} turns, answer was {}",
                summary.secret
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::referee::score;
    use std::io::Cursor;

    fn w(s: &str) -> Word {
        Word::parse(s).unwrap()
    }

    fn interface(input: &str) -> CliInterface<Cursor<&str>, Vec<u8>> {
        CliInterface::new(Cursor::new(input), Vec::new())
    }

    fn output(io: CliInterface<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(io.into_writer()).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["wordle-autoplay"]).unwrap();
        assert_eq!(cli.solver, SolverKind::Random);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.answer, None);
        assert!(!cli.use_hard);
        assert_eq!(cli.log_level, 0);
        assert_eq!(cli.games, 1);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "wordle-autoplay",
            "--solver",
            "entropy",
            "--seed",
            "42",
            "--answer",
            "crane",
            "--use-hard",
            "--log-level",
            "2",
            "--dict-dir",
            "/tmp/words",
            "--games",
            "3",
        ])
        .unwrap();

        let config = cli.into_config().unwrap();
        assert_eq!(config.strategy, Strategy::MaxEntropy);
        assert_eq!(config.seed, 42);
        assert_eq!(config.answer, Some(w("crane")));
        assert!(config.extended);
        assert_eq!(config.verbosity, Verbosity::Verbose);
        assert_eq!(config.dict_dir, PathBuf::from("/tmp/words"));
        assert_eq!(config.games, 3);
    }

    #[test]
    fn test_unknown_solver_rejected() {
        assert!(Cli::try_parse_from(["wordle-autoplay", "--solver", "greedy"]).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["wordle-autoplay", "--fast"]).is_err());
    }

    #[test]
    fn test_missing_flag_argument_rejected() {
        assert!(Cli::try_parse_from(["wordle-autoplay", "--seed"]).is_err());
    }

    #[test]
    fn test_log_level_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["wordle-autoplay", "--log-level", "3"]).is_err());
        assert!(Cli::try_parse_from(["wordle-autoplay", "--games", "0"]).is_err());
    }

    #[test]
    fn test_malformed_answer_is_config_error() {
        let cli = Cli::try_parse_from(["wordle-autoplay", "--answer", "Crane"]).unwrap();
        assert!(matches!(cli.into_config(), Err(ConfigError::InvalidAnswer(a)) if a == "Crane"));
    }

    #[test]
    fn test_answer_must_be_in_answer_list() {
        let bank = WordBank::from_strs("crane\n", "zesty\n").unwrap();
        let cli = Cli::try_parse_from(["wordle-autoplay", "--answer", "zesty"]).unwrap();
        let config = cli.into_config().unwrap();
        assert!(matches!(config.check_answer(&bank), Err(ConfigError::UnknownAnswer(_))));

        let cli = Cli::try_parse_from(["wordle-autoplay", "--answer", "crane"]).unwrap();
        assert!(cli.into_config().unwrap().check_answer(&bank).is_ok());
    }

    #[test]
    fn test_resolve_dict_dir_prefers_explicit() {
        let dir = resolve_dict_dir(Some(PathBuf::from("/srv/words")), PathBuf::from("."), None);
        assert_eq!(dir, PathBuf::from("/srv/words"));
    }

    #[test]
    fn test_resolve_dict_dir_fallbacks() {
        let root = std::env::temp_dir().join("wordle_autoplay_resolve");
        let cwd = root.join("cwd");
        let data = root.join("data");
        let words = data.join(DATA_DIR_NAME);
        std::fs::create_dir_all(&cwd).unwrap();
        std::fs::create_dir_all(&words).unwrap();

        // Nothing anywhere: the working directory, so the load error names it.
        assert_eq!(resolve_dict_dir(None, cwd.clone(), Some(data.clone())), cwd);

        std::fs::write(words.join(ANSWERS_FILE), "crane\n").unwrap();
        assert_eq!(resolve_dict_dir(None, cwd.clone(), Some(data.clone())), words);

        std::fs::write(cwd.join(ANSWERS_FILE), "crane\n").unwrap();
        assert_eq!(resolve_dict_dir(None, cwd.clone(), Some(data.clone())), cwd);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_read_line_prompts_and_detects_eof() {
        let mut io = interface("crane\n");
        assert_eq!(io.read_line().unwrap().as_deref(), Some("crane\n"));
        assert_eq!(io.read_line().unwrap(), None);
        assert_eq!(output(io), "INPUT: INPUT: ");
    }

    #[test]
    fn test_turn_line_format() {
        let mut io = interface("");
        let guess = w("grape");
        let report = TurnReport {
            turn: 1,
            guess,
            pattern: score(&w("apple"), &guess),
            remaining: 7,
            entropy: None,
        };
        io.display_turn(&report).unwrap();
        assert_eq!(output(io), "grape [..??o]   7\n");
    }

    #[test]
    fn test_summary_and_candidates_output() {
        let mut io = interface("");
        io.display_candidates(&[w("crane"), w("slate")]).unwrap();
        io.display_summary(&GameSummary {
            secret: w("crane"),
            outcome: Outcome::Lost,
            history: Vec::new(),
        })
        .unwrap();
        io.display_stats(&SessionStats {
            games: 2,
            wins: 1,
            won_turns: 3,
        })
        .unwrap();
        assert_eq!(
            output(io),
            "crane slate \nlost after 16 turns, answer was crane\n2 games, 1 won, 3.000 turns on average\n"
        );
    }
}
