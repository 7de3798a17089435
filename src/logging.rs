use chrono::Local;
use log::LevelFilter;
use std::io::Write;

/// Verbosity selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Warnings and errors only
    #[default]
    Error,
    /// Load statistics, seed, game summaries
    Info,
    /// Chosen secret and entropy of each pick
    Verbose,
}

impl Verbosity {
    #[must_use]
    pub fn from_level(level: u8) -> Self {
        match level {
            0 => Verbosity::Error,
            1 => Verbosity::Info,
            _ => Verbosity::Verbose,
        }
    }

    #[must_use]
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Error => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Verbose => LevelFilter::Debug,
        }
    }
}

/// Install the stderr logger. `RUST_LOG` still overrides the level.
pub fn init(verbosity: Verbosity) {
    let _ = env_logger::Builder::new()
        .filter_level(verbosity.level_filter())
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .try_init();
}

// Hot-loop tracing, compiled out of release builds

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        log::trace!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_from_level() {
        assert_eq!(Verbosity::from_level(0), Verbosity::Error);
        assert_eq!(Verbosity::from_level(1), Verbosity::Info);
        assert_eq!(Verbosity::from_level(2), Verbosity::Verbose);
    }

    #[test]
    fn test_level_filters() {
        assert_eq!(Verbosity::Error.level_filter(), LevelFilter::Warn);
        assert_eq!(Verbosity::Info.level_filter(), LevelFilter::Info);
        assert_eq!(Verbosity::Verbose.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(Verbosity::Info);
        init(Verbosity::Verbose);
    }
}
