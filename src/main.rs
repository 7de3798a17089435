use log::info;
use std::process::ExitCode;
use wordle_autoplay::cli::{CliInterface, parse_cli};
use wordle_autoplay::logging;
use wordle_autoplay::{AppError, Session, WordBank};

fn run() -> Result<(), AppError> {
    let config = parse_cli().into_config()?;
    logging::init(config.verbosity);
    info!("seed: {}", config.seed);

    let bank = WordBank::load_dir(&config.dict_dir, config.extended)?;
    config.check_answer(&bank)?;

    let mut session = Session::new(&bank, config.strategy, config.seed, config.answer);
    let mut interface = CliInterface::stdio();
    let stats = session.run(config.games, &mut interface)?;
    if config.games > 1 {
        interface
            .display_stats(&stats)
            .map_err(wordle_autoplay::GameError::from)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
