mod app;
mod cli;
mod command;
mod config;
mod consts;
mod game;
mod highscore;
mod menu;
mod options;
mod sound;
mod util;
use crate::app::{App, Context};
use crate::cli::{Arguments, Invocation};
use crate::config::Config;
use crate::highscore::HighScore;
use crate::sound::{Bell, Silent, Sound};
use anyhow::Context as _;
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e
                .downcast_ref::<io::Error>()
                .is_some_and(|e| e.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) if e.is::<lexopt::Error>() => {
            eprintln!("snakegrid: {e}");
            eprintln!("Run `snakegrid --help` for usage");
            ExitCode::from(2)
        }
        Err(e) => {
            log::error!("Fatal error: {e:#}");
            eprintln!("snakegrid: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let args = match Invocation::from_parser(lexopt::Parser::from_env())? {
        Invocation::Run(args) => args,
        Invocation::Help => {
            print!("{}", cli::HELP);
            return Ok(());
        }
        Invocation::Version => {
            println!("snakegrid {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
    };
    let config = load_config(&args)?;
    if let Some(path) = args.log_file.as_ref().or(config.files.log_file.as_ref()) {
        init_logging(path)?;
    }
    log::info!("snakegrid {} starting", env!("CARGO_PKG_VERSION"));
    let ctx = build_context(&args, &config);
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableFocusChange).and_then(|()| App::new(ctx).run(terminal));
    if let Err(e) = execute!(io::stdout(), DisableFocusChange) {
        log::warn!("Failed to disable focus change reporting: {e}");
    }
    ratatui::restore();
    r?;
    Ok(())
}

/// Read the configuration file named on the command line or, failing that,
/// the default configuration file if it exists
fn load_config(args: &Arguments) -> anyhow::Result<Config> {
    let config = match args.config {
        Some(ref path) => Config::load(path, false)?,
        None => match Config::default_path() {
            Ok(path) => Config::load(&path, true)?,
            Err(_) => Config::default(),
        },
    };
    Ok(config)
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    WriteLogger::init(LevelFilter::Debug, simplelog::Config::default(), file)
        .context("failed to initialize logger")?;
    Ok(())
}

/// Combine the configuration file with command-line overrides
fn build_context(args: &Arguments, config: &Config) -> Context {
    let sound: Box<dyn Sound> = if config.sound && !args.mute {
        Box::new(Bell::new(io::stdout()))
    } else {
        log::info!("Sound is disabled");
        Box::new(Silent)
    };
    Context {
        high_score: HighScore::load(config.high_score_store()),
        sound,
        difficulty: args.difficulty.unwrap_or(config.difficulty),
        grid: config.grid_size,
    }
}
