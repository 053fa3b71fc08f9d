mod app;
mod command;
mod config;
mod consts;
mod game;
mod record;
mod util;
use crate::app::App;
use crate::config::Config;
use crate::game::Game;
use crate::record::RecordStore;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::from_env() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("slither: {e}");
            return ExitCode::from(2);
        }
    };
    match cli {
        Cli::Run { config } => exit_status(run(config)),
        Cli::Help => {
            println!("Usage: slither [--config <path>]");
            println!();
            println!("Options:");
            println!("  -c, --config <path>  Read configuration from <path>");
            println!("  -h, --help           Show this message and exit");
            println!("  -V, --version        Show the program version and exit");
            ExitCode::SUCCESS
        }
        Cli::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Cli {
    fn from_env() -> Result<Cli, lexopt::Error> {
        let mut config = None;
        let mut parser = Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run { config })
    }
}

fn run(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(&path, false),
        None => Config::load(&Config::default_path()?, true),
    }
    .context("failed to load configuration")?;
    let store = RecordStore::new(config.record_file()?);
    let record = store.load().context("failed to load record")?;
    let game = Game::new(store, record);
    let terminal = ratatui::init();
    let _ = execute!(io::stdout(), EnableMouseCapture);
    let r = App::new(game).run(terminal);
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();
    r
}

fn exit_status(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e)
            if e.downcast_ref::<io::Error>()
                .is_some_and(|ioe| ioe.kind() == ErrorKind::BrokenPipe) =>
        {
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("slither: {e:#}");
            ExitCode::from(2)
        }
    }
}
