mod app;
mod command;
mod config;
mod consts;
mod game;
mod playfield;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use lexopt::{Arg, Parser};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

static USAGE: &str = "\
Usage: gridsnake [<options>]

Steer the snake with the arrow keys (or h j k l, or a s w d) or by clicking
the on-screen D-pad.  Press r to restart and q to quit.

Options:
  -c, --config <path>     Read configuration from the given file
      --log-file <path>   Append log messages to the given file
  -h, --help              Show this help and exit
  -V, --version           Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run { config, log_file })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Cli::Run { config, log_file } => {
                let config = match config {
                    Some(path) => Config::load(&path, false),
                    None => Config::default_path().and_then(|path| Config::load(&path, true)),
                }
                .context("failed to load configuration")?;
                if let Some(path) = log_file.as_deref().or(config.files.log_file.as_deref()) {
                    init_logging(path)?;
                }
                log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));
                play(&config)
            }
            Cli::Help => {
                print!("{USAGE}");
                Ok(())
            }
            Cli::Version => {
                println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Send log messages to `path`.  The terminal itself belongs to the game, so
/// nothing is ever logged to stderr.
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("failed to initialize logging")?;
    Ok(())
}

fn play(config: &Config) -> anyhow::Result<()> {
    let terminal = ratatui::init();
    let r = terminal
        .size()
        .map_err(anyhow::Error::from)
        .and_then(|size| {
            App::new(config, size).context("cannot start game in this terminal")
        })
        .and_then(|app| {
            let mouse = app.wants_mouse();
            if mouse {
                crossterm::execute!(io::stdout(), EnableMouseCapture)?;
            }
            let r = app.run(terminal);
            if mouse {
                crossterm::execute!(io::stdout(), DisableMouseCapture)?;
            }
            r.map_err(Into::into)
        });
    ratatui::restore();
    if let Err(ref e) = r {
        log::error!("{e:?}");
    }
    r
}

fn main() -> ExitCode {
    match Cli::from_parser(Parser::from_env()) {
        Ok(cli) => match cli.run() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Try 'gridsnake --help' for more information.");
            ExitCode::from(2)
        }
    }
}

fn is_broken_pipe(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|ioe| ioe.kind() == io::ErrorKind::BrokenPipe)
}
