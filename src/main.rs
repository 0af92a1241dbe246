mod app;
mod command;
mod config;
mod consts;
mod game;
mod matrix;
mod play;
mod random;
mod util;
use crate::app::App;
use crate::config::{parse_tick_period, Config};
use crate::game::TurnStep;
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Arguments),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("turn-step") => {
                    args.turn_step = Some(parser.value()?.parse::<TurnStep>()?);
                }
                Arg::Long("tick-ms") => {
                    let millis = parser.value()?.parse::<u64>()?;
                    args.tick_period = Some(parse_tick_period(millis).map_err(|e| {
                        lexopt::Error::ParsingFailed {
                            value: millis.to_string(),
                            error: Box::new(e),
                        }
                    })?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(args))
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Arguments {
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    turn_step: Option<TurnStep>,
    tick_period: Option<Duration>,
}

impl Arguments {
    fn run(self) -> anyhow::Result<io::Result<()>> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path, false),
            None => Config::load(&Config::default_path()?, true),
        }
        .context("failed to load configuration")?;
        if let Some(step) = self.turn_step {
            config.game.settings.turn_step = step;
        }
        if let Some(period) = self.tick_period {
            config.game.tick_period = period;
        }
        if let Some(path) = self.log_file {
            config.files.log_file = Some(path);
        }
        if let Some(ref path) = config.files.log_file {
            init_logging(path)?;
        }
        log::info!(
            "Starting swervesnake {}: turn step {}, tick period {:?}",
            env!("CARGO_PKG_VERSION"),
            config.game.settings.turn_step,
            config.game.tick_period,
        );
        let terminal = ratatui::init();
        let r = App::new(config.game.settings, config.game.tick_period).run(terminal);
        ratatui::restore();
        Ok(r)
    }
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();
    WriteLogger::init(LevelFilter::Debug, config, file).context("failed to install logger")?;
    Ok(())
}

fn main() -> ExitCode {
    match Command::from_parser(Parser::from_env()) {
        Ok(Command::Run(args)) => match args.run() {
            Ok(r) => io_exit(r),
            Err(e) => {
                eprintln!("swervesnake: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Command::Help) => {
            println!("Usage: swervesnake [-c|--config <FILE>] [--log-file <FILE>]");
            println!("                   [--turn-step <DEG>] [--tick-ms <MS>]");
            println!();
            println!("Snake with free steering");
            println!();
            println!("Options:");
            println!("  -c <FILE>, --config <FILE>");
            println!("                    Read configuration from the given file");
            println!();
            println!("  --log-file <FILE> Write log messages to the given file");
            println!();
            println!("  --turn-step <DEG> Turn by the given number of degrees per");
            println!("                    keypress [default: 30]");
            println!();
            println!("  --tick-ms <MS>    Move the snake every <MS> milliseconds");
            println!("                    [default: 300]");
            println!();
            println!("  -h, --help        Display this help message and exit");
            println!("  -V, --version     Show the program version and exit");
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("swervesnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("swervesnake: {e}");
            eprintln!("Usage: swervesnake [-c|--config <FILE>] [--log-file <FILE>] [--turn-step <DEG>] [--tick-ms <MS>]");
            ExitCode::from(2)
        }
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("swervesnake: {e}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_iter(
            std::iter::once("swervesnake").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Command::Run(Arguments::default()));
    }

    #[test]
    fn all_args() {
        assert_eq!(
            parse(&[
                "-c",
                "snake.toml",
                "--log-file=snake.log",
                "--turn-step",
                "45",
                "--tick-ms",
                "100"
            ])
            .unwrap(),
            Command::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("snake.log")),
                turn_step: Some(TurnStep::new(45).unwrap()),
                tick_period: Some(Duration::from_millis(100)),
            })
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["--turn-step", "45", "-h"]).unwrap(), Command::Help);
        assert_eq!(parse(&["--version"]).unwrap(), Command::Version);
    }

    #[test]
    fn bad_turn_step() {
        assert!(parse(&["--turn-step", "400"]).is_err());
        assert!(parse(&["--turn-step", "left"]).is_err());
    }

    #[test]
    fn zero_tick_period() {
        assert!(parse(&["--tick-ms", "0"]).is_err());
    }

    #[test]
    fn unexpected_argument() {
        assert!(parse(&["--columns", "20"]).is_err());
        assert!(parse(&["extra"]).is_err());
    }
}
