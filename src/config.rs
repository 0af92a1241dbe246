use crate::consts;
use crate::game::{Playfield, Settings, TurnStep, TurnStepError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Gameplay settings
    #[serde(default)]
    pub(crate) game: GameConfig,

    /// Settings about files the program writes
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("swervesnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized or contained out-of-range values.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawGameConfig")]
pub(crate) struct GameConfig {
    pub(crate) settings: Settings,
    pub(crate) tick_period: Duration,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            settings: Settings::default(),
            tick_period: consts::TICK_PERIOD,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawGameConfig {
    turn_step: u16,
    tick_period_ms: u64,
    columns: u16,
    rows: u16,
}

impl Default for RawGameConfig {
    fn default() -> RawGameConfig {
        RawGameConfig {
            turn_step: consts::DEFAULT_TURN_STEP,
            tick_period_ms: tick_period_millis(consts::TICK_PERIOD),
            columns: consts::DEFAULT_COLUMNS,
            rows: consts::DEFAULT_ROWS,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameConfigError;

    fn try_from(value: RawGameConfig) -> Result<GameConfig, GameConfigError> {
        let turn_step = TurnStep::try_from(value.turn_step)?;
        let playfield = Playfield::new(value.columns, value.rows).ok_or(
            GameConfigError::Playfield {
                columns: value.columns,
                rows: value.rows,
            },
        )?;
        Ok(GameConfig {
            settings: Settings {
                turn_step,
                playfield,
            },
            tick_period: parse_tick_period(value.tick_period_ms)?,
        })
    }
}

/// Convert a tick period in milliseconds to a `Duration`, rejecting zero
pub(crate) fn parse_tick_period(millis: u64) -> Result<Duration, GameConfigError> {
    if millis == 0 {
        Err(GameConfigError::TickPeriod)
    } else {
        Ok(Duration::from_millis(millis))
    }
}

fn tick_period_millis(period: Duration) -> u64 {
    u64::try_from(period.as_millis()).unwrap_or(u64::MAX)
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub(crate) enum GameConfigError {
    #[error(transparent)]
    TurnStep(#[from] TurnStepError),
    #[error("tick period must be positive")]
    TickPeriod,
    #[error(
        "playfield must be {}-{} columns by {}-{} rows, got {columns}x{rows}",
        consts::MIN_COLUMNS,
        consts::MAX_COLUMNS,
        consts::MIN_ROWS,
        consts::MAX_ROWS
    )]
    Playfield { columns: u16, rows: u16 },
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path to which log messages are written.  If not set, nothing is
    /// logged.
    pub(crate) log_file: Option<PathBuf>,
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    log_file: Option<String>,
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = std::io::Error;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, std::io::Error> {
        Ok(FileConfig {
            log_file: value.log_file.map(expanduser::expanduser).transpose()?,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
