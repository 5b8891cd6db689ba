use crate::consts::{self, GRID_SIZE};
use crate::game::{Bounds, Position};
use crate::playfield::board_block_size;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Board size & game speed
    #[serde(default)]
    pub(crate) board: BoardConfig,

    /// Input settings
    #[serde(default)]
    pub(crate) controls: ControlsConfig,

    /// Settings about files written by the program
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if the board settings are invalid.
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

/// The board's size and the time between ticks
#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawBoardConfig")]
pub(crate) struct BoardConfig {
    pub(crate) bounds: Bounds,
    pub(crate) tick_period: Duration,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            bounds: Bounds::default(),
            tick_period: consts::TICK_PERIOD,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawBoardConfig {
    width: i32,
    height: i32,
    tick_ms: u64,
}

impl Default for RawBoardConfig {
    fn default() -> RawBoardConfig {
        RawBoardConfig {
            width: consts::BOARD_WIDTH,
            height: consts::BOARD_HEIGHT,
            tick_ms: consts::TICK_MILLIS,
        }
    }
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = BoardError;

    fn try_from(value: RawBoardConfig) -> Result<BoardConfig, BoardError> {
        let RawBoardConfig {
            width,
            height,
            tick_ms,
        } = value;
        for (name, size) in [("width", width), ("height", height)] {
            if size <= 0 || size % GRID_SIZE != 0 {
                return Err(BoardError::Misaligned { name, size });
            }
        }
        let bounds = Bounds::new(width, height);
        if board_block_size(bounds).is_none() {
            return Err(BoardError::TooLarge { width, height });
        }
        let fits_snake = consts::START_SNAKE
            .into_iter()
            .all(|p| bounds.contains(Position::from(p)));
        if !fits_snake || bounds.cell_count() <= consts::START_SNAKE.len() {
            return Err(BoardError::TooSmall { width, height });
        }
        if tick_ms == 0 {
            return Err(BoardError::ZeroTick);
        }
        Ok(BoardConfig {
            bounds,
            tick_period: Duration::from_millis(tick_ms),
        })
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum BoardError {
    #[error("board {name} {size} is not a positive multiple of {grid}", grid = GRID_SIZE)]
    Misaligned { name: &'static str, size: i32 },
    #[error("board of {width}×{height} is too large to display")]
    TooLarge { width: i32, height: i32 },
    #[error("board of {width}×{height} has no room for the snake to start")]
    TooSmall { width: i32, height: i32 },
    #[error("tick-ms must be greater than zero")]
    ZeroTick,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct ControlsConfig {
    /// Whether to show the clickable D-pad
    pub(crate) dpad: bool,
}

impl Default for ControlsConfig {
    fn default() -> ControlsConfig {
        ControlsConfig { dpad: true }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// File to write log messages to.  If not set, nothing is logged.
    pub(crate) log_file: Option<PathBuf>,
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
