//! Game configuration
//!
//! Settings come from a TOML file when one is found, otherwise from the
//! built-in defaults, and environment variables override either:
//!
//! ```toml
//! board_size = 9
//! seed = 7
//!
//! [player1]
//! name = "mini"
//! kind = "minimax"
//! depth = 2
//!
//! [player2]
//! name = "alpha"
//! kind = "alpha-beta"
//! depth = 2
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::board::{Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::{GameError, Result};
use crate::player::{Player, PlayerKind};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "gomoku.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "GOMOKU_CONFIG";

pub const DEFAULT_BOARD_SIZE: usize = 9;
pub const DEFAULT_DEPTH: u8 = 2;

fn d_board_size() -> usize {
    DEFAULT_BOARD_SIZE
}
fn d_depth() -> u8 {
    DEFAULT_DEPTH
}
fn d_player1() -> PlayerConfig {
    PlayerConfig::new("mini", PlayerKind::Minimax, DEFAULT_DEPTH)
}
fn d_player2() -> PlayerConfig {
    PlayerConfig::new("alpha", PlayerKind::AlphaBeta, DEFAULT_DEPTH)
}

/// One seat at the table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub kind: PlayerKind,
    /// Search depth, ignored for humans
    #[serde(default = "d_depth")]
    pub depth: u8,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, kind: PlayerKind, depth: u8) -> Self {
        Self {
            name: name.into(),
            kind,
            depth,
        }
    }
}

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    #[serde(default = "d_board_size")]
    pub board_size: usize,
    /// Base seed for AI tie-breaks; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Plays White and moves first
    #[serde(default = "d_player1")]
    pub player1: PlayerConfig,
    #[serde(default = "d_player2")]
    pub player2: PlayerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: d_board_size(),
            seed: None,
            player1: d_player1(),
            player2: d_player2(),
        }
    }
}

impl GameConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a config file, failing on any error.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            operation: format!("read {}", path.display()),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Check the ranges a game session accepts.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(GameError::InvalidBoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            });
        }
        for (number, player) in [(1, &self.player1), (2, &self.player2)] {
            if player.name.trim().is_empty() {
                return Err(GameError::InvalidConfiguration {
                    message: format!("player {number} needs a name"),
                });
            }
            if player.kind.is_ai() && player.depth == 0 {
                return Err(GameError::InvalidDepth {
                    depth: u32::from(player.depth),
                });
            }
        }
        Ok(())
    }

    /// Build both players. Player 1 plays White.
    ///
    /// With a base seed, player `n` seeds its tie-breaks with `seed + n`, so
    /// the same config replays the same game.
    pub fn build_players(&self) -> Result<[Player; 2]> {
        self.validate()?;
        let seat = |number: u64, config: &PlayerConfig, stone: Stone| {
            Player::new(
                config.name.trim(),
                stone,
                config.kind,
                config.depth,
                self.seed.map(|seed| seed.wrapping_add(number)),
            )
        };
        Ok([
            seat(1, &self.player1, Stone::White)?,
            seat(2, &self.player2, Stone::Black)?,
        ])
    }

    pub fn player(&self, number: u8) -> Option<&PlayerConfig> {
        match number {
            1 => Some(&self.player1),
            2 => Some(&self.player2),
            _ => None,
        }
    }
}

/// Load the configuration.
///
/// Looks for a file in this order:
/// 1. Path in the `GOMOKU_CONFIG` environment variable
/// 2. `gomoku.toml` in the working directory
///
/// and falls back to the defaults. Environment overrides are applied last.
pub fn load_config() -> GameConfig {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let path = Path::new(&path);
        if path.exists() {
            info!("Loading config from {CONFIG_ENV}: {}", path.display());
            return load_from_path(path);
        }
        warn!("{CONFIG_ENV}={} not found, using defaults", path.display());
    }

    let path = Path::new(CONFIG_FILE);
    if path.exists() {
        info!("Loading config from {}", path.display());
        return load_from_path(path);
    }

    debug!("No {CONFIG_FILE} found, using built-in defaults");
    apply_env_overrides(GameConfig::default())
}

/// Load a config file, falling back to defaults when it cannot be read or
/// parsed.
pub fn load_from_path(path: &Path) -> GameConfig {
    match GameConfig::from_file(path) {
        Ok(config) => apply_env_overrides(config),
        Err(e) => {
            warn!("{e}, using defaults");
            apply_env_overrides(GameConfig::default())
        }
    }
}

macro_rules! override_field {
    // String field
    ($lookup:expr, $config:expr, $($field:ident).+, $key:expr) => {
        if let Some(v) = $lookup($key) {
            $config.$($field).+ = v;
        }
    };
    // Parseable field, unparseable values are ignored
    ($lookup:expr, $config:expr, $($field:ident).+, $key:expr, parse) => {
        match $lookup($key).map(|s| s.parse()) {
            Some(Ok(v)) => $config.$($field).+ = v,
            Some(Err(_)) => warn!("Ignoring unparseable {}", $key),
            None => {}
        }
    };
    // Optional parseable field
    ($lookup:expr, $config:expr, $($field:ident).+, $key:expr, optional_parse) => {
        match $lookup($key).map(|s| s.parse()) {
            Some(Ok(v)) => $config.$($field).+ = Some(v),
            Some(Err(_)) => warn!("Ignoring unparseable {}", $key),
            None => {}
        }
    };
}

/// Apply `GOMOKU_*` environment variable overrides.
pub fn apply_env_overrides(config: GameConfig) -> GameConfig {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from any key lookup.
///
/// Player kinds accept `human`, `minimax` and `alpha-beta`.
pub fn apply_overrides<F>(mut config: GameConfig, lookup: F) -> GameConfig
where
    F: Fn(&str) -> Option<String>,
{
    override_field!(lookup, config, board_size, "GOMOKU_BOARD_SIZE", parse);
    override_field!(lookup, config, seed, "GOMOKU_SEED", optional_parse);

    override_field!(lookup, config, player1.name, "GOMOKU_P1_NAME");
    override_field!(lookup, config, player1.depth, "GOMOKU_P1_DEPTH", parse);
    override_field!(lookup, config, player2.name, "GOMOKU_P2_NAME");
    override_field!(lookup, config, player2.depth, "GOMOKU_P2_DEPTH", parse);

    for (key, player) in [
        ("GOMOKU_P1_KIND", &mut config.player1),
        ("GOMOKU_P2_KIND", &mut config.player2),
    ] {
        if let Some(value) = lookup(key) {
            match <PlayerKind as clap::ValueEnum>::from_str(&value, true) {
                Ok(kind) => player.kind = kind,
                Err(_) => warn!("Ignoring unknown player kind {key}={value}"),
            }
        }
    }

    config
}
