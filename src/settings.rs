//! Game settings: JSON file plus environment overrides.
//!
//! Every key is optional. Lookup order for the file is an explicit path,
//! then `BINGO_CONFIG`, then `config/settings.json` if present. A file that
//! cannot be read or parsed is logged and replaced with defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::core::{GameConfig, ScoringRules};
use crate::types::{Difficulty, BASIS_POINTS, DEFAULT_STARTING_POINTS};

/// Env var naming the settings file.
pub const CONFIG_ENV: &str = "BINGO_CONFIG";

/// Settings file used when neither `--config` nor `BINGO_CONFIG` is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/settings.json";

pub const STARTING_POINTS_ENV: &str = "BINGO_STARTING_POINTS";
pub const LINE_PERCENT_ENV: &str = "BINGO_LINE_PERCENT";
pub const BINGO_PERCENT_ENV: &str = "BINGO_BINGO_PERCENT";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameSection {
    pub starting_points_per_player: i64,
}

impl Default for GameSection {
    fn default() -> Self {
        Self {
            starting_points_per_player: DEFAULT_STARTING_POINTS,
        }
    }
}

/// Reward shares of the pool total, as fractions (0.10 = 10%).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RewardSection {
    pub line_percent: f64,
    pub bingo_percent: f64,
}

impl Default for RewardSection {
    fn default() -> Self {
        Self {
            line_percent: 0.10,
            bingo_percent: 0.50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ModeSection {
    /// Bot count; `None` keeps the built-in count for the mode.
    pub bots: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ModesSection {
    pub easy: ModeSection,
    pub medium: ModeSection,
    pub hard: ModeSection,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameSection,
    pub rewards: RewardSection,
    pub modes: ModesSection,
}

impl Settings {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the settings file, read it, then apply env overrides.
    pub fn load(explicit: Option<&Path>) -> Self {
        let mut settings = match config_path(explicit, |key| std::env::var(key).ok()) {
            Some(path) => match Self::from_file(&path) {
                Ok(settings) => {
                    info!("loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    warn!("{}; using default settings", e);
                    Self::default()
                }
            },
            None => {
                debug!("no settings file, using defaults");
                Self::default()
            }
        };
        settings.apply_env();
        settings
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from `lookup` (keyed by env var name). Values that do
    /// not parse are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(points) = parse_override::<i64>(&lookup, STARTING_POINTS_ENV) {
            self.game.starting_points_per_player = points;
        }
        if let Some(pct) = parse_override::<f64>(&lookup, LINE_PERCENT_ENV) {
            self.rewards.line_percent = pct;
        }
        if let Some(pct) = parse_override::<f64>(&lookup, BINGO_PERCENT_ENV) {
            self.rewards.bingo_percent = pct;
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            starting_points: self.game.starting_points_per_player,
            rules: ScoringRules {
                line_reward_bp: fraction_to_bp(self.rewards.line_percent),
                bingo_reward_bp: fraction_to_bp(self.rewards.bingo_percent),
                ..ScoringRules::default()
            },
            ..GameConfig::default()
        }
    }

    pub fn bots_for(&self, difficulty: Difficulty) -> usize {
        let mode = match difficulty {
            Difficulty::Easy => self.modes.easy,
            Difficulty::Medium => self.modes.medium,
            Difficulty::Hard => self.modes.hard,
        };
        mode.bots.unwrap_or_else(|| difficulty.default_bots())
    }
}

/// Pick the settings file: explicit path, then `BINGO_CONFIG`, then the
/// default path if it exists.
pub fn config_path(
    explicit: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = lookup(CONFIG_ENV).filter(|s| !s.trim().is_empty()) {
        return Some(PathBuf::from(path.trim()));
    }
    let default = Path::new(DEFAULT_CONFIG_PATH);
    default.exists().then(|| default.to_path_buf())
}

/// 0.10 -> 1000 basis points. Negative or non-finite values give 0.
pub fn fraction_to_bp(fraction: f64) -> u32 {
    if !fraction.is_finite() || fraction <= 0.0 {
        return 0;
    }
    (fraction * BASIS_POINTS as f64).round().min(u32::MAX as f64) as u32
}

fn parse_override<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
