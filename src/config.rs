/// Process-level configuration, optionally read from a TOML file.
///
/// ```toml
/// difficulty = "medium"
/// pause_mode = "frozen"
///
/// [settings]
/// screen_width = 1000.0
/// enemy_points = 75
/// ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::entities::PauseMode;
use crate::error::ConfigError;
use crate::settings::{BaseSettings, Difficulty};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PauseKind {
    Stall,
    Frozen,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub settings: BaseSettings,
    /// Difficulty in effect before the player picks one (and for restarts).
    pub difficulty: Difficulty,
    pub frame_ms: u64,
    pub pause_mode: PauseKind,
    pub ship_hit_pause_ms: u64,
    pub high_score_path: PathBuf,
    pub star_seed: u64,
    pub star_count: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            settings: BaseSettings::default(),
            difficulty: Difficulty::Easy,
            frame_ms: 33,
            pause_mode: PauseKind::Stall,
            ship_hit_pause_ms: 500,
            high_score_path: PathBuf::from("highscore.json"),
            star_seed: 42,
            star_count: 120,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.settings;
        let sizes = [
            ("screen_width", s.screen_width),
            ("screen_height", s.screen_height),
            ("ship_width", s.ship_width),
            ("ship_height", s.ship_height),
            ("projectile_width", s.projectile_width),
            ("projectile_height", s.projectile_height),
            ("enemy_width", s.enemy_width),
            ("enemy_height", s.enemy_height),
        ];
        if let Some((name, value)) = sizes.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(ConfigError::Invalid(format!(
                "{name} must be positive, got {value}"
            )));
        }
        if self.frame_ms == 0 {
            return Err(ConfigError::Invalid("frame_ms must be at least 1".into()));
        }
        Ok(())
    }

    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn ship_hit_pause(&self) -> Duration {
        Duration::from_millis(self.ship_hit_pause_ms)
    }

    /// The pause converted to frames, rounded up.
    pub fn pause_mode(&self) -> PauseMode {
        match self.pause_mode {
            PauseKind::Stall => PauseMode::Stall,
            PauseKind::Frozen => PauseMode::Frozen {
                frames: self.ship_hit_pause_ms.div_ceil(self.frame_ms.max(1)) as u32,
            },
        }
    }
}
