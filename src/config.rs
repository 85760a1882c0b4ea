//! Game configuration.
//!
//! Read from `config.json` in the per-user config directory (or `--config`).
//! Every field is optional in the file; missing fields take the defaults,
//! which give the standard arcade tuning.

use crate::constants::*;
use crate::heist::{HeistGame, Viewport};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Tunables for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// World width in units
    pub viewport_width: f64,

    /// World height in units
    pub viewport_height: f64,

    /// Points needed to win
    pub target_points: u32,

    /// Scroll speed at the start of every run (units/frame)
    pub initial_speed: f64,

    /// Simulation frame length in milliseconds
    pub frame_ms: u64,

    /// Sprite directory (None = bundled assets)
    pub assets_dir: Option<PathBuf>,

    /// RNG seed for reproducible runs (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            target_points: TARGET_POINTS,
            initial_speed: INITIAL_SPEED,
            frame_ms: FRAME_MS,
            assets_dir: None,
            seed: None,
        }
    }
}

/// Why a config file could not be used.
#[derive(Debug)]
pub struct ConfigError {
    pub path: PathBuf,
    pub kind: ConfigErrorKind,
}

#[derive(Debug)]
pub enum ConfigErrorKind {
    Read(io::Error),
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ConfigErrorKind::Read(e) => write!(f, "cannot read {}: {}", self.path.display(), e),
            ConfigErrorKind::Parse(e) => write!(f, "invalid JSON in {}: {}", self.path.display(), e),
            ConfigErrorKind::Invalid(msg) => write!(f, "bad value in {}: {}", self.path.display(), msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err.to_string())
    }
}

impl GameConfig {
    /// Load `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError {
                    path: path.to_path_buf(),
                    kind: ConfigErrorKind::Read(e),
                })
            }
        };
        Self::from_json(&text).map_err(|kind| ConfigError {
            path: path.to_path_buf(),
            kind,
        })
    }

    /// Parse and validate JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigErrorKind> {
        let config: Self = serde_json::from_str(text).map_err(ConfigErrorKind::Parse)?;
        config.validate().map_err(ConfigErrorKind::Invalid)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.viewport_width > 0.0 && self.viewport_height > 0.0) {
            return Err(format!(
                "viewport must be positive, got {}x{}",
                self.viewport_width, self.viewport_height
            ));
        }
        if !(self.initial_speed > 0.0) {
            return Err(format!("initial_speed must be positive, got {}", self.initial_speed));
        }
        if self.target_points == 0 {
            return Err("target_points must be at least 1".to_string());
        }
        if self.frame_ms == 0 {
            return Err("frame_ms must be at least 1".to_string());
        }
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.viewport_width,
            height: self.viewport_height,
        }
    }

    /// Fresh session on the intro screen using these tunables.
    pub fn new_game<R: Rng>(&self, rng: &mut R) -> HeistGame {
        HeistGame::with_tuning(
            self.viewport(),
            self.target_points,
            self.initial_speed,
            self.frame_ms,
            rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heist::Screen;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_tuning() {
        let config = GameConfig::default();
        assert!((config.viewport_width - 1280.0).abs() < f64::EPSILON);
        assert!((config.viewport_height - 720.0).abs() < f64::EPSILON);
        assert_eq!(config.target_points, 2000);
        assert!((config.initial_speed - 12.0).abs() < f64::EPSILON);
        assert_eq!(config.frame_ms, 16);
        assert!(config.assets_dir.is_none());
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "target_points": 500, "seed": 9 }"#).unwrap();
        assert_eq!(config.target_points, 500);
        assert_eq!(config.seed, Some(9));
        assert!((config.initial_speed - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "viewport_width": 0 }"#),
            Err(ConfigErrorKind::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "frame_ms": 0 }"#),
            Err(ConfigErrorKind::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "target_points": 0 }"#),
            Err(ConfigErrorKind::Invalid(_))
        ));
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigErrorKind::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_is_default() {
        let config = GameConfig::load(Path::new("/nonexistent/museum-heist/config.json")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_file_roundtrip() {
        let path = std::env::temp_dir().join("museum_heist_config_test.json");
        let config = GameConfig {
            target_points: 300,
            ..Default::default()
        };
        fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = GameConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_new_game_uses_tuning() {
        let config = GameConfig {
            viewport_width: 800.0,
            viewport_height: 600.0,
            target_points: 100,
            initial_speed: 5.0,
            ..Default::default()
        };
        let game = config.new_game(&mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(game.screen, Screen::Intro);
        assert_eq!(game.target_points, 100);
        assert!((game.game_speed - 5.0).abs() < f64::EPSILON);
        assert!((game.ground_y - 420.0).abs() < 1e-9);
    }
}
