//! Game settings
//!
//! Read from an optional `flappy-sgd.json` in the working directory. Every
//! field has a default, and the defaults reproduce the stock game exactly, so
//! the file only needs the values being changed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::tuning::Tuning;

/// Where the game's images and font live
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    /// Directory the file names below are relative to
    pub dir: PathBuf,
    pub background: String,
    /// Horizontal sheet of equal-width player frames
    pub player_sheet: String,
    pub obstacle: String,
    pub font: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            background: "bg.png".to_string(),
            player_sheet: "ptok.png".to_string(),
            obstacle: "pipe.png".to_string(),
            font: "Starjedi.ttf".to_string(),
        }
    }
}

impl AssetPaths {
    pub fn background_path(&self) -> PathBuf {
        self.dir.join(&self.background)
    }

    pub fn player_sheet_path(&self) -> PathBuf {
        self.dir.join(&self.player_sheet)
    }

    pub fn obstacle_path(&self) -> PathBuf {
        self.dir.join(&self.obstacle)
    }

    pub fn font_path(&self) -> PathBuf {
        self.dir.join(&self.font)
    }
}

/// The game-over caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoseText {
    pub text: String,
    /// Character size in points
    pub size: u32,
    /// RGB
    pub color: [u8; 3],
}

impl Default for LoseText {
    fn default() -> Self {
        Self {
            text: "You lose!".to_string(),
            size: 50,
            color: [255, 0, 0],
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Window title
    pub title: String,
    /// Wait for vertical sync when presenting
    pub vsync: bool,
    pub assets: AssetPaths,
    pub lose_text: LoseText,
    /// Spawner seed; a fresh random seed is drawn when unset
    pub seed: Option<u64>,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "FlappySGD".to_string(),
            vsync: true,
            assets: AssetPaths::default(),
            lose_text: LoseText::default(),
            seed: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "flappy-sgd.json";

    /// Load `flappy-sgd.json` if present, otherwise use defaults
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(Path::new(Self::FILE_NAME))
    }

    /// Load a settings file, falling back to defaults when it does not exist
    ///
    /// The tuning is validated whichever way the settings were obtained.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let settings = if path.exists() {
            let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
            log::info!("Loaded settings from {}", path.display());
            settings
        } else {
            log::info!("No {} found, using default settings", path.display());
            Self::default()
        };
        settings.tuning.validate()?;
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Window size follows the arena
    pub fn window_size(&self) -> (u32, u32) {
        (self.tuning.arena_width, self.tuning.arena_height)
    }

    /// Seed from settings, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::error::TuningError;

    #[test]
    fn test_defaults_match_stock_game() {
        let settings = Settings::default();
        assert_eq!(settings.window_size(), (SCREEN_WIDTH, SCREEN_HEIGHT));
        assert_eq!(settings.title, "FlappySGD");
        assert!(settings.vsync);
        assert_eq!(settings.lose_text.text, "You lose!");
        assert_eq!(settings.lose_text.color, [255, 0, 0]);
        assert_eq!(settings.assets.player_sheet_path(), PathBuf::from("./ptok.png"));
    }

    #[test]
    fn test_empty_json_is_default() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_override() {
        let settings = Settings::from_json(
            r#"{ "seed": 7, "assets": { "dir": "assets" }, "tuning": { "gravity": 0.4 } }"#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.resolve_seed(), 7);
        assert_eq!(settings.assets.background_path(), PathBuf::from("assets/bg.png"));
        assert_eq!(settings.tuning.gravity, 0.4);
        assert_eq!(settings.tuning.flap_impulse, -8.0);
    }

    #[test]
    fn test_load_from_rejects_bad_tuning() {
        let path = std::env::temp_dir().join(format!(
            "flappy-sgd-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "tuning": { "animation_frames": 0 } }"#).unwrap();

        let result = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(
            result,
            Err(SettingsError::Tuning(TuningError::EmptyAnimation))
        ));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let settings = Settings::load_from(Path::new("/definitely/not/here.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_unreadable_path() {
        // A directory exists but cannot be read as a file
        let result = Settings::load_from(&std::env::temp_dir());
        assert!(matches!(result, Err(SettingsError::Read { .. })));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let path = std::env::temp_dir().join(format!(
            "flappy-sgd-malformed-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();

        let result = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(SettingsError::Parse { .. })));
    }
}
