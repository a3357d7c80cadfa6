//! Game settings and preferences
//!
//! Stored as JSON next to the binary. Read once at startup; a missing or
//! unreadable file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding images and sounds
    pub asset_dir: PathBuf,

    // === Fonts ===
    /// Font for HUD counters and the lose-a-life message
    pub hud_font: String,
    /// Font for titles and prompts
    pub title_font: String,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets"),
            hud_font: "comicsansms".to_string(),
            title_font: "OLDENGL.ttf".to_string(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
        }
    }
}

impl Settings {
    /// Default file name looked up in the working directory
    pub const FILE_NAME: &'static str = "zombie_shooter.json";

    /// Load settings from `path`, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Clamp volumes into range
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self
    }
}
