//! Driver and presentation preferences
//!
//! Stored as JSON next to the binary (or wherever `--settings` points).
//! Gameplay rules are not configurable; only how the match is paced,
//! heard and shown.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE_HZ;
use crate::input::KeyBindings;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Pacing ===
    /// Ticks per second when running in real time
    pub tick_rate_hz: u32,
    /// Sleep between ticks; false runs the simulation as fast as possible
    pub realtime: bool,
    /// Fixed match seed (random if absent)
    pub seed: Option<u64>,

    // === Visual Effects ===
    /// Full-screen flash on goals and paddle wipes
    pub screen_flash: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Accessibility ===
    /// Reduced motion (no flashes)
    pub reduced_motion: bool,

    // === Controls ===
    pub bindings: KeyBindings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_hz: TICK_RATE_HZ,
            realtime: true,
            seed: None,

            screen_flash: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            reduced_motion: false,

            bindings: KeyBindings::default(),
        }
    }
}

impl Settings {
    /// Effective screen flash (respects reduced_motion)
    pub fn effective_screen_flash(&self) -> bool {
        self.screen_flash && !self.reduced_motion
    }

    /// Pull out-of-range values back into range
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self.tick_rate_hz = self.tick_rate_hz.clamp(1, 1000);
        if self.bindings.has_conflicts() {
            log::warn!("Key bindings overlap; falling back to defaults");
            self.bindings = KeyBindings::default();
        }
        self
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Load settings from a file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Invalid settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => match std::fs::write(path, json) {
                Ok(()) => log::info!("Settings saved to {}", path.display()),
                Err(e) => log::warn!("Could not write {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "muted": true, "seed": 12 }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.seed, Some(12));
        assert_eq!(settings.tick_rate_hz, TICK_RATE_HZ);
        assert_eq!(settings.bindings, KeyBindings::default());
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let settings =
            Settings::from_json(r#"{ "master_volume": 3.0, "tick_rate_hz": 0 }"#).unwrap();
        assert_eq!(settings.master_volume, 1.0);
        assert_eq!(settings.tick_rate_hz, 1);
    }

    #[test]
    fn test_conflicting_bindings_reset() {
        let mut settings = Settings::default();
        settings.bindings.left.up = "p".into();
        let json = serde_json::to_string(&settings).unwrap();
        let loaded = Settings::from_json(&json).unwrap();
        assert_eq!(loaded.bindings, KeyBindings::default());
    }

    #[test]
    fn test_reduced_motion_disables_flash() {
        let settings = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!settings.effective_screen_flash());
        assert!(Settings::default().effective_screen_flash());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/laser-pong.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir()
            .join(format!("laser-pong-settings-{}.json", std::process::id()));
        let settings = Settings {
            seed: Some(5),
            sfx_volume: 0.25,
            ..Default::default()
        };
        settings.save(&path);
        assert_eq!(Settings::load(&path), settings);
        let _ = std::fs::remove_file(&path);
    }
}
