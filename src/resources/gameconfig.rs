//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1600
//! height = 900
//! target_fps = 120
//!
//! [simulation]
//! ticks_per_second = 100
//! seed = 42
//! ```
//!
//! `seed` is optional; without it every run draws a different obstacle
//! sequence.

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1600;
const DEFAULT_WINDOW_HEIGHT: u32 = 900;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_TICKS_PER_SECOND: u32 = 100;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window (and canvas) width in pixels.
    pub window_width: u32,
    /// Window (and canvas) height in pixels.
    pub window_height: u32,
    /// Target frames per second for rendering.
    pub target_fps: u32,
    /// Simulation rate. The tick length is `1000 / ticks_per_second` ms.
    pub ticks_per_second: u32,
    /// Seed for obstacle selection.
    pub seed: Option<u64>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            seed: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [simulation] section
        if let Some(tps) = config
            .getuint("simulation", "ticks_per_second")
            .ok()
            .flatten()
            .filter(|tps| *tps > 0)
        {
            self.ticks_per_second = tps as u32;
        }
        if let Some(seed) = config.getuint("simulation", "seed").ok().flatten() {
            self.seed = Some(seed);
        }

        info!(
            "Loaded config: {}x{} window, fps={}, tps={}, seed={:?}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.ticks_per_second,
            self.seed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [simulation] section
        config.set(
            "simulation",
            "ticks_per_second",
            Some(self.ticks_per_second.to_string()),
        );
        if let Some(seed) = self.seed {
            config.set("simulation", "seed", Some(seed.to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Length of one simulation tick in milliseconds.
    pub fn timestep_ms(&self) -> f64 {
        1000.0 / f64::from(self.ticks_per_second.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bober-rider-{}-{}.ini", name, std::process::id()))
    }

    #[test]
    fn defaults_give_a_ten_millisecond_tick() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (1600, 900));
        assert_eq!(config.seed, None);
        assert!((config.timestep_ms() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_defaults() {
        let mut config = GameConfig::with_path(temp_path("missing"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.ticks_per_second, DEFAULT_TICKS_PER_SECOND);
    }

    #[test]
    fn save_then_load_restores_values() {
        let path = temp_path("roundtrip");
        let mut saved = GameConfig::with_path(&path);
        saved.window_width = 800;
        saved.ticks_per_second = 60;
        saved.seed = Some(7);
        saved.save_to_file().expect("save");

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().expect("load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.window_width, 800);
        assert_eq!(loaded.window_height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(loaded.ticks_per_second, 60);
        assert_eq!(loaded.seed, Some(7));
    }

    #[test]
    fn zero_tick_rate_is_ignored() {
        let path = temp_path("zero-tps");
        std::fs::write(&path, "[simulation]\nticks_per_second = 0\n").expect("write");
        let mut config = GameConfig::with_path(&path);
        config.load_from_file().expect("load");
        let _ = std::fs::remove_file(&path);
        assert_eq!(config.ticks_per_second, DEFAULT_TICKS_PER_SECOND);
    }
}
