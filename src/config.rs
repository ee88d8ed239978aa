//! Runtime configuration loaded from `assets/lander.toml`.
//!
//! [`LanderConfig`] is a Bevy [`Resource`] that mirrors the tunable subset of
//! [`crate::constants`].  At startup, [`load_lander_config`] reads
//! `assets/lander.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! ## Example
//!
//! ```toml
//! thrust_power = 0.08
//! wind_gust_max = 1.5
//! highscore_path = "saves/highscores.toml"
//! ```

use crate::constants::*;
use crate::motion::{Airframe, Viewport};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable flight and storage configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LanderConfig {
    // ── Viewport ─────────────────────────────────────────────────────────────
    pub viewport_width: f32,
    pub viewport_height: f32,

    // ── Craft ─────────────────────────────────────────────────────────────────
    pub thrust_power: f32,
    pub rotation_speed: f32,
    pub craft_mass: f32,
    pub drag_coefficient: f32,
    pub craft_area: f32,

    // ── Hazards ───────────────────────────────────────────────────────────────
    pub wind_gust_max: f32,

    // ── Highscores ────────────────────────────────────────────────────────────
    pub highscore_path: String,
    pub highscore_capacity: usize,
}

impl Default for LanderConfig {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            thrust_power: THRUST_POWER,
            rotation_speed: ROTATION_SPEED,
            craft_mass: CRAFT_MASS,
            drag_coefficient: CRAFT_DRAG_COEFFICIENT,
            craft_area: CRAFT_AREA,
            wind_gust_max: WIND_GUST_MAX,
            highscore_path: HIGHSCORE_PATH.to_string(),
            highscore_capacity: HIGHSCORE_CAPACITY,
        }
    }
}

impl LanderConfig {
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.viewport_width,
            height: self.viewport_height,
        }
    }

    pub fn airframe(&self) -> Airframe {
        Airframe {
            thrust_power: self.thrust_power,
            rotation_speed: self.rotation_speed,
            mass: self.craft_mass,
            drag_coefficient: self.drag_coefficient,
            area: self.craft_area,
        }
    }

    /// Parse a TOML document; keys not present keep their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

/// Startup system: attempt to load `assets/lander.toml` and overwrite the
/// `LanderConfig` resource with any values present in the file.
///
/// A missing file is silently ignored; a parse error is logged and the
/// defaults stay in place.
pub fn load_lander_config(mut config: ResMut<LanderConfig>) {
    let path = "assets/lander.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match LanderConfig::from_toml(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded lander config from {path}");
            }
            Err(e) => {
                warn!("Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {path} found; using compiled defaults");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_keeps_defaults() {
        let config = LanderConfig::from_toml("").expect("empty TOML is valid");
        assert_eq!(config, LanderConfig::default());
    }

    #[test]
    fn partial_document_overrides_only_named_keys() {
        let config = LanderConfig::from_toml("thrust_power = 0.1\nhighscore_capacity = 5\n")
            .expect("valid TOML");
        assert_eq!(config.thrust_power, 0.1);
        assert_eq!(config.highscore_capacity, 5);
        assert_eq!(config.rotation_speed, ROTATION_SPEED);
        assert_eq!(config.highscore_path, HIGHSCORE_PATH);
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(LanderConfig::from_toml("thrust_power = \"fast\"").is_err());
    }

    #[test]
    fn helpers_mirror_fields() {
        let config = LanderConfig::default();
        assert_eq!(config.viewport(), Viewport::default());
        assert_eq!(config.airframe(), Airframe::default());
    }
}
