//! Operating controls for the fuel cell model.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::range::{ANIMATION_SPEED, HYDROGEN, OXYGEN, PRESSURE_ATM, TEMPERATURE_C, VOLTAGE};

/// Errors that can occur when loading controls from disk.
#[derive(Error, Debug)]
pub enum ControlsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid controls JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The six user-facing operating controls.
///
/// Field ranges are documented in [`super::range`]. Values outside those
/// ranges are accepted here and clamped by [`Controls::clamped`], which every
/// model entry point applies before computing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    /// Relative hydrogen concentration (0.1-2.0).
    pub hydrogen_level: f32,
    /// Relative oxygen concentration (0.1-2.0).
    pub oxygen_level: f32,
    /// Cell temperature in °C (20-120).
    pub temperature_c: i32,
    /// Cell voltage in volts (0.5-1.2).
    pub voltage: f32,
    /// Gas pressure in atm (0.5-3.0).
    pub pressure_atm: f32,
    /// Particle animation speed (1-10).
    pub animation_speed: u32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            hydrogen_level: HYDROGEN.default,
            oxygen_level: OXYGEN.default,
            temperature_c: TEMPERATURE_C.default as i32,
            voltage: VOLTAGE.default,
            pressure_atm: PRESSURE_ATM.default,
            animation_speed: ANIMATION_SPEED.default as u32,
        }
    }
}

impl Controls {
    /// Creates controls from the five reaction inputs with the default animation speed.
    pub fn new(
        hydrogen_level: f32,
        oxygen_level: f32,
        temperature_c: i32,
        voltage: f32,
        pressure_atm: f32,
    ) -> Self {
        Self {
            hydrogen_level,
            oxygen_level,
            temperature_c,
            voltage,
            pressure_atm,
            ..Default::default()
        }
    }

    /// Returns a copy with the animation speed replaced.
    pub fn with_animation_speed(mut self, animation_speed: u32) -> Self {
        self.animation_speed = animation_speed;
        self
    }

    /// Rich fuel at high pressure and temperature: the busiest cell.
    pub fn high_output() -> Self {
        Self {
            hydrogen_level: 2.0,
            oxygen_level: 2.0,
            temperature_c: 90,
            voltage: 0.7,
            pressure_atm: 2.5,
            animation_speed: 8,
        }
    }

    /// Cold, starved cell at the bottom of every range.
    pub fn idle() -> Self {
        Self {
            hydrogen_level: HYDROGEN.min,
            oxygen_level: OXYGEN.min,
            temperature_c: TEMPERATURE_C.min as i32,
            voltage: VOLTAGE.min,
            pressure_atm: PRESSURE_ATM.min,
            animation_speed: ANIMATION_SPEED.min as u32,
        }
    }

    /// Returns a copy with every field clamped into its documented range.
    pub fn clamped(&self) -> Self {
        Self {
            hydrogen_level: HYDROGEN.clamp(self.hydrogen_level),
            oxygen_level: OXYGEN.clamp(self.oxygen_level),
            temperature_c: self
                .temperature_c
                .clamp(TEMPERATURE_C.min as i32, TEMPERATURE_C.max as i32),
            voltage: VOLTAGE.clamp(self.voltage),
            pressure_atm: PRESSURE_ATM.clamp(self.pressure_atm),
            animation_speed: self
                .animation_speed
                .clamp(ANIMATION_SPEED.min as u32, ANIMATION_SPEED.max as u32),
        }
    }

    /// Returns true if every field already lies inside its range.
    pub fn is_within_ranges(&self) -> bool {
        *self == self.clamped()
    }

    /// Derives the scene random seed from the five reaction inputs.
    ///
    /// FNV-1a over the bit patterns of the clamped fields, reduced into
    /// `[0, 2^31)`. Animation speed does not take part, so changing only
    /// the speed keeps the same oxygen cloud.
    pub fn scene_seed(&self) -> u64 {
        const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
        const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

        let c = self.clamped();
        let words = [
            c.hydrogen_level.to_bits(),
            c.oxygen_level.to_bits(),
            (c.temperature_c as f32).to_bits(),
            c.voltage.to_bits(),
            c.pressure_atm.to_bits(),
        ];

        let mut hash = FNV_OFFSET;
        for word in words {
            for byte in word.to_le_bytes() {
                hash ^= byte as u64;
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
        hash % (1 << 31)
    }

    /// Loads controls from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ControlsError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses controls from a JSON string. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ControlsError> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_matches_slider_defaults() {
        let c = Controls::default();
        assert_eq!(c.hydrogen_level, 1.0);
        assert_eq!(c.oxygen_level, 1.0);
        assert_eq!(c.temperature_c, 60);
        assert_eq!(c.voltage, 0.8);
        assert_eq!(c.pressure_atm, 1.0);
        assert_eq!(c.animation_speed, 4);
        assert!(c.is_within_ranges());
    }

    #[test]
    fn test_clamped_out_of_range() {
        let c = Controls {
            hydrogen_level: 9.0,
            oxygen_level: -3.0,
            temperature_c: 500,
            voltage: f32::NAN,
            pressure_atm: 0.0,
            animation_speed: 0,
        };
        assert!(!c.is_within_ranges());

        let c = c.clamped();
        assert_eq!(c.hydrogen_level, 2.0);
        assert_eq!(c.oxygen_level, 0.1);
        assert_eq!(c.temperature_c, 120);
        assert_eq!(c.voltage, 0.5);
        assert_eq!(c.pressure_atm, 0.5);
        assert_eq!(c.animation_speed, 1);
        assert!(c.is_within_ranges());
    }

    #[test]
    fn test_presets_within_ranges() {
        assert!(Controls::high_output().is_within_ranges());
        assert!(Controls::idle().is_within_ranges());
    }

    #[test]
    fn test_scene_seed_is_stable() {
        let a = Controls::default();
        let b = Controls::default();
        assert_eq!(a.scene_seed(), b.scene_seed());
        assert!(a.scene_seed() < (1 << 31));
    }

    #[test]
    fn test_scene_seed_differs_for_swapped_gases() {
        // A plain sum of the fields would collide here.
        let a = Controls::new(1.1, 0.9, 60, 0.8, 1.0);
        let b = Controls::new(0.9, 1.1, 60, 0.8, 1.0);
        assert_ne!(a.scene_seed(), b.scene_seed());
    }

    #[test]
    fn test_scene_seed_ignores_animation_speed() {
        let a = Controls::default();
        let b = a.with_animation_speed(9);
        assert_eq!(a.scene_seed(), b.scene_seed());
    }

    #[test]
    fn test_scene_seed_uses_clamped_values() {
        let a = Controls::new(7.0, 1.0, 60, 0.8, 1.0);
        let b = Controls::new(2.0, 1.0, 60, 0.8, 1.0);
        assert_eq!(a.scene_seed(), b.scene_seed());
    }

    #[test]
    fn test_from_json_partial() {
        let c = Controls::from_json_str(r#"{ "hydrogen_level": 1.5, "temperature_c": 80 }"#).unwrap();
        assert_eq!(c.hydrogen_level, 1.5);
        assert_eq!(c.temperature_c, 80);
        assert_eq!(c.voltage, Controls::default().voltage);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("controls.json");
        let original = Controls::high_output();
        std::fs::write(&path, serde_json::to_string(&original).unwrap()).unwrap();

        let loaded = Controls::from_json_file(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            Controls::from_json_str("{ not json"),
            Err(ControlsError::Json(_))
        ));
        assert!(matches!(
            Controls::from_json_file(Path::new("/definitely/not/here.json")),
            Err(ControlsError::Io(_))
        ));
    }
}
