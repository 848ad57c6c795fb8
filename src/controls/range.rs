//! Documented operating ranges for the control inputs.

use serde::Serialize;

/// Inclusive range, slider step and default for one control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ControlRange {
    /// Human-readable label shown next to the slider.
    pub label: &'static str,
    /// Lower bound (inclusive).
    pub min: f32,
    /// Upper bound (inclusive).
    pub max: f32,
    /// Slider increment.
    pub step: f32,
    /// Initial slider value.
    pub default: f32,
}

impl ControlRange {
    /// Clamps a value into this range. NaN maps to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.min;
        }
        value.clamp(self.min, self.max)
    }

    /// Returns true if the value lies inside the range.
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Number of distinct slider positions.
    pub fn positions(&self) -> u32 {
        ((self.max - self.min) / self.step).round() as u32 + 1
    }
}

/// Relative hydrogen concentration.
pub const HYDROGEN: ControlRange = ControlRange {
    label: "Hydrogen concentration (relative)",
    min: 0.1,
    max: 2.0,
    step: 0.1,
    default: 1.0,
};

/// Relative oxygen concentration.
pub const OXYGEN: ControlRange = ControlRange {
    label: "Oxygen concentration (relative)",
    min: 0.1,
    max: 2.0,
    step: 0.1,
    default: 1.0,
};

/// Cell temperature in °C (integer steps).
pub const TEMPERATURE_C: ControlRange = ControlRange {
    label: "Temperature (°C)",
    min: 20.0,
    max: 120.0,
    step: 1.0,
    default: 60.0,
};

/// Cell voltage in volts.
pub const VOLTAGE: ControlRange = ControlRange {
    label: "Cell voltage (V)",
    min: 0.5,
    max: 1.2,
    step: 0.01,
    default: 0.8,
};

/// Gas pressure in atm.
pub const PRESSURE_ATM: ControlRange = ControlRange {
    label: "Pressure (atm)",
    min: 0.5,
    max: 3.0,
    step: 0.1,
    default: 1.0,
};

/// Animation speed in particles per second (integer steps).
pub const ANIMATION_SPEED: ControlRange = ControlRange {
    label: "Animation speed (particles/sec)",
    min: 1.0,
    max: 10.0,
    step: 1.0,
    default: 4.0,
};

/// All ranges in slider order.
pub const ALL: [ControlRange; 6] = [
    HYDROGEN,
    OXYGEN,
    TEMPERATURE_C,
    VOLTAGE,
    PRESSURE_ATM,
    ANIMATION_SPEED,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(HYDROGEN.clamp(5.0), 2.0);
        assert_eq!(HYDROGEN.clamp(-1.0), 0.1);
        assert_eq!(VOLTAGE.clamp(0.9), 0.9);
    }

    #[test]
    fn test_clamp_nan_maps_to_min() {
        assert_eq!(PRESSURE_ATM.clamp(f32::NAN), 0.5);
        assert_eq!(PRESSURE_ATM.clamp(f32::INFINITY), 3.0);
    }

    #[test]
    fn test_defaults_inside_ranges() {
        for range in ALL {
            assert!(range.contains(range.default), "{} default out of range", range.label);
        }
    }

    #[test]
    fn test_slider_positions() {
        assert_eq!(TEMPERATURE_C.positions(), 101);
        assert_eq!(HYDROGEN.positions(), 20);
        assert_eq!(VOLTAGE.positions(), 71);
        assert_eq!(ANIMATION_SPEED.positions(), 10);
    }
}
