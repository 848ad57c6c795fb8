//! Animation phase: wrapping and wall-clock advancement.

use serde::{Deserialize, Serialize};

/// Wraps any real number into `[0, 1)` circularly.
///
/// `1.0` maps to `0.0` and negative values wrap from the top. Non-finite
/// input maps to `0.0`.
pub fn wrap_phase(x: f32) -> f32 {
    if !x.is_finite() {
        return 0.0;
    }
    let r = x.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}

/// Configuration for [`PhaseClock`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Seconds for one full animation cycle (phase 0 → 1).
    pub cycle_seconds: f32,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self { cycle_seconds: 6.0 }
    }
}

impl ClockConfig {
    /// A brisk cycle for previews.
    pub fn fast() -> Self {
        Self { cycle_seconds: 2.0 }
    }

    /// A slow cycle for classroom projection.
    pub fn slow() -> Self {
        Self { cycle_seconds: 15.0 }
    }
}

/// Caller-owned animation phase advanced once per redraw.
#[derive(Debug, Clone, Default)]
pub struct PhaseClock {
    config: ClockConfig,
    phase: f32,
}

impl PhaseClock {
    /// Creates a clock at phase 0.
    pub fn new(config: ClockConfig) -> Self {
        Self { config, phase: 0.0 }
    }

    /// Current phase in `[0, 1)`.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Advances by `dt_seconds` of wall time and returns the new phase.
    ///
    /// A non-positive cycle length or time step leaves the phase unchanged.
    pub fn advance(&mut self, dt_seconds: f32) -> f32 {
        if self.config.cycle_seconds > 0.0 && dt_seconds > 0.0 {
            self.phase = wrap_phase(self.phase + dt_seconds / self.config.cycle_seconds);
        }
        self.phase
    }

    /// Returns to phase 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
