//! Readout values shown next to the 3D view.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three derived outputs of the reaction model (arbitrary units).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readouts {
    /// Reaction rate proxy.
    pub reaction_rate: f32,
    /// Approximate current density, floored at 0.01.
    pub current_density: f32,
    /// Approximate power.
    pub power: f32,
}

impl Readouts {
    /// Display lines as `(label, value formatted to 2 decimals)`.
    pub fn lines(&self) -> [(&'static str, String); 3] {
        [
            ("Reaction rate (proxy)", format!("{:.2}", self.reaction_rate)),
            ("Approx. current density (a.u.)", format!("{:.2}", self.current_density)),
            ("Approx. power (a.u.)", format!("{:.2}", self.power)),
        ]
    }
}

impl fmt::Display for Readouts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.lines().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", label, value)?;
        }
        Ok(())
    }
}
