//! Proxy reaction model: controls in, readouts out.

use serde::{Deserialize, Serialize};

use super::readouts::Readouts;
use crate::controls::Controls;

/// Coefficients of the proxy formulas.
///
/// These are teaching approximations, not a validated electrochemical model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionParams {
    /// Weight of the hydrogen level in the rate.
    pub hydrogen_weight: f32,
    /// Weight of the oxygen level in the rate.
    pub oxygen_weight: f32,
    /// Temperature at which the thermal factor is exactly 1 (°C).
    pub reference_temperature_c: f32,
    /// Temperature span over which the thermal factor grows by 1 (°C).
    pub temperature_span_c: f32,
    /// Fraction of the rate that shows up as current.
    pub current_factor: f32,
    /// Voltage the operating point is normalised against (V).
    pub reference_voltage: f32,
    /// Floor applied to the current density.
    pub min_current_density: f32,
    /// Nominal electrode area used for power (area units).
    pub electrode_area: f32,
}

impl Default for ReactionParams {
    fn default() -> Self {
        Self {
            hydrogen_weight: 0.6,
            oxygen_weight: 0.4,
            reference_temperature_c: 25.0,
            temperature_span_c: 300.0,
            current_factor: 0.5,
            reference_voltage: 1.0,
            min_current_density: 0.01,
            electrode_area: 50.0,
        }
    }
}

/// Maps operating controls to rate, current density and power.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReactionModel {
    params: ReactionParams,
}

impl ReactionModel {
    /// Creates a model with custom coefficients.
    pub fn new(params: ReactionParams) -> Self {
        Self { params }
    }

    /// Returns the model coefficients.
    pub fn params(&self) -> &ReactionParams {
        &self.params
    }

    /// Evaluates the proxy formulas. Controls are clamped first.
    pub fn compute(&self, controls: &Controls) -> Readouts {
        let c = controls.clamped();
        let p = &self.params;

        let gas = c.hydrogen_level * p.hydrogen_weight + c.oxygen_level * p.oxygen_weight;
        let thermal = 1.0 + (c.temperature_c as f32 - p.reference_temperature_c) / p.temperature_span_c;
        // Over 20-120 °C the thermal factor stays within [0.98, 1.32].
        let reaction_rate = (gas * thermal * c.pressure_atm).max(0.0);

        let current_density = (reaction_rate * (c.voltage / p.reference_voltage) * p.current_factor)
            .max(p.min_current_density);
        let power = current_density * c.voltage * p.electrode_area;

        Readouts {
            reaction_rate,
            current_density,
            power,
        }
    }
}

/// Evaluates the default proxy model.
pub fn compute(controls: &Controls) -> Readouts {
    ReactionModel::default().compute(controls)
}
