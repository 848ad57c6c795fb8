//! The three physical parts of the cell and their descriptive text.

use glam::Vec3;
use serde::Serialize;

use super::style::{Color, LIGHT_CORAL, LIGHT_SKY_BLUE, WHITE};
use crate::geometry::Cuboid;

/// Shared y/z extent of all three boxes.
const CELL_Y: (f32, f32) = (-0.8, 0.8);
const CELL_Z: (f32, f32) = (-0.5, 0.5);

/// Height of the text labels above the cell.
const LABEL_Z: f32 = 0.7;

/// Identifies a part of the cell, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum CellPart {
    /// Hydrogen side (left).
    Anode = 0,
    /// Proton-exchange membrane (middle).
    Membrane = 1,
    /// Oxygen side (right).
    Cathode = 2,
}

impl CellPart {
    /// Returns the three parts in left-to-right order.
    pub const fn all() -> [CellPart; 3] {
        [CellPart::Anode, CellPart::Membrane, CellPart::Cathode]
    }

    /// Returns the part index (0-2).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Full display name.
    pub const fn name(self) -> &'static str {
        match self {
            CellPart::Anode => "Anode",
            CellPart::Membrane => "Membrane (Electrolyte)",
            CellPart::Cathode => "Cathode",
        }
    }

    /// Short text shown above the part in the 3D view.
    pub const fn label(self) -> &'static str {
        match self {
            CellPart::Anode => "Anode",
            CellPart::Membrane => "Electrolyte",
            CellPart::Cathode => "Cathode",
        }
    }

    /// What happens in this part.
    pub const fn description(self) -> &'static str {
        match self {
            CellPart::Anode => {
                "Hydrogen gas is supplied here. H₂ → 2H⁺ + 2e⁻ (electrons go through the external circuit)."
            }
            CellPart::Membrane => {
                "Conducts protons (H⁺) only; electrons travel through the external wire."
            }
            CellPart::Cathode => "Oxygen reacts with H⁺ and electrons to form water (H₂O).",
        }
    }

    /// Box occupied by the part.
    pub fn bounds(self) -> Cuboid {
        let x = match self {
            CellPart::Anode => (-2.0, -0.5),
            CellPart::Membrane => (-0.4, 0.4),
            CellPart::Cathode => (0.5, 2.0),
        };
        Cuboid::from_spans(x, CELL_Y, CELL_Z)
    }

    /// Fill color of the part.
    pub const fn color(self) -> Color {
        match self {
            CellPart::Anode => LIGHT_SKY_BLUE,
            CellPart::Membrane => WHITE,
            CellPart::Cathode => LIGHT_CORAL,
        }
    }

    /// Anchor point of the label text.
    pub fn label_anchor(self) -> Vec3 {
        let x = match self {
            CellPart::Anode => -1.25,
            CellPart::Membrane => 0.0,
            CellPart::Cathode => 1.25,
        };
        Vec3::new(x, 0.0, LABEL_Z)
    }
}

/// Short guidance shown next to the controls.
pub const TEACHING_HINTS: [&str; 4] = [
    "Increase H₂ or O₂ to increase reaction rate (more electrons & protons).",
    "Increase Temperature and Pressure to a point to speed kinetics.",
    "Voltage simulates the operating point; lower voltage often yields higher current in real systems (this model keeps it simple).",
    "Blue spheres in the wire are electrons, red spheres in the membrane are protons, green spheres at the cathode are oxygen.",
];
