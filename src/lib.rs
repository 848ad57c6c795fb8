//! Interactive PEM hydrogen fuel cell teaching model.
//!
//! This crate maps a handful of operating controls to proxy readouts
//! (reaction rate, current density, power) and to a 3D schematic of the cell
//! with animated electrons, protons and an oxygen cloud.

pub mod controls;
pub mod reaction;
pub mod geometry;
pub mod scene;
pub mod animation;
pub mod export;

pub use controls::{Controls, ControlRange};
pub use reaction::{ReactionModel, ReactionParams, Readouts};
pub use geometry::{Cuboid, Polyline, TriangleMesh};
pub use scene::{CellPart, Scene, SceneBuilder};
pub use animation::{ClockConfig, FrameSequence, PhaseClock};
