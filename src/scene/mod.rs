//! 3D schematic of the cell.
//!
//! The static layout (three boxes, the external wire, the proton channel and
//! the labels) is built once; electrons, protons and the oxygen cloud are
//! placed per call from the controls and the animation phase.

mod builder;
mod layout;
pub mod parts;
pub mod particles;
pub mod style;

pub use builder::{build, build_frame, PointCloud, Scene, SceneBuilder};
pub use layout::{
    CellLayout, LabelPrimitive, LinePrimitive, MeshPrimitive, CHANNEL_END, CHANNEL_SAMPLES,
    CHANNEL_START, WIRE_HEIGHT, WIRE_RADIUS_X, WIRE_RADIUS_Y, WIRE_SAMPLES,
};
pub use parts::{CellPart, TEACHING_HINTS};
pub use style::{Color, LineStyle, MarkerStyle};
