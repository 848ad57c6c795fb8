//! Static geometry of the schematic: boxes, wire, channel and labels.

use glam::Vec3;
use serde::Serialize;

use super::parts::CellPart;
use super::style::{Color, LineStyle, CHANNEL_LINE, MESH_OPACITY, WIRE_LINE};
use crate::geometry::{Polyline, TriangleMesh};

/// Samples along the external wire arc.
pub const WIRE_SAMPLES: usize = 40;
/// Samples along the proton channel.
pub const CHANNEL_SAMPLES: usize = 40;

/// Semi-axes and height of the wire arc above the cell.
pub const WIRE_RADIUS_X: f32 = 1.2;
pub const WIRE_RADIUS_Y: f32 = 0.64;
pub const WIRE_HEIGHT: f32 = 0.9;

/// End points of the proton path through the membrane.
pub const CHANNEL_START: Vec3 = Vec3::new(-0.4, 0.0, -0.3);
pub const CHANNEL_END: Vec3 = Vec3::new(0.4, 0.0, 0.3);

/// A colored triangle mesh for one cell part.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshPrimitive {
    pub part: CellPart,
    pub name: &'static str,
    pub mesh: TriangleMesh,
    pub color: Color,
    pub opacity: f32,
}

/// A styled polyline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePrimitive {
    pub name: &'static str,
    pub path: Polyline,
    pub style: LineStyle,
}

/// A text label anchored in 3D.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPrimitive {
    pub text: &'static str,
    pub position: Vec3,
}

/// Geometry that does not depend on the controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellLayout {
    /// Box meshes, indexed by [`CellPart::index`].
    pub parts: [MeshPrimitive; 3],
    /// External wire carrying the electrons.
    pub wire: LinePrimitive,
    /// Proton path through the membrane.
    pub channel: LinePrimitive,
    /// Part labels, indexed by [`CellPart::index`].
    pub labels: [LabelPrimitive; 3],
}

impl Default for CellLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl CellLayout {
    /// The anode / membrane / cathode schematic.
    pub fn standard() -> Self {
        Self {
            parts: CellPart::all().map(|part| MeshPrimitive {
                part,
                name: part.name(),
                mesh: part.bounds().to_mesh(),
                color: part.color(),
                opacity: MESH_OPACITY,
            }),
            wire: LinePrimitive {
                name: "External wire",
                path: Polyline::half_ellipse(WIRE_RADIUS_X, WIRE_RADIUS_Y, WIRE_HEIGHT, WIRE_SAMPLES),
                style: WIRE_LINE,
            },
            channel: LinePrimitive {
                name: "Proton channel",
                path: Polyline::line(CHANNEL_START, CHANNEL_END, CHANNEL_SAMPLES),
                style: CHANNEL_LINE,
            },
            labels: CellPart::all().map(|part| LabelPrimitive {
                text: part.label(),
                position: part.label_anchor(),
            }),
        }
    }

    /// Mesh of one part.
    pub fn part(&self, part: CellPart) -> &MeshPrimitive {
        &self.parts[part.index()]
    }
}
