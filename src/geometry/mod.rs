//! Geometry primitives for the cell schematic.
//!
//! Provides axis-aligned boxes with closed triangle meshes and uniformly
//! sampled polylines with snapped and interpolated parameter lookups.

mod cuboid;
mod polyline;

pub use cuboid::{Cuboid, TriangleMesh, BOX_TRIANGLES};
pub use polyline::Polyline;
