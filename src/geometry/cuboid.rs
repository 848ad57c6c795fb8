//! Axis-aligned boxes and their closed triangle meshes.

use glam::Vec3;
use serde::Serialize;

/// Triangle indices covering the six sides of a box.
///
/// Vertex layout (see [`Cuboid::corners`]): 0-3 are the `z = min` ring,
/// 4-7 the `z = max` ring, each ordered (x0,y0), (x1,y0), (x1,y1), (x0,y1).
/// Every triangle winds counter-clockwise seen from outside the box.
pub const BOX_TRIANGLES: [[u32; 3]; 12] = [
    // -Z
    [0, 2, 1],
    [0, 3, 2],
    // +Z
    [4, 5, 6],
    [4, 6, 7],
    // -Y
    [0, 1, 5],
    [0, 5, 4],
    // +Y
    [3, 7, 6],
    [3, 6, 2],
    // -X
    [0, 4, 7],
    [0, 7, 3],
    // +X
    [1, 2, 6],
    [1, 6, 5],
];

/// An axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cuboid {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Cuboid {
    /// Creates a box from two opposite corners, in any order.
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a box from per-axis spans.
    pub fn from_spans(x: (f32, f32), y: (f32, f32), z: (f32, f32)) -> Self {
        Self::new(Vec3::new(x.0, y.0, z.0), Vec3::new(x.1, y.1, z.1))
    }

    /// Centre point.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along x, y and z.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Total area of the six sides.
    pub fn surface_area(&self) -> f32 {
        let s = self.size();
        2.0 * (s.x * s.y + s.y * s.z + s.z * s.x)
    }

    /// The eight corners in mesh vertex order.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
        ]
    }

    /// Builds the closed triangle mesh of this box.
    ///
    /// # Example
    /// ```
    /// use glam::Vec3;
    /// use fuelcell::geometry::Cuboid;
    ///
    /// let mesh = Cuboid::new(Vec3::ZERO, Vec3::ONE).to_mesh();
    /// assert_eq!(mesh.vertices.len(), 8);
    /// assert_eq!(mesh.triangles.len(), 12);
    /// ```
    pub fn to_mesh(&self) -> TriangleMesh {
        TriangleMesh {
            vertices: self.corners().to_vec(),
            triangles: BOX_TRIANGLES.to_vec(),
        }
    }
}

/// An indexed triangle mesh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Vec3>,
    /// Vertex indices, three per triangle.
    pub triangles: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Returns the three corner positions of a triangle.
    pub fn triangle(&self, index: usize) -> [Vec3; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Area-weighted normal of a triangle (length = twice the area).
    pub fn triangle_normal(&self, index: usize) -> Vec3 {
        let [a, b, c] = self.triangle(index);
        (b - a).cross(c - a)
    }

    /// Sum of all triangle areas.
    pub fn area(&self) -> f32 {
        (0..self.triangles.len())
            .map(|i| self.triangle_normal(i).length() * 0.5)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn test_boxes() -> Vec<Cuboid> {
        vec![
            Cuboid::from_spans((-2.0, -0.5), (-0.8, 0.8), (-0.5, 0.5)),
            Cuboid::from_spans((-0.4, 0.4), (-0.8, 0.8), (-0.5, 0.5)),
            Cuboid::new(Vec3::new(3.0, 1.0, 7.0), Vec3::new(-1.0, -2.0, 2.0)),
        ]
    }

    #[test]
    fn test_corner_order_normalised() {
        let b = Cuboid::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(b.min, Vec3::ZERO);
        assert_eq!(b.max, Vec3::ONE);
        assert_eq!(b.center(), Vec3::splat(0.5));
    }

    #[test]
    fn test_mesh_counts() {
        for b in test_boxes() {
            let mesh = b.to_mesh();
            assert_eq!(mesh.vertices.len(), 8);
            assert_eq!(mesh.triangles.len(), 12);
        }
    }

    #[test]
    fn test_triangles_face_outward() {
        for b in test_boxes() {
            let mesh = b.to_mesh();
            let center = b.center();
            for i in 0..mesh.triangles.len() {
                let [p0, p1, p2] = mesh.triangle(i);
                let centroid = (p0 + p1 + p2) / 3.0;
                let normal = mesh.triangle_normal(i);
                assert!(
                    normal.dot(centroid - center) > 0.0,
                    "triangle {} of {:?} faces inward",
                    i,
                    b
                );
                // Each normal must be axis-aligned: the triangle lies in a box side.
                let n = normal.normalize();
                assert!((n.abs().max_element() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_mesh_is_closed_and_consistent() {
        let mesh = Cuboid::from_spans((0.5, 2.0), (-0.8, 0.8), (-0.5, 0.5)).to_mesh();
        let mut edges: HashMap<(u32, u32), i32> = HashMap::new();
        for [a, b, c] in &mesh.triangles {
            for (u, v) in [(*a, *b), (*b, *c), (*c, *a)] {
                *edges.entry((u, v)).or_insert(0) += 1;
            }
        }
        for (&(u, v), &count) in &edges {
            assert_eq!(count, 1, "directed edge {}->{} used twice", u, v);
            assert_eq!(
                edges.get(&(v, u)),
                Some(&1),
                "edge {}->{} has no opposite",
                u,
                v
            );
        }
        // 18 undirected edges (12 box edges + 6 face diagonals).
        assert_eq!(edges.len(), 36);
    }

    #[test]
    fn test_mesh_area_covers_every_side() {
        for b in test_boxes() {
            let mesh = b.to_mesh();
            assert!((mesh.area() - b.surface_area()).abs() < 1e-4);

            // Two triangles per side.
            let mut per_side: HashMap<(usize, bool), usize> = HashMap::new();
            for i in 0..mesh.triangles.len() {
                let n = mesh.triangle_normal(i);
                let a = n.abs();
                let axis = if a.x >= a.y && a.x >= a.z {
                    0
                } else if a.y >= a.z {
                    1
                } else {
                    2
                };
                *per_side.entry((axis, n[axis] > 0.0)).or_insert(0) += 1;
            }
            assert_eq!(per_side.len(), 6);
            assert!(per_side.values().all(|&n| n == 2));
        }
    }
}
