//! Uniformly sampled polylines with parameter lookups.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::Serialize;

/// A polyline whose samples are evenly spaced in a normalized parameter
/// `t ∈ [0, 1]`: sample `i` sits at `t = i / (n - 1)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    /// Sample positions.
    pub points: Vec<Vec3>,
}

impl Polyline {
    /// Wraps existing samples.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self { points }
    }

    /// Samples a straight segment, endpoints included.
    pub fn line(start: Vec3, end: Vec3, samples: usize) -> Self {
        Self::new(linspace(samples).map(|t| start.lerp(end, t)).collect())
    }

    /// Samples a half ellipse in the plane `z = height`.
    ///
    /// The angle runs from -π/2 to π/2, so the arc starts at `(0, -radius_y)`,
    /// bulges out to `(radius_x, 0)` and ends at `(0, radius_y)`.
    ///
    /// # Arguments
    /// * `radius_x` - Semi-axis along x
    /// * `radius_y` - Semi-axis along y
    /// * `height` - Constant z of the arc
    /// * `samples` - Number of samples, endpoints included
    pub fn half_ellipse(radius_x: f32, radius_y: f32, height: f32, samples: usize) -> Self {
        Self::new(
            linspace(samples)
                .map(|t| {
                    let theta = -FRAC_PI_2 + t * 2.0 * FRAC_PI_2;
                    Vec3::new(radius_x * theta.cos(), radius_y * theta.sin(), height)
                })
                .collect(),
        )
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polyline has no samples.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the sample at or before `t`: `floor(t * (n - 1))`.
    ///
    /// `t` is clamped to `[0, 1]`. Returns 0 for an empty polyline.
    pub fn index_at(&self, t: f32) -> usize {
        let last = self.points.len().saturating_sub(1);
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        ((t * last as f32).floor() as usize).min(last)
    }

    /// The sample at [`Self::index_at`], snapped to the grid.
    pub fn snap(&self, t: f32) -> Vec3 {
        self.points.get(self.index_at(t)).copied().unwrap_or(Vec3::ZERO)
    }

    /// Piecewise-linear position at `t`, clamped to the endpoints.
    pub fn interpolate(&self, t: f32) -> Vec3 {
        match self.points.len() {
            0 => Vec3::ZERO,
            1 => self.points[0],
            n => {
                let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
                let s = t * (n - 1) as f32;
                let i = (s.floor() as usize).min(n - 2);
                self.points[i].lerp(self.points[i + 1], s - i as f32)
            }
        }
    }

    /// Total length of the segments.
    pub fn length(&self) -> f32 {
        self.points.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Longest single segment.
    pub fn max_segment_length(&self) -> f32 {
        self.points
            .windows(2)
            .map(|w| w[0].distance(w[1]))
            .fold(0.0, f32::max)
    }
}

/// `samples` evenly spaced values over `[0, 1]`, both ends included.
fn linspace(samples: usize) -> impl Iterator<Item = f32> {
    let denom = samples.saturating_sub(1).max(1) as f32;
    (0..samples).map(move |i| i as f32 / denom)
}
