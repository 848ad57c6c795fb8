//! Animated particle clusters: electrons, protons and the oxygen cloud.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::animation::wrap_phase;
use crate::geometry::Polyline;

/// Electrons on the wire, and protons in the channel.
pub const PARTICLE_COUNT: usize = 12;
/// Points in the oxygen cloud.
pub const OXYGEN_COUNT: usize = 10;

/// Centre of the oxygen cloud next to the cathode.
pub const OXYGEN_MEAN: Vec3 = Vec3::new(1.4, 0.0, 0.2);
/// Per-axis standard deviation of the oxygen cloud.
pub const OXYGEN_STD_DEV: Vec3 = Vec3::new(0.08, 0.3, 0.05);

/// Upper bound (exclusive) of the seeded electron phase shift.
pub const MAX_PHASE_SHIFT: f32 = 0.5;

/// How fast electrons travel relative to the base animation.
///
/// `max(1, speed * (1 + rate / 4))`: a busier cell moves charge faster.
pub fn electron_speed_factor(animation_speed: u32, reaction_rate: f32) -> f32 {
    (animation_speed as f32 * (1.0 + reaction_rate / 4.0)).max(1.0)
}

/// Whole wire traversals per animation cycle for a speed factor.
///
/// Rounding to whole laps keeps phase 1.0 identical to phase 0.0.
pub fn laps_per_cycle(speed_factor: f32) -> u32 {
    if speed_factor.is_finite() {
        speed_factor.round().max(1.0) as u32
    } else {
        1
    }
}

/// Wrapped path parameter of each particle at a given animation phase.
///
/// Particle `i` starts at `i / count`, is offset by `shift`, and advances
/// `laps` times per unit of phase.
pub fn particle_phases(count: usize, shift: f32, phase: f32, laps: u32) -> Vec<f32> {
    let advance = wrap_phase(phase) * laps as f32;
    (0..count)
        .map(|i| wrap_phase(i as f32 / count as f32 + shift + advance))
        .collect()
}

/// Electron positions: each phase snapped to the nearest-below wire sample.
pub fn electron_positions(wire: &Polyline, phases: &[f32]) -> Vec<Vec3> {
    phases.iter().map(|&t| wire.snap(t)).collect()
}

/// Proton positions: each phase interpolated along the channel.
pub fn proton_positions(channel: &Polyline, phases: &[f32]) -> Vec<Vec3> {
    phases.iter().map(|&t| channel.interpolate(t)).collect()
}

/// Seeded random source for the visual jitter of one scene.
pub struct SceneRng {
    rng: ChaCha8Rng,
}

impl SceneRng {
    /// Creates a generator from a scene seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Electron phase shift in `[0, MAX_PHASE_SHIFT)`.
    pub fn phase_shift(&mut self) -> f32 {
        self.rng.random::<f32>() * MAX_PHASE_SHIFT
    }

    /// Gaussian cloud of `count` points with per-axis mean and deviation.
    pub fn gaussian_cloud(&mut self, count: usize, mean: Vec3, std_dev: Vec3) -> Vec<Vec3> {
        (0..count)
            .map(|_| {
                let x: f32 = StandardNormal.sample(&mut self.rng);
                let y: f32 = StandardNormal.sample(&mut self.rng);
                let z: f32 = StandardNormal.sample(&mut self.rng);
                mean + std_dev * Vec3::new(x, y, z)
            })
            .collect()
    }

    /// The oxygen cloud next to the cathode.
    pub fn oxygen_cloud(&mut self) -> Vec<Vec3> {
        self.gaussian_cloud(OXYGEN_COUNT, OXYGEN_MEAN, OXYGEN_STD_DEV)
    }
}
