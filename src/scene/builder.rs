//! Scene assembly: static layout plus per-frame particles.

use std::sync::OnceLock;

use glam::Vec3;
use serde::Serialize;

use super::layout::{CellLayout, LabelPrimitive, LinePrimitive, MeshPrimitive};
use super::parts::CellPart;
use super::particles::{
    electron_positions, electron_speed_factor, laps_per_cycle, particle_phases, proton_positions,
    SceneRng, PARTICLE_COUNT,
};
use super::style::{MarkerStyle, ELECTRON_MARKER, OXYGEN_MARKER, PROTON_MARKER};
use crate::animation::wrap_phase;
use crate::controls::Controls;
use crate::reaction::{ReactionModel, Readouts};

/// A styled set of points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointCloud {
    pub name: &'static str,
    pub points: Vec<Vec3>,
    pub style: MarkerStyle,
}

/// Everything the renderer needs for one frame.
///
/// A scene is rebuilt wholesale for every frame; nothing in it is patched
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Wrapped animation phase the scene was built for.
    pub phase: f32,
    /// Seed of the visual jitter.
    pub seed: u64,
    /// Readouts of the controls the scene was built from.
    pub readouts: Readouts,
    /// Box meshes, indexed by [`CellPart::index`].
    pub meshes: [MeshPrimitive; 3],
    pub wire: LinePrimitive,
    pub channel: LinePrimitive,
    pub labels: [LabelPrimitive; 3],
    /// Wrapped path parameter of each electron/proton pair.
    pub particle_phases: Vec<f32>,
    pub electrons: PointCloud,
    pub protons: PointCloud,
    pub oxygen: PointCloud,
}

impl Scene {
    /// Mesh of one part.
    pub fn mesh(&self, part: CellPart) -> &MeshPrimitive {
        &self.meshes[part.index()]
    }

    /// All point clouds in draw order.
    pub fn point_clouds(&self) -> [&PointCloud; 3] {
        [&self.electrons, &self.protons, &self.oxygen]
    }
}

/// Builds scenes from controls and an animation phase.
///
/// The static layout is built once on construction and cloned into every
/// scene. The builder is immutable, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    layout: CellLayout,
    model: ReactionModel,
}

impl SceneBuilder {
    /// Creates a builder with the standard layout and default reaction model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder whose particle speed follows a custom reaction model.
    pub fn with_model(model: ReactionModel) -> Self {
        Self {
            layout: CellLayout::standard(),
            model,
        }
    }

    /// The static geometry shared by every scene.
    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    /// The reaction model driving particle speed.
    pub fn model(&self) -> &ReactionModel {
        &self.model
    }

    /// Builds the scene for `controls` at animation `phase`.
    ///
    /// `phase` is wrapped into `[0, 1)` circularly. Identical controls and
    /// phase always produce an identical scene.
    pub fn build(&self, controls: &Controls, phase: f32) -> Scene {
        let controls = controls.clamped();
        let phase = wrap_phase(phase);
        let readouts = self.model.compute(&controls);

        let seed = controls.scene_seed();
        let mut rng = SceneRng::new(seed);
        let shift = rng.phase_shift();
        let oxygen = rng.oxygen_cloud();

        let speed = electron_speed_factor(controls.animation_speed, readouts.reaction_rate);
        let phases = particle_phases(PARTICLE_COUNT, shift, phase, laps_per_cycle(speed));

        let layout = &self.layout;
        Scene {
            phase,
            seed,
            readouts,
            meshes: layout.parts.clone(),
            wire: layout.wire.clone(),
            channel: layout.channel.clone(),
            labels: layout.labels.clone(),
            electrons: PointCloud {
                name: "Electrons",
                points: electron_positions(&layout.wire.path, &phases),
                style: ELECTRON_MARKER,
            },
            protons: PointCloud {
                name: "Protons (H+)",
                points: proton_positions(&layout.channel.path, &phases),
                style: PROTON_MARKER,
            },
            oxygen: PointCloud {
                name: "Oxygen (O2)",
                points: oxygen,
                style: OXYGEN_MARKER,
            },
            particle_phases: phases,
        }
    }
}

/// Builds a scene with a shared default builder.
pub fn build(controls: &Controls, phase: f32) -> Scene {
    static BUILDER: OnceLock<SceneBuilder> = OnceLock::new();
    BUILDER.get_or_init(SceneBuilder::new).build(controls, phase)
}

/// Readouts and scene for one frame.
pub fn build_frame(controls: &Controls, phase: f32) -> (Readouts, Scene) {
    let scene = build(controls, phase);
    (scene.readouts, scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::particles::{OXYGEN_COUNT, OXYGEN_MEAN};

    fn circular_distance(a: f32, b: f32) -> f32 {
        let d = (a - b).abs();
        d.min(1.0 - d)
    }

    #[test]
    fn test_scene_shape() {
        let scene = build(&Controls::default(), 0.3);
        assert_eq!(scene.electrons.points.len(), PARTICLE_COUNT);
        assert_eq!(scene.protons.points.len(), PARTICLE_COUNT);
        assert_eq!(scene.oxygen.points.len(), OXYGEN_COUNT);
        assert_eq!(scene.particle_phases.len(), PARTICLE_COUNT);
        assert_eq!(scene.mesh(CellPart::Membrane).color.name, "white");
        assert_eq!(scene.labels[0].text, "Anode");
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = SceneBuilder::new();
        let c = Controls::high_output();
        let a = builder.build(&c, 0.42);
        let b = builder.build(&c, 0.42);
        assert_eq!(a, b);
        assert_eq!(a, build(&c, 0.42));
    }

    #[test]
    fn test_different_controls_change_oxygen_cloud() {
        let a = build(&Controls::default(), 0.0);
        let b = build(&Controls::new(1.0, 1.0, 61, 0.8, 1.0), 0.0);
        assert_ne!(a.seed, b.seed);
        assert_ne!(a.oxygen.points, b.oxygen.points);
    }

    #[test]
    fn test_static_geometry_independent_of_controls() {
        let a = build(&Controls::idle(), 0.1);
        let b = build(&Controls::high_output(), 0.8);
        assert_eq!(a.meshes, b.meshes);
        assert_eq!(a.wire, b.wire);
        assert_eq!(a.channel, b.channel);
        assert_eq!(a.labels, b.labels);
    }

    #[test]
    fn test_particles_lie_on_their_paths() {
        let builder = SceneBuilder::new();
        let scene = builder.build(&Controls::default(), 0.37);
        let wire = &builder.layout().wire.path;
        for p in &scene.electrons.points {
            assert!(wire.points.contains(p), "electron {:?} off the wire", p);
        }
        for p in &scene.protons.points {
            // The channel is the segment (-0.4,0,-0.3) -> (0.4,0,0.3).
            assert_eq!(p.y, 0.0);
            assert!((p.z - p.x * 0.75).abs() < 1e-5);
            assert!(p.x >= -0.4 - 1e-6 && p.x <= 0.4 + 1e-6);
        }
    }

    #[test]
    fn test_oxygen_cloud_near_cathode() {
        let scene = build(&Controls::default(), 0.0);
        let mean = scene.oxygen.points.iter().copied().sum::<Vec3>() / OXYGEN_COUNT as f32;
        // Ten samples: loose bounds, several standard errors wide.
        assert!((mean.x - OXYGEN_MEAN.x).abs() < 0.15);
        assert!((mean.z - OXYGEN_MEAN.z).abs() < 0.1);
    }

    #[test]
    fn test_phase_wraps_circularly() {
        let c = Controls::default();
        assert_eq!(build(&c, 1.0).particle_phases, build(&c, 0.0).particle_phases);
        assert_eq!(build(&c, 1.25).particle_phases, build(&c, 0.25).particle_phases);
        assert_eq!(build(&c, 1.0).phase, 0.0);
    }

    #[test]
    fn test_wrap_continuity() {
        for c in [Controls::default(), Controls::high_output(), Controls::idle()] {
            let before = build(&c, 0.999_9);
            let after = build(&c, 0.0);
            for (a, b) in before.particle_phases.iter().zip(&after.particle_phases) {
                assert!(circular_distance(*a, *b) < 1e-2, "{} vs {}", a, b);
            }
            assert_eq!(before.oxygen, after.oxygen);
        }
    }

    #[test]
    fn test_particles_move_with_phase() {
        let c = Controls::default();
        let a = build(&c, 0.0);
        let b = build(&c, 0.05);
        assert_ne!(a.protons.points, b.protons.points);
    }

    #[test]
    fn test_out_of_range_controls_match_clamped() {
        let wild = Controls::new(10.0, 0.0, -40, 3.0, 9.0).with_animation_speed(99);
        assert_eq!(build(&wild, 0.6), build(&wild.clamped(), 0.6));
    }

    #[test]
    fn test_build_frame_readouts() {
        let c = Controls::default();
        let (readouts, scene) = build_frame(&c, 0.5);
        assert_eq!(readouts, crate::reaction::compute(&c));
        assert_eq!(scene.readouts, readouts);
    }
}
