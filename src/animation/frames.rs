//! One animation cycle as a sequence of scenes.

use crate::controls::Controls;
use crate::scene::{Scene, SceneBuilder};

/// Phases `k / frame_count` for `k` in `0..frame_count`.
pub fn frame_phases(frame_count: usize) -> impl Iterator<Item = f32> {
    (0..frame_count).map(move |k| k as f32 / frame_count as f32)
}

/// Iterator over the scenes of one full cycle for fixed controls.
pub struct FrameSequence<'a> {
    builder: &'a SceneBuilder,
    controls: Controls,
    frame_count: usize,
    next: usize,
}

impl<'a> FrameSequence<'a> {
    pub fn new(builder: &'a SceneBuilder, controls: Controls, frame_count: usize) -> Self {
        Self {
            builder,
            controls,
            frame_count,
            next: 0,
        }
    }
}

impl Iterator for FrameSequence<'_> {
    type Item = Scene;

    fn next(&mut self) -> Option<Scene> {
        if self.next >= self.frame_count {
            return None;
        }
        let phase = self.next as f32 / self.frame_count as f32;
        self.next += 1;
        Some(self.builder.build(&self.controls, phase))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.frame_count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FrameSequence<'_> {}
