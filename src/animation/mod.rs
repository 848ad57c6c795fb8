//! Animation timing: phase wrapping, a caller-owned clock, and frame
//! sequences covering one cycle.

mod clock;
mod frames;

pub use clock::{wrap_phase, ClockConfig, PhaseClock};
pub use frames::{frame_phases, FrameSequence};
