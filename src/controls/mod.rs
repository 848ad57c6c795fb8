//! Operating controls: the value object fed to every model entry point,
//! together with the slider ranges it is clamped to.

mod config;
pub mod range;

pub use config::{Controls, ControlsError};
pub use range::ControlRange;
