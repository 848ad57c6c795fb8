//! Simplified reaction model producing the rate, current and power readouts.

mod model;
mod readouts;

pub use model::{compute, ReactionModel, ReactionParams};
pub use readouts::Readouts;
