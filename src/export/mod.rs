//! Export module for handing scenes to external renderers.
//!
//! Supports JSON for single frames, JSON Lines for animation cycles, and
//! Wavefront OBJ for the static cell geometry.

mod json;
mod obj;

pub use json::{scene_to_json, write_frames_jsonl, write_scene_json, JsonExportError};
pub use obj::{write_obj, write_scene_obj, ObjExportError};
