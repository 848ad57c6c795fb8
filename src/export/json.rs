//! JSON export of scenes for an external renderer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use crate::scene::Scene;

/// Errors that can occur during JSON export.
#[derive(Error, Debug)]
pub enum JsonExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serializes a scene to a JSON string.
pub fn scene_to_json(scene: &Scene, pretty: bool) -> Result<String, JsonExportError> {
    let text = if pretty {
        serde_json::to_string_pretty(scene)?
    } else {
        serde_json::to_string(scene)?
    };
    Ok(text)
}

/// Writes a single scene as a JSON document.
///
/// # Arguments
/// * `scene` - The scene to export
/// * `path` - Output file path; missing parent directories are created
/// * `pretty` - Indent the output
pub fn write_scene_json(scene: &Scene, path: &Path, pretty: bool) -> Result<(), JsonExportError> {
    create_parent_dir(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    if pretty {
        serde_json::to_writer_pretty(&mut writer, scene)?;
    } else {
        serde_json::to_writer(&mut writer, scene)?;
    }
    writer.write_all(b"\n")?;
    writer.flush()?;
    log::debug!("wrote scene (phase {:.3}) to {}", scene.phase, path.display());
    Ok(())
}

/// Writes scenes as JSON Lines: one compact scene per line.
///
/// Returns the number of scenes written.
pub fn write_frames_jsonl<I>(frames: I, path: &Path) -> Result<usize, JsonExportError>
where
    I: IntoIterator<Item = Scene>,
{
    create_parent_dir(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    let mut count = 0;
    for scene in frames {
        serde_json::to_writer(&mut writer, &scene)?;
        writer.write_all(b"\n")?;
        count += 1;
    }
    writer.flush()?;
    log::debug!("wrote {} frames to {}", count, path.display());
    Ok(count)
}

pub(super) fn create_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::FrameSequence;
    use crate::controls::Controls;
    use crate::scene::{build, SceneBuilder};
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn test_scene_json_structure() {
        let scene = build(&Controls::default(), 0.2);
        let value: Value = serde_json::from_str(&scene_to_json(&scene, false).unwrap()).unwrap();

        assert_eq!(value["meshes"].as_array().unwrap().len(), 3);
        assert_eq!(value["meshes"][0]["name"], "Anode");
        assert_eq!(value["meshes"][0]["color"]["name"], "lightskyblue");
        assert_eq!(value["meshes"][2]["mesh"]["triangles"].as_array().unwrap().len(), 12);
        assert_eq!(value["wire"]["path"]["points"].as_array().unwrap().len(), 40);
        assert_eq!(value["electrons"]["points"].as_array().unwrap().len(), 12);
        assert!((value["oxygen"]["style"]["opacity"].as_f64().unwrap() - 0.6).abs() < 1e-6);
        // Vec3 serializes as a 3-element array.
        assert_eq!(value["labels"][1]["position"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_write_scene_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("scene.json");
        let scene = build(&Controls::high_output(), 0.5);

        write_scene_json(&scene, &path, true).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["seed"].as_u64().unwrap(), scene.seed);
        assert!(text.contains('\n'));
    }

    #[test]
    fn test_write_frames_jsonl() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frames.jsonl");
        let builder = SceneBuilder::new();

        let written =
            write_frames_jsonl(FrameSequence::new(&builder, Controls::default(), 5), &path).unwrap();
        assert_eq!(written, 5);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        let last: Value = serde_json::from_str(lines[4]).unwrap();
        assert!((last["phase"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_write_to_missing_location_fails() {
        let dir = tempdir().unwrap();
        // A file where a directory is expected.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"x").unwrap();
        let scene = build(&Controls::default(), 0.0);

        let result = write_scene_json(&scene, &blocker.join("scene.json"), false);
        assert!(matches!(result, Err(JsonExportError::Io(_))));
    }
}
