//! Wavefront OBJ export of the cell geometry.
//!
//! Each cell part becomes one `o` object with 8 vertices and 12 triangles;
//! the external wire becomes a polyline object. Particles are not exported.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

use super::json::create_parent_dir;
use crate::geometry::Polyline;
use crate::scene::{MeshPrimitive, Scene};

/// Errors that can occur during OBJ export.
#[derive(Error, Debug)]
pub enum ObjExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the scene's boxes and wire to any writer.
pub fn write_obj<W: Write>(scene: &Scene, writer: &mut W) -> Result<(), ObjExportError> {
    writeln!(writer, "# fuel cell schematic, phase {:.3}", scene.phase)?;

    // OBJ indices are 1-based and global across objects.
    let mut offset = 1u32;
    for mesh in &scene.meshes {
        offset += write_mesh(writer, mesh, offset)?;
    }
    write_polyline(writer, "External_wire", &scene.wire.path, offset)?;
    Ok(())
}

/// Writes the scene's boxes and wire to an OBJ file.
pub fn write_scene_obj(scene: &Scene, path: &Path) -> Result<(), ObjExportError> {
    create_parent_dir(path)?;
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(scene, &mut writer)?;
    writer.flush()?;
    log::debug!("wrote OBJ geometry to {}", path.display());
    Ok(())
}

fn write_mesh<W: Write>(writer: &mut W, mesh: &MeshPrimitive, offset: u32) -> std::io::Result<u32> {
    writeln!(writer, "o {}", object_name(mesh.part.label()))?;
    for v in &mesh.mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for [a, b, c] in &mesh.mesh.triangles {
        writeln!(writer, "f {} {} {}", a + offset, b + offset, c + offset)?;
    }
    Ok(mesh.mesh.vertices.len() as u32)
}

fn write_polyline<W: Write>(
    writer: &mut W,
    name: &str,
    path: &Polyline,
    offset: u32,
) -> std::io::Result<u32> {
    if path.is_empty() {
        return Ok(0);
    }
    writeln!(writer, "o {}", name)?;
    for p in &path.points {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    write!(writer, "l")?;
    for i in 0..path.len() as u32 {
        write!(writer, " {}", i + offset)?;
    }
    writeln!(writer)?;
    Ok(path.len() as u32)
}

fn object_name(label: &str) -> String {
    label.replace(' ', "_")
}
