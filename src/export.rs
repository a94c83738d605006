//! Wavefront OBJ export of the sampled strip.
//!
//! This is the hand-off point to 3D viewers: the geometry engine exposes
//! its coordinate fields and the exporter turns them into an indexed
//! triangle mesh. OBJ keeps shared vertices, so the grid topology survives
//! round-trips through downstream tools.

use std::io::Write;
use std::path::Path;

use crate::strip::MobiusStrip;

/// Write the strip's grid as an indexed OBJ mesh with per-vertex normals.
///
/// Vertices are emitted row-major from the coordinate fields; each grid
/// quad is split into two triangles, matching the parameter-grid
/// triangulation used for curved faces.
pub fn write_obj(strip: &MobiusStrip, path: &Path) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;

    let n = strip.params().resolution;
    writeln!(file, "# Moebius strip — OBJ export")?;
    writeln!(file, "# Grid: {n} x {n}")?;
    writeln!(file, "# Triangles: {}", 2 * (n - 1) * (n - 1))?;
    writeln!(file)?;

    // Vertices (shared — written once, referenced by index)
    let (x, y, z) = (strip.x(), strip.y(), strip.z());
    for i in 0..n {
        for j in 0..n {
            writeln!(
                file,
                "v {:.8} {:.8} {:.8}",
                x.at(i, j),
                y.at(i, j),
                z.at(i, j)
            )?;
        }
    }
    writeln!(file)?;

    // Per-vertex normals from the analytic surface tangents
    let (uu, vv) = (strip.u_grid(), strip.v_grid());
    for i in 0..n {
        for j in 0..n {
            let normal = strip.surface().normal(uu.at(i, j), vv.at(i, j));
            writeln!(
                file,
                "vn {:.8} {:.8} {:.8}",
                normal.x, normal.y, normal.z
            )?;
        }
    }
    writeln!(file)?;

    // Faces (1-indexed in OBJ), two triangles per grid quad
    // Format: f v1//vn1 v2//vn2 v3//vn3
    for i in 0..n - 1 {
        for j in 0..n - 1 {
            let i00 = (i * n + j + 1) as u32;
            let i10 = i00 + 1;
            let i01 = i00 + n as u32;
            let i11 = i01 + 1;
            writeln!(file, "f {i00}//{i00} {i10}//{i10} {i11}//{i11}")?;
            writeln!(file, "f {i00}//{i00} {i11}//{i11} {i01}//{i01}")?;
        }
    }

    Ok(())
}
