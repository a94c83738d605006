//! Builds the reference strip (R = 1.0, w = 0.4, n = 300), prints the two
//! scalar measurements, and writes the mesh for a 3D viewer.

use std::path::Path;

use moebius::export::write_obj;
use moebius::{MobiusStrip, StripParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let strip = MobiusStrip::new(StripParams {
        radius: 1.0,
        width: 0.4,
        resolution: 300,
    })?;

    println!("Surface area ≈ {:.4}", strip.surface_area());
    println!("Edge length  ≈ {:.4}", strip.edge_length());

    let out = Path::new("mobius.obj");
    write_obj(&strip, out)?;
    println!("Mesh written to {}", out.display());

    Ok(())
}
