use anyhow::{Result, bail};
use scenecast_modeling::Solid;
use std::collections::HashSet;
use truck_meshalgo::prelude::*;

use crate::fragment::EdgePolyline;

pub const DEFAULT_TESSELLATION_TOLERANCE: f64 = 0.5;

/// One shape's tessellation result: a merged triangle mesh and, when
/// requested, the unique boundary edge polylines.
pub struct TessellationOutput {
    pub mesh: PolygonMesh,
    pub edges: Vec<EdgePolyline>,
}

/// Drive the external tessellator. `mesh_quality` scales the tessellation
/// tolerance (1.0 is the default, below 1 refines, above 1 coarsens).
pub fn tessellate_solid(
    solid: &Solid,
    compute_edges: bool,
    mesh_quality: f64,
) -> Result<TessellationOutput> {
    if !mesh_quality.is_finite() || mesh_quality <= 0.0 {
        bail!("mesh quality must be positive and finite, got {mesh_quality}");
    }
    let tol = DEFAULT_TESSELLATION_TOLERANCE * mesh_quality;

    let meshed = solid.triangulation(tol);
    let mut mesh = meshed.to_polygon();
    mesh.add_naive_normals(true);
    mesh.put_together_same_attrs(truck_base::tolerance::TOLERANCE);
    mesh.remove_unused_attrs();
    if mesh.positions().is_empty() {
        bail!("triangulation produced empty mesh");
    }

    let mut edges = Vec::new();
    if compute_edges {
        let mut seen = HashSet::new();
        for shell in meshed.boundaries() {
            for edge in shell.edge_iter() {
                if seen.insert(edge.id()) {
                    edges.push(edge.curve().0);
                }
            }
        }
    }

    Ok(TessellationOutput { mesh, edges })
}
