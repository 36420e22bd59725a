use anyhow::Result;
use scenecast_base::Placement;
use scenecast_modeling::SolidBuilder;
use scenecast_viewer::{DisplayOptions, RendererConfig, SceneShape, X3domRenderer};
use scenecast_x3d::MaterialSpec;

// A 3x3x3 grid of rotated, tinted boxes; shows the per-shape placement and
// appearance plumbing with many inline references in one scene.
fn main() -> Result<()> {
    let mut renderer = X3domRenderer::new(RendererConfig::default())?;

    for i in 0..27usize {
        let (gx, gy, gz) = (i % 3, (i / 3) % 3, i / 9);
        let size = 8.0 + ((i * 7) % 12) as f64;
        let solid = SolidBuilder::box_solid(size, size * 0.8, size * 1.2)?;

        let placement = Placement::new(
            [gx as f64 * 40.0, gy as f64 * 40.0, gz as f64 * 40.0],
            [0.0, 0.0, 1.0],
            i as f64 * 0.37,
        );
        let material = MaterialSpec {
            diffuse_color: [
                0.2 + 0.4 * gx as f64,
                0.2 + 0.4 * gy as f64,
                0.2 + 0.4 * gz as f64,
            ],
            transparency: if i % 5 == 0 { 0.3 } else { 0.0 },
            ..MaterialSpec::default()
        };

        let shape = SceneShape::new(format!("Box{i}"), solid).with_placement(placement);
        renderer.display_shape(
            &shape,
            &DisplayOptions {
                material,
                export_edges: true,
                ..DisplayOptions::default()
            },
        )?;
    }

    renderer.render(8080)?;
    Ok(())
}
