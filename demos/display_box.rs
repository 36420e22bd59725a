use anyhow::Result;
use scenecast_modeling::SolidBuilder;
use scenecast_viewer::{DisplayOptions, RendererConfig, SceneShape, X3domRenderer};

fn main() -> Result<()> {
    let solid = SolidBuilder::box_solid(100.0, 200.0, 300.0)?;
    let mut renderer = X3domRenderer::new(RendererConfig::default())?;
    let shape = SceneShape::new("Box", solid);
    renderer.display_shape(
        &shape,
        &DisplayOptions {
            export_edges: true,
            ..DisplayOptions::default()
        },
    )?;
    renderer.render(8080)?;
    Ok(())
}
