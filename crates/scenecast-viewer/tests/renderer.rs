use anyhow::Result;
use scenecast_base::Placement;
use scenecast_modeling::SolidBuilder;
use scenecast_viewer::{DisplayOptions, RendererConfig, SceneShape, StaticServer, X3domRenderer};
use scenecast_x3d::shape_file_name;
use std::fs;

fn renderer_in_temp_dir() -> Result<(X3domRenderer, tempfile::TempDir)> {
    let dir = tempfile::tempdir()?;
    let renderer = X3domRenderer::new(RendererConfig {
        out_dir: Some(dir.path().to_path_buf()),
        ..RendererConfig::default()
    })?;
    Ok((renderer, dir))
}

#[test]
fn single_shape_with_edges_produces_file_and_reference() -> Result<()> {
    let (mut renderer, _dir) = renderer_in_temp_dir()?;
    let shape = SceneShape::new("Box", SolidBuilder::box_solid(100.0, 200.0, 300.0)?);
    let options = DisplayOptions {
        export_edges: true,
        ..DisplayOptions::default()
    };

    renderer.display_shape(&shape, &options)?;
    let index = renderer.compose()?;

    let doc = fs::read_to_string(renderer.out_dir().join(shape_file_name(&shape.guid)))?;
    assert_eq!(doc.matches("DEF=\"shape").count(), 1);
    assert_eq!(doc.matches("DEF=\"edg").count(), 12);

    let page = fs::read_to_string(index)?;
    assert_eq!(page.matches("<Inline").count(), 1);
    assert!(page.contains(&format!("url=\"{}\"", shape_file_name(&shape.guid))));
    Ok(())
}

#[test]
fn two_shapes_yield_two_distinct_references() -> Result<()> {
    let (mut renderer, _dir) = renderer_in_temp_dir()?;
    let a = SceneShape::new("Box", SolidBuilder::box_solid(10.0, 10.0, 10.0)?)
        .with_placement(Placement::translated([0.0, 0.0, 0.0]));
    let b = SceneShape::new("Plate", SolidBuilder::plate(100.0, 50.0, 5.0)?)
        .with_placement(Placement::translated([25.0, 0.0, 0.0]));

    renderer.display_shape(&a, &DisplayOptions::default())?;
    renderer.display_shape(&b, &DisplayOptions::default())?;
    let page = fs::read_to_string(renderer.compose()?)?;

    assert_eq!(page.matches("<Inline").count(), 2);
    assert!(page.contains(&format!("url=\"{}\"", shape_file_name(&a.guid))));
    assert!(page.contains(&format!("url=\"{}\"", shape_file_name(&b.guid))));
    assert_ne!(shape_file_name(&a.guid), shape_file_name(&b.guid));
    Ok(())
}

#[test]
fn redisplaying_a_shape_overwrites_its_entry() -> Result<()> {
    let (mut renderer, _dir) = renderer_in_temp_dir()?;
    let mut shape = SceneShape::new("Box", SolidBuilder::box_solid(10.0, 10.0, 10.0)?);
    let other = SceneShape::new("Plate", SolidBuilder::plate(100.0, 50.0, 5.0)?);

    renderer.display_shape(&shape, &DisplayOptions::default())?;
    renderer.display_shape(&other, &DisplayOptions::default())?;
    shape.placement = Placement::translated([7.0, 8.0, 9.0]);
    renderer.display_shape(&shape, &DisplayOptions::default())?;

    assert_eq!(renderer.registry().len(), 2);
    assert_eq!(
        renderer.registry().entries().get(&shape.guid).map(|p| p.translation),
        Some([7.0, 8.0, 9.0])
    );
    Ok(())
}

#[test]
fn invalid_appearance_leaves_no_trace() -> Result<()> {
    let (mut renderer, _dir) = renderer_in_temp_dir()?;
    let shape = SceneShape::new("Box", SolidBuilder::box_solid(10.0, 10.0, 10.0)?);
    let options = DisplayOptions {
        vertex_shader: Some("void main() {}".to_string()),
        ..DisplayOptions::default()
    };

    assert!(renderer.display_shape(&shape, &options).is_err());
    assert!(renderer.registry().is_empty());
    assert!(!renderer.out_dir().join(shape_file_name(&shape.guid)).exists());
    Ok(())
}

#[test]
fn empty_scene_still_composes() -> Result<()> {
    let (renderer, _dir) = renderer_in_temp_dir()?;
    let page = fs::read_to_string(renderer.compose()?)?;
    assert!(!page.contains("<Inline"));
    assert!(page.contains("value=\"Fit All\""));
    Ok(())
}

#[test]
fn shutdown_handle_preempts_serve() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let server = StaticServer::bind(dir.path(), 0)?;
    server.handle().shutdown();
    server.serve()?;
    Ok(())
}
