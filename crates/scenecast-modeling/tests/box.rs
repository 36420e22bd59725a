use scenecast_modeling::{Result, SolidBuilder, Point3};

#[test]
fn box_solid_exists() -> Result<()> {
    let solid = SolidBuilder::box_solid(100.0, 200.0, 300.0)?;
    assert!(solid.face_iter().count() > 0);
    Ok(())
}

#[test]
fn plate_solid_exists() -> Result<()> {
    let solid = SolidBuilder::plate(1000.0, 200.0, 20.0)?;
    assert!(solid.face_iter().count() > 0);
    Ok(())
}

#[test]
fn cylinder_solid_exists() -> Result<()> {
    let solid = SolidBuilder::cylinder_z(Point3::new(0.0, 0.0, 0.0), 50.0, 100.0)?;
    assert!(solid.face_iter().count() > 0);
    Ok(())
}
