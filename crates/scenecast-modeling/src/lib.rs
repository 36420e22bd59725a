use scenecast_base::Placement;
use thiserror::Error;
use truck_modeling::{Rad, builder};

pub use truck_modeling::{Curve, Edge, Face, Point3, Shell, Solid, Surface, Vector3, Vertex, Wire};

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error(transparent)]
    Modeling(#[from] truck_modeling::errors::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub struct SolidBuilder;

impl SolidBuilder {
    pub fn box_solid(width: f64, height: f64, depth: f64) -> Result<Solid> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        ensure_positive("depth", depth)?;

        let v = builder::vertex(Point3::new(0.0, 0.0, 0.0));
        let e = builder::tsweep(&v, Vector3::unit_x() * width);
        let f = builder::tsweep(&e, Vector3::unit_y() * height);
        Ok(builder::tsweep(&f, Vector3::unit_z() * depth))
    }

    pub fn plate(width: f64, height: f64, thickness: f64) -> Result<Solid> {
        ensure_positive("width", width)?;
        ensure_positive("height", height)?;
        ensure_positive("thickness", thickness)?;

        let face = rectangle_face(width, height, 0.0)?;
        Ok(builder::tsweep(&face, Vector3::unit_z() * thickness))
    }

    pub fn cylinder_z(center: Point3, radius: f64, height: f64) -> Result<Solid> {
        ensure_positive("radius", radius)?;
        ensure_positive("height", height)?;

        let face = circle_face(center, radius)?;
        Ok(builder::tsweep(&face, Vector3::unit_z() * height))
    }
}

/// Translate a solid by a vector.
pub fn translated_solid(solid: &Solid, vector: Vector3) -> Solid {
    builder::translated(solid, vector)
}

/// Rotate a solid about the origin axes, x then y then z. Angles are radians.
pub fn rotated_xyz(solid: &Solid, rx: f64, ry: f64, rz: f64) -> Solid {
    let origin = Point3::new(0.0, 0.0, 0.0);
    let mut shp = solid.clone();
    for (axis, angle) in [
        (Vector3::unit_x(), rx),
        (Vector3::unit_y(), ry),
        (Vector3::unit_z(), rz),
    ] {
        if angle != 0.0 {
            shp = builder::rotated(&shp, origin, axis, Rad(angle));
        }
    }
    shp
}

/// Apply a stored placement to a solid: rotation about the origin, then
/// translation. For callers that bake transforms into geometry instead of
/// carrying them to the scene composer.
pub fn placed_solid(solid: &Solid, placement: &Placement) -> Result<Solid> {
    let [ax, ay, az] = placement.rotation_axis;
    let axis_len = (ax * ax + ay * ay + az * az).sqrt();

    let rotated = if placement.rotation_angle == 0.0 {
        solid.clone()
    } else {
        if axis_len == 0.0 {
            return Err(Error::InvalidParameter(
                "rotation axis must be non-zero when the angle is".to_string(),
            ));
        }
        let axis = Vector3::new(ax / axis_len, ay / axis_len, az / axis_len);
        builder::rotated(
            solid,
            Point3::new(0.0, 0.0, 0.0),
            axis,
            Rad(placement.rotation_angle),
        )
    };

    let [tx, ty, tz] = placement.translation;
    Ok(builder::translated(&rotated, Vector3::new(tx, ty, tz)))
}

fn rectangle_face(width: f64, height: f64, z: f64) -> Result<Face> {
    let v0 = builder::vertex(Point3::new(0.0, 0.0, z));
    let v1 = builder::vertex(Point3::new(width, 0.0, z));
    let v2 = builder::vertex(Point3::new(width, height, z));
    let v3 = builder::vertex(Point3::new(0.0, height, z));

    let wire: Wire = vec![
        builder::line(&v0, &v1),
        builder::line(&v1, &v2),
        builder::line(&v2, &v3),
        builder::line(&v3, &v0),
    ]
    .into();

    Ok(builder::try_attach_plane(&[wire])?)
}

fn circle_face(center: Point3, radius: f64) -> Result<Face> {
    let v = builder::vertex(Point3::new(center.x + radius, center.y, center.z));
    let wire = builder::rsweep(
        &v,
        center,
        Vector3::unit_z(),
        Rad(std::f64::consts::PI * 2.0),
    );
    Ok(builder::try_attach_plane(&[wire])?)
}

fn ensure_positive(name: &str, value: f64) -> Result<()> {
    if value <= 0.0 {
        return Err(Error::InvalidParameter(format!("{name} must be > 0")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_solid_exists() -> Result<()> {
        let solid = SolidBuilder::box_solid(100.0, 200.0, 300.0)?;
        assert!(solid.face_iter().count() > 0);
        Ok(())
    }

    #[test]
    fn negative_dimension_is_rejected() {
        assert!(SolidBuilder::box_solid(-1.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn placement_preserves_topology() -> Result<()> {
        let solid = SolidBuilder::box_solid(10.0, 20.0, 30.0)?;
        let placement = Placement::new([5.0, 0.0, -2.0], [0.0, 0.0, 1.0], 0.5);
        let placed = placed_solid(&solid, &placement)?;
        assert_eq!(placed.face_iter().count(), solid.face_iter().count());
        Ok(())
    }

    #[test]
    fn placement_with_zero_axis_and_angle_is_rejected() {
        let solid = SolidBuilder::box_solid(1.0, 1.0, 1.0).unwrap();
        let placement = Placement::new([0.0; 3], [0.0; 3], 1.0);
        assert!(placed_solid(&solid, &placement).is_err());
    }
}
