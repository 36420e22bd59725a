use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a shape inside a scene. Derived from the handle a
/// shape is registered under, never from its geometry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Guid(Uuid);

impl Guid {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for Guid {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Guid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Rigid placement of a shape instance: a translation followed by an
/// axis-angle rotation. Angles are radians.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub translation: [f64; 3],
    pub rotation_axis: [f64; 3],
    pub rotation_angle: f64,
}

impl Placement {
    pub const fn identity() -> Self {
        Self {
            translation: [0.0, 0.0, 0.0],
            rotation_axis: [0.0, 0.0, 1.0],
            rotation_angle: 0.0,
        }
    }

    pub const fn new(translation: [f64; 3], rotation_axis: [f64; 3], rotation_angle: f64) -> Self {
        Self {
            translation,
            rotation_axis,
            rotation_angle,
        }
    }

    pub const fn translated(translation: [f64; 3]) -> Self {
        Self {
            translation,
            rotation_axis: [0.0, 0.0, 1.0],
            rotation_angle: 0.0,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.translation == [0.0, 0.0, 0.0] && self.rotation_angle == 0.0
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}
