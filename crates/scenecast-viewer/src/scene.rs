use scenecast_base::{Guid, Placement};
use scenecast_modeling::Solid;

/// A shape staged for display: the kernel solid plus the identity and
/// placement the scene tracks it under. Identity belongs to this handle,
/// not to the geometry — two handles over equal geometry stay distinct,
/// and re-displaying one handle overwrites its registry entry.
#[derive(Clone, Debug)]
pub struct SceneShape {
    pub guid: Guid,
    pub name: String,
    pub placement: Placement,
    pub solid: Solid,
}

impl SceneShape {
    pub fn new(name: impl Into<String>, solid: Solid) -> Self {
        Self {
            guid: Guid::new(),
            name: name.into(),
            placement: Placement::identity(),
            solid,
        }
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}
