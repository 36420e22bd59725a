use scenecast_base::{Guid, Placement};
use std::collections::BTreeMap;

/// Identity-keyed placement buffer backing the root document. Registration
/// is an idempotent upsert; entries are never removed. Iteration is sorted
/// by identity so composed documents are stable across runs. Single-writer:
/// no internal synchronization.
#[derive(Clone, Debug, Default)]
pub struct SceneRegistry {
    entries: BTreeMap<Guid, Placement>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the placement for `guid`. Re-registering overwrites; last
    /// write wins.
    pub fn register(&mut self, guid: Guid, placement: Placement) {
        self.entries.insert(guid, placement);
    }

    pub fn entries(&self) -> &BTreeMap<Guid, Placement> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reregistration_overwrites_last_write_wins() {
        let a = Guid::new();
        let b = Guid::new();
        let mut registry = SceneRegistry::new();

        registry.register(a, Placement::translated([1.0, 0.0, 0.0]));
        registry.register(b, Placement::translated([0.0, 1.0, 0.0]));
        registry.register(a, Placement::translated([9.0, 9.0, 9.0]));

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.entries().get(&a).map(|p| p.translation),
            Some([9.0, 9.0, 9.0])
        );
        assert_eq!(
            registry.entries().get(&b).map(|p| p.translation),
            Some([0.0, 1.0, 0.0])
        );
    }

    #[test]
    fn every_identity_appears_exactly_once() {
        let mut registry = SceneRegistry::new();
        let guids: Vec<Guid> = (0..4).map(|_| Guid::new()).collect();
        for guid in &guids {
            registry.register(*guid, Placement::identity());
            registry.register(*guid, Placement::identity());
        }
        assert_eq!(registry.len(), guids.len());
    }
}
