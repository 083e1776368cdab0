use std::collections::BTreeSet;

use crate::shared::domain::EntityId;

/// Row selection for bulk actions, keyed by entity id. Keying by id instead of
/// row position keeps a selection pointing at the same entities when the
/// rendered view reorders or shrinks between selecting and confirming.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    selected: BTreeSet<EntityId>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selected.contains(id)
    }

    pub fn select(&mut self, id: &EntityId) {
        self.selected.insert(id.clone());
    }

    pub fn deselect(&mut self, id: &EntityId) {
        self.selected.remove(id);
    }

    /// Flip one row; returns the new state.
    pub fn toggle(&mut self, id: &EntityId) -> bool {
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
            true
        } else {
            false
        }
    }

    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a EntityId>) {
        for id in ids {
            self.selected.insert(id.clone());
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Drop selected ids that no longer exist in the collection.
    pub fn retain_known<'a>(&mut self, known: impl IntoIterator<Item = &'a EntityId>) {
        let known: BTreeSet<&EntityId> = known.into_iter().collect();
        self.selected.retain(|id| known.contains(id));
    }

    /// Resolve the selection against the view presented at confirmation time,
    /// preserving view order. Selected ids missing from the view are dropped.
    pub fn resolve(&self, view: &[EntityId]) -> Vec<EntityId> {
        view.iter()
            .filter(|id| self.selected.contains(*id))
            .cloned()
            .collect()
    }
}
