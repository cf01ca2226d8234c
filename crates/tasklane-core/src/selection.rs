use std::collections::BTreeSet;

use tasklane_shared::TaskId;

/// Ids picked for bulk actions. Lives
/// outside the render cycle; checkboxes
/// read from it on every render.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct BulkSelection {
  ids: BTreeSet<TaskId>
}

impl BulkSelection {
  pub fn toggle(
    &mut self,
    id: TaskId
  ) -> bool {
    if self.ids.remove(&id) {
      false
    } else {
      self.ids.insert(id);
      true
    }
  }

  pub fn set(
    &mut self,
    id: TaskId,
    selected: bool
  ) {
    if selected {
      self.ids.insert(id);
    } else {
      self.ids.remove(&id);
    }
  }

  pub fn remove(
    &mut self,
    id: TaskId
  ) -> bool {
    self.ids.remove(&id)
  }

  pub fn clear(&mut self) {
    self.ids.clear();
  }

  /// Drops ids missing from `known`,
  /// returning how many were pruned.
  pub fn retain_known(
    &mut self,
    known: &BTreeSet<TaskId>
  ) -> usize {
    let before = self.ids.len();
    self
      .ids
      .retain(|id| known.contains(id));
    before - self.ids.len()
  }

  pub fn contains(
    &self,
    id: TaskId
  ) -> bool {
    self.ids.contains(&id)
  }

  pub fn count(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  pub fn ids(&self) -> Vec<TaskId> {
    self.ids.iter().copied().collect()
  }
}
