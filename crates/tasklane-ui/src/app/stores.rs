use std::collections::BTreeSet;
use std::rc::Rc;

use tasklane_core::selection::BulkSelection;
use tasklane_core::toast::{
  ToastAction,
  ToastState
};
use tasklane_core::wire::TaskId;
use yew::Reducible;

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct ToastStore(pub ToastState);

impl Reducible for ToastStore {
  type Action = ToastAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut state = self.0.clone();
    state.apply(action);
    Rc::new(Self(state))
  }
}

pub enum SelectionAction {
  Toggle(TaskId),
  Remove(TaskId),
  Clear,
  RetainKnown(BTreeSet<TaskId>)
}

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct SelectionStore(
  pub BulkSelection
);

impl Reducible for SelectionStore {
  type Action = SelectionAction;

  fn reduce(
    self: Rc<Self>,
    action: Self::Action
  ) -> Rc<Self> {
    let mut selection = self.0.clone();
    match action {
      | SelectionAction::Toggle(id) => {
        let on = selection.toggle(id);
        tracing::debug!(id, on, "toggled bulk selection");
      }
      | SelectionAction::Remove(id) => {
        selection.remove(id);
      }
      | SelectionAction::Clear => {
        selection.clear()
      }
      | SelectionAction::RetainKnown(
        known
      ) => {
        let pruned =
          selection.retain_known(&known);
        if pruned > 0 {
          tracing::debug!(
            pruned,
            "pruned vanished ids from \
             selection"
          );
        }
      }
    }
    Rc::new(Self(selection))
  }
}

/// Bumped to trigger a refetch.
#[derive(
  Debug, Clone, Copy, PartialEq, Default,
)]
pub struct RefreshTick(pub u64);

impl Reducible for RefreshTick {
  type Action = ();

  fn reduce(
    self: Rc<Self>,
    _action: ()
  ) -> Rc<Self> {
    Rc::new(Self(
      self.0.wrapping_add(1)
    ))
  }
}
