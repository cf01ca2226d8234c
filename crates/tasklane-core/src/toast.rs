pub const DEFAULT_TOAST_MS: u32 = 4_500;

pub const FETCH_FAILED: &str =
  "Failed to fetch tasks!";
pub const CREATE_FAILED: &str =
  "Create failed.";
pub const UPDATE_FAILED: &str =
  "Update failed.";
pub const DELETE_FAILED: &str =
  "Delete failed.";
pub const UNDO_FAILED: &str =
  "Failed to undo delete.";
pub const UNDO_DONE: &str =
  "Delete successfully undone.";
pub const TITLE_REQUIRED_CREATE: &str =
  "Please enter a title.";
pub const TITLE_REQUIRED_EDIT: &str =
  "Title is required.";

pub fn task_deleted(title: &str) -> String {
  format!("Task \"{title}\" deleted.")
}

pub fn tasks_deleted(
  deleted: usize,
  failed: usize
) -> String {
  if failed == 0 {
    format!("Deleted {deleted} task(s).")
  } else {
    format!(
      "Deleted {deleted} task(s); \
       {failed} failed."
    )
  }
}

pub fn confirm_delete(title: &str) -> String {
  format!(
    "Are you sure you want to delete \
     \"{title}\"?"
  )
}

pub fn confirm_bulk_delete(
  count: usize
) -> String {
  format!(
    "Delete {count} selected task(s)?"
  )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
  pub id:      u64,
  pub message: String,
  pub undo:    bool
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToastAction {
  Show {
    message: String,
    undo:    bool
  },
  Dismiss,
  Expire(u64)
}

/// Single-slot toast. A new toast
/// replaces the current one; an expiry
/// only hides the toast it was issued
/// for.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct ToastState {
  current: Option<Toast>,
  issued:  u64
}

impl ToastState {
  pub fn current(&self) -> Option<&Toast> {
    self.current.as_ref()
  }

  pub fn apply(
    &mut self,
    action: ToastAction
  ) {
    match action {
      | ToastAction::Show {
        message,
        undo
      } => {
        self.show(message, undo);
      }
      | ToastAction::Dismiss => {
        self.dismiss()
      }
      | ToastAction::Expire(id) => {
        self.expire(id)
      }
    }
  }

  pub fn show(
    &mut self,
    message: impl Into<String>,
    undo: bool
  ) -> u64 {
    self.issued =
      self.issued.wrapping_add(1);
    let toast = Toast {
      id: self.issued,
      message: message.into(),
      undo
    };
    tracing::debug!(
      id = toast.id,
      undo,
      message = %toast.message,
      "showing toast"
    );
    self.current = Some(toast);
    self.issued
  }

  pub fn dismiss(&mut self) {
    self.current = None;
  }

  pub fn expire(&mut self, id: u64) {
    if self
      .current
      .as_ref()
      .is_some_and(|toast| toast.id == id)
    {
      self.current = None;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn newer_toast_survives_older_expiry() {
    let mut state = ToastState::default();
    let first = state.show("one", false);
    let second = state.show(
      task_deleted("Laundry"),
      true
    );

    state.apply(ToastAction::Expire(first));
    let current = state
      .current()
      .expect("second toast still visible");
    assert_eq!(current.id, second);
    assert!(current.undo);
    assert_eq!(
      current.message,
      "Task \"Laundry\" deleted."
    );

    state.apply(ToastAction::Expire(second));
    assert!(state.current().is_none());
  }

  #[test]
  fn dismiss_hides_immediately() {
    let mut state = ToastState::default();
    state.apply(ToastAction::Show {
      message: FETCH_FAILED.to_string(),
      undo:    false
    });
    state.apply(ToastAction::Dismiss);
    assert!(state.current().is_none());
  }

  #[test]
  fn bulk_summary_reports_failures() {
    assert_eq!(
      tasks_deleted(3, 0),
      "Deleted 3 task(s)."
    );
    assert_eq!(
      tasks_deleted(2, 1),
      "Deleted 2 task(s); 1 failed."
    );
    assert_eq!(
      confirm_bulk_delete(4),
      "Delete 4 selected task(s)?"
    );
  }
}
