use serde::{
  Deserialize,
  Serialize
};
use tasklane_shared::{
  TaskCreate,
  TaskDto,
  TaskPriority
};

/// Everything a deleted task carried
/// except its id, kept for one level of
/// undo.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct DeletedTask {
  pub title:       String,
  pub description: Option<String>,
  pub priority:    TaskPriority,
  pub due_date:    Option<String>,
  pub due_time:    Option<String>,
  pub is_done:     bool
}

impl DeletedTask {
  pub fn from_task(task: &TaskDto) -> Self {
    Self {
      title:       task.title.clone(),
      description: task.description.clone(),
      priority:    task.priority,
      due_date:    task.due_date.clone(),
      due_time:    task.due_time.clone(),
      is_done:     task.is_done
    }
  }

  pub fn to_create(&self) -> TaskCreate {
    TaskCreate {
      title:       self.title.clone(),
      description: self.description.clone(),
      priority:    self.priority,
      due_date:    self.due_date.clone(),
      due_time:    self.due_time.clone(),
      is_done:     Some(self.is_done)
    }
  }

  /// True when `task` equals the snapshot
  /// in every field but the id.
  pub fn matches(
    &self,
    task: &TaskDto
  ) -> bool {
    self == &Self::from_task(task)
  }
}
