use tasklane_shared::{
  TaskCreate,
  TaskDto,
  TaskId,
  TaskPatch,
  TasksListArgs
};

use crate::error::ApiError;

/// The REST surface the clients consume.
/// The browser implements it over fetch,
/// the terminal client over reqwest.
#[allow(async_fn_in_trait)]
pub trait TaskApi {
  async fn list_tasks(
    &self,
    args: &TasksListArgs
  ) -> Result<Vec<TaskDto>, ApiError>;

  async fn create_task(
    &self,
    body: &TaskCreate
  ) -> Result<TaskDto, ApiError>;

  async fn update_task(
    &self,
    id: TaskId,
    patch: &TaskPatch
  ) -> Result<TaskDto, ApiError>;

  /// Succeeds on any 2xx, including
  /// `204 No Content`.
  async fn delete_task(
    &self,
    id: TaskId
  ) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
  base: String
}

impl Endpoints {
  pub fn new(base: &str) -> Self {
    Self {
      base: base
        .trim()
        .trim_end_matches('/')
        .to_string()
    }
  }

  pub fn base(&self) -> &str {
    &self.base
  }

  pub fn collection(&self) -> String {
    format!("{}/api/tasks", self.base)
  }

  pub fn list(
    &self,
    args: &TasksListArgs
  ) -> String {
    format!(
      "{}?{}",
      self.collection(),
      args.query_string()
    )
  }

  pub fn item(&self, id: TaskId) -> String {
    format!("{}/{id}", self.collection())
  }
}
