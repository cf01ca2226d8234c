use tasklane_shared::{
  TaskCreate,
  TaskDto,
  TaskId,
  TaskPatch,
  TasksListArgs
};
use tracing::{
  error,
  info,
  warn
};

use crate::api::TaskApi;
use crate::error::ApiError;
use crate::toast::tasks_deleted;
use crate::undo::DeletedTask;

#[tracing::instrument(skip(api))]
pub async fn fetch_tasks<A: TaskApi>(
  api: &A,
  args: &TasksListArgs
) -> Result<Vec<TaskDto>, ApiError> {
  let tasks = api.list_tasks(args).await?;
  info!(
    total = tasks.len(),
    "fetched tasks"
  );
  Ok(tasks)
}

#[tracing::instrument(skip(api, body), fields(title = %body.title))]
pub async fn create_task<A: TaskApi>(
  api: &A,
  body: &TaskCreate
) -> Result<TaskDto, ApiError> {
  let created = api.create_task(body).await?;
  info!(id = created.id, "created task");
  Ok(created)
}

#[tracing::instrument(skip(api, patch))]
pub async fn update_task<A: TaskApi>(
  api: &A,
  id: TaskId,
  patch: &TaskPatch
) -> Result<TaskDto, ApiError> {
  let updated =
    api.update_task(id, patch).await?;
  info!(id, "updated task");
  Ok(updated)
}

#[tracing::instrument(skip(api))]
pub async fn set_done<A: TaskApi>(
  api: &A,
  id: TaskId,
  done: bool
) -> Result<TaskDto, ApiError> {
  update_task(api, id, &TaskPatch::done(done))
    .await
}

/// Deletes `task` and hands back the
/// snapshot needed to undo it.
#[tracing::instrument(skip(api, task), fields(id = task.id))]
pub async fn delete_task<A: TaskApi>(
  api: &A,
  task: &TaskDto
) -> Result<DeletedTask, ApiError> {
  api.delete_task(task.id).await?;
  info!(title = %task.title, "deleted task");
  Ok(DeletedTask::from_task(task))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BulkDeleteOutcome {
  pub deleted: Vec<TaskId>,
  pub failed:  Vec<(TaskId, ApiError)>
}

impl BulkDeleteOutcome {
  pub fn summary(&self) -> String {
    tasks_deleted(
      self.deleted.len(),
      self.failed.len()
    )
  }
}

/// One DELETE at a time, in the given
/// order. A failure is recorded and the
/// loop moves on.
#[tracing::instrument(skip(api, ids))]
pub async fn bulk_delete<A, I>(
  api: &A,
  ids: I
) -> BulkDeleteOutcome
where
  A: TaskApi,
  I: IntoIterator<Item = TaskId>
{
  let mut outcome =
    BulkDeleteOutcome::default();

  for id in ids {
    match api.delete_task(id).await {
      | Ok(()) => outcome.deleted.push(id),
      | Err(err) => {
        error!(id, error = %err, "bulk delete failed for task");
        outcome.failed.push((id, err));
      }
    }
  }

  info!(
    deleted = outcome.deleted.len(),
    failed = outcome.failed.len(),
    "bulk delete finished"
  );
  outcome
}

/// Re-creates the deleted task. The new
/// task gets a fresh id; when the server
/// ignores `isDone` on create, a follow-up
/// PATCH restores it.
#[tracing::instrument(skip(api, snapshot), fields(title = %snapshot.title))]
pub async fn undo_delete<A: TaskApi>(
  api: &A,
  snapshot: &DeletedTask
) -> Result<TaskDto, ApiError> {
  let created = api
    .create_task(&snapshot.to_create())
    .await?;

  if created.is_done == snapshot.is_done {
    info!(id = created.id, "restored deleted task");
    return Ok(created);
  }

  match api
    .update_task(
      created.id,
      &TaskPatch::done(snapshot.is_done)
    )
    .await
  {
    | Ok(updated) => {
      info!(
        id = updated.id,
        "restored deleted task with \
         completion state"
      );
      Ok(updated)
    }
    | Err(err) => {
      // The task exists again either way.
      warn!(
        id = created.id,
        error = %err,
        "restored task but failed to \
         restore completion state"
      );
      Ok(created)
    }
  }
}
