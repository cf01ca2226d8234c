use std::cell::{
  Cell,
  RefCell
};
use std::collections::BTreeSet;

use tasklane_core::api::TaskApi;
use tasklane_core::cache::{
  DateFilter,
  TaskCache
};
use tasklane_core::draft::TaskDraft;
use tasklane_core::error::ApiError;
use tasklane_core::ops;
use tasklane_core::selection::BulkSelection;
use tasklane_core::wire::{
  TaskCreate,
  TaskDto,
  TaskId,
  TaskPatch,
  TaskPriority,
  TasksListArgs
};

/// In-memory stand-in for the REST
/// service. Unless `honor_create_done` is
/// set it ignores `isDone` on create.
#[derive(Default)]
struct FakeApi {
  tasks:        RefCell<Vec<TaskDto>>,
  next_id:      Cell<TaskId>,
  failing:      RefCell<BTreeSet<TaskId>>,
  calls:        RefCell<Vec<String>>,
  honor_create_done: bool
}

impl FakeApi {
  fn seeded(titles: &[&str]) -> Self {
    let api = Self::default();
    for title in titles {
      api.insert(TaskCreate {
        title:       title.to_string(),
        description: None,
        priority:    TaskPriority::Mid,
        due_date:    None,
        due_time:    None,
        is_done:     None
      });
    }
    api.calls.borrow_mut().clear();
    api
  }

  fn insert(&self, body: TaskCreate) -> TaskDto {
    let id = self.next_id.get() + 1;
    self.next_id.set(id);
    let task = TaskDto {
      id,
      title: body.title,
      description: body.description,
      priority: body.priority,
      due_date: body.due_date,
      due_time: body.due_time,
      is_done: self.honor_create_done
        && body.is_done.unwrap_or(false),
      created_at: Some(
        "2025-10-01T00:00:00Z".to_string()
      )
    };
    self.tasks.borrow_mut().push(task.clone());
    task
  }

  fn not_found() -> ApiError {
    ApiError::from_response(
      404,
      r#"{"error":"Task not found."}"#
    )
  }
}

impl TaskApi for FakeApi {
  async fn list_tasks(
    &self,
    _args: &TasksListArgs
  ) -> Result<Vec<TaskDto>, ApiError> {
    self.calls.borrow_mut().push("GET".to_string());
    Ok(self.tasks.borrow().clone())
  }

  async fn create_task(
    &self,
    body: &TaskCreate
  ) -> Result<TaskDto, ApiError> {
    self.calls.borrow_mut().push("POST".to_string());
    Ok(self.insert(body.clone()))
  }

  async fn update_task(
    &self,
    id: TaskId,
    patch: &TaskPatch
  ) -> Result<TaskDto, ApiError> {
    self
      .calls
      .borrow_mut()
      .push(format!("PATCH {id}"));
    let mut tasks = self.tasks.borrow_mut();
    let task = tasks
      .iter_mut()
      .find(|task| task.id == id)
      .ok_or_else(Self::not_found)?;

    if let Some(title) = &patch.title {
      task.title = title.clone();
    }
    if let Some(description) = &patch.description {
      task.description = description.clone();
    }
    if let Some(priority) = patch.priority {
      task.priority = priority;
    }
    if let Some(due_date) = &patch.due_date {
      task.due_date = due_date.clone();
    }
    if let Some(due_time) = &patch.due_time {
      task.due_time = due_time.clone();
    }
    if let Some(done) = patch.is_done {
      task.is_done = done;
    }
    Ok(task.clone())
  }

  async fn delete_task(
    &self,
    id: TaskId
  ) -> Result<(), ApiError> {
    self
      .calls
      .borrow_mut()
      .push(format!("DELETE {id}"));
    if self.failing.borrow().contains(&id) {
      return Err(ApiError::from_response(
        500, "",
      ));
    }
    let mut tasks = self.tasks.borrow_mut();
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    if tasks.len() == before {
      return Err(Self::not_found());
    }
    Ok(())
  }
}

#[tokio::test]
async fn create_complete_and_filter_round_trip() {
  let api = FakeApi::seeded(&["Buy milk"]);

  let draft = TaskDraft {
    title: "  Book flights ".to_string(),
    priority: TaskPriority::High,
    due_date: "2025-10-20".to_string(),
    ..TaskDraft::default()
  };
  let created = ops::create_task(
    &api,
    &draft.to_create().expect("valid draft")
  )
  .await
  .expect("create succeeds");
  assert_eq!(created.title, "Book flights");

  ops::set_done(&api, created.id, true)
    .await
    .expect("patch succeeds");

  let mut cache = TaskCache::default();
  cache.replace(
    ops::fetch_tasks(
      &api,
      &TasksListArgs::default()
    )
    .await
    .expect("list succeeds")
  );

  let everything =
    cache.view(&DateFilter::default());
  assert_eq!(everything.active.len(), 1);
  assert_eq!(everything.done.len(), 1);
  assert_eq!(everything.progress.percent(), 50);

  let on_day = cache.view(&DateFilter::new(
    true,
    Some("2025-10-20".to_string())
  ));
  assert!(on_day.active.is_empty());
  assert_eq!(on_day.done[0].id, created.id);
  assert_eq!(on_day.progress.percent(), 100);
}

#[tokio::test]
async fn undo_recreates_identical_task_with_new_id() {
  let api = FakeApi::seeded(&[]);
  let original = api.insert(TaskCreate {
    title:       "File taxes".to_string(),
    description: Some("use last year's receipts".to_string()),
    priority:    TaskPriority::High,
    due_date:    Some("2026-04-15".to_string()),
    due_time:    Some("17:00".to_string()),
    is_done:     None
  });
  let original = ops::set_done(&api, original.id, true)
    .await
    .expect("mark done");

  let snapshot = ops::delete_task(&api, &original)
    .await
    .expect("delete succeeds");
  assert!(api.tasks.borrow().is_empty());

  let restored = ops::undo_delete(&api, &snapshot)
    .await
    .expect("undo succeeds");

  assert_ne!(restored.id, original.id);
  assert!(snapshot.matches(&restored));
  assert!(restored.is_done);
  assert_eq!(
    api.calls.borrow().last().map(String::as_str),
    Some(format!("PATCH {}", restored.id).as_str())
  );
}

#[tokio::test]
async fn undo_skips_follow_up_when_server_keeps_done_flag() {
  let api = FakeApi {
    honor_create_done: true,
    ..FakeApi::default()
  };
  let original = api.insert(TaskCreate {
    title:       "Stretch".to_string(),
    description: None,
    priority:    TaskPriority::Low,
    due_date:    None,
    due_time:    None,
    is_done:     Some(true)
  });

  let snapshot = ops::delete_task(&api, &original)
    .await
    .expect("delete succeeds");
  api.calls.borrow_mut().clear();

  let restored = ops::undo_delete(&api, &snapshot)
    .await
    .expect("undo succeeds");

  assert!(snapshot.matches(&restored));
  assert_eq!(*api.calls.borrow(), vec!["POST".to_string()]);
}

#[tokio::test]
async fn bulk_delete_is_sequential_and_survives_failures() {
  let api = FakeApi::seeded(&["a", "b", "c", "d"]);
  api.failing.borrow_mut().insert(2);

  let mut selection = BulkSelection::default();
  for id in [4, 1, 2] {
    selection.set(id, true);
  }
  selection.set(99, true);

  let outcome =
    ops::bulk_delete(&api, selection.ids()).await;

  assert_eq!(
    *api.calls.borrow(),
    vec![
      "DELETE 1".to_string(),
      "DELETE 2".to_string(),
      "DELETE 4".to_string(),
      "DELETE 99".to_string(),
    ]
  );
  assert_eq!(outcome.deleted, vec![1, 4]);
  let failed: Vec<TaskId> = outcome
    .failed
    .iter()
    .map(|(id, _)| *id)
    .collect();
  assert_eq!(failed, vec![2, 99]);
  assert_eq!(
    outcome.summary(),
    "Deleted 2 task(s); 2 failed."
  );

  let remaining: Vec<TaskId> = api
    .tasks
    .borrow()
    .iter()
    .map(|task| task.id)
    .collect();
  assert_eq!(remaining, vec![2, 3]);
}

#[tokio::test]
async fn selection_survives_filter_and_prunes_after_fetch() {
  let api = FakeApi::seeded(&["a", "b", "c"]);
  ops::update_task(
    &api,
    1,
    &TaskPatch {
      due_date: Some(Some("2025-10-03".to_string())),
      ..TaskPatch::default()
    },
  )
  .await
  .expect("patch succeeds");

  let mut selection = BulkSelection::default();
  selection.set(2, true);
  selection.set(3, true);

  let mut cache = TaskCache::new(
    ops::fetch_tasks(&api, &TasksListArgs::default())
      .await
      .expect("list succeeds"),
  );
  let view = cache.view(&DateFilter::new(
    true,
    Some("2025-10-03".to_string()),
  ));
  assert_eq!(view.visible_ids(), BTreeSet::from([1]));
  assert_eq!(selection.count(), 2);

  ops::delete_task(
    &api,
    cache.find(3).expect("task 3 cached"),
  )
  .await
  .expect("delete succeeds");
  cache.replace(
    ops::fetch_tasks(&api, &TasksListArgs::default())
      .await
      .expect("list succeeds"),
  );

  assert_eq!(selection.retain_known(&cache.ids()), 1);
  assert_eq!(selection.ids(), vec![2]);
}

#[tokio::test]
async fn missing_task_reports_server_message() {
  let api = FakeApi::seeded(&[]);
  let err = ops::set_done(&api, 5, true)
    .await
    .expect_err("unknown id fails");

  assert_eq!(err.status(), Some(404));
  assert_eq!(
    err.user_message("Update failed."),
    "Task not found."
  );
}
