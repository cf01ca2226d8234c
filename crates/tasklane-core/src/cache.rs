use std::collections::BTreeSet;

use tasklane_shared::{
  TaskDto,
  TaskId
};

/// Exact due-date predicate applied on
/// the client before rendering.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct DateFilter {
  pub enabled: bool,
  pub date:    Option<String>
}

impl DateFilter {
  pub fn new(
    enabled: bool,
    date: Option<String>
  ) -> Self {
    let date = date
      .map(|value| value.trim().to_string())
      .filter(|value| !value.is_empty());
    Self {
      enabled,
      date
    }
  }

  pub fn is_active(&self) -> bool {
    self.enabled && self.date.is_some()
  }

  pub fn matches(
    &self,
    task: &TaskDto
  ) -> bool {
    if !self.enabled {
      return true;
    }

    match self.date.as_deref() {
      | Some(date) => {
        task.due_date.as_deref().unwrap_or("")
          == date
      }
      | None => true
    }
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default,
)]
pub struct Progress {
  pub done:  usize,
  pub total: usize
}

impl Progress {
  /// Percentage of done tasks, rounded
  /// half up; zero for an empty list.
  pub fn percent(self) -> u8 {
    if self.total == 0 {
      return 0;
    }
    let scaled = (200 * self.done
      + self.total)
      / (2 * self.total);
    scaled.min(100) as u8
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct BoardView {
  pub active:   Vec<TaskDto>,
  pub done:     Vec<TaskDto>,
  pub progress: Progress
}

impl BoardView {
  pub fn visible_ids(
    &self
  ) -> BTreeSet<TaskId> {
    self
      .active
      .iter()
      .chain(self.done.iter())
      .map(|task| task.id)
      .collect()
  }
}

/// Last fetched task list. Every fetch
/// replaces it wholesale.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct TaskCache {
  tasks: Vec<TaskDto>
}

impl TaskCache {
  pub fn new(tasks: Vec<TaskDto>) -> Self {
    Self {
      tasks
    }
  }

  pub fn replace(
    &mut self,
    tasks: Vec<TaskDto>
  ) {
    tracing::debug!(
      previous = self.tasks.len(),
      next = tasks.len(),
      "replacing task cache"
    );
    self.tasks = tasks;
  }

  pub fn tasks(&self) -> &[TaskDto] {
    &self.tasks
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn find(
    &self,
    id: TaskId
  ) -> Option<&TaskDto> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn ids(&self) -> BTreeSet<TaskId> {
    self
      .tasks
      .iter()
      .map(|task| task.id)
      .collect()
  }

  pub fn filtered(
    &self,
    filter: &DateFilter
  ) -> Vec<TaskDto> {
    self
      .tasks
      .iter()
      .filter(|task| filter.matches(task))
      .cloned()
      .collect()
  }

  pub fn view(
    &self,
    filter: &DateFilter
  ) -> BoardView {
    let (done, active): (Vec<_>, Vec<_>) =
      self
        .filtered(filter)
        .into_iter()
        .partition(|task| task.is_done);

    let progress = Progress {
      done:  done.len(),
      total: done.len() + active.len()
    };

    BoardView {
      active,
      done,
      progress
    }
  }
}

#[cfg(test)]
mod tests {
  use tasklane_shared::TaskPriority;

  use super::*;

  fn task(
    id: TaskId,
    due: Option<&str>,
    done: bool
  ) -> TaskDto {
    TaskDto {
      id,
      title: format!("task {id}"),
      description: None,
      priority: TaskPriority::Mid,
      due_date: due.map(str::to_string),
      due_time: None,
      is_done: done,
      created_at: None
    }
  }

  fn sample() -> TaskCache {
    TaskCache::new(vec![
      task(1, Some("2025-10-01"), false),
      task(2, Some("2025-10-02"), true),
      task(3, None, false),
      task(4, Some("2025-10-01"), true),
      task(5, Some("2025-10-01"), false),
    ])
  }

  #[test]
  fn exact_date_filter_keeps_only_matches() {
    let cache = sample();
    let filter = DateFilter::new(
      true,
      Some("2025-10-01".to_string())
    );

    let ids: Vec<TaskId> = cache
      .filtered(&filter)
      .iter()
      .map(|task| task.id)
      .collect();

    assert_eq!(ids, vec![1, 4, 5]);
  }

  #[test]
  fn filter_is_inert_when_disabled_or_without_date(
  ) {
    let cache = sample();

    let disabled = DateFilter::new(
      false,
      Some("2025-10-01".to_string())
    );
    assert_eq!(
      cache.filtered(&disabled).len(),
      5
    );

    let no_date =
      DateFilter::new(true, Some("  ".to_string()));
    assert!(!no_date.is_active());
    assert_eq!(
      cache.filtered(&no_date).len(),
      5
    );
  }

  #[test]
  fn view_splits_columns_in_server_order() {
    let view =
      sample().view(&DateFilter::default());

    let active: Vec<TaskId> = view
      .active
      .iter()
      .map(|task| task.id)
      .collect();
    let done: Vec<TaskId> = view
      .done
      .iter()
      .map(|task| task.id)
      .collect();

    assert_eq!(active, vec![1, 3, 5]);
    assert_eq!(done, vec![2, 4]);
    assert_eq!(
      view.progress,
      Progress {
        done:  2,
        total: 5
      }
    );
    assert_eq!(view.progress.percent(), 40);
  }

  #[test]
  fn progress_follows_filter() {
    let view = sample().view(
      &DateFilter::new(
        true,
        Some("2025-10-01".to_string())
      )
    );
    assert_eq!(view.progress.total, 3);
    assert_eq!(view.progress.percent(), 33);
  }

  #[test]
  fn progress_rounds_half_up() {
    let cases = [
      (0, 0, 0),
      (0, 3, 0),
      (1, 3, 33),
      (2, 3, 67),
      (1, 8, 13),
      (1, 200, 1),
      (1, 201, 0),
      (3, 3, 100),
    ];

    for (done, total, expected) in cases {
      assert_eq!(
        Progress {
          done,
          total
        }
        .percent(),
        expected,
        "{done}/{total}"
      );
    }
  }

  #[test]
  fn replace_swaps_whole_list() {
    let mut cache = sample();
    cache.replace(vec![task(9, None, false)]);

    assert_eq!(cache.len(), 1);
    assert!(cache.find(1).is_none());
    assert_eq!(
      cache.ids(),
      BTreeSet::from([9])
    );
  }
}
