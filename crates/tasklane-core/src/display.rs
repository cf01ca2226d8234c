use tasklane_shared::TaskDto;

pub const NO_DESCRIPTION: &str =
  "No description";

pub fn description_or_placeholder(
  task: &TaskDto
) -> &str {
  task
    .description
    .as_deref()
    .map(str::trim)
    .filter(|text| !text.is_empty())
    .unwrap_or(NO_DESCRIPTION)
}

/// `2025-10-01 at 08:30`, or just the date
/// when no time is set. `None` without a
/// due date.
pub fn due_label(
  task: &TaskDto
) -> Option<String> {
  let date = task
    .due_date
    .as_deref()
    .filter(|date| !date.is_empty())?;

  match task
    .due_time
    .as_deref()
    .filter(|time| !time.is_empty())
  {
    | Some(time) => {
      Some(format!("{date} at {time}"))
    }
    | None => Some(date.to_string())
  }
}

pub fn meta_line(task: &TaskDto) -> String {
  match due_label(task) {
    | Some(due) => format!(
      "Priority: {} | Due: {due}",
      task.priority
    ),
    | None => {
      format!("Priority: {}", task.priority)
    }
  }
}

#[cfg(test)]
mod tests {
  use tasklane_shared::TaskPriority;

  use super::*;

  fn task() -> TaskDto {
    TaskDto {
      id:          1,
      title:       "Pay rent".to_string(),
      description: None,
      priority:    TaskPriority::High,
      due_date:    None,
      due_time:    None,
      is_done:     false,
      created_at:  None
    }
  }

  #[test]
  fn meta_line_covers_due_variants() {
    let mut task = task();
    assert_eq!(
      meta_line(&task),
      "Priority: High"
    );

    task.due_date =
      Some("2025-10-01".to_string());
    assert_eq!(
      meta_line(&task),
      "Priority: High | Due: 2025-10-01"
    );

    task.due_time = Some("08:30".to_string());
    assert_eq!(
      meta_line(&task),
      "Priority: High | Due: 2025-10-01 at \
       08:30"
    );
  }

  #[test]
  fn time_without_date_is_not_shown() {
    let mut task = task();
    task.due_time = Some("08:30".to_string());
    assert_eq!(due_label(&task), None);
  }

  #[test]
  fn blank_description_uses_placeholder() {
    let mut task = task();
    assert_eq!(
      description_or_placeholder(&task),
      NO_DESCRIPTION
    );
    task.description = Some(" ".to_string());
    assert_eq!(
      description_or_placeholder(&task),
      NO_DESCRIPTION
    );
    task.description =
      Some("first of month".to_string());
    assert_eq!(
      description_or_placeholder(&task),
      "first of month"
    );
  }
}
