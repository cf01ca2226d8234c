use chrono::{
  NaiveDate,
  NaiveTime
};
use tasklane_shared::{
  TaskCreate,
  TaskDto,
  TaskPatch,
  TaskPriority
};

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum DraftError {
  #[error("title is required")]
  MissingTitle,
  #[error(
    "invalid due date {0:?}; expected \
     YYYY-MM-DD"
  )]
  InvalidDueDate(String),
  #[error(
    "invalid due time {0:?}; expected \
     HH:MM"
  )]
  InvalidDueTime(String)
}

/// Raw form fields as typed into the new
/// task popup or the inline editor.
#[derive(
  Debug, Clone, PartialEq, Eq, Default,
)]
pub struct TaskDraft {
  pub title:       String,
  pub description: String,
  pub priority:    TaskPriority,
  pub due_date:    String,
  pub due_time:    String
}

impl TaskDraft {
  pub fn from_task(task: &TaskDto) -> Self {
    Self {
      title:       task.title.clone(),
      description: task
        .description
        .clone()
        .unwrap_or_default(),
      priority:    task.priority,
      due_date:    task
        .due_date
        .clone()
        .unwrap_or_default(),
      due_time:    task
        .due_time
        .clone()
        .unwrap_or_default()
    }
  }

  /// Seeds the due date from the calendar
  /// pick unless one is already set.
  pub fn prefill_due_date(
    &mut self,
    pick: Option<&str>
  ) {
    if self.due_date.trim().is_empty() {
      self.apply_due_date(pick);
    }
  }

  pub fn apply_due_date(
    &mut self,
    pick: Option<&str>
  ) {
    if let Some(pick) = pick
      .map(str::trim)
      .filter(|pick| !pick.is_empty())
    {
      self.due_date = pick.to_string();
    }
  }

  pub fn to_create(
    &self
  ) -> Result<TaskCreate, DraftError> {
    Ok(TaskCreate {
      title:       self.checked_title()?,
      description: optional_text(
        &self.description
      ),
      priority:    self.priority,
      due_date:    optional_text(
        &self.due_date
      ),
      due_time:    optional_text(
        &self.due_time
      ),
      is_done:     None
    })
  }

  pub fn to_patch(
    &self
  ) -> Result<TaskPatch, DraftError> {
    Ok(TaskPatch {
      title: Some(self.checked_title()?),
      description: Some(optional_text(
        &self.description
      )),
      priority: Some(self.priority),
      due_date: Some(optional_text(
        &self.due_date
      )),
      due_time: Some(optional_text(
        &self.due_time
      )),
      is_done: None
    })
  }

  fn checked_title(
    &self
  ) -> Result<String, DraftError> {
    let title = self.title.trim();
    if title.is_empty() {
      return Err(DraftError::MissingTitle);
    }
    Ok(title.to_string())
  }
}

pub fn optional_text(
  value: &str
) -> Option<String> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

/// Normalizes a due date to
/// `YYYY-MM-DD`.
pub fn parse_due_date(
  raw: &str
) -> Result<String, DraftError> {
  NaiveDate::parse_from_str(
    raw.trim(),
    "%Y-%m-%d"
  )
  .map(|date| {
    date.format("%Y-%m-%d").to_string()
  })
  .map_err(|_| {
    DraftError::InvalidDueDate(
      raw.to_string()
    )
  })
}

/// Normalizes a due time to `HH:MM`;
/// seconds are accepted and dropped.
pub fn parse_due_time(
  raw: &str
) -> Result<String, DraftError> {
  let trimmed = raw.trim();
  NaiveTime::parse_from_str(
    trimmed, "%H:%M"
  )
  .or_else(|_| {
    NaiveTime::parse_from_str(
      trimmed, "%H:%M:%S"
    )
  })
  .map(|time| {
    time.format("%H:%M").to_string()
  })
  .map_err(|_| {
    DraftError::InvalidDueTime(
      raw.to_string()
    )
  })
}
