use std::fmt;
use std::str::FromStr;

use serde::{
  Deserialize,
  Serialize
};

/// Server-assigned task identifier.
pub type TaskId = u64;

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub enum TaskPriority {
  Low,
  #[default]
  Mid,
  High
}

impl TaskPriority {
  pub fn all() -> [Self; 3] {
    [Self::Low, Self::Mid, Self::High]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Low => "Low",
      | Self::Mid => "Mid",
      | Self::High => "High"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
  pub id:          TaskId,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub priority:    TaskPriority,
  #[serde(default)]
  pub due_date:    Option<String>,
  #[serde(default)]
  pub due_time:    Option<String>,
  #[serde(default)]
  pub is_done:     bool,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub created_at:  Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
  pub title:       String,
  pub description: Option<String>,
  pub priority:    TaskPriority,
  pub due_date:    Option<String>,
  pub due_time:    Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub is_done:     Option<bool>
}

/// Partial update. An outer `None` leaves the field untouched; for
/// nullable fields `Some(None)` is sent as `null` and clears it.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub title:       Option<String>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<Option<String>>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub priority:    Option<TaskPriority>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub due_date:    Option<Option<String>>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub due_time:    Option<Option<String>>,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub is_done:     Option<bool>
}

impl TaskPatch {
  pub fn done(done: bool) -> Self {
    Self {
      is_done: Some(done),
      ..Self::default()
    }
  }

  pub fn is_empty(&self) -> bool {
    self == &Self::default()
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
pub struct ApiErrorBody {
  #[serde(default)]
  pub error: Option<String>
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
  #[default]
  DateAdded,
  CreatedAt,
  DueDate,
  Priority
}

impl SortBy {
  pub fn all() -> [Self; 4] {
    [
      Self::DateAdded,
      Self::CreatedAt,
      Self::DueDate,
      Self::Priority
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::DateAdded => "dateAdded",
      | Self::CreatedAt => "createdAt",
      | Self::DueDate => "dueDate",
      | Self::Priority => "priority"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::DateAdded => "Date added",
      | Self::CreatedAt => "Created",
      | Self::DueDate => "Due date",
      | Self::Priority => "Priority"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
  #[default]
  Asc,
  Desc
}

impl SortOrder {
  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Asc => "asc",
      | Self::Desc => "desc"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Asc => "Ascending",
      | Self::Desc => "Descending"
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct TasksListArgs {
  pub sort_by: SortBy,
  pub order:   SortOrder
}

impl TasksListArgs {
  pub fn query_pairs(
    &self
  ) -> [(&'static str, &'static str); 2]
  {
    [
      ("sortBy", self.sort_by.as_key()),
      ("order", self.order.as_key())
    ]
  }

  pub fn query_string(&self) -> String {
    self
      .query_pairs()
      .iter()
      .map(|(key, value)| {
        format!("{key}={value}")
      })
      .collect::<Vec<_>>()
      .join("&")
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey {
  pub kind:  &'static str,
  pub value: String
}

impl fmt::Display for UnknownKey {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(
      f,
      "unknown {}: {}",
      self.kind, self.value
    )
  }
}

impl std::error::Error for UnknownKey {}

impl FromStr for TaskPriority {
  type Err = UnknownKey;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "low" => Ok(Self::Low),
      | "mid" | "medium" => Ok(Self::Mid),
      | "high" => Ok(Self::High),
      | _ => Err(UnknownKey {
        kind:  "priority",
        value: s.to_string()
      })
    }
  }
}

impl FromStr for SortBy {
  type Err = UnknownKey;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    Self::all()
      .into_iter()
      .find(|sort| {
        sort
          .as_key()
          .eq_ignore_ascii_case(s.trim())
      })
      .ok_or_else(|| UnknownKey {
        kind:  "sort key",
        value: s.to_string()
      })
  }
}

impl FromStr for SortOrder {
  type Err = UnknownKey;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s
      .trim()
      .to_ascii_lowercase()
      .as_str()
    {
      | "asc" => Ok(Self::Asc),
      | "desc" => Ok(Self::Desc),
      | _ => Err(UnknownKey {
        kind:  "sort order",
        value: s.to_string()
      })
    }
  }
}

impl fmt::Display for TaskPriority {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

impl fmt::Display for SortBy {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

impl fmt::Display for SortOrder {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_key())
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn task_dto_reads_server_shape() {
    let raw = json!({
      "id": 7,
      "title": "Water plants",
      "description": null,
      "priority": "High",
      "dueDate": "2025-10-01",
      "dueTime": "08:30",
      "isDone": true,
      "status": "completed",
      "createdAt": "2025-09-29T12:34:56Z"
    });

    let task: TaskDto =
      serde_json::from_value(raw)
        .expect("server task decodes");

    assert_eq!(task.id, 7);
    assert_eq!(task.description, None);
    assert_eq!(
      task.priority,
      TaskPriority::High
    );
    assert_eq!(
      task.due_date.as_deref(),
      Some("2025-10-01")
    );
    assert!(task.is_done);
    assert_eq!(
      task.created_at.as_deref(),
      Some("2025-09-29T12:34:56Z")
    );
  }

  #[test]
  fn task_dto_defaults_missing_fields() {
    let task: TaskDto =
      serde_json::from_value(
        json!({ "id": 1, "title": "x" })
      )
      .expect("sparse task decodes");

    assert_eq!(
      task.priority,
      TaskPriority::Mid
    );
    assert!(!task.is_done);
    assert_eq!(task.due_time, None);
  }

  #[test]
  fn create_sends_nulls_and_skips_unset_done()
  {
    let body = TaskCreate {
      title:       "Call mom".to_string(),
      description: None,
      priority:    TaskPriority::Low,
      due_date:    None,
      due_time:    None,
      is_done:     None
    };

    let value = serde_json::to_value(&body)
      .expect("create encodes");

    assert_eq!(
      value,
      json!({
        "title": "Call mom",
        "description": null,
        "priority": "Low",
        "dueDate": null,
        "dueTime": null
      })
    );
  }

  #[test]
  fn patch_only_carries_touched_fields() {
    let patch = TaskPatch {
      description: Some(None),
      due_time: Some(Some(
        "09:00".to_string()
      )),
      ..TaskPatch::default()
    };

    let value = serde_json::to_value(&patch)
      .expect("patch encodes");

    assert_eq!(
      value,
      json!({
        "description": null,
        "dueTime": "09:00"
      })
    );
    assert_eq!(
      serde_json::to_value(
        TaskPatch::done(true)
      )
      .expect("done patch encodes"),
      json!({ "isDone": true })
    );
    assert!(TaskPatch::default().is_empty());
  }

  #[test]
  fn list_args_build_query_string() {
    let args = TasksListArgs {
      sort_by: SortBy::DueDate,
      order:   SortOrder::Desc
    };
    assert_eq!(
      args.query_string(),
      "sortBy=dueDate&order=desc"
    );
    assert_eq!(
      TasksListArgs::default()
        .query_string(),
      "sortBy=dateAdded&order=asc"
    );
  }

  #[test]
  fn keys_parse_case_insensitively() {
    assert_eq!(
      "HIGH".parse::<TaskPriority>(),
      Ok(TaskPriority::High)
    );
    assert_eq!(
      "duedate".parse::<SortBy>(),
      Ok(SortBy::DueDate)
    );
    assert_eq!(
      " Desc ".parse::<SortOrder>(),
      Ok(SortOrder::Desc)
    );
    assert!(
      "urgent"
        .parse::<TaskPriority>()
        .is_err()
    );
  }
}
