use serde::{
  Deserialize,
  Serialize
};
use tasklane_shared::{
  SortBy,
  SortOrder,
  TasksListArgs
};
use tracing::warn;

use crate::api::Endpoints;
use crate::toast::DEFAULT_TOAST_MS;

pub const DEFAULT_API_BASE: &str =
  "http://127.0.0.1:5000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error(
    "failed to parse client config: {0}"
  )]
  Parse(#[from] toml::de::Error)
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct ClientConfig {
  pub api_base:        String,
  pub toast_ms:        u32,
  pub default_sort_by: SortBy,
  pub default_order:   SortOrder,
  pub confirm_deletes: bool
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      api_base:        DEFAULT_API_BASE
        .to_string(),
      toast_ms:        DEFAULT_TOAST_MS,
      default_sort_by: SortBy::default(),
      default_order:   SortOrder::default(),
      confirm_deletes: true
    }
  }
}

impl ClientConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> Result<Self, ConfigError> {
    let mut config: Self =
      toml::from_str(raw)?;
    config.sanitize();
    Ok(config)
  }

  pub fn sanitize(&mut self) {
    let trimmed = self
      .api_base
      .trim()
      .trim_end_matches('/')
      .to_string();
    if trimmed.is_empty() {
      warn!(
        "empty api_base in client config; \
         using default"
      );
      self.api_base =
        DEFAULT_API_BASE.to_string();
    } else {
      self.api_base = trimmed;
    }

    if self.toast_ms == 0 {
      self.toast_ms = DEFAULT_TOAST_MS;
    }
    self.toast_ms =
      self.toast_ms.min(60_000);
  }

  pub fn with_api_base(
    mut self,
    base: &str
  ) -> Self {
    self.api_base = base.to_string();
    self.sanitize();
    self
  }

  pub fn endpoints(&self) -> Endpoints {
    Endpoints::new(&self.api_base)
  }

  pub fn list_args(&self) -> TasksListArgs {
    TasksListArgs {
      sort_by: self.default_sort_by,
      order:   self.default_order
    }
  }
}
