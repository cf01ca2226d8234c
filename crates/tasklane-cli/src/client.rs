use std::time::Duration;

use anyhow::Context;
use reqwest::header::{
  ACCEPT,
  CONTENT_TYPE
};
use tasklane_core::api::{
  Endpoints,
  TaskApi
};
use tasklane_core::error::{
  ApiError,
  check_status,
  decode_response,
  encode_body
};
use tasklane_core::wire::{
  TaskCreate,
  TaskDto,
  TaskId,
  TaskPatch,
  TasksListArgs
};
use tracing::{
  debug,
  warn
};

const JSON: &str = "application/json";

/// [`TaskApi`] over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
  client:    reqwest::Client,
  endpoints: Endpoints
}

impl HttpTaskApi {
  pub fn new(
    endpoints: Endpoints
  ) -> anyhow::Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context(
        "failed building HTTP client for \
         task API"
      )?;
    Ok(Self { client, endpoints })
  }

  async fn send(
    &self,
    request: reqwest::RequestBuilder
  ) -> Result<(u16, String), ApiError> {
    let response = request
      .header(ACCEPT, JSON)
      .send()
      .await
      .map_err(|error| {
        warn!(error = %error, "task API request failed");
        ApiError::Transport(error.to_string())
      })?;

    let status = response.status().as_u16();
    let body =
      response.text().await.map_err(
        |error| {
          ApiError::Transport(
            error.to_string()
          )
        }
      )?;
    debug!(
      status,
      bytes = body.len(),
      "task API responded"
    );
    Ok((status, body))
  }
}

impl TaskApi for HttpTaskApi {
  async fn list_tasks(
    &self,
    args: &TasksListArgs
  ) -> Result<Vec<TaskDto>, ApiError> {
    let (status, body) = self
      .send(
        self
          .client
          .get(self.endpoints.list(args))
      )
      .await?;
    decode_response(status, &body)
  }

  async fn create_task(
    &self,
    body: &TaskCreate
  ) -> Result<TaskDto, ApiError> {
    let payload = encode_body(body)?;
    let (status, body) = self
      .send(
        self
          .client
          .post(self.endpoints.collection())
          .header(CONTENT_TYPE, JSON)
          .body(payload)
      )
      .await?;
    decode_response(status, &body)
  }

  async fn update_task(
    &self,
    id: TaskId,
    patch: &TaskPatch
  ) -> Result<TaskDto, ApiError> {
    let payload = encode_body(patch)?;
    let (status, body) = self
      .send(
        self
          .client
          .patch(self.endpoints.item(id))
          .header(CONTENT_TYPE, JSON)
          .body(payload)
      )
      .await?;
    decode_response(status, &body)
  }

  async fn delete_task(
    &self,
    id: TaskId
  ) -> Result<(), ApiError> {
    let (status, body) = self
      .send(
        self
          .client
          .delete(self.endpoints.item(id))
      )
      .await?;
    check_status(status, &body)
  }
}
