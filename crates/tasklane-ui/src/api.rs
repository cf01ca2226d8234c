use gloo::net::http::{
  Request,
  RequestBuilder
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

const JSON: &str = "application/json";

/// [`TaskApi`] over the browser's fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTaskApi {
  endpoints: Endpoints
}

impl HttpTaskApi {
  pub fn new(endpoints: Endpoints) -> Self {
    Self {
      endpoints
    }
  }
}

fn transport(
  err: gloo::net::Error
) -> ApiError {
  ApiError::Transport(err.to_string())
}

fn with_json_body(
  builder: RequestBuilder,
  payload: String
) -> Result<Request, ApiError> {
  builder
    .header("Content-Type", JSON)
    .body(payload)
    .map_err(transport)
}

async fn finish(
  request: Request
) -> Result<(u16, String), ApiError> {
  let response = request
    .send()
    .await
    .map_err(transport)?;
  let status = response.status();
  let body = response
    .text()
    .await
    .map_err(transport)?;
  tracing::debug!(
    status,
    bytes = body.len(),
    "task API responded"
  );
  Ok((status, body))
}

impl TaskApi for HttpTaskApi {
  async fn list_tasks(
    &self,
    args: &TasksListArgs
  ) -> Result<Vec<TaskDto>, ApiError> {
    let request =
      Request::get(&self.endpoints.list(args))
        .header("Accept", JSON)
        .build()
        .map_err(transport)?;
    let (status, body) =
      finish(request).await?;
    decode_response(status, &body)
  }

  async fn create_task(
    &self,
    body: &TaskCreate
  ) -> Result<TaskDto, ApiError> {
    let request = with_json_body(
      Request::post(
        &self.endpoints.collection()
      ),
      encode_body(body)?
    )?;
    let (status, body) =
      finish(request).await?;
    decode_response(status, &body)
  }

  async fn update_task(
    &self,
    id: TaskId,
    patch: &TaskPatch
  ) -> Result<TaskDto, ApiError> {
    let request = with_json_body(
      Request::patch(
        &self.endpoints.item(id)
      ),
      encode_body(patch)?
    )?;
    let (status, body) =
      finish(request).await?;
    decode_response(status, &body)
  }

  async fn delete_task(
    &self,
    id: TaskId
  ) -> Result<(), ApiError> {
    let request = Request::delete(
      &self.endpoints.item(id)
    )
    .build()
    .map_err(transport)?;
    let (status, body) =
      finish(request).await?;
    check_status(status, &body)
  }
}
