use serde::Serialize;
use serde::de::DeserializeOwned;
use tasklane_shared::ApiErrorBody;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  thiserror::Error,
)]
pub enum ApiError {
  #[error(
    "server responded with status \
     {status}"
  )]
  Status {
    status:  u16,
    message: Option<String>
  },
  #[error("request failed: {0}")]
  Transport(String),
  #[error(
    "failed to encode request: {0}"
  )]
  Encode(String),
  #[error(
    "failed to decode response: {0}"
  )]
  Decode(String)
}

impl ApiError {
  /// Builds a status error from a
  /// non-OK response body.
  pub fn from_response(
    status: u16,
    body: &str
  ) -> Self {
    Self::Status {
      status,
      message: extract_error_message(
        body
      )
    }
  }

  pub fn status(&self) -> Option<u16> {
    match self {
      | Self::Status {
        status,
        ..
      } => Some(*status),
      | _ => None
    }
  }

  /// The server's own message when it
  /// sent one, otherwise `fallback`.
  pub fn user_message(
    &self,
    fallback: &str
  ) -> String {
    match self {
      | Self::Status {
        message: Some(message),
        ..
      } => message.clone(),
      | _ => fallback.to_string()
    }
  }
}

pub fn is_success_status(
  status: u16
) -> bool {
  (200..300).contains(&status)
}

/// Turns a finished response into a
/// decoded body or an [`ApiError`].
pub fn decode_response<T>(
  status: u16,
  body: &str
) -> Result<T, ApiError>
where
  T: DeserializeOwned
{
  check_status(status, body)?;
  serde_json::from_str(body).map_err(
    |err| ApiError::Decode(err.to_string())
  )
}

pub fn check_status(
  status: u16,
  body: &str
) -> Result<(), ApiError> {
  if is_success_status(status) {
    Ok(())
  } else {
    Err(ApiError::from_response(
      status, body
    ))
  }
}

pub fn encode_body<T>(
  body: &T
) -> Result<String, ApiError>
where
  T: Serialize + ?Sized
{
  serde_json::to_string(body).map_err(
    |err| ApiError::Encode(err.to_string())
  )
}

pub fn extract_error_message(
  body: &str
) -> Option<String> {
  serde_json::from_str::<ApiErrorBody>(
    body
  )
  .ok()
  .and_then(|parsed| parsed.error)
  .map(|message| {
    message.trim().to_string()
  })
  .filter(|message| !message.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn extracts_error_field_from_json_body() {
    assert_eq!(
      extract_error_message(
        r#"{"error": "Field 'title' is required."}"#
      )
      .as_deref(),
      Some("Field 'title' is required.")
    );
  }

  #[test]
  fn extraction_is_best_effort() {
    assert_eq!(
      extract_error_message(
        "<html>502 Bad Gateway</html>"
      ),
      None
    );
    assert_eq!(
      extract_error_message("{}"),
      None
    );
    assert_eq!(
      extract_error_message(
        r#"{"error": "   "}"#
      ),
      None
    );
    assert_eq!(
      extract_error_message(""),
      None
    );
  }

  #[test]
  fn user_message_prefers_server_text() {
    let with_message =
      ApiError::from_response(
        404,
        r#"{"error":"Task not found."}"#
      );
    assert_eq!(
      with_message
        .user_message("Delete failed."),
      "Task not found."
    );
    assert_eq!(
      with_message.status(),
      Some(404)
    );

    let bare =
      ApiError::from_response(500, "oops");
    assert_eq!(
      bare.user_message("Update failed."),
      "Update failed."
    );

    let offline = ApiError::Transport(
      "connection refused".to_string()
    );
    assert_eq!(
      offline.user_message("Create failed."),
      "Create failed."
    );
    assert_eq!(offline.status(), None);
  }

  #[test]
  fn decode_checks_status_before_body() {
    let ids: Vec<u64> =
      decode_response(200, "[1, 2]")
        .expect("ok body decodes");
    assert_eq!(ids, vec![1, 2]);

    let err = decode_response::<Vec<u64>>(
      400,
      r#"{"error":"bad"}"#
    )
    .expect_err("status wins");
    assert_eq!(err.user_message("x"), "bad");

    assert!(matches!(
      decode_response::<Vec<u64>>(
        200,
        "not json"
      ),
      Err(ApiError::Decode(_))
    ));
    assert_eq!(check_status(204, ""), Ok(()));
  }

  #[test]
  fn no_content_counts_as_success() {
    assert!(is_success_status(200));
    assert!(is_success_status(204));
    assert!(!is_success_status(404));
    assert!(!is_success_status(500));
  }
}
