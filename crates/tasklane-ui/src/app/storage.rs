use tasklane_core::wire::TasksListArgs;

const SORT_STORAGE_KEY: &str =
  "tasklane.sort";

fn local_storage()
-> Option<web_sys::Storage> {
  web_sys::window().and_then(|window| {
    window
      .local_storage()
      .ok()
      .flatten()
  })
}

/// Last sort the user picked, or
/// `fallback` when nothing usable is
/// stored.
pub fn load_list_args(
  fallback: TasksListArgs
) -> TasksListArgs {
  let Some(raw) =
    local_storage().and_then(|storage| {
      storage
        .get_item(SORT_STORAGE_KEY)
        .ok()
        .flatten()
    })
  else {
    return fallback;
  };

  match serde_json::from_str(&raw) {
    | Ok(args) => args,
    | Err(err) => {
      tracing::warn!(
        error = %err,
        "ignoring stored sort preference"
      );
      fallback
    }
  }
}

pub fn save_list_args(
  args: &TasksListArgs
) {
  let Some(storage) = local_storage()
  else {
    return;
  };
  match serde_json::to_string(args) {
    | Ok(raw) => {
      let _ = storage.set_item(
        SORT_STORAGE_KEY,
        &raw
      );
    }
    | Err(err) => {
      tracing::warn!(
        error = %err,
        "failed to encode sort preference"
      );
    }
  }
}
