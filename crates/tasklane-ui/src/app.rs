mod storage;
mod stores;

use gloo::console::log;
use gloo::timers::callback::Timeout;
use tasklane_core::cache::{
  DateFilter,
  TaskCache
};
use tasklane_core::config::ClientConfig;
use tasklane_core::draft::{
  DraftError,
  TaskDraft
};
use tasklane_core::ops;
use tasklane_core::toast::{
  self,
  ToastAction
};
use tasklane_core::undo::DeletedTask;
use tasklane_core::wire::{
  SortBy,
  SortOrder,
  TaskDto,
  TaskId,
  TasksListArgs
};
use yew::{
  Callback,
  Html,
  UseReducerHandle,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use self::stores::{
  RefreshTick,
  SelectionAction,
  SelectionStore,
  ToastStore
};
use crate::api::HttpTaskApi;
use crate::components::{
  BulkBar,
  CalendarSidebar,
  NewTaskModal,
  ProgressBar,
  TaskColumn,
  ToastView,
  Toolbar
};

const CLIENT_CONFIG_TOML: &str =
  include_str!("../assets/client.toml");

fn load_client_config() -> ClientConfig {
  match ClientConfig::from_toml_str(
    CLIENT_CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(err) => {
      tracing::error!(
        error = %err,
        "invalid embedded client config; \
         using defaults"
      );
      ClientConfig::default()
    }
  }
}

fn notify(
  toasts: &UseReducerHandle<ToastStore>,
  message: impl Into<String>,
  undo: bool
) {
  toasts.dispatch(ToastAction::Show {
    message: message.into(),
    undo
  });
}

fn confirm(message: &str) -> bool {
  web_sys::window()
    .and_then(|window| {
      window
        .confirm_with_message(message)
        .ok()
    })
    .unwrap_or(false)
}

fn draft_message(
  err: &DraftError,
  missing_title: &str
) -> String {
  match err {
    | DraftError::MissingTitle => {
      missing_title.to_string()
    }
    | other => other.to_string()
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(load_client_config);
  let list_args = {
    let defaults = config.list_args();
    use_state(move || {
      storage::load_list_args(defaults)
    })
  };
  let cache = use_state(TaskCache::default);
  let refreshing = use_state(|| false);
  let refresh =
    use_reducer(RefreshTick::default);
  let selection =
    use_reducer(SelectionStore::default);
  let toasts =
    use_reducer(ToastStore::default);
  let last_deleted =
    use_state(|| None::<DeletedTask>);
  let picked =
    use_state(|| None::<String>);
  let filter_enabled = use_state(|| false);
  let editing =
    use_state(|| None::<TaskId>);
  let modal_open = use_state(|| false);
  let new_draft =
    use_state(TaskDraft::default);
  let creating = use_state(|| false);

  let api =
    HttpTaskApi::new(config.endpoints());

  {
    let api = api.clone();
    let cache = cache.clone();
    let refreshing = refreshing.clone();
    let selection = selection.clone();
    let toasts = toasts.clone();

    use_effect_with(
      (*list_args, refresh.0),
      move |(args, tick)| {
        let args = *args;
        let tick = *tick;

        wasm_bindgen_futures::spawn_local(async move {
          tracing::info!(sort_by = %args.sort_by, order = %args.order, tick, "refreshing task list");
          refreshing.set(true);

          match ops::fetch_tasks(&api, &args).await {
            | Ok(list) => {
              let next = TaskCache::new(list);
              selection.dispatch(
                SelectionAction::RetainKnown(
                  next.ids()
                )
              );
              cache.set(next);
            }
            | Err(err) => {
              tracing::error!(error = %err, "fetching tasks failed");
              notify(
                &toasts,
                err.user_message(
                  toast::FETCH_FAILED
                ),
                false
              );
            }
          }

          refreshing.set(false);
        });

        || ()
      }
    );
  }

  {
    let toasts = toasts.clone();
    let toast_ms = config.toast_ms;
    let current =
      toasts.0.current().map(|toast| toast.id);

    use_effect_with(current, move |id| {
      let timeout = id.map(|id| {
        let toasts = toasts.clone();
        Timeout::new(toast_ms, move || {
          toasts
            .dispatch(ToastAction::Expire(id))
        })
      });

      move || drop(timeout)
    });
  }

  let on_sort_by = {
    let list_args = list_args.clone();
    Callback::from(move |sort_by: SortBy| {
      let next = TasksListArgs {
        sort_by,
        ..*list_args
      };
      storage::save_list_args(&next);
      list_args.set(next);
    })
  };

  let on_order = {
    let list_args = list_args.clone();
    Callback::from(move |order: SortOrder| {
      let next = TasksListArgs {
        order,
        ..*list_args
      };
      storage::save_list_args(&next);
      list_args.set(next);
    })
  };

  let on_refresh = {
    let refresh = refresh.clone();
    Callback::from(move |()| {
      ui_debug("refresh", "manual");
      refresh.dispatch(());
    })
  };

  let on_toggle_select = {
    let selection = selection.clone();
    Callback::from(move |id: TaskId| {
      selection.dispatch(
        SelectionAction::Toggle(id)
      );
    })
  };

  let on_toggle_done = {
    let api = api.clone();
    let refresh = refresh.clone();
    let toasts = toasts.clone();
    Callback::from(
      move |(id, done): (TaskId, bool)| {
        let api = api.clone();
        let refresh = refresh.clone();
        let toasts = toasts.clone();
        ui_debug(
          "toggle-done",
          &format!("{id} -> {done}")
        );

        wasm_bindgen_futures::spawn_local(
          async move {
            match ops::set_done(
              &api, id, done
            )
            .await
            {
              | Ok(_) => refresh.dispatch(()),
              | Err(err) => {
                tracing::error!(id, error = %err, "toggling done failed");
                notify(
                  &toasts,
                  err.user_message(
                    toast::UPDATE_FAILED
                  ),
                  false
                );
              }
            }
          }
        );
      }
    )
  };

  let on_edit = {
    let editing = editing.clone();
    Callback::from(move |id: TaskId| {
      editing.set(Some(id));
    })
  };

  let on_cancel_edit = {
    let editing = editing.clone();
    Callback::from(move |()| {
      editing.set(None);
    })
  };

  let on_save_edit = {
    let api = api.clone();
    let editing = editing.clone();
    let refresh = refresh.clone();
    let toasts = toasts.clone();
    Callback::from(
      move |(id, draft): (
        TaskId,
        TaskDraft
      )| {
        let patch = match draft.to_patch() {
          | Ok(patch) => patch,
          | Err(err) => {
            notify(
              &toasts,
              draft_message(
                &err,
                toast::TITLE_REQUIRED_EDIT
              ),
              false
            );
            return;
          }
        };

        let api = api.clone();
        let editing = editing.clone();
        let refresh = refresh.clone();
        let toasts = toasts.clone();
        wasm_bindgen_futures::spawn_local(
          async move {
            match ops::update_task(
              &api, id, &patch
            )
            .await
            {
              | Ok(_) => {
                editing.set(None);
                refresh.dispatch(());
              }
              | Err(err) => {
                tracing::error!(id, error = %err, "saving edit failed");
                notify(
                  &toasts,
                  err.user_message(
                    toast::UPDATE_FAILED
                  ),
                  false
                );
              }
            }
          }
        );
      }
    )
  };

  let on_delete = {
    let api = api.clone();
    let confirm_deletes =
      config.confirm_deletes;
    let last_deleted = last_deleted.clone();
    let selection = selection.clone();
    let refresh = refresh.clone();
    let toasts = toasts.clone();
    Callback::from(move |task: TaskDto| {
      if confirm_deletes
        && !confirm(&toast::confirm_delete(
          &task.title
        ))
      {
        ui_debug(
          "delete",
          "cancelled by user"
        );
        return;
      }

      let api = api.clone();
      let last_deleted =
        last_deleted.clone();
      let selection = selection.clone();
      let refresh = refresh.clone();
      let toasts = toasts.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match ops::delete_task(&api, &task)
            .await
          {
            | Ok(snapshot) => {
              last_deleted.set(Some(snapshot));
              selection.dispatch(
                SelectionAction::Remove(
                  task.id
                )
              );
              notify(
                &toasts,
                toast::task_deleted(
                  &task.title
                ),
                true
              );
              refresh.dispatch(());
            }
            | Err(err) => {
              tracing::error!(id = task.id, error = %err, "delete failed");
              notify(
                &toasts,
                err.user_message(
                  toast::DELETE_FAILED
                ),
                false
              );
            }
          }
        }
      );
    })
  };

  let on_undo = {
    let api = api.clone();
    let last_deleted = last_deleted.clone();
    let refresh = refresh.clone();
    let toasts = toasts.clone();
    Callback::from(move |()| {
      let Some(snapshot) =
        (*last_deleted).clone()
      else {
        tracing::warn!(
          "undo clicked with nothing to \
           restore"
        );
        return;
      };
      toasts.dispatch(ToastAction::Dismiss);

      let api = api.clone();
      let last_deleted =
        last_deleted.clone();
      let refresh = refresh.clone();
      let toasts = toasts.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match ops::undo_delete(
            &api, &snapshot
          )
          .await
          {
            | Ok(_) => {
              last_deleted.set(None);
              notify(
                &toasts,
                toast::UNDO_DONE,
                false
              );
              refresh.dispatch(());
            }
            | Err(err) => {
              tracing::error!(error = %err, "undo failed");
              notify(
                &toasts,
                err.user_message(
                  toast::UNDO_FAILED
                ),
                false
              );
            }
          }
        }
      );
    })
  };

  let on_dismiss_toast = {
    let toasts = toasts.clone();
    Callback::from(move |()| {
      toasts.dispatch(ToastAction::Dismiss);
    })
  };

  let on_bulk_delete = {
    let api = api.clone();
    let selection = selection.clone();
    let refresh = refresh.clone();
    let toasts = toasts.clone();
    Callback::from(move |()| {
      let ids = selection.0.ids();
      if ids.is_empty() {
        return;
      }
      if !confirm(
        &toast::confirm_bulk_delete(
          ids.len()
        )
      ) {
        return;
      }

      let api = api.clone();
      let selection = selection.clone();
      let refresh = refresh.clone();
      let toasts = toasts.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let outcome =
            ops::bulk_delete(&api, ids)
              .await;
          selection.dispatch(
            SelectionAction::Clear
          );
          notify(
            &toasts,
            outcome.summary(),
            false
          );
          refresh.dispatch(());
        }
      );
    })
  };

  let on_bulk_clear = {
    let selection = selection.clone();
    Callback::from(move |()| {
      selection
        .dispatch(SelectionAction::Clear);
    })
  };

  let on_pick = {
    let picked = picked.clone();
    Callback::from(
      move |value: Option<String>| {
        ui_debug(
          "calendar-pick",
          value.as_deref().unwrap_or("-")
        );
        picked.set(value);
      }
    )
  };

  let on_toggle_filter = {
    let filter_enabled =
      filter_enabled.clone();
    Callback::from(move |enabled: bool| {
      filter_enabled.set(enabled);
    })
  };

  let on_apply_to_form = {
    let picked = picked.clone();
    let new_draft = new_draft.clone();
    Callback::from(move |()| {
      let mut draft = (*new_draft).clone();
      draft.apply_due_date(
        (*picked).as_deref()
      );
      new_draft.set(draft);
    })
  };

  let on_open_modal = {
    let picked = picked.clone();
    let new_draft = new_draft.clone();
    let modal_open = modal_open.clone();
    Callback::from(
      move |_: web_sys::MouseEvent| {
      let mut draft = (*new_draft).clone();
      draft.prefill_due_date(
        (*picked).as_deref()
      );
      new_draft.set(draft);
      modal_open.set(true);
      }
    )
  };

  let on_close_modal = {
    let modal_open = modal_open.clone();
    Callback::from(move |()| {
      modal_open.set(false);
    })
  };

  let on_draft_change = {
    let new_draft = new_draft.clone();
    Callback::from(move |draft: TaskDraft| {
      new_draft.set(draft);
    })
  };

  let on_create = {
    let api = api.clone();
    let new_draft = new_draft.clone();
    let modal_open = modal_open.clone();
    let creating = creating.clone();
    let refresh = refresh.clone();
    let toasts = toasts.clone();
    Callback::from(move |()| {
      let body = match new_draft.to_create() {
        | Ok(body) => body,
        | Err(err) => {
          notify(
            &toasts,
            draft_message(
              &err,
              toast::TITLE_REQUIRED_CREATE
            ),
            false
          );
          return;
        }
      };

      creating.set(true);
      let api = api.clone();
      let new_draft = new_draft.clone();
      let modal_open = modal_open.clone();
      let creating = creating.clone();
      let refresh = refresh.clone();
      let toasts = toasts.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match ops::create_task(&api, &body)
            .await
          {
            | Ok(_) => {
              new_draft
                .set(TaskDraft::default());
              modal_open.set(false);
              refresh.dispatch(());
            }
            | Err(err) => {
              tracing::error!(error = %err, "create failed");
              notify(
                &toasts,
                err.user_message(
                  toast::CREATE_FAILED
                ),
                false
              );
            }
          }
          creating.set(false);
        }
      );
    })
  };

  let filter = DateFilter::new(
    *filter_enabled,
    (*picked).clone()
  );
  let view = cache.view(&filter);
  let selection_snapshot =
    selection.0.clone();

  html! {
    <div class="app">
      <header class="topbar">
        <h1>{ "Tasks" }</h1>
        <Toolbar
          list_args={*list_args}
          refreshing={*refreshing}
          on_sort_by={on_sort_by}
          on_order={on_order}
          on_refresh={on_refresh}
        />
      </header>

      <div class="layout">
        <CalendarSidebar
          picked={(*picked).clone()}
          filter_enabled={*filter_enabled}
          on_pick={on_pick}
          on_toggle_filter={on_toggle_filter}
          on_apply_to_form={on_apply_to_form}
        >
          <BulkBar
            count={selection_snapshot.count()}
            on_delete={on_bulk_delete}
            on_clear={on_bulk_clear}
          />
        </CalendarSidebar>

        <main class="board">
          <ProgressBar progress={view.progress} />
          <div class="columns">
            <TaskColumn
              title="Ongoing"
              empty_message="No ongoing tasks."
              tasks={view.active.clone()}
              selection={selection_snapshot.clone()}
              editing={*editing}
              on_toggle_select={on_toggle_select.clone()}
              on_toggle_done={on_toggle_done.clone()}
              on_edit={on_edit.clone()}
              on_delete={on_delete.clone()}
              on_save_edit={on_save_edit.clone()}
              on_cancel_edit={on_cancel_edit.clone()}
            />
            <TaskColumn
              title="Completed"
              empty_message="No completed tasks."
              tasks={view.done.clone()}
              selection={selection_snapshot}
              editing={*editing}
              on_toggle_select={on_toggle_select}
              on_toggle_done={on_toggle_done}
              on_edit={on_edit}
              on_delete={on_delete}
              on_save_edit={on_save_edit}
              on_cancel_edit={on_cancel_edit}
            />
          </div>
        </main>
      </div>

      <button
        class="fab"
        title="New task"
        onclick={on_open_modal}
      >
        { "+" }
      </button>

      <NewTaskModal
        open={*modal_open}
        busy={*creating}
        draft={(*new_draft).clone()}
        on_change={on_draft_change}
        on_submit={on_create}
        on_close={on_close_modal}
      />

      <ToastView
        toast={toasts.0.current().cloned()}
        on_undo={on_undo}
        on_dismiss={on_dismiss_toast}
      />
    </div>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
