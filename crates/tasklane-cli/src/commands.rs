use std::io::{self, BufRead, Write};

use anyhow::anyhow;
use tasklane_core::api::TaskApi;
use tasklane_core::cache::{DateFilter, TaskCache};
use tasklane_core::config::ClientConfig;
use tasklane_core::draft::{DraftError, TaskDraft};
use tasklane_core::error::ApiError;
use tasklane_core::ops;
use tasklane_core::selection::BulkSelection;
use tasklane_core::toast;
use tasklane_core::wire::{TaskDto, TaskId, TasksListArgs};
use tracing::{debug, info, warn};

use crate::cli::{AddArgs, Command, EditArgs, ListArgs};
use crate::render::Renderer;
use crate::undo_store::UndoStore;

#[tracing::instrument(skip_all)]
pub async fn dispatch<A: TaskApi>(
    api: &A,
    cfg: &ClientConfig,
    undo: &UndoStore,
    command: Command,
) -> anyhow::Result<()> {
    debug!(?command, "dispatching command");
    match command {
        Command::List(args) => cmd_list(api, cfg, args).await,
        Command::Add(args) => cmd_add(api, args).await,
        Command::Edit(args) => cmd_edit(api, args).await,
        Command::Done { ids } => {
            for id in ids {
                let task = ops::set_done(api, id, true)
                    .await
                    .map_err(|err| api_failure(err, toast::UPDATE_FAILED))?;
                println!("Completed task {} \"{}\".", task.id, task.title);
            }
            Ok(())
        }
        Command::Reopen { id } => {
            let task = ops::set_done(api, id, false)
                .await
                .map_err(|err| api_failure(err, toast::UPDATE_FAILED))?;
            println!("Reopened task {} \"{}\".", task.id, task.title);
            Ok(())
        }
        Command::Delete { id, yes } => {
            let confirm = !yes && cfg.confirm_deletes;
            cmd_delete(api, cfg, undo, id, confirm).await
        }
        Command::BulkDelete { ids, yes } => {
            let confirm = !yes && cfg.confirm_deletes;
            cmd_bulk_delete(api, ids, confirm).await
        }
        Command::Undo => cmd_undo(api, undo).await,
    }
}

async fn cmd_list<A: TaskApi>(api: &A, cfg: &ClientConfig, args: ListArgs) -> anyhow::Result<()> {
    let defaults = cfg.list_args();
    let list_args = TasksListArgs {
        sort_by: args.sort_by.unwrap_or(defaults.sort_by),
        order: args.order.unwrap_or(defaults.order),
    };

    let tasks = ops::fetch_tasks(api, &list_args)
        .await
        .map_err(|err| api_failure(err, toast::FETCH_FAILED))?;
    let cache = TaskCache::new(tasks);

    let filter = DateFilter::new(args.date.is_some(), args.date);
    Renderer::new().print_board(&cache.view(&filter), &filter)
}

async fn cmd_add<A: TaskApi>(api: &A, args: AddArgs) -> anyhow::Result<()> {
    let draft = TaskDraft {
        title: args.title,
        description: args.description.unwrap_or_default(),
        priority: args.priority,
        due_date: args.due_date.unwrap_or_default(),
        due_time: args.due_time.unwrap_or_default(),
    };
    let body = draft.to_create().map_err(|err| match err {
        DraftError::MissingTitle => anyhow!(toast::TITLE_REQUIRED_CREATE),
        other => anyhow!(other),
    })?;

    let task = ops::create_task(api, &body)
        .await
        .map_err(|err| api_failure(err, toast::CREATE_FAILED))?;
    println!("Created task {} \"{}\".", task.id, task.title);
    Ok(())
}

async fn cmd_edit<A: TaskApi>(api: &A, args: EditArgs) -> anyhow::Result<()> {
    let patch = args.to_patch()?;
    let task = ops::update_task(api, args.id, &patch)
        .await
        .map_err(|err| api_failure(err, toast::UPDATE_FAILED))?;
    println!("Updated task {} \"{}\".", task.id, task.title);
    Ok(())
}

async fn cmd_delete<A: TaskApi>(
    api: &A,
    cfg: &ClientConfig,
    undo: &UndoStore,
    id: TaskId,
    confirm: bool,
) -> anyhow::Result<()> {
    let task = find_task(api, cfg, id).await?;

    if confirm && !prompt_yes_no(&toast::confirm_delete(&task.title))? {
        info!(id, "delete cancelled");
        return Ok(());
    }

    let snapshot = ops::delete_task(api, &task)
        .await
        .map_err(|err| api_failure(err, toast::DELETE_FAILED))?;
    undo.save(&snapshot)?;

    println!("{} Run `tasklane undo` to restore it.", toast::task_deleted(&task.title));
    Ok(())
}

async fn cmd_bulk_delete<A: TaskApi>(api: &A, ids: Vec<TaskId>, confirm: bool) -> anyhow::Result<()> {
    let mut selection = BulkSelection::default();
    for id in ids {
        selection.set(id, true);
    }

    if confirm && !prompt_yes_no(&toast::confirm_bulk_delete(selection.count()))? {
        info!(count = selection.count(), "bulk delete cancelled");
        return Ok(());
    }

    let outcome = ops::bulk_delete(api, selection.ids()).await;
    for (id, err) in &outcome.failed {
        eprintln!("task {id}: {}", err.user_message(toast::DELETE_FAILED));
    }
    println!("{}", outcome.summary());
    Ok(())
}

async fn cmd_undo<A: TaskApi>(api: &A, undo: &UndoStore) -> anyhow::Result<()> {
    let Some(snapshot) = undo.load()? else {
        return Err(anyhow!("nothing to undo"));
    };

    let restored = ops::undo_delete(api, &snapshot)
        .await
        .map_err(|err| api_failure(err, toast::UNDO_FAILED))?;
    undo.clear()?;

    println!("{} Task is now {}.", toast::UNDO_DONE, restored.id);
    Ok(())
}

async fn find_task<A: TaskApi>(api: &A, cfg: &ClientConfig, id: TaskId) -> anyhow::Result<TaskDto> {
    let tasks = ops::fetch_tasks(api, &cfg.list_args())
        .await
        .map_err(|err| api_failure(err, toast::FETCH_FAILED))?;
    TaskCache::new(tasks)
        .find(id)
        .cloned()
        .ok_or_else(|| anyhow!("task {id} not found"))
}

/// Keeps the server's message on top and the transport detail underneath.
fn api_failure(err: ApiError, fallback: &str) -> anyhow::Error {
    let message = err.user_message(fallback);
    warn!(error = %err, "task API call failed");
    anyhow::Error::new(err).context(message)
}

fn prompt_yes_no(question: &str) -> anyhow::Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stderr().lock();
    confirm(&mut input, &mut output, question)
}

fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> anyhow::Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
