use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::{ArgAction, Args, Parser, Subcommand};
use tasklane_core::draft::{parse_due_date, parse_due_time};
use tasklane_core::wire::{SortBy, SortOrder, TaskId, TaskPatch, TaskPriority};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tasklane",
    version,
    about = "Tasklane: terminal client for the task API",
    disable_help_subcommand = true
)]
pub struct GlobalCli {
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[arg(short = 'q', long = "quiet", action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Client config file (TOML).
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the task API, e.g. http://127.0.0.1:5000
    #[arg(long = "api", global = true)]
    pub api: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show ongoing and completed tasks with overall progress.
    List(ListArgs),
    /// Create a task.
    Add(AddArgs),
    /// Change fields of an existing task.
    Edit(EditArgs),
    /// Mark tasks as done.
    Done {
        #[arg(required = true)]
        ids: Vec<TaskId>,
    },
    /// Mark a task as not done.
    Reopen { id: TaskId },
    /// Delete one task; it can be restored with `undo`.
    Delete {
        id: TaskId,
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Delete several tasks, one request at a time.
    BulkDelete {
        #[arg(required = true)]
        ids: Vec<TaskId>,
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Re-create the most recently deleted task.
    Undo,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[arg(long = "sort-by")]
    pub sort_by: Option<SortBy>,

    #[arg(long = "order")]
    pub order: Option<SortOrder>,

    /// Only show tasks due on this day (YYYY-MM-DD).
    #[arg(long = "date", value_parser = parse_due_date)]
    pub date: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    pub title: String,

    #[arg(short = 'd', long = "description")]
    pub description: Option<String>,

    #[arg(short = 'p', long = "priority", default_value_t = TaskPriority::Mid)]
    pub priority: TaskPriority,

    #[arg(long = "due-date", value_parser = parse_due_date)]
    pub due_date: Option<String>,

    #[arg(long = "due-time", value_parser = parse_due_time)]
    pub due_time: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    pub id: TaskId,

    #[arg(long = "title")]
    pub title: Option<String>,

    #[arg(long = "description", conflicts_with = "clear_description")]
    pub description: Option<String>,

    #[arg(long = "clear-description")]
    pub clear_description: bool,

    #[arg(short = 'p', long = "priority")]
    pub priority: Option<TaskPriority>,

    #[arg(long = "due-date", value_parser = parse_due_date, conflicts_with = "clear_due_date")]
    pub due_date: Option<String>,

    #[arg(long = "clear-due-date")]
    pub clear_due_date: bool,

    #[arg(long = "due-time", value_parser = parse_due_time, conflicts_with = "clear_due_time")]
    pub due_time: Option<String>,

    #[arg(long = "clear-due-time")]
    pub clear_due_time: bool,
}

impl EditArgs {
    pub fn to_patch(&self) -> anyhow::Result<TaskPatch> {
        let title = match self.title.as_deref().map(str::trim) {
            Some("") => return Err(anyhow!("title cannot be empty")),
            Some(title) => Some(title.to_string()),
            None => None,
        };

        let patch = TaskPatch {
            title,
            description: clearable(self.description.as_deref(), self.clear_description),
            priority: self.priority,
            due_date: clearable(self.due_date.as_deref(), self.clear_due_date),
            due_time: clearable(self.due_time.as_deref(), self.clear_due_time),
            is_done: None,
        };

        if patch.is_empty() {
            return Err(anyhow!("nothing to change for task {}", self.id));
        }
        Ok(patch)
    }
}

fn clearable(value: Option<&str>, clear: bool) -> Option<Option<String>> {
    if clear {
        return Some(None);
    }
    value.map(tasklane_core::draft::optional_text)
}

pub fn init_tracing(verbose: u8, quiet: u8) -> anyhow::Result<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
