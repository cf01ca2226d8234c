pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod render;
pub mod undo_store;

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use tracing::{
  debug,
  info
};

pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let cli =
    cli::GlobalCli::parse_from(raw_args);

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting tasklane CLI"
  );

  let cfg = config::load(
    cli.config.as_deref(),
    cli.api.as_deref()
  )?;
  debug!(
    api_base = %cfg.api_base,
    "resolved client config"
  );

  let data_dir =
    config::resolve_data_dir().context(
      "failed to resolve data \
       directory"
    )?;
  let undo = undo_store::UndoStore::new(
    &data_dir
  );

  let api = client::HttpTaskApi::new(
    cfg.endpoints()
  )?;

  let runtime =
    tokio::runtime::Builder::new_current_thread()
      .enable_all()
      .build()
      .context(
        "failed to start async runtime"
      )?;

  let command = cli.command.unwrap_or(
    cli::Command::List(
      cli::ListArgs::default()
    )
  );

  runtime.block_on(commands::dispatch(
    &api, &cfg, &undo, command
  ))
}
