use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use tasklane_core::config::ClientConfig;
use tracing::{
  debug,
  info
};

pub const CONFIG_ENV: &str =
  "TASKLANE_CONFIG";
pub const API_ENV: &str = "TASKLANE_API";
pub const DATA_ENV: &str = "TASKLANE_DATA";

/// Reads the client config and layers the
/// API base overrides on top: file, then
/// `TASKLANE_API`, then `--api`.
#[tracing::instrument]
pub fn load(
  override_path: Option<&Path>,
  api_override: Option<&str>
) -> anyhow::Result<ClientConfig> {
  let mut cfg = match resolve_config_path(
    override_path
  )? {
    | Some(path) => {
      info!(file = %path.display(), "loading client config");
      load_file(&path)?
    }
    | None => {
      debug!(
        "no client config found; using \
         defaults"
      );
      ClientConfig::default()
    }
  };

  if let Ok(api_env) =
    std::env::var(API_ENV)
    && !api_env.trim().is_empty()
  {
    debug!(api = %api_env, "api base from environment");
    cfg = cfg.with_api_base(&api_env);
  }

  if let Some(api) = api_override {
    cfg = cfg.with_api_base(api);
  }

  Ok(cfg)
}

fn load_file(
  path: &Path
) -> anyhow::Result<ClientConfig> {
  let raw = fs::read_to_string(path)
    .with_context(|| {
      format!(
        "failed to read {}",
        path.display()
      )
    })?;
  ClientConfig::from_toml_str(&raw)
    .with_context(|| {
      format!(
        "invalid config in {}",
        path.display()
      )
    })
}

fn resolve_config_path(
  override_path: Option<&Path>
) -> anyhow::Result<Option<PathBuf>> {
  if let Some(path) = override_path {
    let path = expand_tilde(path);
    if !path.exists() {
      return Err(anyhow!(
        "config file not found: {}",
        path.display()
      ));
    }
    return Ok(Some(path));
  }

  if let Ok(env_path) =
    std::env::var(CONFIG_ENV)
  {
    if env_path == "/dev/null" {
      return Ok(None);
    }
    return Ok(Some(expand_tilde(
      Path::new(&env_path)
    )));
  }

  let Some(config_dir) = dirs::config_dir()
  else {
    return Ok(None);
  };
  let candidate = config_dir
    .join("tasklane")
    .join("config.toml");
  if candidate.exists() {
    return Ok(Some(candidate));
  }

  Ok(None)
}

/// Where the undo snapshot lives.
pub fn resolve_data_dir()
-> anyhow::Result<PathBuf> {
  let dir = if let Ok(env_dir) =
    std::env::var(DATA_ENV)
  {
    expand_tilde(Path::new(&env_dir))
  } else {
    dirs::data_dir()
      .ok_or_else(|| {
        anyhow!(
          "cannot determine data \
           directory"
        )
      })?
      .join("tasklane")
  };

  fs::create_dir_all(&dir)
    .with_context(|| {
      format!(
        "failed to create data dir {}",
        dir.display()
      )
    })?;
  Ok(dir)
}

fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}
