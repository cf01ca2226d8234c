use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use tasklane_core::undo::DeletedTask;
use tempfile::NamedTempFile;
use tracing::debug;

const FILE_NAME: &str = "last_deleted.json";

/// One-slot store for the most recently deleted task, so `undo` works across
/// invocations.
#[derive(Debug, Clone)]
pub struct UndoStore {
    path: PathBuf,
}

impl UndoStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[tracing::instrument(skip(self))]
    pub fn load(&self) -> anyhow::Result<Option<DeletedTask>> {
        if !self.path.exists() {
            debug!(file = %self.path.display(), "no undo snapshot on disk");
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let snapshot = serde_json::from_str(&raw)
            .with_context(|| format!("invalid undo snapshot in {}", self.path.display()))?;
        Ok(Some(snapshot))
    }

    /// Replaces whatever was stored before.
    #[tracing::instrument(skip(self, snapshot), fields(title = %snapshot.title))]
    pub fn save(&self, snapshot: &DeletedTask) -> anyhow::Result<()> {
        debug!(file = %self.path.display(), "saving undo snapshot atomically");

        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir)?;
        let serialized = serde_json::to_string_pretty(snapshot)?;
        writeln!(temp, "{serialized}")?;
        temp.flush()?;

        temp.persist(&self.path)
            .map_err(|err| anyhow!("failed to persist {}: {}", self.path.display(), err))?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub fn clear(&self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to remove {}", self.path.display()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tasklane_core::wire::TaskPriority;

    use super::*;

    fn snapshot(title: &str) -> DeletedTask {
        DeletedTask {
            title: title.to_string(),
            description: Some("notes".to_string()),
            priority: TaskPriority::High,
            due_date: Some("2025-11-02".to_string()),
            due_time: None,
            is_done: true,
        }
    }

    #[test]
    fn empty_store_loads_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UndoStore::new(dir.path());
        assert_eq!(store.load().expect("load"), None);
        store.clear().expect("clearing a missing file is fine");
    }

    #[test]
    fn save_keeps_only_the_latest_snapshot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UndoStore::new(dir.path());

        store.save(&snapshot("first")).expect("save first");
        store.save(&snapshot("second")).expect("save second");

        let loaded = store.load().expect("load").expect("snapshot present");
        assert_eq!(loaded, snapshot("second"));

        store.clear().expect("clear");
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_snapshot_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UndoStore::new(dir.path());
        fs::write(store.path(), "{not json").expect("write garbage");

        assert!(store.load().is_err());
    }
}
