use super::RosterStorage;
use crate::error::{Result, TutzError};
use crate::model::Tutorial;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TutzError::Io)?;
            }
        }
        Ok(())
    }
}

impl RosterStorage for FileStore {
    fn load(&self) -> Result<Option<Vec<Tutorial>>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no roster file yet");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(TutzError::Io)?;
        let tutorials: Vec<Tutorial> =
            serde_json::from_str(&content).map_err(TutzError::Serialization)?;
        debug!(path = %self.path.display(), count = tutorials.len(), "roster loaded");
        Ok(Some(tutorials.into_iter().map(Tutorial::normalized).collect()))
    }

    fn save(&mut self, tutorials: &[Tutorial]) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(tutorials).map_err(TutzError::Serialization)?;
        fs::write(&self.path, content).map_err(TutzError::Io)?;
        debug!(path = %self.path.display(), count = tutorials.len(), "roster saved");
        Ok(())
    }
}
