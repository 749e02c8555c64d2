use super::StudentStore;
use crate::error::{Result, RosterError};
use crate::model::Student;
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed store: one JSON array holding the full record set.
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
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }
}

impl StudentStore for FileStore {
    fn read_all(&self) -> Result<Vec<Student>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RosterError::Io)?;
        let students: Vec<Student> =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(students)
    }

    fn write_all(&mut self, students: &[Student]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(students).map_err(RosterError::Serialization)?;
        fs::write(&self.path, content).map_err(RosterError::Io)?;
        Ok(())
    }
}
