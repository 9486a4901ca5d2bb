use crate::core::Storage;
use crate::utils::error::{ReportError, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn full_path(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    async fn write_string(&self, path: &str, content: &str) -> Result<()> {
        let full_path = self.full_path(path);
        let shown = full_path.display().to_string();

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ReportError::persistence(&shown, e))?;
        }

        fs::write(&full_path, content).map_err(|e| ReportError::persistence(&shown, e))?;
        tracing::debug!("Wrote {} bytes to {}", content.len(), shown);
        Ok(())
    }
}
