use crate::domain::error::PpError;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

pub trait OutputWriter {
    /// Writes `content` for `rel_path`. Returns `Ok(false)` when nothing was written.
    fn write(&self, rel_path: &Path, content: &str) -> Result<bool, PpError>;
}

pub struct FileWriter {
    out_dir: PathBuf,
}

impl FileWriter {
    pub fn new(out_dir: PathBuf) -> Self {
        Self { out_dir }
    }

    pub fn target(&self, rel_path: &Path) -> PathBuf {
        self.out_dir.join(rel_path)
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, rel_path: &Path, content: &str) -> Result<bool, PpError> {
        if content.is_empty() {
            debug!("Nothing to write for {}", rel_path.display());
            return Ok(false);
        }

        let path = self.target(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| PpError::Output {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        debug!("Writing output to file: {}", path.display());
        fs::write(&path, content).map_err(|source| PpError::FileWrite {
            path: path.clone(),
            source,
        })?;
        info!("Output written to file: {}", path.display());
        Ok(true)
    }
}
