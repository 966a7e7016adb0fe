use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use blogsearch_core::{sort_posts, Dataset, SortMode, DATASET_RESOURCE};
use tempfile::NamedTempFile;
use thiserror::Error;
use widget_logging::widget_info;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Copy of `dataset` ordered newest first, the order the generator exports in.
pub fn newest_first(dataset: &Dataset) -> Dataset {
    let mut blogs = dataset.blogs.clone();
    sort_posts(&mut blogs, SortMode::DateDesc);
    Dataset::new(blogs)
}

/// Writes `blogs.json` into an output directory, replacing any previous copy atomically.
pub struct DatasetWriter {
    dir: PathBuf,
}

impl DatasetWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, dataset: &Dataset) -> Result<PathBuf, PersistError> {
        self.ensure_dir()?;

        let content = serde_json::to_string_pretty(&newest_first(dataset))?;
        let target = self.dir.join(DATASET_RESOURCE);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.write_all(b"\n")?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // Rename over the old file so readers never see it missing.
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;

        widget_info!("Exported {} blogs to {}", dataset.len(), target.display());
        Ok(target)
    }

    fn ensure_dir(&self) -> Result<(), PersistError> {
        let dir: &Path = &self.dir;
        if dir.exists() {
            let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
            if !meta.is_dir() {
                return Err(PersistError::OutputDir("path is not a directory".into()));
            }
            return Ok(());
        }
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))
    }
}
