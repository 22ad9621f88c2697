use std::path::{Path, PathBuf};

use impact_core::Impact;
use impact_logging::impact_info;

use crate::{decode_impacts, FailureKind, ImpactSource, LoadError};

/// Reads the impact list from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    max_bytes: u64,
}

impl FileSource {
    pub fn new(path: PathBuf, max_bytes: u64) -> Self {
        Self { path, max_bytes }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl ImpactSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load(&self) -> Result<Vec<Impact>, LoadError> {
        let io_error = |err: std::io::Error| {
            LoadError::new(FailureKind::Io, format!("{}: {err}", self.path.display()))
        };

        let meta = tokio::fs::metadata(&self.path).await.map_err(io_error)?;
        if meta.len() > self.max_bytes {
            return Err(LoadError::new(
                FailureKind::TooLarge {
                    max_bytes: self.max_bytes,
                    actual: Some(meta.len()),
                },
                "file too large",
            ));
        }

        let bytes = tokio::fs::read(&self.path).await.map_err(io_error)?;
        let impacts = decode_impacts(&bytes)?;
        impact_info!("Read {} impacts from {:?}", impacts.len(), self.path);
        Ok(impacts)
    }
}
