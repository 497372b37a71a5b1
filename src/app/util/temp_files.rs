use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
    time::{Duration, SystemTime},
};

use uuid::Uuid;

/// Directory holding generated images, served under [`TempFiles::ROUTE`].
#[derive(Debug, Clone)]
pub struct TempFiles {
    dir: Arc<PathBuf>,
}

impl TempFiles {
    pub const ROUTE: &'static str = "/temp";

    pub async fn create(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;

        Ok(Self { dir: Arc::new(dir) })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Writes `bytes` under a fresh file name and returns its public url path.
    pub async fn save_png(&self, bytes: &[u8]) -> io::Result<String> {
        let file_name = format!("{}.png", Uuid::new_v4().simple());
        tokio::fs::write(self.dir.join(&file_name), bytes).await?;

        Ok(format!("{}/{}", Self::ROUTE, file_name))
    }

    /// Deletes generated images last modified at least `max_age` ago and
    /// returns how many were removed. Other files are left alone.
    pub async fn remove_older_than(&self, max_age: Duration) -> io::Result<usize> {
        let now = SystemTime::now();
        let mut entries = tokio::fs::read_dir(self.dir.as_path()).await?;
        let mut removed = 0;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().map_or(true, |extension| extension != "png") {
                continue;
            }

            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }

            let age = now
                .duration_since(metadata.modified()?)
                .unwrap_or_default();
            if age < max_age {
                continue;
            }

            match tokio::fs::remove_file(&path).await {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!(%e, path = %path.display(), "failed to remove temp file"),
            }
        }

        Ok(removed)
    }
}
