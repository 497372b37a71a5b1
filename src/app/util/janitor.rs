use std::time::Duration;

use tokio::{task, time::interval};

use super::temp_files::TempFiles;

const SWEEP_INTERVAL: Duration = Duration::from_secs(600);

pub fn spawn(temp_files: TempFiles, max_age: Duration) {
    tracing::debug!(max_age_secs = max_age.as_secs(), "janitor spawned");

    task::spawn(async move {
        let mut interval = interval(SWEEP_INTERVAL.min(max_age).max(Duration::from_secs(1)));

        loop {
            interval.tick().await;
            cleanup_temp_files(&temp_files, max_age).await;
        }
    });
}

async fn cleanup_temp_files(temp_files: &TempFiles, max_age: Duration) {
    match temp_files.remove_older_than(max_age).await {
        Ok(0) => {}
        Ok(removed) => tracing::debug!("removed {} expired temp file(s)", removed),
        Err(e) => tracing::error!("cleanup_temp_files: {:?}", e),
    }
}
