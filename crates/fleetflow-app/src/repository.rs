//! Repository adapters for persistence layer

use std::path::PathBuf;

use fleetflow_infra::FileSnapshotRepository;
use fleetflow_types::Result;

use crate::config::Config;

/// Open the file-based snapshot repository at the configured location
pub fn open_snapshot_repo(config: &Config) -> Result<FileSnapshotRepository> {
    let store_dir = config.store_dir()?;
    FileSnapshotRepository::open(store_dir).map_err(Into::into)
}

/// Open the snapshot repository at a custom directory
pub fn open_snapshot_repo_at(store_dir: PathBuf) -> Result<FileSnapshotRepository> {
    FileSnapshotRepository::open(store_dir).map_err(Into::into)
}
