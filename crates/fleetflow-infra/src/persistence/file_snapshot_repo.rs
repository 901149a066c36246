//! File-based snapshot repository implementation
//!
//! Stores the whole entity store as one pretty-printed JSON document. Every
//! save replaces the document; every load reads it back in full, so readers
//! never observe a half-updated entity.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use fleetflow_domain::repository::SnapshotRepository;
use fleetflow_domain::EntityStore;
use fleetflow_types::StoreError;

const SNAPSHOT_FILE: &str = "store.json";

/// File-based implementation of SnapshotRepository
pub struct FileSnapshotRepository {
    store_path: PathBuf,
}

impl FileSnapshotRepository {
    /// Create or open a snapshot repository under the given directory
    pub fn open(store_dir: PathBuf) -> Result<Self, StoreError> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            store_path: store_dir.join(SNAPSHOT_FILE),
        })
    }

    /// The path of the snapshot document
    pub fn store_path(&self) -> &PathBuf {
        &self.store_path
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn load(&self) -> Result<Option<EntityStore>, StoreError> {
        if !self.store_path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.store_path)?;
        let reader = BufReader::new(file);
        let store = serde_json::from_reader(reader)?;
        Ok(Some(store))
    }

    fn save(&self, store: &EntityStore) -> Result<(), StoreError> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, store)?;
        Ok(())
    }
}
