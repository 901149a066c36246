//! Repository trait definitions for data persistence

use crate::store::EntityStore;
use fleetflow_types::StoreError;

/// Repository for wholesale entity store snapshots
///
/// The snapshot is opaque and unversioned: `save` replaces everything,
/// `load` returns everything or nothing. There is no partial-write
/// visibility at this boundary.
pub trait SnapshotRepository {
    /// Load the persisted store, if any exists
    fn load(&self) -> Result<Option<EntityStore>, StoreError>;

    /// Persist the whole store, replacing any previous snapshot
    fn save(&self, store: &EntityStore) -> Result<(), StoreError>;
}
