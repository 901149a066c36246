//! The workspace: one owned store plus its snapshot repository
//!
//! Role gateways are handed out from here after a role check. Every gateway
//! mutation triggers a best-effort persistence write: a failed save never
//! rolls back the in-memory state, it is recorded for the caller to surface.

use fleetflow_domain::model::User;
use fleetflow_domain::repository::SnapshotRepository;
use fleetflow_domain::EntityStore;
use fleetflow_types::{AuthError, Role, StoreError};

use crate::gateway::{AdminGateway, DriverGateway, SupervisorGateway};
use crate::seed;

pub struct Workspace<R: SnapshotRepository> {
    store: EntityStore,
    repo: R,
    sync_error: Option<StoreError>,
}

impl<R: SnapshotRepository> Workspace<R> {
    /// Load the persisted store (or start empty) and merge the seed set
    pub fn open(repo: R) -> Result<Self, StoreError> {
        let mut store = repo.load()?.unwrap_or_default();
        seed::apply(&mut store);
        Ok(Self {
            store,
            repo,
            sync_error: None,
        })
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub(crate) fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    /// The last persistence failure, if one happened since the last call
    pub fn take_sync_error(&mut self) -> Option<StoreError> {
        self.sync_error.take()
    }

    /// Write the current state; failures are recorded, not propagated
    pub(crate) fn persist(&mut self) {
        if let Err(e) = self.repo.save(&self.store) {
            self.sync_error = Some(e);
        }
    }

    /// Admin gateway for an authenticated admin
    pub fn admin(&mut self, user: &User) -> Result<AdminGateway<'_, R>, AuthError> {
        if user.role != Role::Admin {
            return Err(AuthError::Forbidden(Role::Admin));
        }
        Ok(AdminGateway::new(self))
    }

    /// Supervisor gateway for an authenticated supervisor
    pub fn supervisor(&mut self, user: &User) -> Result<SupervisorGateway<'_, R>, AuthError> {
        if user.role != Role::Supervisor {
            return Err(AuthError::Forbidden(Role::Supervisor));
        }
        Ok(SupervisorGateway::new(self, user.id.clone()))
    }

    /// Driver gateway for an authenticated driver
    pub fn driver(&mut self, user: &User) -> Result<DriverGateway<'_, R>, AuthError> {
        if user.role != Role::Driver {
            return Err(AuthError::Forbidden(Role::Driver));
        }
        Ok(DriverGateway::new(self, user.id.clone()))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{seeded_user, workspace, FailingRepo, NullRepo};
    use chrono::{NaiveDate, NaiveTime};
    use fleetflow_domain::engine::JobDraft;
    use fleetflow_types::{AuthError, JobStatus};

    fn draft() -> JobDraft {
        JobDraft {
            route_from: "Depot".to_string(),
            route_to: "Harbor".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            slot_count: 1,
            requested_vehicle_type: Some("Truck".to_string()),
        }
    }

    #[test]
    fn test_open_merges_seeds() {
        let ws = workspace(NullRepo);
        assert!(ws.store().user("admin-ishwar").is_some());
        assert!(ws.store().has_vehicle_type("Truck"));
    }

    #[test]
    fn test_role_gates() {
        let mut ws = workspace(NullRepo);
        let admin = seeded_user(&ws, "admin-ishwar");
        let supervisor = seeded_user(&ws, "sup-1");
        let driver = seeded_user(&ws, "driver-1");

        assert!(ws.admin(&admin).is_ok());
        assert!(matches!(
            ws.admin(&supervisor).err(),
            Some(AuthError::Forbidden(_))
        ));
        assert!(matches!(
            ws.supervisor(&driver).err(),
            Some(AuthError::Forbidden(_))
        ));
        assert!(matches!(
            ws.driver(&admin).err(),
            Some(AuthError::Forbidden(_))
        ));
    }

    #[test]
    fn test_persistence_is_best_effort() {
        let mut ws = workspace(FailingRepo);
        let admin = seeded_user(&ws, "admin-ishwar");

        let job = ws.admin(&admin).unwrap().create_job(draft()).unwrap();

        // The mutation stands even though the save failed.
        assert_eq!(ws.store().job(&job.id).unwrap().status, JobStatus::Approved);
        assert!(ws.take_sync_error().is_some());
        assert!(ws.take_sync_error().is_none());
    }
}
