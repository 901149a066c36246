//! User registry operations

use fleetflow_types::{EngineError, EntityKind, Role};

use crate::model::{id, User};
use crate::store::EntityStore;

/// Register a supervisor or driver account
///
/// Admin accounts are seed-only; no registration path produces one.
pub fn register_user(
    store: &mut EntityStore,
    name: &str,
    login: &str,
    secret: &str,
    role: Role,
) -> Result<User, EngineError> {
    if role == Role::Admin {
        return Err(EngineError::Validation(
            "admin accounts cannot be registered".into(),
        ));
    }
    let login = login.trim();
    let secret = secret.trim();
    if login.is_empty() || secret.is_empty() {
        return Err(EngineError::Validation(
            "a login and a secret are required".into(),
        ));
    }

    let user = User {
        id: id::fresh(id::USER_PREFIX),
        name: name.trim().to_string(),
        login: login.to_string(),
        secret: secret.to_string(),
        role,
    };
    store.users.push(user.clone());
    Ok(user)
}

/// Remove a user account
///
/// Root admin accounts (reserved id prefix) are protected. Deletion does not
/// cascade: applications and assignments naming the user keep the dangling
/// id, and display layers resolve it as a lookup returning `None`.
pub fn delete_user(store: &mut EntityStore, user_id: &str) -> Result<(), EngineError> {
    if id::is_root_admin(user_id) {
        return Err(EngineError::Protected(user_id.to_string()));
    }
    if store.user(user_id).is_none() {
        return Err(EngineError::not_found(EntityKind::User, user_id));
    }
    store.users.retain(|u| u.id != user_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Application;
    use fleetflow_types::ApplicationStatus;

    fn root_admin() -> User {
        User {
            id: "admin-ishwar".to_string(),
            name: "Ishwar Singh".to_string(),
            login: "ishwar".to_string(),
            secret: "ishwar@121".to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_register_supervisor_and_driver() {
        let mut store = EntityStore::default();
        let sup = register_user(&mut store, "Anil", "anil@fleet.com", "pw", Role::Supervisor)
            .unwrap();
        let drv =
            register_user(&mut store, "Rajesh", "rajesh@fleet.com", "pw", Role::Driver).unwrap();
        assert_eq!(sup.role, Role::Supervisor);
        assert_eq!(drv.role, Role::Driver);
        assert!(sup.id.starts_with("user-"));
        assert_eq!(store.users.len(), 2);
    }

    #[test]
    fn test_register_admin_is_rejected() {
        let mut store = EntityStore::default();
        let err = register_user(&mut store, "Eve", "eve", "pw", Role::Admin).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
        assert!(store.users.is_empty());
    }

    #[test]
    fn test_register_requires_login_and_secret() {
        let mut store = EntityStore::default();
        let err = register_user(&mut store, "Anil", "  ", "pw", Role::Supervisor).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
        let err = register_user(&mut store, "Anil", "anil", "", Role::Supervisor).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_root_admin_is_protected() {
        let mut store = EntityStore::default();
        store.users.push(root_admin());
        let err = delete_user(&mut store, "admin-ishwar").unwrap_err();
        assert!(matches!(err, EngineError::Protected(_)));
        assert_eq!(store.users.len(), 1);
    }

    #[test]
    fn test_admin_prefix_is_protected_even_when_absent() {
        let mut store = EntityStore::default();
        let err = delete_user(&mut store, "admin-other").unwrap_err();
        assert!(matches!(err, EngineError::Protected(_)));
    }

    #[test]
    fn test_delete_unknown_user() {
        let mut store = EntityStore::default();
        let err = delete_user(&mut store, "user-missing").unwrap_err();
        assert!(matches!(err, EngineError::NotFound { .. }));
    }

    #[test]
    fn test_delete_leaves_references_dangling() {
        let mut store = EntityStore::default();
        let sup = register_user(&mut store, "Anil", "anil@fleet.com", "pw", Role::Supervisor)
            .unwrap();
        store.applications.push(Application {
            id: "app-1".to_string(),
            job_id: "job-1".to_string(),
            supervisor_id: sup.id.clone(),
            status: ApplicationStatus::Pending,
            requested_driver_id: None,
        });

        delete_user(&mut store, &sup.id).unwrap();

        // No cascade: the application survives and its supervisor no longer
        // resolves.
        assert_eq!(store.applications.len(), 1);
        assert!(store.user(&sup.id).is_none());
    }
}
