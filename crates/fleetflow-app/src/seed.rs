//! Seed data merged into every loaded store
//!
//! The root admin and the starter accounts must exist whatever the snapshot
//! holds, so authentication can never lock everyone out.

use fleetflow_domain::model::User;
use fleetflow_domain::EntityStore;
use fleetflow_types::Role;

/// The fixed account set
pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: "admin-ishwar".to_string(),
            name: "Ishwar Singh".to_string(),
            login: "ishwar".to_string(),
            secret: "ishwar@121".to_string(),
            role: Role::Admin,
        },
        User {
            id: "sup-1".to_string(),
            name: "Supervisor Anil".to_string(),
            login: "anil@fleet.com".to_string(),
            secret: "password".to_string(),
            role: Role::Supervisor,
        },
        User {
            id: "driver-1".to_string(),
            name: "Driver Rajesh".to_string(),
            login: "rajesh@fleet.com".to_string(),
            secret: "password".to_string(),
            role: Role::Driver,
        },
    ]
}

/// The starter vehicle-type set
pub fn initial_vehicle_types() -> Vec<String> {
    ["Truck", "Van", "Bus", "Bike"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Merge the seed set into a freshly loaded store
///
/// Seed users take precedence on id collision; persisted extras are
/// appended. Seed vehicle types apply only when the snapshot carries none.
pub fn apply(store: &mut EntityStore) {
    let mut users = initial_users();
    for user in store.users.drain(..) {
        if !users.iter().any(|s| s.id == user.id) {
            users.push(user);
        }
    }
    store.users = users;

    if store.vehicle_types.is_empty() {
        store.vehicle_types = initial_vehicle_types();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_store_gets_full_seed_set() {
        let mut store = EntityStore::default();
        apply(&mut store);
        assert_eq!(store.users.len(), 3);
        assert!(store.user("admin-ishwar").is_some());
        assert_eq!(store.vehicle_types.len(), 4);
    }

    #[test]
    fn test_seed_wins_on_id_collision() {
        let mut store = EntityStore::default();
        store.users.push(User {
            id: "admin-ishwar".to_string(),
            name: "Tampered".to_string(),
            login: "ishwar".to_string(),
            secret: "hijacked".to_string(),
            role: Role::Admin,
        });
        apply(&mut store);
        assert_eq!(store.users.len(), 3);
        assert_eq!(store.user("admin-ishwar").unwrap().secret, "ishwar@121");
    }

    #[test]
    fn test_persisted_extras_are_appended() {
        let mut store = EntityStore::default();
        store.users.push(User {
            id: "user-extra".to_string(),
            name: "Extra".to_string(),
            login: "extra@fleet.com".to_string(),
            secret: "pw".to_string(),
            role: Role::Driver,
        });
        apply(&mut store);
        assert_eq!(store.users.len(), 4);
        assert!(store.user("user-extra").is_some());
    }

    #[test]
    fn test_persisted_vehicle_types_are_kept() {
        let mut store = EntityStore::default();
        store.vehicle_types = vec!["Rickshaw".to_string()];
        apply(&mut store);
        assert_eq!(store.vehicle_types, vec!["Rickshaw".to_string()]);
    }
}
