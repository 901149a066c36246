//! Vehicle and vehicle-type registry operations

use fleetflow_types::{EngineError, EntityKind};

use crate::model::{id, Vehicle};
use crate::store::EntityStore;

/// Register a vehicle under a configured type
pub fn register_vehicle(
    store: &mut EntityStore,
    number: &str,
    vehicle_type: &str,
) -> Result<Vehicle, EngineError> {
    let number = number.trim();
    if number.is_empty() {
        return Err(EngineError::Validation(
            "a registration number is required".into(),
        ));
    }
    if !store.has_vehicle_type(vehicle_type) {
        return Err(EngineError::Validation(format!(
            "unknown vehicle type: {vehicle_type}"
        )));
    }

    let vehicle = Vehicle {
        id: id::fresh(id::VEHICLE_PREFIX),
        number: number.to_string(),
        vehicle_type: vehicle_type.to_string(),
    };
    store.vehicles.push(vehicle.clone());
    Ok(vehicle)
}

/// Remove a vehicle; assignments referencing it keep the dangling id
pub fn delete_vehicle(store: &mut EntityStore, vehicle_id: &str) -> Result<(), EngineError> {
    if store.vehicle(vehicle_id).is_none() {
        return Err(EngineError::not_found(EntityKind::Vehicle, vehicle_id));
    }
    store.vehicles.retain(|v| v.id != vehicle_id);
    Ok(())
}

/// Add a vehicle type to the configured set
///
/// A duplicate name (case-sensitive) is a silent no-op.
pub fn add_vehicle_type(store: &mut EntityStore, name: &str) -> Result<(), EngineError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(EngineError::Validation(
            "a vehicle type name is required".into(),
        ));
    }
    if !store.has_vehicle_type(name) {
        store.vehicle_types.push(name.to_string());
    }
    Ok(())
}

/// Remove a vehicle type from the configured set
///
/// Vehicles already registered under the removed type keep it; they simply
/// carry a now-unregistered type value.
pub fn remove_vehicle_type(store: &mut EntityStore, name: &str) -> Result<(), EngineError> {
    if !store.has_vehicle_type(name) {
        return Err(EngineError::not_found(EntityKind::VehicleType, name));
    }
    store.vehicle_types.retain(|t| t != name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Assignment;
    use fleetflow_types::AssignmentStatus;

    fn store_with_types() -> EntityStore {
        let mut store = EntityStore::default();
        store.vehicle_types = vec!["Truck".to_string(), "Van".to_string()];
        store
    }

    #[test]
    fn test_register_vehicle() {
        let mut store = store_with_types();
        let vehicle = register_vehicle(&mut store, " KA-01-1234 ", "Truck").unwrap();
        assert_eq!(vehicle.number, "KA-01-1234");
        assert_eq!(vehicle.vehicle_type, "Truck");
        assert!(vehicle.id.starts_with("veh-"));
    }

    #[test]
    fn test_register_rejects_unknown_type() {
        let mut store = store_with_types();
        let err = register_vehicle(&mut store, "KA-01-1234", "Tractor").unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_type_match_is_case_sensitive() {
        let mut store = store_with_types();
        let err = register_vehicle(&mut store, "KA-01-1234", "truck").unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_register_rejects_blank_number() {
        let mut store = store_with_types();
        let err = register_vehicle(&mut store, "  ", "Truck").unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_add_type_trims_name() {
        let mut store = store_with_types();
        add_vehicle_type(&mut store, " Bus ").unwrap();
        assert!(store.has_vehicle_type("Bus"));
    }

    #[test]
    fn test_add_duplicate_type_is_silent_noop() {
        let mut store = store_with_types();
        add_vehicle_type(&mut store, "Truck").unwrap();
        assert_eq!(store.vehicle_types.len(), 2);
    }

    #[test]
    fn test_add_blank_type_rejected() {
        let mut store = store_with_types();
        let err = add_vehicle_type(&mut store, "   ").unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_remove_type_keeps_existing_vehicles() {
        let mut store = store_with_types();
        register_vehicle(&mut store, "KA-01-1234", "Truck").unwrap();
        remove_vehicle_type(&mut store, "Truck").unwrap();
        assert!(!store.has_vehicle_type("Truck"));
        // The vehicle retains the now-unregistered type value.
        assert_eq!(store.vehicles[0].vehicle_type, "Truck");
    }

    #[test]
    fn test_remove_unregistered_type() {
        let mut store = store_with_types();
        let err = remove_vehicle_type(&mut store, "Bike").unwrap_err();
        assert!(matches!(err, EngineError::NotFound { .. }));
    }

    #[test]
    fn test_delete_vehicle_leaves_assignments_dangling() {
        let mut store = store_with_types();
        let vehicle = register_vehicle(&mut store, "KA-01-1234", "Truck").unwrap();
        store.assignments.push(Assignment {
            id: "assign-1".to_string(),
            job_id: "job-1".to_string(),
            supervisor_id: "sup-1".to_string(),
            driver_id: "driver-1".to_string(),
            vehicle_id: vehicle.id.clone(),
            status: AssignmentStatus::Accepted,
        });

        delete_vehicle(&mut store, &vehicle.id).unwrap();

        assert!(store.vehicle(&vehicle.id).is_none());
        // No cascade: the assignment keeps the id and lookups return None.
        assert_eq!(store.assignments.len(), 1);
        assert_eq!(store.assignments[0].vehicle_id, vehicle.id);
    }

    #[test]
    fn test_delete_unknown_vehicle() {
        let mut store = store_with_types();
        let err = delete_vehicle(&mut store, "veh-missing").unwrap_err();
        assert!(matches!(err, EngineError::NotFound { .. }));
    }
}
