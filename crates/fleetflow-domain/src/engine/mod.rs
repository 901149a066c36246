//! Lifecycle engine
//!
//! Pure transition functions over the entity store. Every operation is a
//! total function of (current store, inputs): it either applies one complete
//! mutation or returns one typed error, never a partial state. Role checks
//! and persistence live in the layers above.

pub mod applications;
pub mod assignments;
pub mod jobs;
pub mod users;
pub mod vehicles;

pub use applications::{apply_to_job, approve_application, deny_application};
pub use assignments::advance_assignment;
pub use jobs::{approve_job, create_job, delete_job, deny_job, JobDraft, JobOrigin};
pub use users::{delete_user, register_user};
pub use vehicles::{add_vehicle_type, delete_vehicle, register_vehicle, remove_vehicle_type};
