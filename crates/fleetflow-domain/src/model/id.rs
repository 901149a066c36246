//! Entity id generation
//!
//! Ids are plain strings of the form `<prefix><uuid>`. The prefix encodes the
//! entity family so ids stay recognizable in listings and snapshots. The
//! `admin-` prefix is reserved: it is only ever introduced by seed data and
//! marks accounts that cannot be removed.

use uuid::Uuid;

pub const JOB_PREFIX: &str = "job-";
pub const APPLICATION_PREFIX: &str = "app-";
pub const ASSIGNMENT_PREFIX: &str = "assign-";
pub const VEHICLE_PREFIX: &str = "veh-";
pub const USER_PREFIX: &str = "user-";

/// Reserved prefix for root admin accounts
pub const ROOT_ADMIN_PREFIX: &str = "admin-";

/// Generate a fresh id under the given prefix
pub fn fresh(prefix: &str) -> String {
    format!("{}{}", prefix, Uuid::new_v4())
}

/// Whether an id denotes a protected root admin account
pub fn is_root_admin(id: &str) -> bool {
    id.starts_with(ROOT_ADMIN_PREFIX)
}
