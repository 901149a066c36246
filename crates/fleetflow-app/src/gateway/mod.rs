//! Role gateways
//!
//! Each gateway exposes the subset of lifecycle engine operations one role
//! may perform, plus the read views that role's dashboard needs. They are
//! thin pass-throughs: one engine call, then the best-effort persistence
//! write.

mod admin;
mod driver;
mod supervisor;

pub use admin::AdminGateway;
pub use driver::DriverGateway;
pub use supervisor::SupervisorGateway;
