//! Infrastructure layer - persistence implementations

pub mod persistence;

pub use persistence::FileSnapshotRepository;
