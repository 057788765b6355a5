//! Repository Layer
//!
//! Reads and writes the single persisted snapshot of the todo list.

mod load;
mod snapshot_repo;


pub use load::{settle_load, LoadReport, LoadSource};
pub use snapshot_repo::{SnapshotRepository, WriteOutcome};
