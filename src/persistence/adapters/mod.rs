//! Snapshot store adapters.

mod directory;
mod memory;

pub use directory::DirectorySnapshotStore;
pub use memory::InMemorySnapshotStore;
