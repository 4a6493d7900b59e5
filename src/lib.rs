// ============================================================================
// versiongate Library
// ============================================================================

pub mod core;
pub mod gate;
pub mod metadata;
pub mod storage;

// Re-export main types for convenience
pub use crate::core::{Result, StorageError, numeric_compare};
pub use crate::gate::{Marker, MigrationGate};
pub use crate::metadata::{HostMetadata, StaticMetadata};
pub use crate::storage::{FileMarkerStore, InMemoryMarkerStore, MarkerStore};
