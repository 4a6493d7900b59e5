//! Version-gated execution of one-time migration and update blocks.

use crate::core::numeric_compare;
use crate::metadata::HostMetadata;
use crate::storage::MarkerStore;
use log::{debug, warn};
use std::cmp::Ordering;

/// Persisted marker slots owned by the gate.
///
/// Each slot records the version or build string for which its block
/// last ran, under a fixed storage key. Current app version/build are
/// not markers; they come from [`HostMetadata`] and have no slot here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Highest version a one-time migration block has run for
    LastVersion,
    /// App version the update block last ran for
    LastAppVersion,
    /// Highest build a one-time migration block has run for
    LastBuild,
    /// App build the update block last ran for
    LastAppBuild,
}

impl Marker {
    pub const ALL: [Marker; 4] = [
        Marker::LastVersion,
        Marker::LastAppVersion,
        Marker::LastBuild,
        Marker::LastAppBuild,
    ];

    /// Storage key the marker is persisted under
    pub fn key(self) -> &'static str {
        match self {
            Marker::LastVersion => "Migration.lastVersion",
            Marker::LastAppVersion => "Migration.lastAppVersion",
            Marker::LastBuild => "Migration.lastBuild",
            Marker::LastAppBuild => "Migration.lastAppBuild",
        }
    }
}

/// Runs migration and update blocks when the app's version or build
/// number increases.
///
/// The gate compares the current version/build supplied by the host
/// against persisted markers and invokes the given block at most once
/// per threshold (migrations) or once per change (updates). Storage
/// failures are logged and swallowed; no operation returns an error.
///
/// # Examples
///
/// ```
/// use versiongate::{InMemoryMarkerStore, MigrationGate, StaticMetadata};
///
/// let metadata = StaticMetadata::new().version("1.2").build("48");
/// let mut gate = MigrationGate::new(InMemoryMarkerStore::new(), metadata);
///
/// gate.migrate_to_version("1.2", || {
///     // one-time data migration for 1.2
/// });
///
/// gate.application_update(|| {
///     // runs on every version change, including first launch
/// });
/// ```
pub struct MigrationGate<S, M> {
    store: S,
    metadata: M,
}

impl<S: MarkerStore, M: HostMetadata> MigrationGate<S, M> {
    /// Create a gate over an injected marker store and host metadata
    pub fn new(store: S, metadata: M) -> Self {
        Self { store, metadata }
    }

    /// Access the underlying marker store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the gate and return the marker store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Executes a block of code once for a specific version number and
    /// remembers that version as the latest migration done.
    ///
    /// The block runs when `version` is above the last migrated version
    /// and not above the current app version, under numeric-aware
    /// ordering. An unavailable current version compares as empty, so a
    /// non-empty target never qualifies.
    pub fn migrate_to_version(&mut self, version: &str, block: impl FnOnce()) {
        let current = self.metadata.app_version();
        self.run_migration(version, Marker::LastVersion, current, block);
    }

    /// Executes a block of code once for a specific build number and
    /// remembers that build as the latest migration done.
    ///
    /// Same contract as [`migrate_to_version`](Self::migrate_to_version),
    /// keyed on the build number axis.
    pub fn migrate_to_build(&mut self, build: &str, block: impl FnOnce()) {
        let current = self.metadata.app_build();
        self.run_migration(build, Marker::LastBuild, current, block);
    }

    /// Executes a block of code every time the application version
    /// changes, including the first launch.
    ///
    /// Does nothing when the current version is unavailable.
    pub fn application_update(&mut self, block: impl FnOnce()) {
        let current = self.metadata.app_version();
        self.run_update(Marker::LastAppVersion, current, block);
    }

    /// Executes a block of code every time the application build number
    /// changes, including the first launch.
    ///
    /// Does nothing when the current build number is unavailable.
    pub fn build_number_update(&mut self, block: impl FnOnce()) {
        let current = self.metadata.app_build();
        self.run_update(Marker::LastAppBuild, current, block);
    }

    /// Clears every persisted marker, so all blocks run again from the
    /// beginning.
    pub fn reset(&mut self) {
        for marker in Marker::ALL {
            self.clear(marker);
        }
    }

    fn run_migration(
        &mut self,
        target: &str,
        marker: Marker,
        current: Option<String>,
        block: impl FnOnce(),
    ) {
        let last = self.last_recorded(marker).unwrap_or_default();
        let current = current.unwrap_or_default();
        // target > last && target <= current
        if numeric_compare(target, &last) == Ordering::Greater
            && numeric_compare(target, &current) != Ordering::Greater
        {
            block();
            debug!("running migration block for {}", target);
            self.record(marker, target);
        }
    }

    fn run_update(&mut self, marker: Marker, current: Option<String>, block: impl FnOnce()) {
        let Some(current) = current else {
            return;
        };
        if self.last_recorded(marker).as_deref() != Some(current.as_str()) {
            block();
            debug!("running update block for {}", current);
            self.record(marker, &current);
        }
    }

    fn last_recorded(&self, marker: Marker) -> Option<String> {
        match self.store.get(marker.key()) {
            Ok(value) => value,
            Err(e) => {
                warn!("failed to read marker {}: {}", marker.key(), e);
                None
            }
        }
    }

    fn record(&mut self, marker: Marker, value: &str) {
        if let Err(e) = self.store.set(marker.key(), value) {
            warn!("failed to persist marker {}: {}", marker.key(), e);
        }
    }

    fn clear(&mut self, marker: Marker) {
        if let Err(e) = self.store.delete(marker.key()) {
            warn!("failed to clear marker {}: {}", marker.key(), e);
        }
    }
}
