//! Host application metadata.
//!
//! The gate never discovers the running app's version or build number
//! on its own; the host supplies both through this collaborator. The
//! trait exposes only getters, so current values stay read-only and
//! can never be confused with a persisted marker.

/// Read-only source of the host application's version and build number.
///
/// Either value may be unavailable (e.g. release metadata missing from
/// the deployed artifact); the gate degrades the affected operations
/// to no-ops rather than failing.
pub trait HostMetadata {
    /// Current application version, e.g. "1.4.2"
    fn app_version(&self) -> Option<String>;

    /// Current application build number, e.g. "481"
    fn app_build(&self) -> Option<String>;
}

/// Host metadata with fixed values.
///
/// The usual wiring passes the host's own compile-time version:
///
/// ```
/// use versiongate::StaticMetadata;
///
/// let metadata = StaticMetadata::new()
///     .version(env!("CARGO_PKG_VERSION"))
///     .build("481");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticMetadata {
    version: Option<String>,
    build: Option<String>,
}

impl StaticMetadata {
    /// Create metadata with both values unavailable
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application version
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the application build number
    pub fn build(mut self, build: impl Into<String>) -> Self {
        self.build = Some(build.into());
        self
    }
}

impl HostMetadata for StaticMetadata {
    fn app_version(&self) -> Option<String> {
        self.version.clone()
    }

    fn app_build(&self) -> Option<String> {
        self.build.clone()
    }
}
