use super::MarkerStore;
use crate::core::Result;
use std::collections::HashMap;

/// In-memory marker store backed by a `HashMap`.
///
/// Markers live only as long as the store value itself, which makes
/// this the natural backend for tests and for hosts that want
/// run-once-per-process semantics instead of durable markers.
#[derive(Debug, Default)]
pub struct InMemoryMarkerStore {
    markers: HashMap<String, String>,
}

impl InMemoryMarkerStore {
    pub fn new() -> Self {
        Self {
            markers: HashMap::new(),
        }
    }

    /// Number of markers currently set
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

impl MarkerStore for InMemoryMarkerStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.markers.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.markers.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.markers.remove(key);
        Ok(())
    }
}
