//! Per-collection lock table
//!
//! Write and delete are mutually exclusive within a collection; operations
//! on different collections never contend. Entries are created lazily on
//! first use and live for the driver's lifetime.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Map from collection name to its lock handle.
///
/// The table's own mutex guards only the lookup-or-create step, so two
/// threads racing on a new collection name end up sharing one mutex
/// instead of each minting their own.
#[derive(Debug, Default)]
pub(crate) struct LockTable {
    inner: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl LockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mutex guarding `collection`, creating it on first use.
    pub fn collection(&self, collection: &str) -> Arc<Mutex<()>> {
        let mut table = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(lock) = table.get(collection) {
            return Arc::clone(lock);
        }

        let lock = Arc::new(Mutex::new(()));
        table.insert(collection.to_string(), Arc::clone(&lock));
        lock
    }
}
