//! Counter storage.
//!
//! `CounterStore` is the seam between the HTTP layer and the mapping. The in-memory
//! implementation keeps `name -> value` in a `DashMap`; every operation runs under the
//! shard lock of its key, so create/increment/get on one name never interleave.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::error::{CounterError, Result};
use crate::model::Counter;

pub trait CounterStore: Send + Sync {
    /// Insert a new counter at 0. Fails with `AlreadyExists` without touching the old one.
    fn create(&self, name: &str) -> Result<Counter>;
    /// Add exactly 1. Fails with `NotFound` and creates nothing if the name is absent.
    fn increment(&self, name: &str) -> Result<Counter>;
    fn get(&self, name: &str) -> Result<Counter>;
    /// Number of live counters.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime store. Nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryCounterStore {
    counters: DashMap<String, u64>,
}

impl InMemoryCounterStore {
    pub fn new() -> Self {
        Self {
            counters: DashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counters: DashMap::with_capacity(capacity),
        }
    }
}

impl CounterStore for InMemoryCounterStore {
    fn create(&self, name: &str) -> Result<Counter> {
        match self.counters.entry(name.to_string()) {
            Entry::Occupied(_) => Err(CounterError::AlreadyExists(name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(0);
                tracing::debug!(counter = %name, "counter created");
                Ok(Counter::new(name, 0))
            }
        }
    }

    fn increment(&self, name: &str) -> Result<Counter> {
        let mut value = self
            .counters
            .get_mut(name)
            .ok_or_else(|| CounterError::NotFound(name.to_string()))?;

        *value = value
            .checked_add(1)
            .ok_or_else(|| CounterError::Internal(format!("counter {name} overflowed")))?;
        Ok(Counter::new(name, *value))
    }

    fn get(&self, name: &str) -> Result<Counter> {
        self.counters
            .get(name)
            .map(|v| Counter::new(name, *v))
            .ok_or_else(|| CounterError::NotFound(name.to_string()))
    }

    fn len(&self) -> usize {
        self.counters.len()
    }
}
