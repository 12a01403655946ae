//! Shared application state for the counter service.
//!
//! Owns the counter store for the lifetime of the server: built once at startup, cloned
//! cheaply into every handler, dropped when the server exits.

use std::sync::Arc;

use counters_core::{CounterStore, InMemoryCounterStore};

use crate::config::ServiceConfig;
use crate::obs::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    store: Arc<dyn CounterStore>,
    metrics: Arc<ServiceMetrics>,
}

struct AppStateInner {
    cfg: ServiceConfig,
}

impl AppState {
    /// Build state with a fresh in-memory store sized from config.
    pub fn new(cfg: ServiceConfig) -> Self {
        let store = Arc::new(InMemoryCounterStore::with_capacity(
            cfg.store.initial_capacity,
        ));
        Self::with_store(cfg, store)
    }

    pub fn with_store(cfg: ServiceConfig, store: Arc<dyn CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg }),
            store,
            metrics: Arc::new(ServiceMetrics::default()),
        }
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn CounterStore {
        self.store.as_ref()
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.metrics
    }

    pub fn set_draining(&self) {
        self.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.metrics.is_draining()
    }
}
