use serde::Serialize;
use simulation::{Snapshot, SimulationWorld};
use std::sync::{Arc, Mutex, PoisonError};

/// Shared application state handed to every route
#[derive(Clone)]
pub struct AppState {
    pub world: Arc<Mutex<SimulationWorld>>,
}

impl AppState {
    pub fn new(world: SimulationWorld) -> Self {
        Self {
            world: Arc::new(Mutex::new(world)),
        }
    }

    /// Advance the world and project it.
    ///
    /// A poisoned lock is recovered: records are replaced whole on every
    /// step, so they are never left half-written.
    pub fn snapshot(&self) -> Snapshot {
        self.world
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot()
    }
}

// -- Serializable types returned by routes --

#[derive(Serialize, Clone)]
pub struct HealthStatus {
    pub status: &'static str,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}
