//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::SharedCatalog;
use crate::planner::VehicleConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Refreshable station catalog
    pub catalog: SharedCatalog,

    /// Vehicle range and efficiency used for every plan
    pub vehicle: Arc<VehicleConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: SharedCatalog, vehicle: VehicleConfig) -> Self {
        Self {
            catalog,
            vehicle: Arc::new(vehicle),
        }
    }
}
