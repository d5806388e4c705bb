//! Planner error types.

use crate::catalog::CatalogError;
use crate::domain::{GeoPoint, InvalidGeoPoint};

use super::config::InvalidConfig;

/// Error from route planning.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// Input rejected before planning began.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The next waypoint is out of reach and no station is close enough to
    /// refuel. The route cannot be driven with this catalog.
    #[error("no fuel station within {reachable_miles:.1} miles of {location}")]
    NoStationInRange {
        location: GeoPoint,
        reachable_miles: f64,
    },

    /// The catalog failed to answer a query.
    #[error("station catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl PlanError {
    /// Whether the error means the route is infeasible rather than broken.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, PlanError::NoStationInRange { .. })
    }
}

impl From<InvalidConfig> for PlanError {
    fn from(e: InvalidConfig) -> Self {
        PlanError::InvalidInput(e.to_string())
    }
}

impl From<InvalidGeoPoint> for PlanError {
    fn from(e: InvalidGeoPoint) -> Self {
        PlanError::InvalidInput(e.to_string())
    }
}
