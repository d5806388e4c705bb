//! Fuel stop planner.
//!
//! Walks a route polyline with a simulated tank, stopping at the nearest
//! catalog station whenever the next waypoint is out of reach, then prices
//! the fuel burned on each leg at the station where it was bought.

mod config;
mod cost;
mod error;
mod route;

pub use config::{InvalidConfig, VehicleConfig};
pub use cost::estimate_cost;
pub use error::PlanError;
pub use route::{RoutePlan, RoutePlanner, plan_route, route_length_miles};

use crate::catalog::StationCatalog;
use crate::domain::{GeoPoint, PlanResult};

/// Plan stops along `route` and price the fuel.
///
/// Returns [`PlanError::NoStationInRange`] when the route cannot be driven
/// with the catalog's stations; no partial plan is produced in that case.
pub fn plan_trip<C: StationCatalog + ?Sized>(
    route: &[GeoPoint],
    config: &VehicleConfig,
    catalog: &C,
) -> Result<PlanResult, PlanError> {
    let plan = RoutePlanner::new(catalog, config).plan(route)?;
    let total_cost = estimate_cost(&plan.stops, config);

    Ok(PlanResult {
        stops: plan.stops,
        miles_after_last_stop: plan.miles_after_last_stop,
        total_cost,
    })
}
