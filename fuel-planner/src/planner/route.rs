//! Greedy range-constrained walk over a route polyline.

use tracing::{debug, warn};

use crate::catalog::StationCatalog;
use crate::domain::{GeoPoint, Stop};

use super::config::VehicleConfig;
use super::error::PlanError;

/// Stops chosen along a route.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Stops in the order they are reached.
    pub stops: Vec<Stop>,

    /// Miles from the last stop (or the start) to the end of the route.
    /// Together with the stop distances this adds up to the route length.
    pub miles_after_last_stop: f64,
}

/// Fuel stop planner over a station catalog.
///
/// The planner holds no state between calls; the catalog is only read.
pub struct RoutePlanner<'a, C: StationCatalog + ?Sized> {
    catalog: &'a C,
    config: &'a VehicleConfig,
}

impl<'a, C: StationCatalog + ?Sized> RoutePlanner<'a, C> {
    /// Create a new planner.
    pub fn new(catalog: &'a C, config: &'a VehicleConfig) -> Self {
        Self { catalog, config }
    }

    /// Walk the route and choose refuelling stops.
    ///
    /// For each leg, if the remaining fuel cannot cover it, the planner
    /// refuels at the nearest station reachable from the current waypoint
    /// before driving the leg. Refuelling is modelled at the waypoint rather
    /// than at a point along the leg, so stations are matched to waypoints.
    ///
    /// Fails with [`PlanError::NoStationInRange`] as soon as a required stop
    /// has no station in reach, abandoning the rest of the route.
    pub fn plan(&self, route: &[GeoPoint]) -> Result<RoutePlan, PlanError> {
        let Some((&start, rest)) = route.split_first() else {
            return Err(PlanError::InvalidInput(
                "route must contain at least one point".to_string(),
            ));
        };

        let efficiency = self.config.fuel_efficiency();
        let tank_capacity = self.config.tank_capacity_units();

        let mut current_fuel = tank_capacity;
        let mut current_location = start;
        let mut distance_since_last_stop = 0.0;
        let mut stops: Vec<Stop> = Vec::new();

        for &next in rest {
            let leg_distance = current_location.distance_miles(&next);
            distance_since_last_stop += leg_distance;

            let reachable_miles = current_fuel * efficiency;
            if leg_distance > reachable_miles {
                // An over-long leg after a refill leaves the tank below empty.
                // No station can be reached from there, not even one at the
                // waypoint itself.
                let nearest = if reachable_miles < 0.0 {
                    None
                } else {
                    self.catalog.find_nearest(&current_location, reachable_miles)?
                };

                let Some(nearest) = nearest else {
                    let reachable_miles = reachable_miles.max(0.0);
                    warn!(
                        location = %current_location,
                        reachable_miles,
                        leg_distance,
                        stops_so_far = stops.len(),
                        "no fuel station in range"
                    );
                    return Err(PlanError::NoStationInRange {
                        location: current_location,
                        reachable_miles,
                    });
                };

                debug!(
                    station = %nearest.station.id(),
                    price = nearest.station.retail_price(),
                    detour_miles = nearest.distance_miles,
                    distance_since_last_stop,
                    "refuelling stop"
                );

                stops.push(Stop::new(nearest.station, distance_since_last_stop));
                current_fuel = tank_capacity;
                distance_since_last_stop = 0.0;
            }

            // The walk resumes from the waypoint whether or not we stopped.
            current_fuel -= leg_distance / efficiency;
            current_location = next;
        }

        debug!(
            waypoints = route.len(),
            stops = stops.len(),
            miles_after_last_stop = distance_since_last_stop,
            "planned fuel stops"
        );

        Ok(RoutePlan {
            stops,
            miles_after_last_stop: distance_since_last_stop,
        })
    }
}

/// Plan refuelling stops along `route`.
///
/// A single-point route needs no stops. An empty route is rejected.
pub fn plan_route<C: StationCatalog + ?Sized>(
    route: &[GeoPoint],
    config: &VehicleConfig,
    catalog: &C,
) -> Result<Vec<Stop>, PlanError> {
    RoutePlanner::new(catalog, config)
        .plan(route)
        .map(|plan| plan.stops)
}

/// Geodesic length of a polyline, in miles.
pub fn route_length_miles(route: &[GeoPoint]) -> f64 {
    route
        .windows(2)
        .map(|pair| pair[0].distance_miles(&pair[1]))
        .sum()
}

#[cfg(test)]
#[path = "route_tests.rs"]
mod tests;
