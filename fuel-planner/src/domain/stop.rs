//! Planned refuelling stops.

use std::sync::Arc;

use super::Station;

/// A refuelling stop selected by the planner.
///
/// `distance_from_previous_stop` is a delta: the miles travelled since the
/// previous stop, or since the start of the route for the first stop. It is
/// never cumulative from the route start, so the cost of a stop's leg is
/// computed from this value alone.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    station: Arc<Station>,
    distance_from_previous_stop: f64,
}

impl Stop {
    pub(crate) fn new(station: Arc<Station>, distance_from_previous_stop: f64) -> Self {
        Self {
            station,
            distance_from_previous_stop,
        }
    }

    /// The station where the vehicle refuels.
    pub fn station(&self) -> &Station {
        &self.station
    }

    /// Miles travelled since the previous stop (or the route start).
    pub fn distance_from_previous_stop(&self) -> f64 {
        self.distance_from_previous_stop
    }

    /// Fuel units burned over this stop's leg.
    pub fn fuel_units(&self, fuel_efficiency: f64) -> f64 {
        self.distance_from_previous_stop / fuel_efficiency
    }

    /// Cost of the fuel burned over this stop's leg at this station's price.
    pub fn leg_cost(&self, fuel_efficiency: f64) -> f64 {
        self.fuel_units(fuel_efficiency) * self.station.retail_price()
    }
}

/// Planned stops plus the total fuel cost.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    /// Stops in the order they are reached along the route.
    pub stops: Vec<Stop>,
    /// Miles from the last stop (or the start) to the end of the route.
    pub miles_after_last_stop: f64,
    /// Total fuel cost in the catalog's currency.
    pub total_cost: f64,
}

impl PlanResult {
    /// Sum of all stop leg distances.
    pub fn stop_distance_miles(&self) -> f64 {
        self.stops
            .iter()
            .map(Stop::distance_from_previous_stop)
            .sum()
    }

    /// Whole route length: stop legs plus the final stretch.
    pub fn total_distance_miles(&self) -> f64 {
        self.stop_distance_miles() + self.miles_after_last_stop
    }
}
