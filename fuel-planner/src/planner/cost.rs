//! Fuel cost estimation over planned stops.

use crate::domain::Stop;

use super::config::VehicleConfig;

/// Total fuel cost for a completed stop sequence.
///
/// Each stop's `distance_from_previous_stop` is the delta since the previous
/// stop, so a leg's fuel is priced from that value alone, at the price of
/// the station that ends the leg. An empty sequence costs nothing.
pub fn estimate_cost(stops: &[Stop], config: &VehicleConfig) -> f64 {
    let efficiency = config.fuel_efficiency();
    stops.iter().map(|stop| stop.leg_cost(efficiency)).sum()
}
