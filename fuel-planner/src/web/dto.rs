//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{AxisOrder, PlanResult, Station, Stop};

/// Request to plan fuel stops along a route.
#[derive(Debug, Deserialize)]
pub struct PlanFuelRequest {
    /// Route polyline as coordinate pairs
    pub route: Vec<[f64; 2]>,

    /// Axis order of the pairs (GeoJSON `[lon, lat]` unless stated)
    #[serde(default)]
    pub axis_order: AxisOrder,
}

/// A station as returned by the API.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub truckstop_id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub retail_price: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl StationResult {
    /// Build from a domain station.
    pub fn from_station(station: &Station) -> Self {
        let location = station.location();
        Self {
            truckstop_id: station.id().to_string(),
            name: station.name().to_string(),
            address: station.address().to_string(),
            city: station.city().to_string(),
            state: station.state().to_string(),
            retail_price: station.retail_price(),
            latitude: location.map(|p| p.lat()),
            longitude: location.map(|p| p.lon()),
        }
    }
}

/// A planned fuel stop.
#[derive(Debug, Serialize)]
pub struct FuelStopResult {
    #[serde(flatten)]
    pub station: StationResult,

    /// Miles since the previous stop (or the route start)
    pub distance_from_previous_stop: f64,
}

impl FuelStopResult {
    /// Build from a domain stop.
    pub fn from_stop(stop: &Stop) -> Self {
        Self {
            station: StationResult::from_station(stop.station()),
            distance_from_previous_stop: stop.distance_from_previous_stop(),
        }
    }
}

/// Response for a fuel plan.
#[derive(Debug, Serialize)]
pub struct PlanFuelResponse {
    /// Stops in route order
    pub fuel_stops: Vec<FuelStopResult>,

    /// Total fuel cost; absent when the route is infeasible
    pub total_cost: Option<f64>,

    /// Total route length in miles
    pub total_distance_miles: Option<f64>,

    /// Why no plan could be produced, if so
    pub warning: Option<String>,
}

impl PlanFuelResponse {
    /// Build from a successful plan.
    pub fn from_plan(result: &PlanResult) -> Self {
        Self {
            fuel_stops: result.stops.iter().map(FuelStopResult::from_stop).collect(),
            total_cost: Some(result.total_cost),
            total_distance_miles: Some(result.total_distance_miles()),
            warning: None,
        }
    }

    /// Response for a route that cannot be driven with the catalog.
    pub fn infeasible(warning: String) -> Self {
        Self {
            fuel_stops: Vec::new(),
            total_cost: None,
            total_distance_miles: None,
            warning: Some(warning),
        }
    }
}

/// Query for the nearest station.
#[derive(Debug, Deserialize)]
pub struct NearestStationRequest {
    pub lat: f64,
    pub lon: f64,

    /// Search radius in miles (defaults to the vehicle's range)
    pub radius: Option<f64>,
}

/// Response for a nearest-station lookup.
#[derive(Debug, Serialize)]
pub struct NearestStationResponse {
    pub station: StationResult,
    pub distance_miles: f64,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
