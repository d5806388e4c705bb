//! Domain types for the fuel stop planner.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them (the planner, the cost estimator) can trust their validity.

mod geo_point;
mod station;
mod stop;

pub use geo_point::{AxisOrder, GeoPoint, InvalidGeoPoint, METERS_PER_MILE};
pub use station::{InvalidStation, Station, StationId};
pub use stop::{PlanResult, Stop};
