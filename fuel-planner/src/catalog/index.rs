//! In-memory nearest-station index.
//!
//! A linear scan is plenty for regional catalogs of a few thousand stations.
//! A k-d tree or grid would speed up large catalogs without changing results,
//! provided it keeps the catalog-order tie-break.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use tracing::trace;

use crate::domain::{GeoPoint, Station, StationId};

use super::error::CatalogError;

/// The station found by a proximity query.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStation {
    /// The matched station. Always has a location.
    pub station: Arc<Station>,
    /// Geodesic distance from the query origin, in miles.
    pub distance_miles: f64,
}

/// Trait for answering nearest-station queries.
///
/// This abstraction allows the planner to be tested with mock catalogs and
/// to run against stores other than the in-memory index.
pub trait StationCatalog {
    /// Find the nearest station with known coordinates within `radius_miles`
    /// of `location`.
    ///
    /// Returns `Ok(None)` when no eligible station is in range. Stations
    /// without coordinates are never returned. When several stations are at
    /// exactly the same minimum distance, the first in catalog order wins.
    fn find_nearest(
        &self,
        location: &GeoPoint,
        radius_miles: f64,
    ) -> Result<Option<NearestStation>, CatalogError>;
}

impl<C: StationCatalog + ?Sized> StationCatalog for Arc<C> {
    fn find_nearest(
        &self,
        location: &GeoPoint,
        radius_miles: f64,
    ) -> Result<Option<NearestStation>, CatalogError> {
        (**self).find_nearest(location, radius_miles)
    }
}

/// Immutable station catalog with a linear nearest-neighbour search.
///
/// Station order is the order the stations were supplied in; this order is
/// the tie-break for equidistant stations.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    /// All stations, in catalog order.
    stations: Vec<Arc<Station>>,

    /// Stations with a location, in catalog order.
    eligible: Vec<(GeoPoint, Arc<Station>)>,
}

impl StationIndex {
    /// Build an index from catalog records.
    ///
    /// A record whose id was already seen replaces the earlier record in
    /// place, so the catalog holds one station per id.
    pub fn new(stations: impl IntoIterator<Item = Station>) -> Self {
        let mut ordered: Vec<Arc<Station>> = Vec::new();
        let mut by_id: HashMap<StationId, usize> = HashMap::new();

        for station in stations {
            match by_id.entry(station.id().clone()) {
                Entry::Occupied(slot) => ordered[*slot.get()] = Arc::new(station),
                Entry::Vacant(slot) => {
                    slot.insert(ordered.len());
                    ordered.push(Arc::new(station));
                }
            }
        }

        let eligible = ordered
            .iter()
            .filter_map(|s| s.location().map(|loc| (loc, s.clone())))
            .collect();

        Self {
            stations: ordered,
            eligible,
        }
    }

    /// All stations in catalog order, including ineligible ones.
    pub fn stations(&self) -> &[Arc<Station>] {
        &self.stations
    }

    /// Number of stations in the catalog.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Number of stations with known coordinates.
    pub fn eligible_count(&self) -> usize {
        self.eligible.len()
    }
}

impl StationCatalog for StationIndex {
    fn find_nearest(
        &self,
        location: &GeoPoint,
        radius_miles: f64,
    ) -> Result<Option<NearestStation>, CatalogError> {
        if radius_miles.is_nan() || radius_miles < 0.0 {
            return Err(CatalogError::InvalidRadius(radius_miles));
        }

        let mut best: Option<NearestStation> = None;

        for (station_location, station) in &self.eligible {
            let distance = location.distance_miles(station_location);
            if distance > radius_miles {
                continue;
            }
            // Strict comparison: the first station at the minimum distance is kept.
            if best.as_ref().is_none_or(|b| distance < b.distance_miles) {
                best = Some(NearestStation {
                    station: station.clone(),
                    distance_miles: distance,
                });
            }
        }

        trace!(
            %location,
            radius_miles,
            found = best.as_ref().map(|b| b.station.id().as_str()),
            "nearest station query"
        );

        Ok(best)
    }
}
