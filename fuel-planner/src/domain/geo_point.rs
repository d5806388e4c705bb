//! Geographic coordinates and the geodesic distance metric.

use std::fmt;

use geo::{Distance, Geodesic, Point};

/// Metres in one statute mile.
pub const METERS_PER_MILE: f64 = 1609.344;

/// Error returned when constructing a [`GeoPoint`] from invalid coordinates.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate ({lat}, {lon}): {reason}")]
pub struct InvalidGeoPoint {
    lat: f64,
    lon: f64,
    reason: &'static str,
}

/// Order of the two axes in a raw coordinate pair.
///
/// Routing providers speaking GeoJSON send `[lon, lat]`; most catalogs and
/// humans write `(lat, lon)`. The producer and the planner agree on this up
/// front, it is never guessed from the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrder {
    /// `[longitude, latitude]`, as in GeoJSON.
    #[default]
    LonLat,
    /// `[latitude, longitude]`.
    LatLon,
}

impl AxisOrder {
    /// Build a point from a raw pair in this axis order.
    pub fn point(self, pair: [f64; 2]) -> Result<GeoPoint, InvalidGeoPoint> {
        match self {
            AxisOrder::LonLat => GeoPoint::from_lon_lat(pair[0], pair[1]),
            AxisOrder::LatLon => GeoPoint::new(pair[0], pair[1]),
        }
    }
}

/// A WGS84 latitude/longitude pair in decimal degrees.
///
/// # Examples
///
/// ```
/// use fuel_planner::domain::GeoPoint;
///
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
/// let east = GeoPoint::new(0.0, 1.0).unwrap();
/// let miles = origin.distance_miles(&east);
/// assert!((miles - 69.17).abs() < 0.1);
///
/// assert!(GeoPoint::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct GeoPoint {
    lat: f64,
    lon: f64,
}

impl GeoPoint {
    /// Create a point from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidGeoPoint> {
        let reject = |reason| Err(InvalidGeoPoint { lat, lon, reason });

        if !lat.is_finite() || !lon.is_finite() {
            return reject("coordinates must be finite");
        }
        if !(-90.0..=90.0).contains(&lat) {
            return reject("latitude must be within [-90, 90]");
        }
        if !(-180.0..=180.0).contains(&lon) {
            return reject("longitude must be within [-180, 180]");
        }

        Ok(Self { lat, lon })
    }

    /// Create a point from GeoJSON-ordered coordinates.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Result<Self, InvalidGeoPoint> {
        Self::new(lat, lon)
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Geodesic distance to `other` on the WGS84 ellipsoid, in miles.
    pub fn distance_miles(&self, other: &GeoPoint) -> f64 {
        Geodesic.distance(self.to_point(), other.to_point()) / METERS_PER_MILE
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl fmt::Debug for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeoPoint({}, {})", self.lat, self.lon)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn accepts_valid_coordinates() {
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(41.8781, -87.6298).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoPoint::new(90.1, 0.0).is_err());
        assert!(GeoPoint::new(-90.1, 0.0).is_err());
        assert!(GeoPoint::new(0.0, 180.1).is_err());
        assert!(GeoPoint::new(0.0, -180.1).is_err());
    }

    #[test]
    fn rejects_non_finite() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn error_display() {
        let err = GeoPoint::new(100.0, 0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid coordinate (100, 0): latitude must be within [-90, 90]"
        );
    }

    #[test]
    fn lon_lat_swaps_axes() {
        let p = GeoPoint::from_lon_lat(-87.6, 41.8).unwrap();
        assert_eq!(p.lat(), 41.8);
        assert_eq!(p.lon(), -87.6);
    }

    #[test]
    fn axis_order_builds_points() {
        let a = AxisOrder::LonLat.point([10.0, 20.0]).unwrap();
        let b = AxisOrder::LatLon.point([20.0, 10.0]).unwrap();
        assert_eq!(a, b);
        // 100 is a fine longitude but not a latitude.
        assert!(AxisOrder::LatLon.point([100.0, 0.0]).is_err());
        assert!(AxisOrder::LonLat.point([100.0, 0.0]).is_ok());
    }

    #[test]
    fn equator_degree_is_about_69_miles() {
        let d = point(0.0, 0.0).distance_miles(&point(0.0, 1.0));
        assert!((d - 69.17).abs() < 0.1, "got {d}");
    }

    #[test]
    fn ten_degrees_of_longitude_at_equator() {
        let d = point(0.0, 0.0).distance_miles(&point(0.0, 10.0));
        assert!((d - 691.7).abs() < 1.0, "got {d}");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = point(35.0, -97.0);
        assert_eq!(p.distance_miles(&p), 0.0);
    }

    #[test]
    fn display_and_debug() {
        let p = point(1.5, -2.25);
        assert_eq!(format!("{p}"), "(1.50000, -2.25000)");
        assert_eq!(format!("{p:?}"), "GeoPoint(1.5, -2.25)");
    }
}
