//! Fuel station records.

use std::fmt;

use super::GeoPoint;

/// Error returned when a station record fails validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidStation {
    /// The identifier was empty or blank.
    #[error("station id must not be empty")]
    EmptyId,

    /// The price was negative, NaN or infinite.
    #[error("invalid retail price for station {id}: {price}")]
    InvalidPrice { id: String, price: f64 },
}

/// Unique key of a station in the source catalog (the truck stop id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(String);

impl StationId {
    /// Parse an identifier, trimming surrounding whitespace.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(InvalidStation::EmptyId);
        }
        Ok(StationId(trimmed.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fuel station from the price catalog.
///
/// The location is optional: stations whose address could not be geocoded
/// upstream are kept in the catalog but never returned by proximity queries.
///
/// # Examples
///
/// ```
/// use fuel_planner::domain::{GeoPoint, Station, StationId};
///
/// let station = Station::new(StationId::parse("7").unwrap(), "PILOT #7", 3.459)
///     .unwrap()
///     .with_address("I-44, EXIT 283", "Rolla", "MO")
///     .with_location(GeoPoint::new(37.95, -91.77).unwrap());
///
/// assert!(station.is_eligible());
/// assert!(Station::new(StationId::parse("8").unwrap(), "X", -1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    id: StationId,
    name: String,
    address: String,
    city: String,
    state: String,
    retail_price: f64,
    location: Option<GeoPoint>,
}

impl Station {
    /// Create a station with a validated, non-negative price.
    pub fn new(
        id: StationId,
        name: impl Into<String>,
        retail_price: f64,
    ) -> Result<Self, InvalidStation> {
        if !retail_price.is_finite() || retail_price < 0.0 {
            return Err(InvalidStation::InvalidPrice {
                id: id.0,
                price: retail_price,
            });
        }

        Ok(Self {
            id,
            name: name.into(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            retail_price,
            location: None,
        })
    }

    /// Set the free-text address fields.
    pub fn with_address(
        mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        self.address = address.into();
        self.city = city.into();
        self.state = state.into();
        self
    }

    /// Set the geocoded location.
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    pub fn id(&self) -> &StationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Price per unit of fuel.
    pub fn retail_price(&self) -> f64 {
        self.retail_price
    }

    /// Geocoded location, if geocoding succeeded upstream.
    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    /// Whether the station can be returned by proximity queries.
    pub fn is_eligible(&self) -> bool {
        self.location.is_some()
    }
}
