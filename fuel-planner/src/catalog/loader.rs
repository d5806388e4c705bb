//! Fuel price CSV ingestion.
//!
//! Reads the truck stop price export into validated [`Station`] records.
//! Geocoding is not done here: coordinates come from optional `Latitude`
//! and `Longitude` columns filled in by an upstream geocoding job. Rows
//! without usable coordinates are kept but never matched by proximity.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::domain::{GeoPoint, Station, StationId};

use super::error::IngestError;

const COL_ID: &str = "OPIS Truckstop ID";
const COL_NAME: &str = "Truckstop Name";
const COL_ADDRESS: &str = "Address";
const COL_CITY: &str = "City";
const COL_STATE: &str = "State";
const COL_PRICE: &str = "Retail Price";
const COL_LAT: &str = "Latitude";
const COL_LON: &str = "Longitude";

/// Outcome of loading a catalog file.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Valid station rows, in file order. Ids may repeat; the index keeps
    /// the last row per id.
    pub stations: Vec<Station>,
    /// Rows rejected because of a bad id, price or framing.
    pub skipped: usize,
    /// Valid rows without usable coordinates.
    pub ungeocoded: usize,
}

/// Column positions resolved from the header row.
struct Columns {
    id: usize,
    name: usize,
    price: usize,
    address: Option<usize>,
    city: Option<usize>,
    state: Option<usize>,
    lat: Option<usize>,
    lon: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self, IngestError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &'static str| find(name).ok_or(IngestError::MissingColumn(name));

        Ok(Self {
            id: require(COL_ID)?,
            name: require(COL_NAME)?,
            price: require(COL_PRICE)?,
            address: find(COL_ADDRESS),
            city: find(COL_CITY),
            state: find(COL_STATE),
            lat: find(COL_LAT),
            lon: find(COL_LON),
        })
    }
}

/// Load stations from a CSV file on disk.
pub fn load_csv_path(path: impl AsRef<Path>) -> Result<LoadReport, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_csv(file)
}

/// Load stations from CSV data with a header row.
///
/// Fails only when the header is unreadable or lacks a required column.
/// Individual bad rows are logged and counted in [`LoadReport::skipped`].
pub fn load_csv<R: Read>(reader: R) -> Result<LoadReport, IngestError> {
    let mut reader = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(reader.headers()?)?;
    let mut report = LoadReport::default();

    for (idx, row) in reader.records().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        let record = match row {
            Ok(record) => record,
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => {
                warn!(line, error = %e, "skipping malformed catalog row");
                report.skipped += 1;
                continue;
            }
        };

        match parse_row(&record, &columns) {
            Ok(station) => {
                if !station.is_eligible() {
                    debug!(line, id = %station.id(), "station has no usable coordinates");
                    report.ungeocoded += 1;
                }
                report.stations.push(station);
            }
            Err(reason) => {
                warn!(line, %reason, "skipping invalid catalog row");
                report.skipped += 1;
            }
        }
    }

    Ok(report)
}

fn parse_row(record: &StringRecord, columns: &Columns) -> Result<Station, String> {
    let field = |idx: usize| record.get(idx).unwrap_or("");
    let optional = |idx: Option<usize>| idx.map(field).unwrap_or("");

    let id = StationId::parse(field(columns.id)).map_err(|e| e.to_string())?;

    let raw_price = field(columns.price);
    let price: f64 = raw_price
        .parse()
        .map_err(|_| format!("unparseable retail price {raw_price:?} for station {id}"))?;

    let station = Station::new(id, field(columns.name), price)
        .map_err(|e| e.to_string())?
        .with_address(
            optional(columns.address),
            optional(columns.city),
            optional(columns.state),
        );

    Ok(match parse_location(optional(columns.lat), optional(columns.lon)) {
        Some(location) => station.with_location(location),
        None => station,
    })
}

/// Both coordinates must be present and valid; anything else counts as a
/// geocoding failure.
fn parse_location(lat: &str, lon: &str) -> Option<GeoPoint> {
    let lat: f64 = lat.parse().ok()?;
    let lon: f64 = lon.parse().ok()?;
    GeoPoint::new(lat, lon).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    const HEADER: &str =
        "OPIS Truckstop ID,Truckstop Name,Address,City,State,Rack ID,Retail Price,Latitude,Longitude";

    fn csv(rows: &[&str]) -> String {
        let mut out = String::from(HEADER);
        for row in rows {
            out.push('\n');
            out.push_str(row);
        }
        out
    }

    #[test]
    fn loads_geocoded_rows() {
        let data = csv(&[
            "7,WOODSHED OF BIG CABIN #7,\"I-44, EXIT 283 & US-69\",Big Cabin,OK,307,3.00733,36.54,-95.22",
            "44,KWIK TRIP #796,I-94 & SR-46,Tomah,WI,1,3.18,43.98,-90.50",
        ]);

        let report = load_csv(data.as_bytes()).unwrap();

        assert_eq!(report.stations.len(), 2);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.ungeocoded, 0);

        let first = &report.stations[0];
        assert_eq!(first.id().as_str(), "7");
        assert_eq!(first.name(), "WOODSHED OF BIG CABIN #7");
        assert_eq!(first.address(), "I-44, EXIT 283 & US-69");
        assert_eq!(first.city(), "Big Cabin");
        assert_eq!(first.state(), "OK");
        assert_eq!(first.retail_price(), 3.00733);
        assert_eq!(first.location(), Some(GeoPoint::new(36.54, -95.22).unwrap()));
    }

    #[test]
    fn missing_coordinates_kept_but_ineligible() {
        let data = csv(&[
            "1,A,Addr,City,TX,1,3.10,,",
            "2,B,Addr,City,TX,1,3.20,95.0,10.0",
            "3,C,Addr,City,TX,1,3.30,31.0,",
        ]);

        let report = load_csv(data.as_bytes()).unwrap();

        assert_eq!(report.stations.len(), 3);
        assert_eq!(report.ungeocoded, 3);
        assert!(report.stations.iter().all(|s| !s.is_eligible()));
    }

    #[test]
    fn coordinate_columns_are_optional() {
        let data = "OPIS Truckstop ID,Truckstop Name,Retail Price\n9,NINE,2.99\n";

        let report = load_csv(data.as_bytes()).unwrap();

        assert_eq!(report.stations.len(), 1);
        assert_eq!(report.ungeocoded, 1);
        assert_eq!(report.stations[0].city(), "");
    }

    #[test]
    fn skips_bad_price_and_id() {
        let data = csv(&[
            "1,A,Addr,City,TX,1,not-a-price,30.0,-97.0",
            "2,B,Addr,City,TX,1,-1.0,30.0,-97.0",
            ",C,Addr,City,TX,1,3.0,30.0,-97.0",
            "4,D,Addr,City,TX,1,3.0,30.0,-97.0",
        ]);

        let report = load_csv(data.as_bytes()).unwrap();

        assert_eq!(report.skipped, 3);
        assert_eq!(report.stations.len(), 1);
        assert_eq!(report.stations[0].id().as_str(), "4");
    }

    #[test]
    fn short_rows_are_skipped() {
        let data = csv(&["1,A", "2,B,Addr,City,TX,1,3.0,30.0,-97.0"]);

        let report = load_csv(data.as_bytes()).unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(report.stations.len(), 1);
    }

    #[test]
    fn missing_required_column_fails() {
        let data = "OPIS Truckstop ID,Truckstop Name,Address\n1,A,B\n";

        let err = load_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn("Retail Price")));
    }

    #[test]
    fn repeated_ids_are_all_reported() {
        let data = csv(&[
            "1,A,Addr,City,TX,1,3.0,30.0,-97.0",
            "1,A,Addr,City,TX,1,3.5,30.0,-97.0",
        ]);

        let report = load_csv(data.as_bytes()).unwrap();
        assert_eq!(report.stations.len(), 2);
    }

    #[test]
    fn loads_from_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        let mut file = File::create(&path).unwrap();
        write!(file, "{}", csv(&["1,A,Addr,City,TX,1,3.0,30.0,-97.0"])).unwrap();

        let report = load_csv_path(&path).unwrap();
        assert_eq!(report.stations.len(), 1);
    }

    #[test]
    fn missing_file_fails() {
        let err = load_csv_path("/nonexistent/prices.csv").unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
        assert!(err.to_string().starts_with("failed to open /nonexistent/prices.csv"));
    }
}
