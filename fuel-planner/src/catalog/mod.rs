//! Fuel station catalog.
//!
//! Holds the station records loaded from the price CSV and answers the one
//! query the planner needs: "which station is nearest to here, within this
//! many miles?"

mod error;
mod index;
mod loader;
mod shared;

pub use error::{CatalogError, IngestError};
pub use index::{NearestStation, StationCatalog, StationIndex};
pub use loader::{LoadReport, load_csv, load_csv_path};
pub use shared::SharedCatalog;
