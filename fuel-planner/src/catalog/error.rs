//! Catalog error types.

/// Errors surfaced by a catalog lookup.
///
/// The planner treats these as opaque: it propagates them without retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    /// Search radius was negative or not a number.
    #[error("invalid search radius: {0}")]
    InvalidRadius(f64),

    /// The backing store could not be queried.
    #[error("catalog unavailable: {message}")]
    Unavailable { message: String },
}

/// Errors that abort loading a catalog file.
///
/// Individual bad rows do not produce this error; they are skipped and
/// counted in the load report.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The file could not be opened.
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV header or framing could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header.
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),

    /// The background load task panicked or was cancelled.
    #[error("catalog load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::InvalidRadius(-1.0);
        assert_eq!(err.to_string(), "invalid search radius: -1");

        let err = CatalogError::Unavailable {
            message: "connection refused".into(),
        };
        assert_eq!(err.to_string(), "catalog unavailable: connection refused");

        let err = IngestError::MissingColumn("Retail Price");
        assert_eq!(err.to_string(), "missing required column: Retail Price");
    }
}
