/// Error types for the HAQ core library
use thiserror::Error;

/// Main error type for dataset and boundary file handling
#[derive(Error, Debug)]
pub enum HaqError {
    /// The dataset CSV could not be read
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// A required dataset column is absent from the header row
    #[error("Dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    /// The boundary file is not valid GeoJSON
    #[error("Failed to parse GeoJSON: {0}")]
    GeoJsonParse(#[from] geojson::Error),

    /// The boundary file parsed, but its root is not a FeatureCollection
    #[error("Boundary file must be a FeatureCollection, found a {0}")]
    NotFeatureCollection(&'static str),

    /// Gzip decoding failed
    #[error("Failed to decompress data: {0}")]
    Decompression(#[from] std::io::Error),
}

/// Type alias for Results using HaqError
pub type Result<T> = std::result::Result<T, HaqError>;
