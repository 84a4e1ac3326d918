//! Core types for the HAQ (Healthcare Access and Quality) dashboard.
//!
//! This crate provides:
//! - `record`: the indicator record type and the dataset CSV parser
//! - `geo`: world boundary features parsed from a GeoJSON `FeatureCollection`
//! - `indicator`: fixed indicator names, drill-down years and display labels
//! - `compression`: gzip decoding for `.gz` data files
//! - `error`: the crate's error type

pub mod compression;
pub mod error;
pub mod geo;
pub mod indicator;
pub mod record;

pub use error::{HaqError, Result};
pub use geo::{GeoFeature, Ring};
pub use record::{AgeType, IndicatorRecord};
