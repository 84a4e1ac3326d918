//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be exported as JSON, and
//! `PartialEq` so the dashboard can pass them to components as props.

use haq_core::AgeType;
use serde::Serialize;

/// Smallest and largest `val` in the whole dataset, across every indicator
/// and year. This is the domain of the map color scale.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ValueExtent {
    pub min: f64,
    pub max: f64,
}

/// Summed HAQ Index of one life stage for one country and year.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgeTypeTotal {
    pub age_type: AgeType,
    pub value: f64,
}

/// One indicator row for the cancer statistics chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndicatorValue {
    /// Full dataset name (e.g. "Colon and rectum cancer").
    pub indicator_name: String,
    /// Short display label (e.g. "Colon & Rectum").
    pub label: String,
    pub value: f64,
}

/// An indicator's value in the baseline and latest years.
///
/// A year without a record for the indicator contributes 0.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IndicatorComparison {
    pub indicator_name: String,
    pub start_value: f64,
    pub end_value: f64,
}

impl IndicatorComparison {
    /// Combined magnitude used for ranking.
    pub fn total(&self) -> f64 {
        self.start_value + self.end_value
    }
}

/// HAQ Index value shown on a gauge.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GaugeReading {
    pub year: &'static str,
    /// First matching HAQ Index record, or 0 when none exists.
    pub value: f64,
}

/// Everything a country click redraws, gathered in one pass.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DrillDown {
    pub country: String,
    pub baseline: GaugeReading,
    pub latest: GaugeReading,
    /// One entry per [`AgeType`], in legend order, zeros included.
    pub age_types: Vec<AgeTypeTotal>,
    pub cancer: Vec<IndicatorValue>,
    /// Top-ranked comparisons; empty means the dumbbell shows a placeholder.
    pub top_indicators: Vec<IndicatorComparison>,
}
