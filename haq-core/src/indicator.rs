//! Fixed indicator names, drill-down years and display labels.
//!
//! The dataset mixes the HAQ Index itself with the cause-specific indicators
//! it is built from. The map, gauges and pie chart read the HAQ Index rows;
//! the bar and dumbbell charts read the cause-specific rows.

/// Indicator name of the Healthcare Access and Quality Index rows.
pub const HAQ_INDEX: &str = "HAQ Index";

/// Earlier year of every drill-down comparison.
pub const BASELINE_YEAR: &str = "1990";

/// Later year of every drill-down comparison, and the year the pie and bar
/// charts are pinned to.
pub const LATEST_YEAR: &str = "2019";

/// Country whose drill-down is shown before the first map click.
pub const DEFAULT_COUNTRY: &str = "India";

/// Number of indicators kept in the dumbbell comparison.
pub const TOP_INDICATOR_COUNT: usize = 5;

/// Cancer indicators shown in the bar chart, paired with their short label.
pub const CANCER_INDICATORS: [(&str, &str); 5] = [
    ("Breast cancer", "Breast"),
    ("Cervical cancer", "Cervical"),
    ("Uterine cancer", "Uterine"),
    ("Colon and rectum cancer", "Colon & Rectum"),
    ("Testicular cancer", "Testicular"),
];

/// True for the five indicators of the cancer statistics chart.
pub fn is_cancer_indicator(indicator_name: &str) -> bool {
    CANCER_INDICATORS
        .iter()
        .any(|(name, _)| *name == indicator_name)
}

/// Short display label for an indicator; unknown names are returned as-is.
pub fn short_label(indicator_name: &str) -> &str {
    CANCER_INDICATORS
        .iter()
        .find(|(name, _)| *name == indicator_name)
        .map(|(_, label)| *label)
        .unwrap_or(indicator_name)
}
