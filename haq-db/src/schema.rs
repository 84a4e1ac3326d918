//! SQL schema for the in-memory indicator database.

/// Returns the full SQL schema as a single batch string.
///
/// A single `indicators` table holds every dataset row. The `id` column is
/// assigned in load order and is the only ordering queries rely on.
///
/// Two composite indexes cover the access paths of the dashboard:
/// - `(location_name, year_id)` for the per-country drill-down charts
/// - `(indicator_name, year_id)` for the per-year HAQ Index lookup
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS indicators (
        id INTEGER PRIMARY KEY,
        location_name TEXT NOT NULL,
        year_id TEXT NOT NULL,
        indicator_name TEXT NOT NULL,
        val REAL NOT NULL,
        haq_index_age_type TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_ind_location_year ON indicators(location_name, year_id);
    CREATE INDEX IF NOT EXISTS idx_ind_indicator_year ON indicators(indicator_name, year_id);
    "#
}
