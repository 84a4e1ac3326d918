//! Typed query methods for the dashboard's charts.
//!
//! # Duplicates
//!
//! The dataset is expected to hold one HAQ Index row per location and year,
//! but nothing enforces it. Two resolutions coexist and are kept as-is:
//! - [`query_haq_lookup`](Database::query_haq_lookup) lets the last row win
//! - [`query_first_haq_value`](Database::query_first_haq_value) takes the first

use crate::models::{
    AgeTypeTotal, DrillDown, GaugeReading, IndicatorComparison, IndicatorValue, ValueExtent,
};
use crate::Database;
use haq_core::indicator::{
    is_cancer_indicator, short_label, BASELINE_YEAR, HAQ_INDEX, LATEST_YEAR, TOP_INDICATOR_COUNT,
};
use haq_core::AgeType;
use rusqlite::params;
use std::collections::HashMap;

impl Database {
    /// Number of rows loaded.
    pub fn query_record_count(&self) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM indicators", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Distinct `year_id` values, sorted as strings.
    ///
    /// Populates the year selector; the first entry is the initial map year.
    pub fn query_year_index(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT year_id FROM indicators
             ORDER BY year_id",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!("query: query_year_index returned {} years", rows.len());
        Ok(rows)
    }

    /// Distinct `location_name` values, sorted.
    pub fn query_location_names(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT location_name FROM indicators
             ORDER BY location_name",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(rows)
    }

    /// Global min/max of `val` across every row, or `None` when empty.
    pub fn query_value_extent(&self) -> anyhow::Result<Option<ValueExtent>> {
        let conn = self.conn.borrow();
        let (min, max): (Option<f64>, Option<f64>) = conn.query_row(
            "SELECT MIN(val), MAX(val) FROM indicators",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        Ok(min.zip(max).map(|(min, max)| ValueExtent { min, max }))
    }

    /// HAQ Index value per location for one year.
    ///
    /// Only rows with `indicator_name = 'HAQ Index'` and exactly this
    /// `year_id` contribute. When a location has several such rows the last
    /// one in dataset order wins.
    pub fn query_haq_lookup(&self, year: &str) -> anyhow::Result<HashMap<String, f64>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT location_name, val FROM indicators
             WHERE indicator_name = ?1 AND year_id = ?2
             ORDER BY id",
        )?;
        let mut lookup = HashMap::new();
        let rows = stmt.query_map(params![HAQ_INDEX, year], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
        })?;
        for row in rows {
            let (location, val) = row?;
            lookup.insert(location, val);
        }
        log::info!(
            "query: query_haq_lookup({}) returned {} locations",
            year,
            lookup.len()
        );
        Ok(lookup)
    }

    /// The first HAQ Index value for a location and year, in dataset order.
    pub fn query_first_haq_value(&self, location: &str, year: &str) -> anyhow::Result<Option<f64>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT val FROM indicators
             WHERE location_name = ?1 AND year_id = ?2 AND indicator_name = ?3
             ORDER BY id
             LIMIT 1",
        )?;
        let mut rows = stmt.query_map(params![location, year, HAQ_INDEX], |row| row.get(0))?;
        Ok(rows.next().transpose()?)
    }

    /// Summed HAQ Index per life stage for a location and year.
    ///
    /// Always returns the three age types in legend order; a stage without
    /// rows sums to 0. Rows with any other age type, or none, are ignored.
    pub fn query_age_type_totals(
        &self,
        location: &str,
        year: &str,
    ) -> anyhow::Result<Vec<AgeTypeTotal>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT haq_index_age_type, val FROM indicators
             WHERE location_name = ?1 AND year_id = ?2 AND indicator_name = ?3
               AND haq_index_age_type IS NOT NULL
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![location, year, HAQ_INDEX], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut totals: Vec<AgeTypeTotal> = AgeType::ALL
            .iter()
            .map(|&age_type| AgeTypeTotal {
                age_type,
                value: 0.0,
            })
            .collect();
        for (age_type, val) in rows {
            if let Some(total) = AgeType::parse(&age_type)
                .and_then(|parsed| totals.iter_mut().find(|t| t.age_type == parsed))
            {
                total.value += val;
            }
        }
        Ok(totals)
    }

    /// Cancer indicator rows for a location and year, in dataset order.
    pub fn query_cancer_statistics(
        &self,
        location: &str,
        year: &str,
    ) -> anyhow::Result<Vec<IndicatorValue>> {
        let rows = self.indicator_rows(location, year)?;
        let values: Vec<IndicatorValue> = rows
            .into_iter()
            .filter(|(name, _)| is_cancer_indicator(name))
            .map(|(indicator_name, value)| IndicatorValue {
                label: short_label(&indicator_name).to_string(),
                indicator_name,
                value,
            })
            .collect();
        log::info!(
            "query: query_cancer_statistics({}, {}) returned {} records",
            location,
            year,
            values.len()
        );
        Ok(values)
    }

    /// Non-HAQ indicators of a location compared across two years, in
    /// first-encounter order (all `start_year` indicators first).
    pub fn query_indicator_comparisons(
        &self,
        location: &str,
        start_year: &str,
        end_year: &str,
    ) -> anyhow::Result<Vec<IndicatorComparison>> {
        let start_rows = self.non_haq_rows(location, start_year)?;
        let end_rows = self.non_haq_rows(location, end_year)?;
        Ok(merge_comparisons(start_rows, end_rows))
    }

    /// The `limit` comparisons with the largest combined value.
    pub fn query_top_indicators(
        &self,
        location: &str,
        start_year: &str,
        end_year: &str,
        limit: usize,
    ) -> anyhow::Result<Vec<IndicatorComparison>> {
        let comparisons = self.query_indicator_comparisons(location, start_year, end_year)?;
        Ok(rank_top(comparisons, limit))
    }

    /// Gather every chart input for a clicked country.
    pub fn query_drill_down(&self, country: &str) -> anyhow::Result<DrillDown> {
        let baseline = GaugeReading {
            year: BASELINE_YEAR,
            value: self
                .query_first_haq_value(country, BASELINE_YEAR)?
                .unwrap_or(0.0),
        };
        let latest = GaugeReading {
            year: LATEST_YEAR,
            value: self
                .query_first_haq_value(country, LATEST_YEAR)?
                .unwrap_or(0.0),
        };
        let top_indicators =
            self.query_top_indicators(country, BASELINE_YEAR, LATEST_YEAR, TOP_INDICATOR_COUNT)?;
        if top_indicators.is_empty() {
            log::warn!(
                "No data available for {} to draw the dumbbell plot.",
                country
            );
        }

        Ok(DrillDown {
            country: country.to_string(),
            baseline,
            latest,
            age_types: self.query_age_type_totals(country, LATEST_YEAR)?,
            cancer: self.query_cancer_statistics(country, LATEST_YEAR)?,
            top_indicators,
        })
    }

    fn indicator_rows(&self, location: &str, year: &str) -> anyhow::Result<Vec<(String, f64)>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT indicator_name, val FROM indicators
             WHERE location_name = ?1 AND year_id = ?2
             ORDER BY id",
        )?;
        let rows = stmt
            .query_map(params![location, year], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn non_haq_rows(&self, location: &str, year: &str) -> anyhow::Result<Vec<(String, f64)>> {
        let mut rows = self.indicator_rows(location, year)?;
        rows.retain(|(name, _)| name != HAQ_INDEX);
        Ok(rows)
    }
}

/// Merge two year-scoped row lists by indicator name.
///
/// Insertion order is first encounter: every start-year indicator in row
/// order, then end-year indicators not seen before. A repeated start-year
/// row resets the entry; a repeated end-year row overwrites its end value.
fn merge_comparisons(
    start_rows: Vec<(String, f64)>,
    end_rows: Vec<(String, f64)>,
) -> Vec<IndicatorComparison> {
    let mut merged: Vec<IndicatorComparison> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (name, value) in start_rows {
        let entry = IndicatorComparison {
            indicator_name: name.clone(),
            start_value: value,
            end_value: 0.0,
        };
        match positions.get(&name) {
            Some(&idx) => merged[idx] = entry,
            None => {
                positions.insert(name, merged.len());
                merged.push(entry);
            }
        }
    }

    for (name, value) in end_rows {
        match positions.get(&name) {
            Some(&idx) => merged[idx].end_value = value,
            None => {
                positions.insert(name.clone(), merged.len());
                merged.push(IndicatorComparison {
                    indicator_name: name,
                    start_value: 0.0,
                    end_value: value,
                });
            }
        }
    }

    merged
}

/// Stable sort by combined value, descending, then keep the first `limit`.
fn rank_top(mut comparisons: Vec<IndicatorComparison>, limit: usize) -> Vec<IndicatorComparison> {
    comparisons.sort_by(|a, b| {
        b.total()
            .partial_cmp(&a.total())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    comparisons.truncate(limit);
    comparisons
}
