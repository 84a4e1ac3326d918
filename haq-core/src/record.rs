use crate::error::{HaqError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;

/// Header names of the dataset columns the dashboard reads.
pub const LOCATION_COLUMN: &str = "location_name";
pub const YEAR_COLUMN: &str = "year_id";
pub const INDICATOR_COLUMN: &str = "indicator_name";
pub const VALUE_COLUMN: &str = "val";
pub const AGE_TYPE_COLUMN: &str = "haq_index_age_type";

/// Life stage a HAQ Index row is broken down by.
///
/// Only these three spellings are recognized; any other value in the
/// `haq_index_age_type` column is not an age type.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum AgeType {
    Young,
    Working,
    Postworking,
}

impl AgeType {
    /// All age types, in legend order.
    pub const ALL: [AgeType; 3] = [AgeType::Young, AgeType::Working, AgeType::Postworking];

    /// Parse the exact dataset spelling.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Young" => Some(AgeType::Young),
            "Working" => Some(AgeType::Working),
            "Postworking" => Some(AgeType::Postworking),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgeType::Young => "Young",
            AgeType::Working => "Working",
            AgeType::Postworking => "Postworking",
        }
    }
}

/// One row of the indicator dataset.
///
/// `year_id` stays a string: years are compared by string equality and
/// sorted lexicographically, never numerically.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRecord {
    pub location_name: String,
    pub year_id: String,
    pub indicator_name: String,
    pub val: f64,
    pub haq_index_age_type: Option<String>,
}

/// Records parsed from a dataset CSV plus the count of rows dropped because
/// their `val` was not a finite number.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecords {
    pub records: Vec<IndicatorRecord>,
    pub skipped: usize,
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    location: usize,
    year: usize,
    indicator: usize,
    value: usize,
    age_type: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &'static str| headers.iter().position(|h| h == name);
        let require =
            |name: &'static str| find(name).ok_or(HaqError::MissingColumn(name));
        Ok(Self {
            location: require(LOCATION_COLUMN)?,
            year: require(YEAR_COLUMN)?,
            indicator: require(INDICATOR_COLUMN)?,
            value: require(VALUE_COLUMN)?,
            age_type: find(AGE_TYPE_COLUMN),
        })
    }
}

impl IndicatorRecord {
    /// Parse the dataset CSV (with headers) into records, in file order.
    ///
    /// Columns are located by header name, so extra columns and column order
    /// do not matter. The age type column may be absent entirely.
    ///
    /// # Example
    ///
    /// ```rust
    /// use haq_core::IndicatorRecord;
    ///
    /// let csv = "location_name,year_id,indicator_name,val,haq_index_age_type\n\
    ///            India,2019,HAQ Index,41.2,\n\
    ///            India,2019,HAQ Index,n/a,Young\n";
    /// let parsed = IndicatorRecord::parse_csv(csv).unwrap();
    /// assert_eq!(parsed.records.len(), 1);
    /// assert_eq!(parsed.skipped, 1);
    /// assert_eq!(parsed.records[0].haq_index_age_type, None);
    /// ```
    pub fn parse_csv(csv_data: &str) -> Result<ParsedRecords> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(csv_data.as_bytes());

        let columns = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for result in rdr.records() {
            let row = result?;
            let field = |idx: usize| row.get(idx).unwrap_or("");

            let val = match field(columns.value).parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            let haq_index_age_type = columns
                .age_type
                .map(field)
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            records.push(IndicatorRecord {
                location_name: field(columns.location).to_string(),
                year_id: field(columns.year).to_string(),
                indicator_name: field(columns.indicator).to_string(),
                val,
                haq_index_age_type,
            });
        }

        if skipped > 0 {
            log::warn!("record: skipped {} rows with a non-numeric val", skipped);
        }
        Ok(ParsedRecords { records, skipped })
    }
}
