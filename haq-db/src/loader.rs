//! CSV data loading for populating the in-memory SQLite database.
//!
//! # CSV Format
//!
//! Header row required; columns are matched by name:
//! `location_name,year_id,indicator_name,val,haq_index_age_type`
//!
//! Rows whose `val` is not a finite number are skipped (see
//! [`IndicatorRecord::parse_csv`]).

use crate::Database;
use haq_core::IndicatorRecord;
use rusqlite::params;

impl Database {
    /// Load indicator rows from a CSV string, appending after any rows
    /// already present. Returns the number of rows inserted.
    ///
    /// # Example CSV
    /// ```text
    /// location_name,year_id,indicator_name,val,haq_index_age_type
    /// India,2019,HAQ Index,41.2,
    /// India,2019,HAQ Index,44.0,Young
    /// ```
    pub fn load_indicators(&self, csv_data: &str) -> anyhow::Result<usize> {
        let parsed = IndicatorRecord::parse_csv(csv_data)?;
        let count = self.insert_records(&parsed.records)?;
        log::info!(
            "loader: Loaded {} indicator rows, skipped {} non-numeric",
            count,
            parsed.skipped
        );
        Ok(count)
    }

    /// Insert already-parsed records in order, inside one transaction.
    pub fn insert_records(&self, records: &[IndicatorRecord]) -> anyhow::Result<usize> {
        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO indicators
                 (location_name, year_id, indicator_name, val, haq_index_age_type)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for r in records {
                stmt.execute(params![
                    r.location_name,
                    r.year_id,
                    r.indicator_name,
                    r.val,
                    r.haq_index_age_type,
                ])?;
            }
        }
        tx.commit()?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[test]
    fn load_indicators_from_csv() {
        let db = Database::new().unwrap();
        let csv = "\
location_name,year_id,indicator_name,val,haq_index_age_type
India,1990,HAQ Index,24.7,
India,2019,HAQ Index,41.2,
India,2019,Breast cancer,12.0,
";
        assert_eq!(db.load_indicators(csv).unwrap(), 3);

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM indicators", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let val: f64 = conn
            .query_row(
                "SELECT val FROM indicators WHERE year_id = '1990'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!((val - 24.7).abs() < 1e-9);
    }

    #[test]
    fn load_preserves_dataset_order() {
        let db = Database::new().unwrap();
        let csv = "\
location_name,year_id,indicator_name,val,haq_index_age_type
Zambia,2019,HAQ Index,1,
Albania,2019,HAQ Index,2,
Malta,2019,HAQ Index,3,
";
        db.load_indicators(csv).unwrap();

        let conn = db.conn.borrow();
        let mut stmt = conn
            .prepare("SELECT location_name FROM indicators ORDER BY id")
            .unwrap();
        let names: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(names, vec!["Zambia", "Albania", "Malta"]);
    }

    #[test]
    fn load_stores_empty_age_type_as_null() {
        let db = Database::new().unwrap();
        let csv = "\
location_name,year_id,indicator_name,val,haq_index_age_type
India,2019,HAQ Index,41.2,
India,2019,HAQ Index,44.0,Young
";
        db.load_indicators(csv).unwrap();

        let conn = db.conn.borrow();
        let nulls: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM indicators WHERE haq_index_age_type IS NULL",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(nulls, 1);
    }

    #[test]
    fn load_skips_non_numeric_values() {
        let db = Database::new().unwrap();
        let csv = "\
location_name,year_id,indicator_name,val,haq_index_age_type
India,2019,HAQ Index,41.2,
India,2019,HAQ Index,---,
";
        assert_eq!(db.load_indicators(csv).unwrap(), 1);
    }

    #[test]
    fn load_rejects_missing_columns() {
        let db = Database::new().unwrap();
        let result = db.load_indicators("location_name,val\nIndia,1\n");
        assert!(result.is_err());
        assert_eq!(db.query_record_count().unwrap(), 0);
    }

    #[test]
    fn repeated_loads_append() {
        let db = Database::new().unwrap();
        let csv = "\
location_name,year_id,indicator_name,val,haq_index_age_type
India,2019,HAQ Index,41.2,
";
        db.load_indicators(csv).unwrap();
        db.load_indicators(csv).unwrap();
        assert_eq!(db.query_record_count().unwrap(), 2);
    }
}
