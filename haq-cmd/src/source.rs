//! Reading the dashboard's data files from disk.

use anyhow::Context;
use haq_core::compression::{gunzip_to_string, is_gzip_path};
use haq_db::Database;
use log::info;

/// Read a text file, gunzipping it first when the path ends in `.gz`.
pub async fn read_text(path: &str) -> anyhow::Result<String> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("reading {}", path))?;
    let text = if is_gzip_path(path) {
        gunzip_to_string(&bytes).with_context(|| format!("decompressing {}", path))?
    } else {
        String::from_utf8(bytes).with_context(|| format!("{} is not UTF-8", path))?
    };
    info!("Read {} ({} bytes)", path, text.len());
    Ok(text)
}

/// Read two files concurrently; fails with the first error.
pub async fn read_pair(first: &str, second: &str) -> anyhow::Result<(String, String)> {
    tokio::try_join!(read_text(first), read_text(second))
}

/// Build a database from dataset CSV text.
pub fn database_from_csv(csv_data: &str) -> anyhow::Result<Database> {
    let db = Database::new()?;
    let loaded = db.load_indicators(csv_data)?;
    info!("Loaded {} indicator records", loaded);
    Ok(db)
}

/// Read a dataset file into a fresh in-memory database.
pub async fn load_database(path: &str) -> anyhow::Result<Database> {
    let csv_data = read_text(path).await?;
    database_from_csv(&csv_data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use std::path::PathBuf;

    const CSV: &str = "\
location_name,year_id,indicator_name,val,haq_index_age_type
India,1990,HAQ Index,20,
India,2019,HAQ Index,40,
";

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("haq-cmd-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn reads_plain_and_gzip_files() {
        let plain = temp_path("dataset.csv");
        std::fs::write(&plain, CSV).unwrap();

        let gz = temp_path("dataset.csv.gz");
        let mut encoder = GzEncoder::new(std::fs::File::create(&gz).unwrap(), Compression::default());
        encoder.write_all(CSV.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let (a, b) = read_pair(plain.to_str().unwrap(), gz.to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(a, CSV);
        assert_eq!(b, CSV);

        let db = load_database(gz.to_str().unwrap()).await.unwrap();
        assert_eq!(db.query_record_count().unwrap(), 2);

        std::fs::remove_file(plain).ok();
        std::fs::remove_file(gz).ok();
    }

    #[tokio::test]
    async fn missing_file_names_the_path() {
        let err = read_text("/nonexistent/Dataset.csv").await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/Dataset.csv"));
    }

    #[test]
    fn bad_dataset_is_an_error() {
        assert!(database_from_csv("location_name,val\nIndia,1\n").is_err());
    }
}
