//! Gzip support for data files served or stored as `*.gz`.

use crate::error::Result;
use flate2::read::GzDecoder;
use std::io::Read;

/// Returns true when a path or URL names a gzip-compressed file.
pub fn is_gzip_path(path: &str) -> bool {
    path.ends_with(".gz")
}

/// Decompress a gzip byte stream into a UTF-8 string.
///
/// Invalid gzip framing and non-UTF-8 content both surface as
/// [`HaqError::Decompression`](crate::HaqError::Decompression).
pub fn gunzip_to_string(bytes: &[u8]) -> Result<String> {
    let mut decoder = GzDecoder::new(bytes);
    let mut out = String::new();
    decoder.read_to_string(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn detects_gzip_suffix() {
        assert!(is_gzip_path("./Dataset/Dataset.csv.gz"));
        assert!(!is_gzip_path("./Dataset/Dataset.csv"));
        assert!(!is_gzip_path("./gz/world.geojson"));
    }

    #[test]
    fn decompresses_csv_payload() {
        let csv = "location_name,year_id\nIndia,2019\n";
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(csv.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(gunzip_to_string(&compressed).unwrap(), csv);
    }

    #[test]
    fn rejects_plain_bytes() {
        let result = gunzip_to_string(b"location_name,year_id\n");
        assert!(result.is_err(), "Plain text is not a gzip stream");
    }
}
