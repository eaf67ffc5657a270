use std::path::Path;

use anyhow::{Context, Result};

use crate::models::RawRow;

const BOM: char = '\u{feff}';

/// Read every data row of a form export into memory, in file order.
///
/// The first line must be the header row. Rows shorter than the header simply
/// lack the trailing columns; longer rows have their extra cells ignored.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("reading header row of {}", path.display()))?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches(BOM).to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| {
            format!("reading record {} of {}", line + 1, path.display())
        })?;
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.as_str(), v))
                .collect(),
        );
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn csv_file(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_read_rows() {
        let f = csv_file(
            "Timestamp,full_name,current_address\n\
             01/02/2020 13:45:00,Ada Obi,\"12 Main St, Lagos\"\n\
             02/02/2020 09:00:00,\"Tunde \"\"TJ\"\" Bello\",-\n",
        );
        let rows = read_rows(f.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("current_address"), Some("12 Main St, Lagos"));
        assert_eq!(rows[1].get("full_name"), Some("Tunde \"TJ\" Bello"));
        assert_eq!(rows[1].get("current_address"), Some("-"));
    }

    #[test]
    fn test_short_row_lacks_columns() {
        let f = csv_file("full_name,email,gender\nAda,ada@example.org\n");
        let rows = read_rows(f.path()).unwrap();
        assert_eq!(rows[0].get("email"), Some("ada@example.org"));
        assert_eq!(rows[0].get("gender"), None);
    }

    #[test]
    fn test_bom_stripped_from_first_header() {
        let f = csv_file("\u{feff}Timestamp,full_name\n01/02/2020 13:45:00,Ada\n");
        let rows = read_rows(f.path()).unwrap();
        assert_eq!(rows[0].get("Timestamp"), Some("01/02/2020 13:45:00"));
    }

    #[test]
    fn test_header_only_file() {
        let f = csv_file("full_name,email\n");
        assert!(read_rows(f.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = read_rows(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("opening"));
    }
}
