use crate::domain::model::RawRecord;
use crate::utils::error::Result;
use std::collections::HashMap;

/// Parses a tabular file into ordered `RawRecord`s. Header labels are kept
/// as-is (minus surrounding whitespace); cells stay untyped strings, with
/// blank cells stored as `Null` so downstream code sees explicit absence.
pub struct TableReader {
    delimiter: u8,
}

impl TableReader {
    pub fn csv() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }

    /// Picks the delimiter from the file extension; anything but `.tsv` is
    /// read as comma-separated.
    pub fn for_path(path: &str) -> Self {
        if path.ends_with(".tsv") {
            Self::tsv()
        } else {
            Self::csv()
        }
    }

    pub fn parse(&self, bytes: &[u8]) -> Result<Vec<RawRecord>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut data = HashMap::new();
            for (i, header) in headers.iter().enumerate() {
                let cell = row.get(i).unwrap_or("");
                let value = if cell.trim().is_empty() {
                    serde_json::Value::Null
                } else {
                    serde_json::Value::String(cell.to_string())
                };
                data.insert(header.clone(), value);
            }
            records.push(RawRecord { data });
        }

        tracing::debug!("Parsed {} rows from input table", records.len());
        Ok(records)
    }
}
