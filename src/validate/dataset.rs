use crate::domain::model::{CleanRecord, RawRecord, TransformResult};
use crate::validate::normalize::Normalizer;
use crate::validate::phone::CountryCodes;
use crate::validate::record::RecordValidator;

/// Maps source-language column labels to the canonical field names. Entries
/// keep declaration order; source columns without an entry are dropped.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    entries: Vec<(String, String)>,
}

impl ColumnMap {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn canonical_name(&self, source_label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(source, _)| source == source_label)
            .map(|(_, canonical)| canonical.as_str())
    }
}

impl Default for ColumnMap {
    fn default() -> Self {
        // The source spreadsheet carries Russian column labels.
        Self::new(
            [
                ("ФИО", "full_name"),
                ("телефон", "phone"),
                ("страна проживания", "country"),
                ("район проживания", "region"),
                ("email", "email"),
                ("возраст", "age"),
            ]
            .into_iter()
            .map(|(s, c)| (s.to_string(), c.to_string()))
            .collect(),
        )
    }
}

/// Drives the per-record validation over a whole table: renames columns to
/// canonical names, normalizes textual cells, and validates row by row.
/// Input row order is preserved and the input itself is never mutated.
#[derive(Debug, Clone)]
pub struct DatasetProcessor {
    column_map: ColumnMap,
    normalizer: Normalizer,
    validator: RecordValidator,
}

impl DatasetProcessor {
    pub fn new(column_map: ColumnMap, rules: CountryCodes) -> Self {
        Self {
            column_map,
            normalizer: Normalizer::new(),
            validator: RecordValidator::new(rules),
        }
    }

    pub fn process(&self, rows: &[RawRecord]) -> TransformResult {
        let clean_records: Vec<CleanRecord> = rows
            .iter()
            .map(|row| self.validator.validate(&self.rename(row)))
            .collect();
        let rows_with_errors = clean_records.iter().filter(|r| !r.is_clean()).count();

        TransformResult {
            clean_records,
            rows_with_errors,
        }
    }

    /// Produces a fresh record keyed by canonical names. Textual cells are
    /// whitespace-normalized here; blank-after-trim becomes `Null` so the
    /// validators see a uniform absence marker.
    fn rename(&self, row: &RawRecord) -> RawRecord {
        let mut renamed = RawRecord::new();
        for (label, value) in &row.data {
            let Some(canonical) = self.column_map.canonical_name(label) else {
                continue;
            };
            let cell = match value {
                serde_json::Value::String(_) => match self.normalizer.normalize_value(value) {
                    Some(text) => serde_json::Value::String(text),
                    None => serde_json::Value::Null,
                },
                other => other.clone(),
            };
            renamed.data.insert(canonical.to_string(), cell);
        }
        renamed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn russian_row(name: &str, phone: &str, age: &str) -> RawRecord {
        RawRecord {
            data: HashMap::from([
                ("ФИО".to_string(), json!(name)),
                ("телефон".to_string(), json!(phone)),
                ("страна проживания".to_string(), json!("Россия")),
                ("район проживания".to_string(), json!("Москва")),
                ("email".to_string(), json!("user@example.com")),
                ("возраст".to_string(), json!(age)),
                ("лишняя колонка".to_string(), json!("dropped")),
            ]),
        }
    }

    fn processor() -> DatasetProcessor {
        DatasetProcessor::new(ColumnMap::default(), CountryCodes::default())
    }

    #[test]
    fn test_columns_are_renamed_and_unmapped_dropped() {
        let result = processor().process(&[russian_row("Иван Иванов", "89261234567", "30")]);

        let clean = &result.clean_records[0];
        assert!(clean.is_clean());
        assert_eq!(clean.full_name.as_deref(), Some("Иван Иванов"));
        assert_eq!(clean.phone.as_deref(), Some("+79261234567"));
        assert_eq!(clean.age, Some(30));
    }

    #[test]
    fn test_row_count_and_order_preserved() {
        let rows = vec![
            russian_row("Первый", "89261234567", "30"),
            russian_row("Второй", "bad", "30"),
            russian_row("Третий", "89261234567", "abc"),
        ];
        let result = processor().process(&rows);

        assert_eq!(result.clean_records.len(), 3);
        assert_eq!(result.clean_records[0].full_name.as_deref(), Some("Первый"));
        assert_eq!(result.clean_records[1].full_name.as_deref(), Some("Второй"));
        assert_eq!(result.clean_records[2].full_name.as_deref(), Some("Третий"));
        assert_eq!(result.rows_with_errors, 2);
    }

    #[test]
    fn test_input_rows_not_mutated() {
        let rows = vec![russian_row("Иван", "89261234567", "30")];
        let before = rows[0].data.clone();
        processor().process(&rows);
        assert_eq!(rows[0].data, before);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let rows = vec![russian_row("  Анна   Петрова ", "9261234567", "17.5")];
        let processor = processor();
        let first = processor.process(&rows);
        let second = processor.process(&rows);
        assert_eq!(first.clean_records, second.clean_records);
        assert_eq!(first.clean_records[0].age, Some(18));
    }
}
