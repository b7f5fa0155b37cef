use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row as read from the source file: source-language column label to
/// untyped cell value. Blank cells are stored as `Value::Null`, never as "".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub data: HashMap<String, serde_json::Value>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&serde_json::Value> {
        self.data.get(column)
    }
}

impl Default for RawRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated record ready for loading. `None` means the field was absent or
/// failed validation; the reason is then named in `errors`.
///
/// Field declaration order matches the destination schema:
/// full_name, phone, country, region, email, age, errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
    pub errors: String,
}

impl CleanRecord {
    /// True when every field validated, per the record invariant: `errors`
    /// is empty iff all six fields passed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Output of the transform phase, handed to the load phase.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub clean_records: Vec<CleanRecord>,
    pub rows_with_errors: usize,
}
