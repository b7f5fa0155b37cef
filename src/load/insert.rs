use crate::domain::model::CleanRecord;

const COLUMNS: &str = "full_name, phone, country, region, email, age, errors";

/// Renders one INSERT statement for a validated record. Absent fields become
/// SQL NULL; text literals have single quotes doubled.
pub fn insert_statement(table: &str, record: &CleanRecord) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}, {}, {}, {}, {}, {}, {})",
        table,
        COLUMNS,
        text_literal(record.full_name.as_deref()),
        text_literal(record.phone.as_deref()),
        text_literal(record.country.as_deref()),
        text_literal(record.region.as_deref()),
        text_literal(record.email.as_deref()),
        int_literal(record.age),
        text_literal(Some(&record.errors)),
    )
}

fn text_literal(value: Option<&str>) -> String {
    match value {
        Some(text) => format!("'{}'", text.replace('\'', "''")),
        None => "NULL".to_string(),
    }
}

fn int_literal(value: Option<i64>) -> String {
    match value {
        Some(n) => n.to_string(),
        None => "NULL".to_string(),
    }
}
