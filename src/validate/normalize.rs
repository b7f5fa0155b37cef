use regex::Regex;

/// Whitespace normalization for raw cell values. Any run of whitespace
/// (spaces, tabs, newlines) collapses to a single space and the result is
/// trimmed. Non-text scalars are stringified first, so a numeric cell
/// normalizes to its decimal rendering.
#[derive(Debug, Clone)]
pub struct Normalizer {
    whitespace: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").expect("whitespace pattern is valid"),
        }
    }

    pub fn normalize(&self, value: &str) -> String {
        self.whitespace.replace_all(value.trim(), " ").into_owned()
    }

    /// Normalizes a raw cell. `Null` means the cell never had a value and
    /// stays absent; everything else is stringified and collapsed. A cell
    /// that is blank after trimming also comes back as `None`.
    pub fn normalize_value(&self, value: &serde_json::Value) -> Option<String> {
        let text = match value {
            serde_json::Value::Null => return None,
            serde_json::Value::String(s) => self.normalize(s),
            other => self.normalize(&scalar_to_string(other)),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn scalar_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize("  John   Doe  "), "John Doe");
        assert_eq!(normalizer.normalize("a\t\tb\nc"), "a b c");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = Normalizer::new();
        let once = normalizer.normalize("  Иван    Иванов ");
        assert_eq!(normalizer.normalize(&once), once);
    }

    #[test]
    fn test_null_and_blank_are_absent() {
        let normalizer = Normalizer::new();
        assert_eq!(normalizer.normalize_value(&serde_json::Value::Null), None);
        assert_eq!(normalizer.normalize_value(&serde_json::json!("   ")), None);
    }

    #[test]
    fn test_non_text_scalars_are_stringified() {
        let normalizer = Normalizer::new();
        assert_eq!(
            normalizer.normalize_value(&serde_json::json!(42)),
            Some("42".to_string())
        );
    }
}
