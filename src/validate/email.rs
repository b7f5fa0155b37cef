use crate::validate::normalize::Normalizer;
use regex::Regex;

/// Syntactic email validation. No MX or network checks; the pattern is
/// `^[\w.-]+@[\w.-]+\.\w+$` applied after whitespace normalization.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: Regex,
}

impl EmailValidator {
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"^[\w\.-]+@[\w\.-]+\.\w+$").expect("email pattern is valid"),
        }
    }

    /// Returns the normalized email on success, or absence plus a diagnostic.
    /// The diagnostic is the empty string on success.
    pub fn validate(
        &self,
        raw: Option<&serde_json::Value>,
        normalizer: &Normalizer,
    ) -> (Option<String>, String) {
        let Some(email) = raw.and_then(|v| normalizer.normalize_value(v)) else {
            return (None, "Email is empty".to_string());
        };

        if self.pattern.is_match(&email) {
            (Some(email), String::new())
        } else {
            (None, format!("Invalid email format: {}", email))
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}
