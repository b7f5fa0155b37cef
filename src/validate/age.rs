use crate::validate::normalize::Normalizer;

const MIN_AGE: i64 = 18;
const MAX_AGE: i64 = 120;

/// Age validation: numeric parse (integers and decimals both accepted),
/// rounding half-away-from-zero (17.5 becomes 18), then a range check
/// against 18-120 inclusive.
#[derive(Debug, Clone, Default)]
pub struct AgeValidator;

impl AgeValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(
        &self,
        raw: Option<&serde_json::Value>,
        normalizer: &Normalizer,
    ) -> (Option<i64>, String) {
        let Some(text) = raw.and_then(|v| normalizer.normalize_value(v)) else {
            return (None, "Age is empty".to_string());
        };

        let Ok(value) = text.parse::<f64>() else {
            return (None, format!("Invalid age format: {}", text));
        };
        if !value.is_finite() {
            return (None, format!("Invalid age format: {}", text));
        }

        // f64::round rounds half away from zero.
        let age = value.round() as i64;
        if (MIN_AGE..=MAX_AGE).contains(&age) {
            (Some(age), String::new())
        } else {
            (None, format!("Age {} out of range (18-120)", age))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(raw: Option<serde_json::Value>) -> (Option<i64>, String) {
        AgeValidator::new().validate(raw.as_ref(), &Normalizer::new())
    }

    #[test]
    fn test_missing_age_is_empty() {
        assert_eq!(validate(None), (None, "Age is empty".to_string()));
        assert_eq!(
            validate(Some(json!(""))),
            (None, "Age is empty".to_string())
        );
    }

    #[test]
    fn test_half_rounds_away_from_zero() {
        assert_eq!(validate(Some(json!(17.5))), (Some(18), String::new()));
        assert_eq!(validate(Some(json!("17.5"))), (Some(18), String::new()));
    }

    #[test]
    fn test_in_range_bounds() {
        assert_eq!(validate(Some(json!(18))), (Some(18), String::new()));
        assert_eq!(validate(Some(json!(120))), (Some(120), String::new()));
    }

    #[test]
    fn test_out_of_range_reports_rounded_value() {
        assert_eq!(
            validate(Some(json!(121))),
            (None, "Age 121 out of range (18-120)".to_string())
        );
        assert_eq!(
            validate(Some(json!(17.4))),
            (None, "Age 17 out of range (18-120)".to_string())
        );
        assert_eq!(
            validate(Some(json!(-5))),
            (None, "Age -5 out of range (18-120)".to_string())
        );
    }

    #[test]
    fn test_non_numeric_is_invalid_format() {
        assert_eq!(
            validate(Some(json!("abc"))),
            (None, "Invalid age format: abc".to_string())
        );
    }
}
