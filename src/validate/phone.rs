use crate::validate::normalize::Normalizer;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One entry of the country-code table: international dialing prefix(es) and
/// the expected total digit count of a valid number for that country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryCodeRule {
    pub country: String,
    pub prefixes: Vec<String>,
    pub length: usize,
}

/// The rule table, checked in declaration order. Order matters: RU and KZ
/// share prefix '7', and the first rule listing a matching prefix decides.
#[derive(Debug, Clone)]
pub struct CountryCodes {
    rules: Vec<CountryCodeRule>,
}

impl CountryCodes {
    pub fn new(rules: Vec<CountryCodeRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CountryCodeRule] {
        &self.rules
    }

    /// Checks a canonical `+<digits>` string against the table. Returns a
    /// diagnostic on failure, `None` when the number is valid.
    fn check(&self, canonical: &str) -> Option<String> {
        if !canonical.starts_with('+') {
            return Some("Missing country code".to_string());
        }

        for rule in &self.rules {
            for prefix in &rule.prefixes {
                if canonical[1..].starts_with(prefix.as_str()) {
                    // Total length includes the leading '+'.
                    return if canonical.len() == 1 + rule.length {
                        None
                    } else {
                        Some(format!("Invalid length for {}", rule.country))
                    };
                }
            }
        }

        Some("Unknown country code".to_string())
    }
}

impl Default for CountryCodes {
    fn default() -> Self {
        let table: &[(&str, &[&str], usize)] = &[
            ("RU", &["7"], 11),
            ("UA", &["380"], 12),
            ("BY", &["375"], 12),
            ("KZ", &["7"], 11),
            ("UZ", &["998"], 12),
            ("AM", &["374"], 11),
            ("AZ", &["994"], 12),
            ("GE", &["995"], 12),
            ("MD", &["373"], 11),
            ("KG", &["996"], 12),
            ("EE", &["372"], 11),
            ("LV", &["371"], 11),
            ("LT", &["370"], 11),
            ("PL", &["48"], 11),
            ("DE", &["49"], 12),
            ("FR", &["33"], 11),
            ("IT", &["39"], 11),
            ("ES", &["34"], 11),
            ("GB", &["44"], 12),
            ("AE", &["971"], 12),
        ];
        Self::new(
            table
                .iter()
                .map(|(country, prefixes, length)| CountryCodeRule {
                    country: (*country).to_string(),
                    prefixes: prefixes.iter().map(|p| (*p).to_string()).collect(),
                    length: *length,
                })
                .collect(),
        )
    }
}

/// Converts a raw phone value into canonical `+<countrycode><subscriber>`
/// form. The heuristics target the Russian market and are tried in a fixed
/// priority order; a bare 10-digit number starting with '9' is assumed to be
/// a domestic mobile missing its leading 7. This is intentional business
/// logic, not a general E.164 parser.
#[derive(Debug, Clone)]
pub struct PhoneFormatter {
    non_digit: Regex,
}

impl PhoneFormatter {
    pub fn new() -> Self {
        Self {
            non_digit: Regex::new(r"\D").expect("non-digit pattern is valid"),
        }
    }

    pub fn digits(&self, raw: &str) -> String {
        self.non_digit.replace_all(raw, "").into_owned()
    }

    pub fn canonicalize(&self, digits: &str) -> String {
        if digits.starts_with('8') && digits.len() == 11 {
            format!("+7{}", &digits[1..])
        } else if digits.starts_with('7') && digits.len() == 11 {
            format!("+{}", digits)
        } else if digits.starts_with('9') && digits.len() == 10 {
            format!("+7{}", digits)
        } else {
            // Covers both explicit "+..." input and the best-effort
            // international guess for anything else.
            format!("+{}", digits)
        }
    }
}

impl Default for PhoneFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct PhoneValidator {
    formatter: PhoneFormatter,
    rules: CountryCodes,
}

impl PhoneValidator {
    pub fn new(rules: CountryCodes) -> Self {
        Self {
            formatter: PhoneFormatter::new(),
            rules,
        }
    }

    pub fn validate(
        &self,
        raw: Option<&serde_json::Value>,
        normalizer: &Normalizer,
    ) -> (Option<String>, String) {
        let Some(text) = raw.and_then(|v| normalizer.normalize_value(v)) else {
            return (None, "Phone is empty".to_string());
        };

        let digits = self.formatter.digits(&text);
        if digits.len() < 10 {
            return (None, format!("Phone too short: {}", text));
        }

        let canonical = self.formatter.canonicalize(&digits);
        match self.rules.check(&canonical) {
            None => (Some(canonical), String::new()),
            Some(diagnostic) => (None, format!("Invalid phone '{}': {}", text, diagnostic)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(raw: Option<serde_json::Value>) -> (Option<String>, String) {
        PhoneValidator::new(CountryCodes::default()).validate(raw.as_ref(), &Normalizer::new())
    }

    #[test]
    fn test_missing_phone_is_empty() {
        assert_eq!(validate(None), (None, "Phone is empty".to_string()));
        assert_eq!(
            validate(Some(serde_json::Value::Null)),
            (None, "Phone is empty".to_string())
        );
    }

    #[test]
    fn test_russian_local_with_leading_8() {
        assert_eq!(
            validate(Some(json!("89261234567"))),
            (Some("+79261234567".to_string()), String::new())
        );
    }

    #[test]
    fn test_ten_digit_mobile_assumed_russian() {
        // Deliberate market assumption: 10 raw digits starting with 9 get a
        // leading 7, even though such a number could in theory be foreign.
        assert_eq!(
            validate(Some(json!("9261234567"))),
            (Some("+79261234567".to_string()), String::new())
        );
    }

    #[test]
    fn test_punctuation_is_stripped() {
        assert_eq!(
            validate(Some(json!("+7 (926) 123-45-67"))),
            (Some("+79261234567".to_string()), String::new())
        );
    }

    #[test]
    fn test_too_short_short_circuits() {
        assert_eq!(
            validate(Some(json!("123"))),
            (None, "Phone too short: 123".to_string())
        );
    }

    #[test]
    fn test_unknown_country_code() {
        assert_eq!(
            validate(Some(json!("+99999999999"))),
            (
                None,
                "Invalid phone '+99999999999': Unknown country code".to_string()
            )
        );
    }

    #[test]
    fn test_invalid_length_names_country() {
        // DE expects 12 digits total; this one has 11.
        assert_eq!(
            validate(Some(json!("+4915123456"))),
            (
                None,
                "Invalid phone '+4915123456': Invalid length for DE".to_string()
            )
        );
    }

    #[test]
    fn test_shared_prefix_resolves_to_first_rule() {
        // RU comes before KZ in the table; a wrong-length '7' number is
        // always reported as RU.
        assert_eq!(
            validate(Some(json!("+7926123456789"))),
            (
                None,
                "Invalid phone '+7926123456789': Invalid length for RU".to_string()
            )
        );
    }

    #[test]
    fn test_revalidating_canonical_is_stable() {
        let (canonical, diagnostic) = validate(Some(json!("89261234567")));
        assert_eq!(diagnostic, "");
        let again = validate(Some(json!(canonical.clone().unwrap())));
        assert_eq!(again, (canonical, String::new()));
    }

    #[test]
    fn test_foreign_number_valid_length() {
        assert_eq!(
            validate(Some(json!("+380 50 123 45 67"))),
            (Some("+380501234567".to_string()), String::new())
        );
    }
}
