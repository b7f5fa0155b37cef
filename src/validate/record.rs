use crate::domain::model::{CleanRecord, RawRecord};
use crate::validate::age::AgeValidator;
use crate::validate::email::EmailValidator;
use crate::validate::normalize::Normalizer;
use crate::validate::phone::{CountryCodes, PhoneValidator};

/// Runs every field validator over one record and folds the diagnostics into
/// a single "; "-joined error string. Evaluation order is fixed (full_name,
/// country, region, email, phone, age) and observable in the joined output,
/// so golden tests can rely on it.
///
/// Field failures never abort the record: every input yields a `CleanRecord`,
/// with failed fields stored as absent and named in `errors`.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    normalizer: Normalizer,
    email: EmailValidator,
    age: AgeValidator,
    phone: PhoneValidator,
}

impl RecordValidator {
    pub fn new(rules: CountryCodes) -> Self {
        Self {
            normalizer: Normalizer::new(),
            email: EmailValidator::new(),
            age: AgeValidator::new(),
            phone: PhoneValidator::new(rules),
        }
    }

    pub fn validate(&self, raw: &RawRecord) -> CleanRecord {
        let mut diagnostics: Vec<String> = Vec::new();

        let full_name = self.required_text(raw, "full_name", &mut diagnostics);
        let country = self.required_text(raw, "country", &mut diagnostics);
        let region = self.required_text(raw, "region", &mut diagnostics);

        let (email, email_diag) = self.email.validate(raw.get("email"), &self.normalizer);
        if !email_diag.is_empty() {
            diagnostics.push(email_diag);
        }

        let (phone, phone_diag) = self.phone.validate(raw.get("phone"), &self.normalizer);
        if !phone_diag.is_empty() {
            diagnostics.push(phone_diag);
        }

        let (age, age_diag) = self.age.validate(raw.get("age"), &self.normalizer);
        if !age_diag.is_empty() {
            diagnostics.push(age_diag);
        }

        CleanRecord {
            full_name,
            phone,
            country,
            region,
            email,
            age,
            errors: diagnostics.join("; "),
        }
    }

    /// A required text field: blank after normalization counts as empty.
    fn required_text(
        &self,
        raw: &RawRecord,
        field: &str,
        diagnostics: &mut Vec<String>,
    ) -> Option<String> {
        match raw.get(field).and_then(|v| self.normalizer.normalize_value(v)) {
            Some(value) => Some(value),
            None => {
                diagnostics.push(format!("{} is empty", field));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn record(fields: &[(&str, serde_json::Value)]) -> RawRecord {
        RawRecord {
            data: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn validator() -> RecordValidator {
        RecordValidator::new(CountryCodes::default())
    }

    #[test]
    fn test_fully_valid_record_has_no_errors() {
        let clean = validator().validate(&record(&[
            ("full_name", json!("  Иван   Иванов ")),
            ("phone", json!("8 (926) 123-45-67")),
            ("country", json!("Россия")),
            ("region", json!("Москва")),
            ("email", json!("ivan@example.com")),
            ("age", json!("34")),
        ]));

        assert!(clean.is_clean());
        assert_eq!(clean.full_name.as_deref(), Some("Иван Иванов"));
        assert_eq!(clean.phone.as_deref(), Some("+79261234567"));
        assert_eq!(clean.country.as_deref(), Some("Россия"));
        assert_eq!(clean.region.as_deref(), Some("Москва"));
        assert_eq!(clean.email.as_deref(), Some("ivan@example.com"));
        assert_eq!(clean.age, Some(34));
    }

    #[test]
    fn test_empty_record_reports_all_fields_in_order() {
        let clean = validator().validate(&record(&[]));

        assert_eq!(
            clean.errors,
            "full_name is empty; country is empty; region is empty; \
             Email is empty; Phone is empty; Age is empty"
        );
        assert_eq!(clean.full_name, None);
        assert_eq!(clean.phone, None);
        assert_eq!(clean.age, None);
    }

    #[test]
    fn test_blank_required_field_counts_as_empty() {
        let clean = validator().validate(&record(&[
            ("full_name", json!("   ")),
            ("phone", json!("89261234567")),
            ("country", json!("Россия")),
            ("region", json!("Москва")),
            ("email", json!("ivan@example.com")),
            ("age", json!(40)),
        ]));

        assert_eq!(clean.errors, "full_name is empty");
        assert_eq!(clean.full_name, None);
        assert!(clean.phone.is_some());
    }

    #[test]
    fn test_failed_field_is_absent_not_empty_string() {
        let clean = validator().validate(&record(&[
            ("full_name", json!("Anna Schmidt")),
            ("phone", json!("123")),
            ("country", json!("Germany")),
            ("region", json!("Bavaria")),
            ("email", json!("not-an-email")),
            ("age", json!("200")),
        ]));

        assert_eq!(clean.phone, None);
        assert_eq!(clean.email, None);
        assert_eq!(clean.age, None);
        assert_eq!(
            clean.errors,
            "Invalid email format: not-an-email; Phone too short: 123; \
             Age 200 out of range (18-120)"
        );
    }

    #[test]
    fn test_validation_is_deterministic() {
        let raw = record(&[
            ("full_name", json!("")),
            ("email", json!("bad@@mail")),
            ("age", json!("17")),
        ]);
        let validator = validator();
        assert_eq!(validator.validate(&raw), validator.validate(&raw));
    }
}
