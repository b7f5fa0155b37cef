use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_all_digits, validate_non_empty_string, validate_range, Validate,
};
use crate::validate::{ColumnMap, CountryCodeRule, CountryCodes};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optional TOML configuration file. Everything is optional; unset sections
/// fall back to the built-in defaults (Russian column labels, the fixed
/// 20-country code table).
///
/// ```toml
/// table = "user"
///
/// [columns]
/// "ФИО" = "full_name"
///
/// [[country_code]]
/// country = "RU"
/// prefixes = ["7"]
/// length = 11
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EtlToml {
    pub table: Option<String>,
    pub columns: Option<HashMap<String, String>>,
    #[serde(default, rename = "country_code")]
    pub country_codes: Vec<CountryCodeRule>,
}

impl EtlToml {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| EtlError::ConfigError {
            message: format!("Failed to parse {}: {}", path, e),
        })
    }

    pub fn column_map(&self) -> ColumnMap {
        match &self.columns {
            Some(columns) => ColumnMap::new(
                columns
                    .iter()
                    .map(|(source, canonical)| (source.clone(), canonical.clone()))
                    .collect(),
            ),
            None => ColumnMap::default(),
        }
    }

    pub fn country_rules(&self) -> CountryCodes {
        if self.country_codes.is_empty() {
            CountryCodes::default()
        } else {
            CountryCodes::new(self.country_codes.clone())
        }
    }
}

impl Validate for EtlToml {
    fn validate(&self) -> Result<()> {
        if let Some(table) = &self.table {
            validate_non_empty_string("table", table)?;
        }

        if let Some(columns) = &self.columns {
            for (source, canonical) in columns {
                validate_non_empty_string("columns.source", source)?;
                validate_non_empty_string("columns.canonical", canonical)?;
            }
        }

        for rule in &self.country_codes {
            validate_non_empty_string("country_code.country", &rule.country)?;
            validate_range("country_code.length", rule.length, 8, 15)?;
            if rule.prefixes.is_empty() {
                return Err(EtlError::InvalidConfigValueError {
                    field: "country_code.prefixes".to_string(),
                    value: rule.country.clone(),
                    reason: "At least one dialing prefix is required".to_string(),
                });
            }
            for prefix in &rule.prefixes {
                validate_all_digits("country_code.prefixes", prefix)?;
            }
        }

        Ok(())
    }
}
