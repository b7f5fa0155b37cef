use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

impl EtlError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::CsvError(e) => format!("The input file could not be parsed: {}", e),
            EtlError::IoError(e) => format!("A file could not be read or written: {}", e),
            EtlError::SerializationError(e) => format!("Data could not be serialized: {}", e),
            EtlError::ConfigError { message } => format!("Configuration problem: {}", message),
            EtlError::InvalidConfigValueError { field, value, .. } => {
                format!("Configuration value '{}' is not valid for {}", value, field)
            }
            EtlError::MissingConfigError { field } => {
                format!("Required configuration '{}' was not provided", field)
            }
            EtlError::ProcessingError { message } => format!("Processing failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::CsvError(_) => "Check that the input file is valid CSV with a header row",
            EtlError::IoError(_) => "Check the file path and directory permissions",
            EtlError::SerializationError(_) => "Check the input data for malformed values",
            EtlError::ConfigError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => {
                "Review the CLI flags and the TOML configuration file"
            }
            EtlError::ProcessingError { .. } => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
