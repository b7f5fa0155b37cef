#[cfg(feature = "cli")]
pub mod cli;
pub mod etl_toml;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "user-etl")]
#[command(about = "Validates a spreadsheet of user records and loads it into a MySQL table")]
pub struct CliConfig {
    /// Path to the source table (CSV or TSV with a header row)
    #[arg(long, default_value = "user.csv")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Destination table name; dropped and recreated on every run
    #[arg(long, default_value = "user")]
    pub table: String,

    /// Optional TOML file overriding table name, column map and country codes
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Enable system monitoring")]
    pub monitor: bool,

    #[arg(long, help = "Show what would be processed without executing")]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn table_name(&self) -> &str {
        &self.table
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_file_extension("input", &self.input, &["csv", "tsv"])?;
        validate_path("output_path", &self.output_path)?;
        validate_non_empty_string("table", &self.table)?;
        Ok(())
    }
}
