use clap::Parser;
use user_etl::config::etl_toml::EtlToml;
use user_etl::utils::{logger, validation::Validate};
use user_etl::validate::{ColumnMap, CountryCodes, DatasetProcessor};
use user_etl::{CliConfig, EtlEngine, LocalStorage, SqlScript, UserPipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting user-etl CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // Table name, column map and country-code table come from the optional
    // TOML file; anything unset falls back to built-in defaults.
    let (column_map, country_codes) = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file = match EtlToml::from_file(path) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            };
            if let Err(e) = file.validate() {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
            if let Some(table) = &file.table {
                config.table = table.clone();
            }
            (file.column_map(), file.country_rules())
        }
        None => (ColumnMap::default(), CountryCodes::default()),
    };

    if config.dry_run {
        println!("Dry run - nothing will be executed");
        println!("  Input:  {}", config.input);
        println!("  Table:  {} (dropped and recreated)", config.table);
        println!("  Output: {}/load.sql", config.output_path);
        return Ok(());
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(".".to_string());
    let script_path = format!("{}/load.sql", config.output_path);
    let database = SqlScript::new(LocalStorage::new(".".to_string()), script_path);
    let processor = DatasetProcessor::new(column_map, country_codes);
    let pipeline = UserPipeline::new(storage, config, database, processor);

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ ETL process completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ ETL process completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ ETL process failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
