use crate::core::Pipeline;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    #[cfg(feature = "cli")]
    monitor: Option<SystemMonitor>,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            #[cfg(feature = "cli")]
            monitor: None,
        }
    }

    #[cfg(feature = "cli")]
    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: enabled.then(|| SystemMonitor::new(true)),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting ETL process...");

        tracing::info!("Extracting data...");
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw_data.len());
        self.log_phase("Extract");

        tracing::info!("Transforming data...");
        let result = self.pipeline.transform(raw_data).await?;
        tracing::info!(
            "Validated {} records ({} with errors)",
            result.clean_records.len(),
            result.rows_with_errors
        );
        self.log_phase("Transform");

        tracing::info!("Loading data...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.log_phase("Load");

        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_final_stats();
        }

        Ok(output_path)
    }

    #[cfg(feature = "cli")]
    fn log_phase(&self, phase: &str) {
        if let Some(monitor) = &self.monitor {
            monitor.log_stats(phase);
        }
    }

    #[cfg(not(feature = "cli"))]
    fn log_phase(&self, _phase: &str) {}
}
