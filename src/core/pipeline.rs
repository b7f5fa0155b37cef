use crate::core::{ConfigProvider, Database, Pipeline, RawRecord, Storage, TransformResult};
use crate::extract::TableReader;
use crate::load::{create_table, drop_table, insert_statement};
use crate::utils::error::Result;
use crate::validate::DatasetProcessor;

/// Pipeline over personal records: read the source table, validate every row
/// through the `DatasetProcessor`, recreate the destination table, and insert
/// the cleaned rows through the `Database` port.
pub struct UserPipeline<S: Storage, C: ConfigProvider, D: Database> {
    storage: S,
    config: C,
    database: D,
    processor: DatasetProcessor,
}

impl<S: Storage, C: ConfigProvider, D: Database> UserPipeline<S, C, D> {
    pub fn new(storage: S, config: C, database: D, processor: DatasetProcessor) -> Self {
        Self {
            storage,
            config,
            database,
            processor,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, D: Database> Pipeline for UserPipeline<S, C, D> {
    async fn extract(&self) -> Result<Vec<RawRecord>> {
        let path = self.config.input_path();
        tracing::debug!("Reading input table from: {}", path);

        let bytes = self.storage.read_file(path).await?;
        TableReader::for_path(path).parse(&bytes)
    }

    async fn transform(&self, data: Vec<RawRecord>) -> Result<TransformResult> {
        Ok(self.processor.process(&data))
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let table = self.config.table_name();

        // Destructive recreate on every run.
        self.database.execute(&drop_table(table)).await?;
        self.database.execute(&create_table(table)).await?;

        for record in &result.clean_records {
            self.database
                .execute(&insert_statement(table, record))
                .await?;
        }

        tracing::debug!(
            "Queued {} inserts into table {}",
            result.clean_records.len(),
            table
        );
        self.database.finish().await
    }
}
