use crate::domain::ports::{Database, Storage};
use crate::utils::error::Result;
use tokio::sync::Mutex;

/// `Database` implementation that buffers statements and writes them out as
/// one SQL script through `Storage`. Used when no live server is wired in;
/// the script is the run's deliverable and can be replayed with any MySQL
/// client.
pub struct SqlScript<S: Storage> {
    storage: S,
    path: String,
    statements: Mutex<Vec<String>>,
}

impl<S: Storage> SqlScript<S> {
    pub fn new(storage: S, path: String) -> Self {
        Self {
            storage,
            path,
            statements: Mutex::new(Vec::new()),
        }
    }
}

impl<S: Storage> Database for SqlScript<S> {
    async fn execute(&self, statement: &str) -> Result<()> {
        let mut statements = self.statements.lock().await;
        statements.push(statement.to_string());
        Ok(())
    }

    async fn finish(&self) -> Result<String> {
        let statements = self.statements.lock().await;
        let mut script = format!(
            "-- Generated by user-etl at {}\n-- {} statements\n\n",
            chrono::Utc::now().to_rfc3339(),
            statements.len()
        );
        for statement in statements.iter() {
            script.push_str(statement);
            script.push_str(";\n");
        }

        tracing::debug!(
            "Writing SQL script ({} statements) to {}",
            statements.len(),
            self.path
        );
        self.storage.write_file(&self.path, script.as_bytes()).await?;
        Ok(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                crate::utils::error::EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_statements_written_in_execution_order() {
        let storage = MockStorage::new();
        let script = SqlScript::new(storage.clone(), "out/load.sql".to_string());

        script.execute("DROP TABLE IF EXISTS user").await.unwrap();
        script.execute("CREATE TABLE user (id INT)").await.unwrap();
        let path = script.finish().await.unwrap();
        assert_eq!(path, "out/load.sql");

        let written = storage.get_file("out/load.sql").await.unwrap();
        let text = String::from_utf8(written).unwrap();
        assert!(text.starts_with("-- Generated by user-etl at "));
        assert!(text.contains("-- 2 statements"));
        let drop_at = text.find("DROP TABLE IF EXISTS user;").unwrap();
        let create_at = text.find("CREATE TABLE user (id INT);").unwrap();
        assert!(drop_at < create_at);
    }
}
