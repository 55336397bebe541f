use async_trait::async_trait;

use crate::domain::{Dataset, Table};

#[async_trait]
pub trait TableLoader: Send + Sync {
    async fn load(&self, data: &[u8], dataset: &Dataset) -> Result<Table, TableLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TableLoaderError {
    #[error("malformed CSV: {0}")]
    Malformed(String),
}
