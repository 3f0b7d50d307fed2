//! CSV transaction ledger loader
//!
//! Reads a delimited ledger file (header + one row per transaction) into
//! typed [`Transaction`] records.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

pub mod error;
pub mod parser;
pub mod types;

pub use error::{LoadError, ParseError};
pub use parser::{strip_bom, CsvLedgerParser, BOM};
pub use types::{Transaction, COLUMNS};

// ==================== Source Trait ====================

/// Source reference type
pub type SourceRef = Arc<dyn TransactionSourceTrait>;

/// Trait for ledger record sources
#[async_trait]
pub trait TransactionSourceTrait: Send + Sync {
    /// Parse ledger text into records
    async fn parse(&self, content: &str) -> Result<Vec<Transaction>, ParseError>;

    /// Read and parse a ledger file
    async fn load(&self, path: &Path) -> Result<Vec<Transaction>, LoadError>;
}

/// Default source reading CSV files from disk
#[derive(Debug, Default)]
pub struct CsvTransactionSource;

#[async_trait]
impl TransactionSourceTrait for CsvTransactionSource {
    async fn parse(&self, content: &str) -> Result<Vec<Transaction>, ParseError> {
        CsvLedgerParser::parse(content)
    }

    async fn load(&self, path: &Path) -> Result<Vec<Transaction>, LoadError> {
        log::debug!("Reading ledger file: {}", path.display());

        let content = tokio::fs::read_to_string(path).await
            .map_err(|source| LoadError::Unreadable {
                path: path.to_string_lossy().to_string(),
                source,
            })?;

        let records = self.parse(&content).await?;
        log::debug!("Parsed {} records from {}", records.len(), path.display());

        Ok(records)
    }
}
