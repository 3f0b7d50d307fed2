//! Response models

use ledgerview_parser::Transaction;
use serde::{Deserialize, Serialize};

/// One page of records plus paging metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsResponse {
    pub records: Vec<Transaction>,
    /// Record count after filtering
    pub total_records: usize,
    /// The requested page, echoed back
    pub current_page: i64,
    pub total_pages: usize,
}

impl TransactionsResponse {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages as i64
    }
}
