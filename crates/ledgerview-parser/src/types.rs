//! Record types produced by the loader

use serde::{Deserialize, Serialize};

/// Column names expected in the header row, in display order
pub const COLUMNS: [&str; 5] = ["date_time", "trans_no", "credit", "debit", "detail"];

/// One ledger row. All fields are kept as the text found in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Timestamp, e.g. `2024-03-01 09:15:00`
    pub date_time: String,
    /// Opaque transaction number
    pub trans_no: String,
    /// Currency-formatted credit amount, e.g. `$1,200.50`
    pub credit: String,
    /// Currency-formatted debit amount
    pub debit: String,
    /// Free-text description
    pub detail: String,
}

impl Transaction {
    /// All field values in column order
    pub fn fields(&self) -> [&str; 5] {
        [
            &self.date_time,
            &self.trans_no,
            &self.credit,
            &self.debit,
            &self.detail,
        ]
    }
}
