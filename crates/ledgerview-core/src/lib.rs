//! Query pipeline over ledger records
//!
//! Every request reloads the ledger file and runs it through
//! filter → sort → paginate. Nothing is cached between requests, so
//! responses always reflect the file as it is on disk.

pub mod error;
pub mod filter;
pub mod models;
pub mod paginate;
pub mod query;
pub mod sort;
pub mod time;
pub mod types;

use ledgerview_config::Config;
use ledgerview_parser::{SourceRef, TransactionSourceTrait};
use std::path::{Path, PathBuf};

pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger, ErrorSeverity};
pub use ledgerview_parser::Transaction;
pub use models::TransactionsResponse;
pub use query::{QueryError, SearchRequest};
pub use types::{ColumnKind, SortColumn, SortDirection, SortSpec};

/// Run the pipeline over an already loaded record set
pub fn process(records: Vec<Transaction>, request: &SearchRequest, page_size: usize) -> TransactionsResponse {
    let mut records = filter::filter(records, &request.query);
    sort::sort(&mut records, request.sort);
    paginate::paginate(records, request.page, page_size)
}

/// Load `path` through `source` and run the pipeline on it
pub async fn load_and_process(
    source: &dyn TransactionSourceTrait,
    path: &Path,
    request: &SearchRequest,
    page_size: usize,
) -> CoreResult<TransactionsResponse> {
    let records = source.load(path).await?;
    let loaded = records.len();

    let response = process(records, request, page_size);
    log::debug!(
        "Query {:?} page {}: {} of {} records matched",
        request.query,
        request.page,
        response.total_records,
        loaded
    );

    Ok(response)
}

/// Handle on the configured ledger file
pub struct Ledger {
    source: SourceRef,
    path: PathBuf,
    page_size: usize,
}

impl Ledger {
    /// Create a ledger reading `config.data_file()` through `source`
    pub fn new(config: &Config, source: SourceRef) -> Self {
        Self {
            source,
            path: config.data_file(),
            page_size: config.pagination.page_size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Unfiltered page in file order
    pub async fn page(&self, page: i64) -> CoreResult<TransactionsResponse> {
        self.search(&SearchRequest::page(page)).await
    }

    /// Filtered, sorted page
    pub async fn search(&self, request: &SearchRequest) -> CoreResult<TransactionsResponse> {
        load_and_process(self.source.as_ref(), &self.path, request, self.page_size).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerview_parser::CsvTransactionSource;
    use std::io::Write;
    use std::sync::Arc;

    const LEDGER: &str = "date_time,trans_no,credit,debit,detail
2024-03-01 09:15:00,TX-1001,\"$1,200.50\",$0.00,Salary
2024-03-02 12:30:00,TX-1002,$300.00,$4.75,Coffee Shop refund
2024-03-03 18:45:00,TX-1003,$45.00,$62.10,Groceries
";

    fn ledger_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn ledger(path: &Path) -> Ledger {
        let config = Config::default().with_data_file(path);
        Ledger::new(&config, Arc::new(CsvTransactionSource))
    }

    fn sample(count: usize) -> Vec<Transaction> {
        (0..count)
            .map(|i| Transaction {
                date_time: format!("2024-01-{:02} 10:00:00", i % 28 + 1),
                trans_no: format!("TX-{:03}", i),
                credit: format!("${}.00", (i * 37) % 100),
                debit: "$0.00".to_string(),
                detail: if i % 3 == 0 { "Coffee".to_string() } else { "Rent".to_string() },
            })
            .collect()
    }

    #[test]
    fn test_process_default_request() {
        let response = process(sample(3), &SearchRequest::default(), 20);
        assert_eq!(response.records, sample(3));
        assert_eq!(response.total_pages, 1);
    }

    #[test]
    fn test_oversized_page_number_is_past_the_end() {
        let params: std::collections::HashMap<String, String> = [("page".to_string(), "99999999999999999999999".to_string())]
            .into_iter()
            .collect();
        let request = SearchRequest::from_params(&params).unwrap();
        let response = process(sample(3), &request, 20);

        assert_eq!(response.current_page, i64::MAX);
        assert!(response.records.is_empty());
        assert_eq!(response.total_records, 3);
    }

    #[test]
    fn test_total_reflects_filtered_count() {
        let request = SearchRequest { query: "coffee".to_string(), ..SearchRequest::default() };
        let response = process(sample(50), &request, 20);
        assert_eq!(response.total_records, 17);
        assert_eq!(response.total_pages, 1);
        assert!(response.records.iter().all(|t| t.detail == "Coffee"));
    }

    #[test]
    fn test_pages_cover_filtered_sorted_sequence() {
        let spec = SortSpec::new(SortColumn::Credit, SortDirection::Desc);
        let base = SearchRequest { query: "rent".to_string(), page: 1, sort: Some(spec) };

        let mut expected = filter::filter(sample(70), "rent");
        sort::sort(&mut expected, Some(spec));

        let first = process(sample(70), &base, 20);
        let rebuilt: Vec<Transaction> = (1..=first.total_pages as i64)
            .flat_map(|page| process(sample(70), &SearchRequest { page, ..base.clone() }, 20).records)
            .collect();

        assert_eq!(first.total_pages, (expected.len() + 19) / 20);
        assert_eq!(rebuilt, expected);
    }

    #[tokio::test]
    async fn test_ledger_page() {
        let file = ledger_file(LEDGER);
        let response = ledger(file.path()).page(1).await.unwrap();

        assert_eq!(response.records.len(), 3);
        assert_eq!(response.total_pages, 1);
        assert_eq!(response.records[0].trans_no, "TX-1001");
    }

    #[tokio::test]
    async fn test_ledger_search_and_sort() {
        let file = ledger_file(LEDGER);
        let ledger = ledger(file.path());

        let request = SearchRequest { query: "coffee".to_string(), ..SearchRequest::default() };
        let response = ledger.search(&request).await.unwrap();
        assert_eq!(response.total_records, 1);
        assert_eq!(response.records[0].trans_no, "TX-1002");

        let request = SearchRequest {
            sort: Some(SortSpec::new(SortColumn::Credit, SortDirection::Asc)),
            ..SearchRequest::default()
        };
        let credits: Vec<String> = ledger.search(&request).await.unwrap()
            .records.into_iter().map(|t| t.credit).collect();
        assert_eq!(credits, vec!["$45.00", "$300.00", "$1,200.50"]);
    }

    #[tokio::test]
    async fn test_ledger_reflects_file_changes() {
        let mut file = ledger_file(LEDGER);
        let ledger = ledger(file.path());
        assert_eq!(ledger.page(1).await.unwrap().total_records, 3);

        writeln!(file, "2024-03-04 08:00:00,TX-1004,$0.00,$9.99,Books").unwrap();
        file.flush().unwrap();
        assert_eq!(ledger.page(1).await.unwrap().total_records, 4);
    }

    #[tokio::test]
    async fn test_missing_file() {
        let ledger = ledger(Path::new("/nonexistent/ledger.csv"));
        let err = ledger.page(1).await.unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let file = ledger_file("date_time,trans_no,credit,debit,detail\n2024-01-01,A1\n");
        let err = ledger(file.path()).page(1).await.unwrap_err();
        assert!(matches!(err, CoreError::ParseError { line: Some(2), .. }));
    }
}
