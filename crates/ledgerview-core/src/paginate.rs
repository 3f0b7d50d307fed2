//! Fixed-size page slicing

use crate::models::TransactionsResponse;
use ledgerview_parser::Transaction;

/// Cut page `page` (1-indexed) out of `records`.
///
/// Pages below 1 or past the end come back empty; `current_page` always
/// echoes the request.
pub fn paginate(records: Vec<Transaction>, page: i64, page_size: usize) -> TransactionsResponse {
    let page_size = page_size.max(1);
    let total_records = records.len();
    let total_pages = (total_records + page_size - 1) / page_size;

    let start = usize::try_from(page.saturating_sub(1))
        .ok()
        .and_then(|index| index.checked_mul(page_size));

    let records = match start {
        Some(start) if start < total_records => {
            records.into_iter().skip(start).take(page_size).collect()
        }
        _ => Vec::new(),
    };

    TransactionsResponse {
        records,
        total_records,
        current_page: page,
        total_pages,
    }
}
