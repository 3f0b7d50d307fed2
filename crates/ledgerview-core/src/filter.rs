//! Full-row keyword filter

use ledgerview_parser::Transaction;

/// Keep records where any field contains `query`, ignoring case.
///
/// An empty query keeps everything. Order is preserved.
pub fn filter(records: Vec<Transaction>, query: &str) -> Vec<Transaction> {
    if query.is_empty() {
        return records;
    }

    let query_lower = query.to_lowercase();
    records
        .into_iter()
        .filter(|tx| matches(tx, &query_lower))
        .collect()
}

/// `query_lower` must already be lowercased
pub fn matches(tx: &Transaction, query_lower: &str) -> bool {
    tx.fields()
        .iter()
        .any(|value| value.to_lowercase().contains(query_lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(trans_no: &str, detail: &str) -> Transaction {
        Transaction {
            date_time: "2024-03-02 12:30:00".to_string(),
            trans_no: trans_no.to_string(),
            credit: "$0.00".to_string(),
            debit: "$4.75".to_string(),
            detail: detail.to_string(),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx("TX-1", "Salary"),
            tx("TX-2", "Coffee Shop"),
            tx("TX-3", "Groceries"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        assert_eq!(filter(sample(), ""), sample());
    }

    #[test]
    fn test_case_insensitive_match() {
        let result = filter(sample(), "coffee");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].detail, "Coffee Shop");

        assert_eq!(filter(sample(), "COFFEE"), result);
    }

    #[test]
    fn test_matches_any_field() {
        assert_eq!(filter(sample(), "tx-3")[0].detail, "Groceries");
        // every row has the same debit
        assert_eq!(filter(sample(), "4.75").len(), 3);
        assert_eq!(filter(sample(), "2024-03-02").len(), 3);
    }

    #[test]
    fn test_no_match() {
        assert!(filter(sample(), "rent").is_empty());
    }

    #[test]
    fn test_result_is_ordered_subset_containing_query() {
        let all = sample();
        let query = "s";
        let result = filter(all.clone(), query);

        let mut cursor = all.iter();
        for kept in &result {
            assert!(cursor.any(|tx| tx == kept), "not an order-preserving subset");
            assert!(kept.fields().iter().any(|v| v.to_lowercase().contains(query)));
        }
        assert_eq!(result.len(), 3);
    }
}
