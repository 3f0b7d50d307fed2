//! CSV ledger parser
//!
//! Turns the text of a ledger file into [`Transaction`] records. The first
//! line is the header; columns are matched by name so their order in the
//! file does not matter and unknown extra columns are ignored.

use crate::error::ParseError;
use crate::types::{Transaction, COLUMNS};
use csv::{ReaderBuilder, StringRecord, Trim};

/// Byte-order mark some spreadsheet exports put in front of the header
pub const BOM: char = '\u{feff}';

/// Remove exactly one leading byte-order mark, if any
pub fn strip_bom(content: &str) -> &str {
    content.strip_prefix(BOM).unwrap_or(content)
}

/// Stateless CSV parser for ledger files
pub struct CsvLedgerParser;

impl CsvLedgerParser {
    /// Parse ledger text into records, preserving file order.
    ///
    /// Fields are trimmed, blank lines are skipped and quote characters
    /// inside unquoted fields are kept as literal text.
    pub fn parse(content: &str) -> Result<Vec<Transaction>, ParseError> {
        let content = strip_bom(content);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        if is_blank(&headers) {
            return Ok(Vec::new());
        }
        Self::check_header(&headers)?;

        let mut transactions = Vec::new();
        for result in reader.records() {
            let record = result?;
            if is_blank(&record) {
                continue;
            }

            let line = record.position().map(|p| p.line()).unwrap_or(0);
            if record.len() != headers.len() {
                return Err(ParseError::MalformedRow {
                    line,
                    message: format!("expected {} fields, found {}", headers.len(), record.len()),
                });
            }

            let transaction: Transaction = record
                .deserialize(Some(&headers))
                .map_err(|e| ParseError::MalformedRow { line, message: e.to_string() })?;
            transactions.push(transaction);
        }

        Ok(transactions)
    }

    fn check_header(headers: &StringRecord) -> Result<(), ParseError> {
        for column in COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ParseError::MissingColumn { column: column.to_string() });
            }
        }
        Ok(())
    }
}

/// A line holding nothing but whitespace
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty) && record.len() <= 1
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "date_time,trans_no,credit,debit,detail
2024-03-01 09:15:00,TX-1001,\"$1,200.50\",$0.00,Salary
2024-03-02 12:30:00,TX-1002,$0.00,$4.75,Coffee Shop
2024-03-03 18:45:00,TX-1003,$0.00,$62.10,Groceries
";

    #[test]
    fn test_parse_sample() {
        let records = CsvLedgerParser::parse(SAMPLE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].trans_no, "TX-1001");
        assert_eq!(records[0].credit, "$1,200.50");
        assert_eq!(records[1].detail, "Coffee Shop");
        assert_eq!(records[2].debit, "$62.10");
    }

    #[test]
    fn test_bom_is_stripped_once() {
        let with_bom = format!("{}{}", BOM, SAMPLE);
        assert_eq!(strip_bom(&with_bom), SAMPLE);

        let plain = CsvLedgerParser::parse(SAMPLE).unwrap();
        let marked = CsvLedgerParser::parse(&with_bom).unwrap();
        assert_eq!(plain, marked);

        let twice = format!("{}{}", BOM, with_bom);
        assert_eq!(strip_bom(&twice), with_bom);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let input = " date_time , trans_no ,credit,debit, detail \n  2024-01-01 ,  A1 , $5 , $0 ,  Lunch  \n";
        let records = CsvLedgerParser::parse(input).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date_time, "2024-01-01");
        assert_eq!(records[0].trans_no, "A1");
        assert_eq!(records[0].detail, "Lunch");
    }

    #[test]
    fn test_stray_quotes_are_kept() {
        let input = "date_time,trans_no,credit,debit,detail\n2024-01-01,A1,$5,$0,Joe's 12\" pizza\n";
        let records = CsvLedgerParser::parse(input).unwrap();
        assert_eq!(records[0].detail, "Joe's 12\" pizza");
    }

    #[test]
    fn test_blank_lines_skipped() {
        let input = "date_time,trans_no,credit,debit,detail\n\n2024-01-01,A1,$5,$0,Lunch\n   \n2024-01-02,A2,$6,$0,Dinner\n\n";
        let records = CsvLedgerParser::parse(input).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].trans_no, "A2");
    }

    #[test]
    fn test_columns_matched_by_name() {
        let input = "detail,debit,credit,trans_no,date_time,memo\nRent,$900,$0,R-1,2024-02-01,ignored\n";
        let records = CsvLedgerParser::parse(input).unwrap();
        assert_eq!(records[0].detail, "Rent");
        assert_eq!(records[0].date_time, "2024-02-01");
        assert_eq!(records[0].debit, "$900");
    }

    #[test]
    fn test_missing_column() {
        let input = "date_time,trans_no,credit,debit\n2024-01-01,A1,$5,$0\n";
        let err = CsvLedgerParser::parse(input).unwrap_err();
        assert!(matches!(err, ParseError::MissingColumn { ref column } if column == "detail"));
    }

    #[test]
    fn test_row_with_wrong_field_count() {
        let input = "date_time,trans_no,credit,debit,detail\n2024-01-01,A1,$5,$0,Lunch\n2024-01-02,A2,$6\n";
        let err = CsvLedgerParser::parse(input).unwrap_err();
        match err {
            ParseError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_content() {
        assert!(CsvLedgerParser::parse("").unwrap().is_empty());
        assert!(CsvLedgerParser::parse(&BOM.to_string()).unwrap().is_empty());
    }

    #[test]
    fn test_header_only() {
        let records = CsvLedgerParser::parse("date_time,trans_no,credit,debit,detail\n").unwrap();
        assert!(records.is_empty());
    }
}
