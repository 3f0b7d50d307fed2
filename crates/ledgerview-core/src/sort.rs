//! Column-aware ordering of ledger records
//!
//! [`compare`] is the single comparator used wherever records are ordered,
//! by the JSON endpoints as well as the HTML table view.

use crate::time::parse_timestamp;
use crate::types::{ColumnKind, SortColumn, SortDirection, SortSpec};
use ledgerview_parser::Transaction;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::str::FromStr;

/// Sort records in place. `None` leaves the order untouched.
///
/// The sort is stable: records comparing equal keep their relative order.
pub fn sort(records: &mut [Transaction], spec: Option<SortSpec>) {
    if let Some(spec) = spec {
        records.sort_by(|a, b| compare(a, b, spec.column, spec.direction));
    }
}

/// Compare two records by `column`.
///
/// `Desc` swaps the operands of the ascending comparison.
pub fn compare(a: &Transaction, b: &Transaction, column: SortColumn, direction: SortDirection) -> Ordering {
    let (a, b) = match direction {
        SortDirection::Asc => (column.value(a), column.value(b)),
        SortDirection::Desc => (column.value(b), column.value(a)),
    };

    match column.kind() {
        ColumnKind::Date => compare_dates(a, b),
        ColumnKind::Currency => parse_monetary_value(a).cmp(&parse_monetary_value(b)),
        ColumnKind::Text => compare_text(a, b),
    }
}

/// Unparseable dates sort before every valid one
fn compare_dates(a: &str, b: &str) -> Ordering {
    parse_timestamp(a).cmp(&parse_timestamp(b))
}

/// Case-insensitive first; on a tie lowercase sorts before uppercase
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Read a currency string such as `$1,200.50` as a number.
///
/// Everything except digits, `.` and `-` is dropped and the leading numeric
/// part of what remains is parsed. Text without digits counts as zero;
/// amounts beyond the range of [`Decimal`] saturate to its bounds.
pub fn parse_monetary_value(value: &str) -> Decimal {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let number = leading_number(&cleaned);
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return Decimal::ZERO;
    }

    let normalized = if let Some(rest) = number.strip_prefix("-.") {
        format!("-0.{}", rest)
    } else if number.starts_with('.') {
        format!("0{}", number)
    } else {
        number.to_string()
    };

    Decimal::from_str(&normalized).unwrap_or(if number.starts_with('-') {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

/// Longest prefix of the form `-?digits(.digits)?` (or `-?.digits`)
fn leading_number(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > end + 1 {
            end = frac_end;
        }
    }

    &s[..end]
}
