//! Column and sort direction types

use ledgerview_parser::Transaction;
use serde::{Deserialize, Serialize};

/// How a column's text is interpreted when ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Calendar timestamp
    Date,
    /// Currency amount with symbols and separators
    Currency,
    /// Plain text
    Text,
}

/// Sortable ledger column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    DateTime,
    TransNo,
    Credit,
    Debit,
    Detail,
}

impl SortColumn {
    /// All columns in display order
    pub const ALL: [SortColumn; 5] = [
        SortColumn::DateTime,
        SortColumn::TransNo,
        SortColumn::Credit,
        SortColumn::Debit,
        SortColumn::Detail,
    ];

    pub fn kind(&self) -> ColumnKind {
        match self {
            SortColumn::DateTime => ColumnKind::Date,
            SortColumn::Credit | SortColumn::Debit => ColumnKind::Currency,
            SortColumn::TransNo | SortColumn::Detail => ColumnKind::Text,
        }
    }

    /// The field of `tx` this column reads
    pub fn value<'a>(&self, tx: &'a Transaction) -> &'a str {
        match self {
            SortColumn::DateTime => &tx.date_time,
            SortColumn::TransNo => &tx.trans_no,
            SortColumn::Credit => &tx.credit,
            SortColumn::Debit => &tx.debit,
            SortColumn::Detail => &tx.detail,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::DateTime => "date_time",
            SortColumn::TransNo => "trans_no",
            SortColumn::Credit => "credit",
            SortColumn::Debit => "debit",
            SortColumn::Detail => "detail",
        }
    }

    /// Header label, e.g. `Date time` for `date_time`
    pub fn label(&self) -> String {
        let name = self.as_str().replacen('_', " ", 1);
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl std::str::FromStr for SortColumn {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str() == s)
            .ok_or_else(|| format!("Invalid sort column: {}", s))
    }
}

impl std::fmt::Display for SortColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl Default for SortDirection {
    fn default() -> Self {
        SortDirection::Asc
    }
}

impl SortDirection {
    pub fn reverse(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(format!("Invalid sort direction: {}", s)),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Column plus direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Ordering after a click on `column`: flip when already sorted by it,
    /// otherwise start ascending
    pub fn toggle(current: Option<SortSpec>, column: SortColumn) -> Self {
        match current {
            Some(spec) if spec.column == column => Self::new(column, spec.direction.reverse()),
            _ => Self::new(column, SortDirection::Asc),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_from_str() {
        assert_eq!("date_time".parse::<SortColumn>().unwrap(), SortColumn::DateTime);
        assert_eq!("trans_no".parse::<SortColumn>().unwrap(), SortColumn::TransNo);
        assert_eq!("credit".parse::<SortColumn>().unwrap(), SortColumn::Credit);
        assert_eq!("debit".parse::<SortColumn>().unwrap(), SortColumn::Debit);
        assert_eq!("detail".parse::<SortColumn>().unwrap(), SortColumn::Detail);
        assert!("amount".parse::<SortColumn>().is_err());
        assert!("Credit".parse::<SortColumn>().is_err());
    }

    #[test]
    fn test_sort_column_kind() {
        assert_eq!(SortColumn::DateTime.kind(), ColumnKind::Date);
        assert_eq!(SortColumn::Credit.kind(), ColumnKind::Currency);
        assert_eq!(SortColumn::Debit.kind(), ColumnKind::Currency);
        assert_eq!(SortColumn::TransNo.kind(), ColumnKind::Text);
        assert_eq!(SortColumn::Detail.kind(), ColumnKind::Text);
    }

    #[test]
    fn test_sort_column_label() {
        assert_eq!(SortColumn::DateTime.label(), "Date time");
        assert_eq!(SortColumn::TransNo.label(), "Trans no");
        assert_eq!(SortColumn::Detail.label(), "Detail");
    }

    #[test]
    fn test_sort_direction() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("up".parse::<SortDirection>().is_err());
        assert_eq!(SortDirection::Asc.reverse(), SortDirection::Desc);
    }

    #[test]
    fn test_sort_spec_toggle() {
        let first = SortSpec::toggle(None, SortColumn::Credit);
        assert_eq!(first, SortSpec::new(SortColumn::Credit, SortDirection::Asc));

        let second = SortSpec::toggle(Some(first), SortColumn::Credit);
        assert_eq!(second.direction, SortDirection::Desc);

        let other = SortSpec::toggle(Some(second), SortColumn::Detail);
        assert_eq!(other, SortSpec::new(SortColumn::Detail, SortDirection::Asc));
    }
}
