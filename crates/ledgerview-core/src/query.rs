//! Query-string validation
//!
//! Raw request parameters are turned into a typed [`SearchRequest`] before
//! the pipeline runs. `page` is lenient (it never fails, see
//! [`parse_page`]); the sort parameters must name a known column and
//! direction.

use crate::types::{SortColumn, SortDirection, SortSpec};
use std::collections::HashMap;
use thiserror::Error;

/// Parameter validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid sortColumn: {value}")]
    InvalidSortColumn { value: String },

    #[error("Invalid sortDirection: {value}")]
    InvalidSortDirection { value: String },
}

/// Validated pipeline input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Keyword; empty means no filtering
    pub query: String,
    /// 1-indexed page number, passed through unclamped
    pub page: i64,
    pub sort: Option<SortSpec>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            sort: None,
        }
    }
}

impl SearchRequest {
    /// Plain page fetch: no filter, no sort
    pub fn page(page: i64) -> Self {
        Self { page, ..Self::default() }
    }

    /// Build from `q`, `page`, `sortColumn` and `sortDirection`.
    ///
    /// Sorting applies only when both sort parameters are present and
    /// non-empty; each one that is present must still be valid.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, QueryError> {
        let query = params.get("q").cloned().unwrap_or_default();
        let page = parse_page(params.get("page").map(String::as_str));

        let column = non_empty(params, "sortColumn")
            .map(|value| {
                value.parse::<SortColumn>()
                    .map_err(|_| QueryError::InvalidSortColumn { value: value.to_string() })
            })
            .transpose()?;

        let direction = non_empty(params, "sortDirection")
            .map(|value| {
                value.parse::<SortDirection>()
                    .map_err(|_| QueryError::InvalidSortDirection { value: value.to_string() })
            })
            .transpose()?;

        let sort = match (column, direction) {
            (Some(column), Some(direction)) => Some(SortSpec::new(column, direction)),
            _ => None,
        };

        Ok(Self { query, page, sort })
    }

    /// Query-string form of this request with another page number
    pub fn to_query_string(&self, page: i64) -> String {
        let mut parts = vec![format!("page={}", page)];
        if !self.query.is_empty() {
            parts.insert(0, format!("q={}", urlencoding::encode(&self.query)));
        }
        if let Some(spec) = self.sort {
            parts.push(format!("sortColumn={}", spec.column));
            parts.push(format!("sortDirection={}", spec.direction));
        }
        parts.join("&")
    }
}

fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// Read a page number the way a lenient integer parse would.
///
/// Leading whitespace and a sign are accepted, then as many digits as
/// follow (`"3abc"` is page 3). Missing or non-numeric input falls back
/// to page 1; a number too large for `i64` saturates, so it still lands
/// past the last page.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };

    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(&['+', '-'][..]));
    let digits = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    if digits == 0 {
        return 1;
    }

    let number = &trimmed[..sign_len + digits];
    number.parse().unwrap_or(if number.starts_with('-') { i64::MIN } else { i64::MAX })
}
