//! Transaction routes - list, search, sort, pagination
//!
//! Structure:
//! - api.rs: JSON endpoints
//! - page.rs: Full page and HTMX table fragment

pub mod api;
pub mod page;

pub use api::{api_transactions, api_transactions_search};
pub use page::{htmx_transactions_list, page_transactions};
