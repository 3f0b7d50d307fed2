//! Transactions API endpoints - JSON responses
//!
//! Endpoints:
//! - api_transactions: One page in file order
//! - api_transactions_search: Keyword filter, optional sort, one page

use crate::{ApiError, AppState};
use axum::extract::Query;
use axum::Json;
use ledgerview_core::query::parse_page;
use ledgerview_core::{CoreError, DefaultErrorLogger, ErrorContext, ErrorLogger, SearchRequest, TransactionsResponse};
use std::collections::HashMap;

/// Get one page of transactions (JSON API)
pub async fn api_transactions(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let page = parse_page(params.get("page").map(String::as_str));

    match state.ledger.page(page).await {
        Ok(response) => {
            log::debug!("Returning page {} with {} records", page, response.records.len());
            Ok(Json(response))
        }
        Err(e) => {
            let context = ErrorContext::new("list_transactions")
                .with_data("page", serde_json::json!(page));
            DefaultErrorLogger.log_error(&e, &context);
            Err(ApiError::LoadFailed)
        }
    }
}

/// Search, sort and paginate transactions (JSON API)
pub async fn api_transactions_search(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    let context = ErrorContext::new("search_transactions")
        .with_data("params", serde_json::json!(params.0));

    let request = SearchRequest::from_params(&params).map_err(|e| {
        let error = CoreError::from(e);
        DefaultErrorLogger.log_error(&error, &context);
        ApiError::BadRequest { message: error.to_string() }
    })?;

    match state.ledger.search(&request).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            DefaultErrorLogger.log_error(&e, &context);
            Err(ApiError::SearchFailed)
        }
    }
}
