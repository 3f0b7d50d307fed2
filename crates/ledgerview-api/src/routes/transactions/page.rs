//! Transaction table page and its HTMX fragment
//!
//! The search box waits for a pause in typing before asking for a new
//! fragment, and every request from the view is synced on `#ledger-view`
//! with the `replace` strategy, so a newer request aborts an older one
//! still in flight.

use crate::{base_html, AppState};
use axum::extract::Query;
use axum::response::Html;
use ledgerview_core::{
    CoreError, DefaultErrorLogger, ErrorContext, ErrorLogger, SearchRequest, SortColumn,
    SortDirection, SortSpec, TransactionsResponse,
};
use ledgerview_utils::{escape_html, format_number, highlight};
use std::collections::HashMap;

/// Delay after the last keystroke before searching
pub const SEARCH_DEBOUNCE_MS: u64 = 1000;

const TARGET: &str = "#transactions-content";
const SYNC: &str = "#ledger-view:replace";

/// Full transactions page
pub async fn page_transactions(params: Query<HashMap<String, String>>) -> Html<String> {
    let request = SearchRequest::from_params(&params).unwrap_or_default();

    let content = format!(
        r#"<main id='ledger-view' class='max-w-6xl mx-auto p-6'>
    <h1 class='text-2xl font-bold mb-4'>Transactions</h1>
    <div class='mb-4'>
        <input type='search' name='q' value='{query}' placeholder='Search transactions...'
            class='w-full border rounded-lg px-4 py-2'
            hx-get='/transactions/list' hx-target='{target}' hx-sync='{sync}'
            hx-trigger='input changed delay:{delay}ms, search' hx-include='#sort-state'
            hx-indicator='#loading'>
    </div>
    {sort_state}
    <div id='loading' class='htmx-indicator text-gray-500 mb-2'>Loading...</div>
    <div id='transactions-content' hx-get='/transactions/list?{qs}' hx-trigger='load' hx-sync='{sync}'></div>
</main>"#,
        query = escape_html(&request.query),
        target = TARGET,
        sync = SYNC,
        delay = SEARCH_DEBOUNCE_MS,
        sort_state = render_sort_state(request.sort, false),
        qs = escape_html(&request.to_query_string(request.page)),
    );

    Html(base_html("Transactions", &content))
}

/// HTMX: Transaction table for a search request
pub async fn htmx_transactions_list(
    state: axum::extract::State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Html<String> {
    let context = ErrorContext::new("render_transactions")
        .with_data("params", serde_json::json!(params.0));

    let request = match SearchRequest::from_params(&params) {
        Ok(request) => request,
        Err(e) => {
            let error = CoreError::from(e);
            DefaultErrorLogger.log_error(&error, &context);
            return Html(render_error(&error.to_string()));
        }
    };

    match state.ledger.search(&request).await {
        Ok(response) => Html(render_transactions_table(&response, &request)),
        Err(e) => {
            DefaultErrorLogger.log_error(&e, &context);
            Html(render_error("Failed to search data"))
        }
    }
}

/// Table, pagination bar and updated sort state for one page
pub fn render_transactions_table(response: &TransactionsResponse, request: &SearchRequest) -> String {
    let mut html = String::from(
        "<div class='overflow-x-auto bg-white rounded-xl shadow-sm'><table class='min-w-full text-sm'><thead><tr>",
    );

    for column in SortColumn::ALL {
        let next = toggled_query(request, column);
        let arrow = match request.sort {
            Some(spec) if spec.column == column => match spec.direction {
                SortDirection::Asc => " ▲",
                SortDirection::Desc => " ▼",
            },
            _ => "",
        };
        html.push_str(&format!(
            r#"<th class='px-4 py-2 text-left cursor-pointer select-none' hx-get='/transactions/list?{}' hx-target='{}' hx-sync='{}'>{}{}</th>"#,
            escape_html(&next), TARGET, SYNC, column.label(), arrow
        ));
    }
    html.push_str("</tr></thead><tbody>");

    if response.records.is_empty() {
        html.push_str("<tr><td colspan='5' class='px-4 py-8 text-center text-gray-500'>No transactions found</td></tr>");
    }

    for tx in &response.records {
        html.push_str("<tr class='border-t hover:bg-gray-50'>");
        for value in tx.fields() {
            html.push_str(&format!(
                "<td class='px-4 py-2'>{}</td>",
                highlight(value, &request.query)
            ));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></div>");

    html.push_str(&render_pagination(response, request));
    html.push_str(&render_sort_state(request.sort, true));
    html
}

fn render_pagination(response: &TransactionsResponse, request: &SearchRequest) -> String {
    let button = |enabled: bool, page: i64, label: &str| {
        if enabled {
            format!(
                r#"<button class='px-3 py-1 border rounded hover:bg-gray-100' hx-get='/transactions/list?{}' hx-target='{}' hx-sync='{}'>{}</button>"#,
                escape_html(&request.to_query_string(page)), TARGET, SYNC, label
            )
        } else {
            format!("<button class='px-3 py-1 border rounded opacity-50' disabled>{}</button>", label)
        }
    };

    format!(
        r#"<div class='mt-4 flex items-center justify-between'>
    <span class='text-sm text-gray-500'>{} records</span>
    <div class='flex items-center gap-2'>{}<span class='text-sm'>Page {} of {}</span>{}</div>
</div>"#,
        format_number(response.total_records),
        button(response.has_previous(), response.current_page.saturating_sub(1), "Previous"),
        response.current_page,
        response.total_pages,
        button(response.has_next(), response.current_page.saturating_add(1), "Next"),
    )
}

/// Hidden inputs the search box sends along. Swapped out-of-band when
/// rendered inside a fragment.
fn render_sort_state(sort: Option<SortSpec>, out_of_band: bool) -> String {
    let (column, direction) = match sort {
        Some(spec) => (spec.column.to_string(), spec.direction.to_string()),
        None => (String::new(), String::new()),
    };
    format!(
        "<div id='sort-state'{}><input type='hidden' name='sortColumn' value='{}'><input type='hidden' name='sortDirection' value='{}'></div>",
        if out_of_band { " hx-swap-oob='true'" } else { "" },
        column,
        direction
    )
}

fn render_error(message: &str) -> String {
    format!(
        "<div class='bg-red-50 border border-red-200 rounded-lg p-4 text-red-700'>{}</div>",
        escape_html(message)
    )
}

/// Query string for a header click: same query and page, sort toggled on `column`
fn toggled_query(request: &SearchRequest, column: SortColumn) -> String {
    let next = SearchRequest {
        sort: Some(SortSpec::toggle(request.sort, column)),
        ..request.clone()
    };
    next.to_query_string(request.page)
}
