use serde::{Deserialize, Serialize};

use crate::options::NormalizedOptions;

/// Navigation metadata for one page of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

/// A page of items together with its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaginationResult<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Derive total pages and next/prev navigation for `total` items.
///
/// A page past the end is kept as-is: it just has no next page.
pub fn compute_meta(options: &NormalizedOptions, total: u64) -> PaginationMeta {
    let page = options.page();
    let limit = options.limit();
    // A zero limit is only reachable through a zeroed config.
    let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
    let has_next = page < total_pages;
    let has_prev = page > 1;

    PaginationMeta {
        page,
        limit,
        total,
        total_pages,
        has_next,
        has_prev,
        next_page: has_next.then(|| page + 1),
        prev_page: has_prev.then(|| page - 1),
    }
}

/// Number of items to skip before `page` starts.
pub fn compute_offset(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(limit)
}

/// Wrap an already sliced page with its metadata.
pub fn format_response<T>(data: Vec<T>, pagination: PaginationMeta) -> PaginationResult<T> {
    PaginationResult { data, pagination }
}
