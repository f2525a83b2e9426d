use std::fmt::Display;
use std::sync::{PoisonError, RwLock};

use serde::Serialize;

use crate::config::{PaginationConfig, PaginationConfigUpdate};
use crate::links::{PaginationLinks, build_links};
use crate::meta::{PaginationMeta, PaginationResult, compute_meta, compute_offset};
use crate::options::{PaginationOptions, normalize};
use crate::validate::{ValidationIssue, ValidationReport, validate_options};
use crate::window::window_page_numbers;

/// Offset and limit to hand to a database query, plus the page they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryOptions {
    pub page: u64,
    pub limit: u64,
    pub offset: u64,
}

/// Pagination façade bound to one configuration.
///
/// The configuration is replaced as a whole under a lock, and every call
/// works from a single copy of it, so concurrent updates are never seen
/// half-applied.
#[derive(Debug, Default)]
pub struct Paginator {
    config: RwLock<PaginationConfig>,
}

impl Paginator {
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Slice one page out of `items` and describe it.
    ///
    /// Pages past the end yield an empty `data`, never an error.
    pub fn paginate<T: Clone>(
        &self,
        items: &[T],
        options: &PaginationOptions,
    ) -> PaginationResult<T> {
        let normalized = normalize(options, &self.config());
        let total = items.len();
        let offset = compute_offset(normalized.page(), normalized.limit());
        let start = usize::try_from(offset).unwrap_or(usize::MAX).min(total);
        let end = usize::try_from(normalized.limit())
            .unwrap_or(usize::MAX)
            .saturating_add(start)
            .min(total);

        tracing::debug!(
            "paginate page={} limit={} total={total} slice={start}..{end}",
            normalized.page(),
            normalized.limit()
        );

        PaginationResult {
            data: items[start..end].to_vec(),
            pagination: compute_meta(&normalized, total as u64),
        }
    }

    /// Metadata for a list whose items the caller counted on its own.
    pub fn create_meta(&self, options: &PaginationOptions, total: u64) -> PaginationMeta {
        compute_meta(&normalize(options, &self.config()), total)
    }

    pub fn query_options(&self, options: &PaginationOptions) -> QueryOptions {
        let normalized = normalize(options, &self.config());
        QueryOptions {
            page: normalized.page(),
            limit: normalized.limit(),
            offset: compute_offset(normalized.page(), normalized.limit()),
        }
    }

    pub fn page_numbers(
        &self,
        current_page: u64,
        total_pages: u64,
        max_visible: u64,
    ) -> Vec<u64> {
        window_page_numbers(current_page, total_pages, max_visible)
    }

    pub fn validate(&self, options: &PaginationOptions) -> ValidationReport {
        let report = validate_options(options, &self.config());
        if !report.is_valid {
            tracing::debug!("rejected pagination options: {:?}", report.messages());
        }
        report
    }

    /// Validate a raw URL query string. A value that is not a number makes
    /// the whole request invalid; it is reported, not returned as an error.
    pub fn validate_query(&self, query: &str) -> ValidationReport {
        match PaginationOptions::from_query(query) {
            Ok(options) => self.validate(&options),
            Err(e) => {
                tracing::debug!("malformed pagination query {query:?}: {e}");
                ValidationReport::new(
                    vec![ValidationIssue::Malformed],
                    normalize(&PaginationOptions::default(), &self.config()),
                )
            }
        }
    }

    pub fn create_links<I, K, V>(
        &self,
        base_url: &str,
        meta: &PaginationMeta,
        params: I,
    ) -> PaginationLinks
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        build_links(base_url, meta, params)
    }

    /// Merge `update` into the current configuration and publish it whole.
    pub fn update_config(&self, update: PaginationConfigUpdate) {
        let mut guard = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *guard = guard.merged(update);
        tracing::info!(
            "pagination config updated: default_page={} default_limit={} limit={}..={}",
            guard.default_page,
            guard.default_limit,
            guard.min_limit,
            guard.max_limit
        );
    }

    /// Copy of the current configuration.
    pub fn config(&self) -> PaginationConfig {
        *self.config.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<PaginationConfigUpdate> for Paginator {
    fn from(update: PaginationConfigUpdate) -> Self {
        Self::new(update.into())
    }
}
