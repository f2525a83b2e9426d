pub mod config;
pub mod error;
pub mod links;
pub mod meta;
pub mod options;
pub mod paginator;
pub mod validate;
pub mod window;

use std::sync::LazyLock;

pub use config::{PaginationConfig, PaginationConfigUpdate};
pub use links::{PaginationLinks, build_links};
pub use meta::{PaginationMeta, PaginationResult, compute_meta, compute_offset, format_response};
pub use options::{NormalizedOptions, PaginationOptions, normalize};
pub use paginator::{Paginator, QueryOptions};
pub use validate::{ValidationIssue, ValidationReport, validate_options};
pub use window::{DEFAULT_MAX_VISIBLE, window_page_numbers};

/// Process-wide paginator with the default configuration.
///
/// A convenience for callers that do not carry their own [`Paginator`].
/// `update_config` on it affects every user in the process.
pub static PAGINATION: LazyLock<Paginator> = LazyLock::new(Paginator::default);
