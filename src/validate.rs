use serde::{Serialize, Serializer};

use crate::config::PaginationConfig;
use crate::options::{NormalizedOptions, PaginationOptions, normalize};

/// A rule broken by a raw pagination request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("Page must be greater than 0")]
    PageTooSmall,
    #[error("Limit must be at least {min}")]
    LimitTooSmall { min: u64 },
    #[error("Limit cannot exceed {max}")]
    LimitTooLarge { max: u64 },
    #[error("Invalid pagination options")]
    Malformed,
}

impl Serialize for ValidationIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub normalized: NormalizedOptions,
}

impl ValidationReport {
    pub(crate) fn new(errors: Vec<ValidationIssue>, normalized: NormalizedOptions) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            normalized,
        }
    }

    /// Error messages in the order the rules were checked.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Check the raw request against the configured bounds.
///
/// Unlike [`normalize`], an explicitly supplied out-of-range value is
/// reported instead of being clamped. Only supplied fields are checked and
/// every broken rule is listed. `normalized` is filled in either way.
pub fn validate_options(
    options: &PaginationOptions,
    config: &PaginationConfig,
) -> ValidationReport {
    let mut errors = Vec::new();

    if options.page.is_some_and(|page| page < 1.0) {
        errors.push(ValidationIssue::PageTooSmall);
    }
    if let Some(limit) = options.limit {
        if limit < config.min_limit as f64 {
            errors.push(ValidationIssue::LimitTooSmall {
                min: config.min_limit,
            });
        }
        if limit > config.max_limit as f64 {
            errors.push(ValidationIssue::LimitTooLarge {
                max: config.max_limit,
            });
        }
    }

    ValidationReport::new(errors, normalize(options, config))
}
