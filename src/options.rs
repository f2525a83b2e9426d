use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;

/// Raw, caller-supplied pagination request.
///
/// Values are taken as-is: missing, zero, negative, fractional or NaN are
/// all accepted here and sorted out by [`normalize`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct PaginationOptions {
    #[serde(default)]
    pub page: Option<f64>,
    #[serde(default)]
    pub limit: Option<f64>,
}

/// Page and limit after defaulting and clamping. Only built by [`normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NormalizedOptions {
    page: u64,
    limit: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid {field} value: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("query string is not valid UTF-8 after decoding")]
    Decode(#[from] std::string::FromUtf8Error),
}

impl PaginationOptions {
    pub fn new(page: impl Into<f64>, limit: impl Into<f64>) -> Self {
        Self {
            page: Some(page.into()),
            limit: Some(limit.into()),
        }
    }

    pub fn with_page(page: impl Into<f64>) -> Self {
        Self {
            page: Some(page.into()),
            limit: None,
        }
    }

    pub fn with_limit(limit: impl Into<f64>) -> Self {
        Self {
            page: None,
            limit: Some(limit.into()),
        }
    }

    /// Parse `page` and `limit` out of a URL query string such as
    /// `?page=2&limit=10&sort=name`. Other keys are ignored, empty values
    /// count as absent.
    pub fn from_query(query: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key)?;
            let (slot, field) = match key.as_str() {
                "page" => (&mut options.page, "page"),
                "limit" => (&mut options.limit, "limit"),
                _ => continue,
            };
            let value = decode_component(value)?;
            let value = value.trim();
            *slot = if value.is_empty() {
                None
            } else {
                Some(value.parse().map_err(|_| OptionsError::InvalidNumber {
                    field,
                    value: value.to_string(),
                })?)
            };
        }
        Ok(options)
    }
}

fn decode_component(raw: &str) -> Result<String, OptionsError> {
    let spaced = raw.replace('+', " ");
    Ok(urlencoding::decode(&spaced)?.into_owned())
}

impl NormalizedOptions {
    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl From<NormalizedOptions> for PaginationOptions {
    fn from(options: NormalizedOptions) -> Self {
        Self::new(options.page as f64, options.limit as f64)
    }
}

/// Default, truncate and clamp raw options into a usable page/limit pair.
///
/// A supplied `0` (or NaN) counts as "not supplied" and falls back to the
/// configured default. Never fails.
pub fn normalize(options: &PaginationOptions, config: &PaginationConfig) -> NormalizedOptions {
    let raw_page = supplied(options.page).unwrap_or(config.default_page as f64);
    let raw_limit = supplied(options.limit).unwrap_or(config.default_limit as f64);

    let page = raw_page.floor().max(1.0) as u64;
    // Truncate first, then clamp as max(min, min(max, x)).
    let limit = (raw_limit.floor().min(config.max_limit as f64) as u64).max(config.min_limit);

    NormalizedOptions { page, limit }
}

fn supplied(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
