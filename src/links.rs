use std::fmt::Display;

use serde::Serialize;

use crate::meta::PaginationMeta;

/// Shareable URLs for the first, last and neighbouring pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationLinks {
    pub first: String,
    pub last: String,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Build navigation links for `meta` under `base_url`.
///
/// `params` are carried on every link in the order given, followed by
/// `page` and `limit`. A `page` or `limit` key in `params` keeps its
/// position but takes the link's own value. Keys and values are
/// percent-encoded (a space becomes `%20`). A `base_url` that already has
/// a query string is extended with `&` instead of a second `?`.
pub fn build_links<I, K, V>(base_url: &str, meta: &PaginationMeta, params: I) -> PaginationLinks
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let extra: Vec<(String, String)> = params
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_string(), v.to_string()))
        .collect();
    let url = |page: u64| page_url(base_url, &extra, page, meta.limit);

    PaginationLinks {
        first: url(1),
        last: url(meta.total_pages),
        next: meta.next_page.filter(|_| meta.has_next).map(url),
        prev: meta.prev_page.filter(|_| meta.has_prev).map(url),
    }
}

fn page_url(base_url: &str, extra: &[(String, String)], page: u64, limit: u64) -> String {
    let mut pairs: Vec<(&str, String)> = extra
        .iter()
        .map(|(k, v)| (k.as_str(), v.clone()))
        .collect();
    set_param(&mut pairs, "page", page.to_string());
    set_param(&mut pairs, "limit", limit.to_string());

    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    if base_url.contains('?') {
        format!("{base_url}&{query}")
    } else {
        format!("{base_url}?{query}")
    }
}

fn set_param<'a>(pairs: &mut Vec<(&'a str, String)>, key: &'a str, value: String) {
    match pairs.iter_mut().find(|(k, _)| *k == key) {
        Some(slot) => slot.1 = value,
        None => pairs.push((key, value)),
    }
}
