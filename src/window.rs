/// Number of page links shown in a pagination bar unless asked otherwise.
pub const DEFAULT_MAX_VISIBLE: u64 = 5;

/// Page numbers to display in a pagination bar around `current_page`.
///
/// The run is contiguous, never leaves `1..=total_pages` and holds
/// `min(total_pages, max_visible)` entries. With an even `max_visible`
/// the extra slot goes before the current page.
pub fn window_page_numbers(current_page: u64, total_pages: u64, max_visible: u64) -> Vec<u64> {
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }

    if max_visible == 0 {
        return Vec::new();
    }

    // total_pages > max_visible here, so neither bound can overflow.
    let half = max_visible / 2;
    let start = current_page
        .saturating_sub(half)
        .max(1)
        .min(total_pages - max_visible + 1);
    let end = start + (max_visible - 1);

    (start..=end).collect()
}
