//! Page-number window for the pagination control.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Above this many pages the control collapses into a compact window.
pub const COMPACT_THRESHOLD: u32 = 7;
/// Pages shown on each side of the current page in compact mode.
pub const WINDOW_RADIUS: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page(u32),
    Ellipsis,
}

/// Page buttons to render for `current` out of `total` pages.
///
/// Every page up to the threshold; beyond it the first page, the last page,
/// and `current ± WINDOW_RADIUS`, with each gap collapsed to one ellipsis.
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    if total <= COMPACT_THRESHOLD {
        return (1..=total).map(PageItem::Page).collect();
    }

    let current = current.clamp(1, total);
    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = current.saturating_add(WINDOW_RADIUS).min(total);

    let mut pages: Vec<u32> = std::iter::once(1).chain(start..=end).chain(std::iter::once(total)).collect();
    pages.dedup();

    let mut items = Vec::with_capacity(pages.len() + 2);
    let mut previous = 0;
    for page in pages {
        if previous != 0 && page > previous + 1 {
            items.push(PageItem::Ellipsis);
        }
        items.push(PageItem::Page(page));
        previous = page;
    }
    items
}

pub fn has_previous(current: u32) -> bool {
    current > 1
}

pub fn has_next(current: u32, total: u32) -> bool {
    current < total
}
