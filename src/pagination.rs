//! Page slicing and the page-number strip rendered under every listing.

use std::fmt::{Display, Formatter};

use serde::Serialize;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// Page strips with at most this many pages are rendered without ellipses.
const MAX_PAGES_WITHOUT_ELLIPSIS: usize = 5;

/// One entry of the page-number strip.
///
/// Serializes as the page number, or `null` for an ellipsis, so templates can
/// test the token with a plain `if`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl Display for PageToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageToken::Page(page) => write!(f, "{page}"),
            PageToken::Ellipsis => f.write_str("..."),
        }
    }
}

/// Number of pages needed for `total_items`; never less than one.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// A window over a slice of items.
#[derive(Debug, PartialEq, Eq)]
pub struct PageSlice<'a, T> {
    pub items: &'a [T],
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Returns the items visible on `current_page`.
///
/// The page is clamped before slicing: a page past the end shows the last
/// page rather than an empty one. A zero `page_size` is treated as one.
pub fn paginate<T>(items: &[T], page_size: usize, current_page: usize) -> PageSlice<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = clamp_page(current_page, total_pages);

    let start = ((page - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    PageSlice {
        items: &items[start..end],
        page,
        total_pages,
        total_items: items.len(),
    }
}

/// Builds the page-number strip for `current_page` out of `total_pages`.
///
/// Up to five pages are listed in full. Longer strips always show the first
/// and last page plus a three-page window around the current one, widened to
/// pages 2..=4 near the start and to the last four pages near the end.
pub fn page_tokens(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    if total_pages <= MAX_PAGES_WITHOUT_ELLIPSIS {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let mut tokens = vec![PageToken::Page(1)];

    let mut start = current_page.saturating_sub(1).max(2);
    let mut end = (current_page + 1).min(total_pages - 1);

    if current_page <= 3 {
        end = 4;
    }
    if current_page >= total_pages - 2 {
        start = total_pages - 3;
    }

    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((start..=end).map(PageToken::Page));
    if end < total_pages - 1 {
        tokens.push(PageToken::Ellipsis);
    }

    tokens.push(PageToken::Page(total_pages));
    tokens
}

/// One rendered page of a listing together with its navigation strip.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Empty when there is only one page, so no navigation is rendered.
    pub pages: Vec<PageToken>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize, total_items: usize) -> Self {
        let total_pages = total_pages.max(1);
        let page = clamp_page(current_page, total_pages);

        let pages = if total_pages > 1 {
            page_tokens(page, total_pages)
        } else {
            Vec::new()
        };

        Self {
            items,
            pages,
            page,
            total_pages,
            total_items,
            previous: (page > 1).then(|| page - 1),
            next: (page < total_pages).then(|| page + 1),
        }
    }
}
