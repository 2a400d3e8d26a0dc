//! List view state: search filtering, page windows and the page-button
//! range.
//!
//! Every transition is a pure `(&ViewState, input) -> ViewState` function,
//! so the renderer only ever swaps one value for another.

use std::ops::RangeInclusive;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{Item, ItemPage};

/// Items per page.
pub const PAGE_SIZE: usize = 20;

/// Page-number buttons shown at once.
pub const MAX_PAGE_BUTTONS: usize = 5;

/// List-view sizing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub page_size: usize,
    pub max_page_buttons: usize,
    /// Cap on how many search matches are kept; `None` keeps all of them.
    pub search_limit: Option<usize>,
}

impl Default for Paging {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            max_page_buttons: MAX_PAGE_BUTTONS,
            search_limit: None,
        }
    }
}

/// Number of pages needed for `len` items.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// `offset`/`limit` pair for fetching one page from the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn for_page(page: usize, page_size: usize) -> Self {
        Self {
            offset: page.saturating_sub(1) * page_size,
            limit: page_size,
        }
    }
}

// ─── Page-button window ──────────────────────────────────────────────────────

/// Inclusive range of page numbers to render as buttons.
///
/// `start > end` means there is nothing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Center at most `max_buttons` page numbers on `current_page`, clamped to
/// `1..=total_pages`.
///
/// Near either edge the window slides (start moves back first) so that a
/// full `max_buttons` pages stay visible whenever there are that many.
pub fn pagination_window(current_page: usize, total_pages: usize, max_buttons: usize) -> PageWindow {
    if total_pages == 0 || max_buttons == 0 {
        return PageWindow { start: 1, end: 0 };
    }

    let half = max_buttons / 2;
    let mut start = current_page.saturating_sub(half).max(1);
    let end = (start + max_buttons - 1).min(total_pages);

    if (end + 1).saturating_sub(start) < max_buttons {
        start = (end + 1).saturating_sub(max_buttons).max(1);
    }

    PageWindow { start, end }
}

// ─── View state ──────────────────────────────────────────────────────────────

/// What the list view currently shows.
///
/// Invariants:
/// - `1 <= current_page <= max(total_pages, 1)`
/// - `displayed_items().len() <= paging.page_size`
/// - when not searching, the displayed items are a contiguous window of the
///   catalog; when searching, a window of the matches in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    catalog: Arc<[Item]>,
    /// Items matching `search_term`, or `None` when not searching.
    matches: Option<Arc<[Item]>>,
    displayed: Vec<Item>,
    current_page: usize,
    total_pages: usize,
    search_term: String,
    paging: Paging,
}

impl ViewState {
    /// First page of a freshly loaded catalog.
    pub fn new(items: Vec<Item>, paging: Paging) -> Self {
        let catalog: Arc<[Item]> = items.into();
        let total_pages = page_count(catalog.len(), paging.page_size);
        let displayed = window(&catalog, 1, paging.page_size);
        Self {
            catalog,
            matches: None,
            displayed,
            current_page: 1,
            total_pages,
            search_term: String::new(),
            paging,
        }
    }

    /// Start from one fetched batch.
    pub fn from_page(page: ItemPage, paging: Paging) -> Self {
        Self::new(page.items, paging)
    }

    /// Filter the catalog by `term` and show the first page of the result.
    ///
    /// Only the empty term restores the unfiltered catalog; any other term,
    /// whitespace included, is matched as given.
    pub fn apply_search(&self, term: &str) -> Self {
        let page_size = self.paging.page_size;

        if term.is_empty() {
            return Self {
                catalog: Arc::clone(&self.catalog),
                matches: None,
                displayed: window(&self.catalog, 1, page_size),
                current_page: 1,
                total_pages: page_count(self.catalog.len(), page_size),
                search_term: String::new(),
                paging: self.paging,
            };
        }

        let needle = term.to_lowercase();
        let limit = self.paging.search_limit.unwrap_or(usize::MAX);
        let matches: Arc<[Item]> = self
            .catalog
            .iter()
            .filter(|item| item.matches(&needle, term))
            .take(limit)
            .cloned()
            .collect();

        Self {
            catalog: Arc::clone(&self.catalog),
            displayed: window(&matches, 1, page_size),
            total_pages: page_count(matches.len(), page_size),
            matches: Some(matches),
            current_page: 1,
            search_term: term.to_string(),
            paging: self.paging,
        }
    }

    /// Show page `target` of the active list (matches when searching,
    /// otherwise the catalog). Out-of-range targets are clamped.
    pub fn change_page(&self, target: usize) -> Self {
        let page = target.clamp(1, self.total_pages.max(1));
        Self {
            displayed: window(self.source(), page, self.paging.page_size),
            current_page: page,
            ..self.clone()
        }
    }

    /// Page-number buttons for the current position.
    pub fn page_window(&self) -> PageWindow {
        pagination_window(self.current_page, self.total_pages, self.paging.max_page_buttons)
    }

    pub fn displayed_items(&self) -> &[Item] {
        &self.displayed
    }

    /// The full known catalog.
    pub fn all_items(&self) -> &[Item] {
        &self.catalog
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn paging(&self) -> Paging {
        self.paging
    }

    pub fn is_searching(&self) -> bool {
        self.matches.is_some()
    }

    /// Size of the list being paged through.
    pub fn match_count(&self) -> usize {
        self.source().len()
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    fn source(&self) -> &[Item] {
        self.matches.as_deref().unwrap_or(&self.catalog[..])
    }
}

/// Items on 1-based `page` of `items`.
fn window(items: &[Item], page: usize, page_size: usize) -> Vec<Item> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    items.iter().skip(start).take(page_size).cloned().collect()
}
