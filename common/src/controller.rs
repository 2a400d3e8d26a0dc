//! Page-level state machine for the catalog screen.
//!
//! [`ViewPhase`] replaces a set of independent loading/searching flags with
//! a single value. The detail page has its own outcome (found or not) and
//! does not go through here. [`CatalogController`] drives it from user events and
//! tags every catalog request with a [`Ticket`] so that only the latest
//! response is ever applied.

use tracing::{debug, info, warn};

use crate::catalog::ItemPage;
use crate::error::CatalogError;
use crate::view::{Paging, ViewState};

/// What the screen is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewPhase {
    #[default]
    Idle,
    Loading,
    Listing(ViewState),
    Searching(ViewState),
}

impl ViewPhase {
    /// `Listing` or `Searching` depending on whether a term is active.
    pub fn from_state(state: ViewState) -> Self {
        if state.is_searching() {
            ViewPhase::Searching(state)
        } else {
            ViewPhase::Listing(state)
        }
    }

    pub fn view_state(&self) -> Option<&ViewState> {
        match self {
            ViewPhase::Listing(state) | ViewPhase::Searching(state) => Some(state),
            ViewPhase::Idle | ViewPhase::Loading => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewPhase::Loading)
    }
}

// ─── Request sequencing ──────────────────────────────────────────────────────

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Monotonic generation counter; only the newest ticket is current.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

// ─── Controller ──────────────────────────────────────────────────────────────

/// Owns the catalog screen's [`ViewPhase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogController {
    phase: ViewPhase,
    tracker: RequestTracker,
    paging: Paging,
    /// Last term the user entered; re-applied when a new catalog arrives.
    term: String,
}

impl CatalogController {
    pub fn new(paging: Paging) -> Self {
        Self {
            phase: ViewPhase::Idle,
            tracker: RequestTracker::default(),
            paging,
            term: String::new(),
        }
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn state(&self) -> Option<&ViewState> {
        self.phase.view_state()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn paging(&self) -> Paging {
        self.paging
    }

    /// Replace the sizing rules; takes effect with the next loaded catalog.
    pub fn set_paging(&mut self, paging: Paging) {
        self.paging = paging;
    }

    /// Enter `Loading` and hand out the ticket the response must carry.
    pub fn begin_load(&mut self) -> Ticket {
        self.phase = ViewPhase::Loading;
        let ticket = self.tracker.issue();
        debug!(?ticket, "Catalog load started");
        ticket
    }

    /// Apply a catalog response.
    ///
    /// Responses for superseded tickets are dropped and `false` is returned.
    /// A failed load degrades to an empty catalog.
    pub fn complete_load(&mut self, ticket: Ticket, result: Result<ItemPage, CatalogError>) -> bool {
        if !self.tracker.is_current(ticket) {
            debug!(?ticket, "Dropping stale catalog response");
            return false;
        }

        let page = match result {
            Ok(page) => {
                info!("Catalog loaded: {} items", page.items.len());
                page
            }
            Err(e) => {
                warn!("Catalog load failed, showing empty list: {e}");
                ItemPage::empty()
            }
        };

        let state = ViewState::from_page(page, self.paging);
        let state = if self.term.is_empty() {
            state
        } else {
            state.apply_search(&self.term)
        };
        self.phase = ViewPhase::from_state(state);
        true
    }

    /// Apply the first catalog response, e.g. one rendered on the server.
    ///
    /// Only takes effect while nothing has been requested yet; returns
    /// whether it was applied.
    pub fn seed(&mut self, result: Result<ItemPage, CatalogError>) -> bool {
        if self.phase != ViewPhase::Idle {
            return false;
        }
        let ticket = self.begin_load();
        self.complete_load(ticket, result)
    }

    /// Filter by `term`. While loading, the term is kept for later.
    pub fn search(&mut self, term: &str) {
        self.term = term.to_string();
        if let Some(state) = self.phase.view_state() {
            self.phase = ViewPhase::from_state(state.apply_search(term));
        }
    }

    pub fn clear_search(&mut self) {
        self.search("");
    }

    /// Move to page `page` of the active list.
    pub fn go_to(&mut self, page: usize) {
        if let Some(state) = self.phase.view_state() {
            self.phase = ViewPhase::from_state(state.change_page(page));
        }
    }
}

impl Default for CatalogController {
    fn default() -> Self {
        Self::new(Paging::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Item;

    fn page(names: &[&str]) -> ItemPage {
        let items: Vec<Item> = names
            .iter()
            .enumerate()
            .map(|(i, name)| Item {
                id: i as u32 + 1,
                name: (*name).into(),
                source_url: String::new(),
                image_url: String::new(),
            })
            .collect();
        ItemPage {
            total_count: items.len(),
            items,
        }
    }

    fn numbered(n: usize) -> ItemPage {
        let names: Vec<String> = (1..=n).map(|i| format!("creature-{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        page(&refs)
    }

    #[test]
    fn test_load_lifecycle() {
        let mut ctl = CatalogController::default();
        assert_eq!(ctl.phase(), &ViewPhase::Idle);

        let ticket = ctl.begin_load();
        assert!(ctl.phase().is_loading());
        assert!(ctl.state().is_none());

        assert!(ctl.complete_load(ticket, Ok(numbered(45))));
        let ViewPhase::Listing(state) = ctl.phase() else {
            panic!("expected listing, got {:?}", ctl.phase());
        };
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.displayed_items().len(), 20);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut ctl = CatalogController::default();
        let slow = ctl.begin_load();
        let fast = ctl.begin_load();

        assert!(ctl.complete_load(fast, Ok(numbered(45))));
        assert!(!ctl.complete_load(slow, Ok(numbered(3))));
        assert_eq!(ctl.state().map(|s| s.all_items().len()), Some(45));
    }

    #[test]
    fn test_failed_load_degrades_to_empty() {
        let mut ctl = CatalogController::default();
        let ticket = ctl.begin_load();
        assert!(ctl.complete_load(ticket, Err(CatalogError::Transport("refused".into()))));

        let state = ctl.state().expect("listing");
        assert!(state.all_items().is_empty());
        assert_eq!(state.total_pages(), 0);
        assert_eq!(state.current_page(), 1);
    }

    #[test]
    fn test_search_switches_phase() {
        let mut ctl = CatalogController::default();
        let ticket = ctl.begin_load();
        ctl.complete_load(ticket, Ok(page(&["bulbasaur", "ivysaur", "venusaur", "charmander"])));

        ctl.search("saur");
        let ViewPhase::Searching(state) = ctl.phase() else {
            panic!("expected searching");
        };
        assert_eq!(state.match_count(), 3);

        ctl.clear_search();
        assert!(matches!(ctl.phase(), ViewPhase::Listing(_)));
        assert_eq!(ctl.term(), "");
    }

    #[test]
    fn test_term_entered_while_loading_is_applied() {
        let mut ctl = CatalogController::default();
        let ticket = ctl.begin_load();
        ctl.search("char");
        assert!(ctl.phase().is_loading());

        ctl.complete_load(ticket, Ok(page(&["bulbasaur", "charmander", "charizard"])));
        let state = ctl.state().expect("state");
        assert!(state.is_searching());
        assert_eq!(state.displayed_items().len(), 2);
    }

    #[test]
    fn test_go_to_page() {
        let mut ctl = CatalogController::default();
        let ticket = ctl.begin_load();
        ctl.complete_load(ticket, Ok(numbered(45)));

        ctl.go_to(3);
        let state = ctl.state().expect("state");
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.displayed_items().len(), 5);
    }

    #[test]
    fn test_events_before_load_are_ignored() {
        let mut ctl = CatalogController::default();
        ctl.go_to(2);
        assert_eq!(ctl.phase(), &ViewPhase::Idle);
    }

    #[test]
    fn test_paging_applies_to_next_load() {
        let mut ctl = CatalogController::default();
        ctl.set_paging(Paging {
            page_size: 10,
            ..Paging::default()
        });
        let ticket = ctl.begin_load();
        ctl.complete_load(ticket, Ok(numbered(45)));
        assert_eq!(ctl.state().map(|s| s.total_pages()), Some(5));
    }

    #[test]
    fn test_seed_only_applies_once() {
        let mut ctl = CatalogController::default();
        assert!(ctl.seed(Ok(numbered(45))));
        assert!(matches!(ctl.phase(), ViewPhase::Listing(_)));
        assert!(!ctl.seed(Ok(numbered(3))));
        assert_eq!(ctl.state().map(|s| s.all_items().len()), Some(45));
    }

    #[test]
    fn test_seed_after_reload_started_is_ignored() {
        let mut ctl = CatalogController::default();
        let ticket = ctl.begin_load();
        assert!(!ctl.seed(Ok(numbered(3))));
        assert!(ctl.phase().is_loading());
        assert!(ctl.complete_load(ticket, Ok(numbered(45))));
        assert_eq!(ctl.state().map(|s| s.all_items().len()), Some(45));
    }

    #[test]
    fn test_reload_after_seed_replaces_catalog() {
        let mut ctl = CatalogController::default();
        ctl.seed(Err(CatalogError::Transport("refused".into())));
        assert_eq!(ctl.state().map(|s| s.all_items().len()), Some(0));

        let ticket = ctl.begin_load();
        assert!(ctl.complete_load(ticket, Ok(numbered(45))));
        assert_eq!(ctl.state().map(|s| s.total_pages()), Some(3));
    }

    #[test]
    fn test_view_state_only_when_listed() {
        let mut ctl = CatalogController::default();
        assert!(ctl.phase().view_state().is_none());
        ctl.begin_load();
        assert!(ctl.phase().view_state().is_none());
        ctl.seed(Ok(numbered(1)));
        assert!(ctl.phase().view_state().is_none());
    }

    #[test]
    fn test_padded_term_while_loading_is_kept_verbatim() {
        let mut ctl = CatalogController::default();
        let ticket = ctl.begin_load();
        ctl.search(" char");
        ctl.complete_load(ticket, Ok(page(&["charmander", "charizard"])));
        let state = ctl.state().expect("state");
        assert!(state.is_searching());
        assert_eq!(state.search_term(), " char");
        assert!(state.displayed_items().is_empty());
    }

    #[test]
    fn test_tracker_sequence() {
        let mut tracker = RequestTracker::default();
        let a = tracker.issue();
        assert!(tracker.is_current(a));
        let b = tracker.issue();
        assert!(b > a);
        assert!(!tracker.is_current(a));
        assert!(tracker.is_current(b));
    }
}
