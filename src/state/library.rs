//! Library query state and pagination.
//!
//! This is the single owner of the resident item list. It tracks the
//! current mode (default vs. filtered), the page counter, and the reload
//! flag that puts a trailing placeholder row in the grid while a next
//! page is in flight.
//!
//! Every mode change bumps a generation counter; completions carrying a
//! stale generation are discarded, so a fetch that was superseded by a
//! filter apply/reset can never append into the new mode's list.

use crate::models::{SpaceItem, SpaceLibraryFilters};
use crate::provider::endpoint::NasaLibraryEndpoint;

/// Current query mode of the library screen.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryMode {
    /// No filters: accumulating current-year results from page 1.
    Default,
    /// Explicit filter set: accumulating from page 1 under that set.
    Filtered(SpaceLibraryFilters),
}

/// A page fetch decided by the state machine.
///
/// `generation` must be echoed back on completion; `replace` says whether
/// the result overwrites the resident list (filter apply/reset) or
/// appends to it (pagination).
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub generation: u64,
    pub endpoint: NasaLibraryEndpoint,
    pub replace: bool,
}

/// State for the space-item grid.
#[derive(Debug, Clone)]
pub struct SpaceLibraryState {
    mode: QueryMode,
    page: u32,
    reload: bool,
    generation: u64,
    items: Vec<SpaceItem>,
}

impl SpaceLibraryState {
    pub fn new() -> Self {
        Self {
            mode: QueryMode::Default,
            page: 1,
            reload: false,
            generation: 0,
            items: Vec::new(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self.mode, QueryMode::Filtered(_))
    }

    pub fn filters(&self) -> Option<&SpaceLibraryFilters> {
        match &self.mode {
            QueryMode::Filtered(filters) => Some(filters),
            QueryMode::Default => None,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    /// Resident items, in response + arrival order.
    pub fn items(&self) -> &[SpaceItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn item(&self, position: usize) -> Option<&SpaceItem> {
        self.items.get(position)
    }

    /// Whether a next-page fetch is in flight (trailing placeholder row).
    pub fn reload_pending(&self) -> bool {
        self.reload
    }

    /// Grid row count: resident items plus the placeholder while loading.
    pub fn row_count(&self) -> usize {
        self.item_count() + usize::from(self.reload)
    }

    /// Start (or restart) default-mode accumulation from page 1.
    ///
    /// Used for the initial load and for filter reset; the completed page
    /// replaces the resident list wholesale.
    pub fn begin(&mut self) -> PageRequest {
        self.mode = QueryMode::Default;
        self.page = 1;
        self.reload = false;
        self.generation += 1;

        PageRequest {
            generation: self.generation,
            endpoint: NasaLibraryEndpoint::LibraryDefault { page: 1 },
            replace: true,
        }
    }

    /// Switch to filtered mode, accumulating from page 1 under `filters`.
    pub fn apply_filters(&mut self, filters: SpaceLibraryFilters) -> PageRequest {
        let filters = filters.for_page(1);
        self.mode = QueryMode::Filtered(filters.clone());
        self.page = 1;
        self.reload = false;
        self.generation += 1;

        PageRequest {
            generation: self.generation,
            endpoint: NasaLibraryEndpoint::LibraryFilters { filters },
            replace: true,
        }
    }

    /// Advance to the next page under the current mode.
    ///
    /// Sets the reload flag (the grid grows a trailing placeholder row)
    /// and returns the request to issue. Returns `None` while a fetch is
    /// already in flight.
    pub fn request_next_page(&mut self) -> Option<PageRequest> {
        if self.reload {
            return None;
        }

        self.page += 1;
        self.reload = true;

        let endpoint = match &self.mode {
            QueryMode::Default => NasaLibraryEndpoint::LibraryDefault { page: self.page },
            QueryMode::Filtered(filters) => NasaLibraryEndpoint::LibraryFilters {
                filters: filters.for_page(self.page),
            },
        };

        Some(PageRequest {
            generation: self.generation,
            endpoint,
            replace: false,
        })
    }

    /// Merge a completed page.
    ///
    /// Returns `false` (and changes nothing) when the completion is stale,
    /// i.e. its generation was superseded by a filter apply/reset. On a
    /// live completion the reload flag clears and the items either replace
    /// the resident list or append in arrival order; no dedupe, no resort.
    pub fn complete_page(
        &mut self,
        generation: u64,
        page_items: Vec<SpaceItem>,
        replace: bool,
    ) -> bool {
        if generation != self.generation {
            return false;
        }

        self.reload = false;

        if replace {
            self.items = page_items;
        } else {
            self.items.extend(page_items);
        }

        true
    }

    /// Record a failed page fetch.
    ///
    /// Returns `false` for stale completions. A live failure clears the
    /// reload flag and leaves the resident list untouched.
    pub fn fail_page(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }

        self.reload = false;
        true
    }
}

impl Default for SpaceLibraryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaType, SpaceItem, SpaceItemData};
    use chrono::{TimeZone, Utc};

    fn item(nasa_id: &str) -> SpaceItem {
        SpaceItem {
            href: format!("https://images-assets.nasa.gov/image/{nasa_id}/collection.json"),
            data: SpaceItemData {
                title: nasa_id.to_string(),
                nasa_id: nasa_id.to_string(),
                media_type: MediaType::Image,
                date_created: Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
                keywords: None,
                album: None,
                secondary_creator: None,
                description: None,
                photographer: None,
                location: None,
                center: None,
            },
            links: vec![],
        }
    }

    fn items(ids: &[&str]) -> Vec<SpaceItem> {
        ids.iter().map(|id| item(id)).collect()
    }

    #[test]
    fn begin_requests_default_page_one_as_replace() {
        let mut state = SpaceLibraryState::new();
        let req = state.begin();
        assert!(req.replace);
        assert_eq!(req.endpoint, NasaLibraryEndpoint::LibraryDefault { page: 1 });
        assert!(!state.is_filtered());
    }

    #[test]
    fn pagination_appends_in_arrival_order() {
        let mut state = SpaceLibraryState::new();
        let req = state.begin();
        assert!(state.complete_page(req.generation, items(&["a", "b"]), req.replace));

        let next = state.request_next_page().unwrap();
        assert!(!next.replace);
        assert_eq!(
            next.endpoint,
            NasaLibraryEndpoint::LibraryDefault { page: 2 }
        );
        assert!(state.reload_pending());
        assert_eq!(state.row_count(), 3);

        assert!(state.complete_page(next.generation, items(&["b", "c"]), next.replace));
        assert!(!state.reload_pending());
        // arrival order, duplicates kept
        let ids: Vec<_> = state.items().iter().map(|i| i.data.nasa_id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "b", "c"]);
        assert_eq!(state.row_count(), 4);
    }

    #[test]
    fn next_page_is_gated_while_in_flight() {
        let mut state = SpaceLibraryState::new();
        let req = state.begin();
        state.complete_page(req.generation, items(&["a"]), true);

        assert!(state.request_next_page().is_some());
        assert!(state.request_next_page().is_none());
    }

    #[test]
    fn apply_filters_replaces_wholesale_from_page_one() {
        let mut state = SpaceLibraryState::new();
        let req = state.begin();
        state.complete_page(req.generation, items(&["old1", "old2"]), true);

        let mut filters = SpaceLibraryFilters::new(7);
        filters.search_text = Some("mars".to_string());
        let req = state.apply_filters(filters);
        assert!(req.replace);
        assert!(state.is_filtered());
        assert_eq!(state.filters().unwrap().page, 1);

        state.complete_page(req.generation, items(&["new1"]), req.replace);
        let ids: Vec<_> = state.items().iter().map(|i| i.data.nasa_id.as_str()).collect();
        assert_eq!(ids, ["new1"]);
    }

    #[test]
    fn reset_restores_default_accumulation_from_page_one() {
        let mut state = SpaceLibraryState::new();
        let req = state.apply_filters(SpaceLibraryFilters::new(1));
        state.complete_page(req.generation, items(&["filtered"]), true);

        let req = state.begin();
        assert!(!state.is_filtered());
        assert_eq!(state.current_page(), 1);
        state.complete_page(req.generation, items(&["default"]), req.replace);
        let ids: Vec<_> = state.items().iter().map(|i| i.data.nasa_id.as_str()).collect();
        assert_eq!(ids, ["default"]);
    }

    #[test]
    fn filtered_next_page_advances_the_filter_page() {
        let mut state = SpaceLibraryState::new();
        let mut filters = SpaceLibraryFilters::new(1);
        filters.media_types = Some(vec![MediaType::Video]);
        let req = state.apply_filters(filters);
        state.complete_page(req.generation, items(&["v1"]), true);

        let next = state.request_next_page().unwrap();
        match next.endpoint {
            NasaLibraryEndpoint::LibraryFilters { filters } => {
                assert_eq!(filters.page, 2);
                assert_eq!(filters.media_types, Some(vec![MediaType::Video]));
            }
            other => panic!("unexpected endpoint {other:?}"),
        }
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut state = SpaceLibraryState::new();
        let old = state.begin();
        // filter applied before the default page arrived
        let new = state.apply_filters(SpaceLibraryFilters::new(1));

        assert!(!state.complete_page(old.generation, items(&["stale"]), old.replace));
        assert_eq!(state.item_count(), 0);

        assert!(state.complete_page(new.generation, items(&["live"]), new.replace));
        assert_eq!(state.item_count(), 1);
    }

    #[test]
    fn failure_clears_reload_and_keeps_items() {
        let mut state = SpaceLibraryState::new();
        let req = state.begin();
        state.complete_page(req.generation, items(&["a", "b"]), true);

        let next = state.request_next_page().unwrap();
        assert!(state.reload_pending());

        assert!(state.fail_page(next.generation));
        assert!(!state.reload_pending());
        assert_eq!(state.item_count(), 2);
        assert_eq!(state.row_count(), 2);
    }

    #[test]
    fn stale_failure_is_discarded() {
        let mut state = SpaceLibraryState::new();
        state.begin();
        let old_generation = 0;
        assert!(!state.fail_page(old_generation));
    }
}
