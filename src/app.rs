//! Application state and orchestration.
//!
//! `App` is the single writer for all mutable state: the library query
//! state, the planet list, the current screen and any visible alert.
//! Network fetches run on background tasks and report back through the
//! mpsc channel as [`AppMessage`]s; the event loop hands each message to
//! [`App::handle_message`] on the same task that draws the UI, so no
//! state mutation ever races a render.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;
use tracing::warn;

use crate::models::{MediaType, Planet, SpaceLibraryFilters};
use crate::provider::SpaceLibraryClient;
use crate::state::{PageRequest, SpaceLibraryState};
use crate::traits::analytics::events;
use crate::traits::AnalyticsSink;

/// Generic failure message shown for any request that fails.
pub const GENERIC_ERROR: &str = "Something went wrong, please try again.";

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Library,
    ItemDetail,
    PlanetDetail,
    Gallery,
}

/// Which input field, if any, is capturing keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Free-text search (`q` parameter).
    Search,
    /// Year range as `start-end`, either side optional.
    Years,
}

/// Messages delivered from background tasks to the app.
#[derive(Debug)]
pub enum AppMessage {
    /// A library page arrived.
    PageLoaded {
        generation: u64,
        replace: bool,
        items: crate::models::SpaceLibraryItems,
    },
    /// A library page fetch failed.
    PageFailed { generation: u64, error: String },
    /// Media asset URLs resolved for the selected item.
    MediaUrlsLoaded { urls: Vec<String> },
    /// Media-URL resolution failed.
    MediaUrlsFailed { error: String },
    /// The planets document arrived.
    PlanetsLoaded { planets: Vec<Planet> },
    /// The planets document could not be fetched.
    PlanetsFailed { error: String },
}

/// The filter controls as currently shown in the filter bar.
///
/// This mirrors the on-screen controls rather than the wire format;
/// [`FilterBar::to_filters`] converts it into a page-1 filter set.
#[derive(Debug, Clone, Default)]
pub struct FilterBar {
    pub search_text: Option<String>,
    pub year_start: Option<String>,
    pub year_end: Option<String>,
    pub media_types: Vec<MediaType>,
}

impl FilterBar {
    pub fn is_empty(&self) -> bool {
        self.search_text.is_none()
            && self.year_start.is_none()
            && self.year_end.is_none()
            && self.media_types.is_empty()
    }

    /// Build the page-1 filter set for the current controls.
    pub fn to_filters(&self) -> SpaceLibraryFilters {
        let mut filters = SpaceLibraryFilters::new(1);
        filters.search_text = self.search_text.clone();
        filters.year_start = self.year_start.clone();
        filters.year_end = self.year_end.clone();
        if !self.media_types.is_empty() {
            filters.media_types = Some(self.media_types.clone());
        }
        filters
    }

    /// Cycle the media-type constraint: all → image → video → audio → all.
    pub fn cycle_media_type(&mut self) {
        self.media_types = match self.media_types.first() {
            None => vec![MediaType::Image],
            Some(MediaType::Image) => vec![MediaType::Video],
            Some(MediaType::Video) => vec![MediaType::Audio],
            Some(MediaType::Audio) => vec![],
        };
    }
}

/// Top-level application state.
pub struct App {
    /// Library query state: mode, page counter, reload flag, items.
    pub library: SpaceLibraryState,
    /// Filter controls as shown in the filter bar.
    pub filter_bar: FilterBar,
    /// Planets for the planet-detail screen (empty until loaded).
    pub planets: Vec<Planet>,
    /// Current screen.
    pub screen: Screen,
    /// Selected row in the library grid.
    pub selected: usize,
    /// Selected planet on the planet screen.
    pub planet_index: usize,
    /// Asset URLs for the gallery screen.
    pub gallery_urls: Vec<String>,
    /// Selected entry in the gallery.
    pub gallery_index: usize,
    /// Visible alert message, if any.
    pub alert: Option<String>,
    /// Which input field is capturing keystrokes.
    pub input_mode: InputMode,
    /// Buffer for the active input field.
    pub input_buffer: String,
    /// Whether a replace-the-list load is in flight (HUD).
    pub loading: bool,
    /// Flag to track if the app should quit.
    pub should_quit: bool,
    /// Tick counter for the loading spinner.
    pub tick_count: u64,
    /// Sender side of the message channel (clone into spawned tasks).
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    client: Arc<SpaceLibraryClient>,
    analytics: Arc<dyn AnalyticsSink>,
}

impl App {
    /// Create the app plus the receiver half of its message channel.
    ///
    /// The caller owns the receiver and feeds messages back through
    /// [`App::handle_message`].
    pub fn new(
        client: Arc<SpaceLibraryClient>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> (Self, mpsc::UnboundedReceiver<AppMessage>) {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let app = Self {
            library: SpaceLibraryState::new(),
            filter_bar: FilterBar::default(),
            planets: Vec::new(),
            screen: Screen::Library,
            selected: 0,
            planet_index: 0,
            gallery_urls: Vec::new(),
            gallery_index: 0,
            alert: None,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            loading: false,
            should_quit: false,
            tick_count: 0,
            message_tx,
            client,
            analytics,
        };

        (app, message_rx)
    }

    /// Kick off the initial library load and the planets fetch.
    pub fn start(&mut self) {
        self.analytics.send(events::LIBRARY_OPEN);

        self.loading = true;
        let request = self.library.begin();
        self.spawn_page_fetch(request);

        if self.client.config().planets_url.is_some() {
            self.spawn_planets_fetch();
        }
    }

    /// Spawn a background fetch for one library page.
    fn spawn_page_fetch(&self, request: PageRequest) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match client.get_library(&request.endpoint).await {
                Ok(items) => AppMessage::PageLoaded {
                    generation: request.generation,
                    replace: request.replace,
                    items,
                },
                Err(err) => AppMessage::PageFailed {
                    generation: request.generation,
                    error: err.to_string(),
                },
            };
            let _ = tx.send(message);
        });
    }

    fn spawn_planets_fetch(&self) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match client.get_planets().await {
                Ok(planets) => AppMessage::PlanetsLoaded { planets },
                Err(err) => AppMessage::PlanetsFailed {
                    error: err.to_string(),
                },
            };
            let _ = tx.send(message);
        });
    }

    fn spawn_media_urls_fetch(&self, json_url: String) {
        let client = self.client.clone();
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let message = match client.get_media_urls(&json_url).await {
                Ok(urls) => AppMessage::MediaUrlsLoaded { urls },
                Err(err) => AppMessage::MediaUrlsFailed {
                    error: err.to_string(),
                },
            };
            let _ = tx.send(message);
        });
    }

    /// Apply the current filter-bar controls from page 1.
    pub fn apply_filters(&mut self) {
        self.analytics.send(events::LIBRARY_FILTERS_APPLIED);
        self.loading = true;
        let request = self.library.apply_filters(self.filter_bar.to_filters());
        self.spawn_page_fetch(request);
    }

    /// Clear the filter bar and restore default-mode accumulation.
    pub fn reset_filters(&mut self) {
        self.analytics.send(events::LIBRARY_FILTERS_RESET);
        self.filter_bar = FilterBar::default();
        self.loading = true;
        let request = self.library.begin();
        self.spawn_page_fetch(request);
    }

    /// Near-bottom scroll: grow the placeholder row and fetch the next page.
    pub fn load_next_page(&mut self) {
        if let Some(request) = self.library.request_next_page() {
            self.analytics.send(events::LIBRARY_NEXT_PAGE);
            self.spawn_page_fetch(request);
        }
    }

    /// Process one message from a background task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PageLoaded {
                generation,
                replace,
                items,
            } => {
                let merged =
                    self.library
                        .complete_page(generation, items.collection.space_items, replace);
                if merged {
                    self.loading = false;
                    if replace {
                        // scroll to top of the fresh list
                        self.selected = 0;
                    }
                }
            }
            AppMessage::PageFailed { generation, error } => {
                if self.library.fail_page(generation) {
                    self.loading = false;
                    warn!(error = %error, "library page fetch failed");
                    self.alert = Some(GENERIC_ERROR.to_string());
                }
            }
            AppMessage::MediaUrlsLoaded { urls } => {
                self.gallery_urls = urls;
                self.gallery_index = 0;
                self.screen = Screen::Gallery;
            }
            AppMessage::MediaUrlsFailed { error } => {
                warn!(error = %error, "media URL resolution failed");
                self.alert = Some(GENERIC_ERROR.to_string());
            }
            AppMessage::PlanetsLoaded { planets } => {
                self.planets = planets;
            }
            AppMessage::PlanetsFailed { error } => {
                // planets are supplementary; no alert for a failed load
                warn!(error = %error, "planets fetch failed");
            }
        }
    }

    /// Process one key event.
    pub fn on_key(&mut self, key: KeyEvent) {
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(_)) {
                self.alert = None;
            }
            return;
        }

        match self.input_mode {
            InputMode::Normal => self.on_key_normal(key),
            InputMode::Search | InputMode::Years => self.on_key_input(key),
        }
    }

    fn on_key_normal(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Library => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
                KeyCode::Enter => self.open_detail(),
                KeyCode::Char('g') => self.open_gallery(),
                KeyCode::Char('/') => {
                    self.input_mode = InputMode::Search;
                    self.input_buffer = self.filter_bar.search_text.clone().unwrap_or_default();
                }
                KeyCode::Char('y') => {
                    self.input_mode = InputMode::Years;
                    self.input_buffer.clear();
                }
                KeyCode::Char('f') => {
                    self.filter_bar.cycle_media_type();
                    self.apply_filters();
                }
                KeyCode::Char('r') => self.reset_filters(),
                KeyCode::Char('p') => {
                    if !self.planets.is_empty() {
                        self.analytics.send(events::PLANET_DETAIL_OPEN);
                        self.screen = Screen::PlanetDetail;
                    }
                }
                _ => {}
            },
            Screen::ItemDetail => match key.code {
                KeyCode::Esc => self.screen = Screen::Library,
                KeyCode::Char('g') => self.open_gallery(),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::PlanetDetail => match key.code {
                KeyCode::Esc => self.screen = Screen::Library,
                KeyCode::Right | KeyCode::Char('j') => {
                    if self.planet_index + 1 < self.planets.len() {
                        self.planet_index += 1;
                    }
                }
                KeyCode::Left | KeyCode::Char('k') => {
                    self.planet_index = self.planet_index.saturating_sub(1);
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Screen::Gallery => match key.code {
                KeyCode::Esc => self.screen = Screen::Library,
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.gallery_index + 1 < self.gallery_urls.len() {
                        self.gallery_index += 1;
                    }
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.gallery_index = self.gallery_index.saturating_sub(1);
                }
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
        }
    }

    fn on_key_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            KeyCode::Enter => {
                let buffer = std::mem::take(&mut self.input_buffer);
                match self.input_mode {
                    InputMode::Search => {
                        self.filter_bar.search_text = if buffer.trim().is_empty() {
                            None
                        } else {
                            Some(buffer.trim().to_string())
                        };
                    }
                    InputMode::Years => {
                        let (start, end) = parse_year_range(&buffer);
                        self.filter_bar.year_start = start;
                        self.filter_bar.year_end = end;
                    }
                    InputMode::Normal => {}
                }
                self.input_mode = InputMode::Normal;
                self.apply_filters();
            }
            _ => {}
        }
    }

    /// Move the selection down; moving past the last row is the
    /// near-bottom trigger that requests the next page.
    fn select_next(&mut self) {
        let count = self.library.item_count();
        if count == 0 {
            return;
        }

        if self.selected + 1 < count {
            self.selected += 1;
        } else {
            self.load_next_page();
        }
    }

    fn open_detail(&mut self) {
        if self.library.item(self.selected).is_some() {
            self.analytics.send(events::ITEM_DETAIL_OPEN);
            self.screen = Screen::ItemDetail;
        }
    }

    /// Resolve and show the asset URLs behind the selected item.
    fn open_gallery(&mut self) {
        if let Some(item) = self.library.item(self.selected) {
            self.analytics.send(events::GALLERY_OPEN);
            self.spawn_media_urls_fetch(item.href.clone());
        }
    }

    /// Advance the animation tick.
    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }
}

/// Parse a `start-end` year range; either side may be blank.
fn parse_year_range(input: &str) -> (Option<String>, Option<String>) {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return (None, None);
    }

    match trimmed.split_once('-') {
        Some((start, end)) => {
            let clean = |s: &str| {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            };
            (clean(start), clean(end))
        }
        // a single year constrains only the start
        None => (Some(trimmed.to_string()), None),
    }
}
