//! Analytics sink abstraction.
//!
//! Analytics are fire-and-forget named events. The sink is injected into
//! the app rather than accessed through a global, so tests can pass a
//! [`NullAnalytics`] and assert on behavior without side effects.

/// Event names emitted by the library screens.
pub mod events {
    pub const LIBRARY_OPEN: &str = "space_library_open";
    pub const LIBRARY_FILTERS_APPLIED: &str = "space_library_filters_applied";
    pub const LIBRARY_FILTERS_RESET: &str = "space_library_filters_reset";
    pub const LIBRARY_NEXT_PAGE: &str = "space_library_next_page";
    pub const ITEM_DETAIL_OPEN: &str = "space_item_detail_open";
    pub const GALLERY_OPEN: &str = "images_gallery_open";
    pub const PLANET_DETAIL_OPEN: &str = "planet_detail_open";
}

/// Fire-and-forget sink for named analytics events.
pub trait AnalyticsSink: Send + Sync {
    /// Record one named event. Must not block or fail.
    fn send(&self, event: &str);
}

/// Production sink that records events on the tracing pipeline.
#[derive(Debug, Clone, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn send(&self, event: &str) {
        tracing::info!(target: "analytics", event);
    }
}

/// No-op sink for tests.
#[derive(Debug, Clone, Default)]
pub struct NullAnalytics;

impl AnalyticsSink for NullAnalytics {
    fn send(&self, _event: &str) {}
}
