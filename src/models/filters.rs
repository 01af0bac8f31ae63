//! User-specified constraints narrowing a library query.

use super::space_library::MediaType;

/// Filter set for a library query.
///
/// `media_types` is ordered: the endpoint joins the raw values with commas
/// in insertion order. `None` and an empty vec both result in no
/// `media_type` query parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SpaceLibraryFilters {
    pub page: u32,
    pub search_text: Option<String>,
    pub year_start: Option<String>,
    pub year_end: Option<String>,
    pub media_types: Option<Vec<MediaType>>,
}

impl SpaceLibraryFilters {
    /// Create an otherwise-empty filter set for the given page.
    pub fn new(page: u32) -> Self {
        Self {
            page,
            search_text: None,
            year_start: None,
            year_end: None,
            media_types: None,
        }
    }

    /// Copy of this filter set pointed at another page.
    pub fn for_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

impl Default for SpaceLibraryFilters {
    fn default() -> Self {
        Self::new(1)
    }
}
