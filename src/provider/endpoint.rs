//! Endpoint descriptors for the NASA library API.
//!
//! A descriptor is a pure value mapping one request intent to its wire
//! parameters: base path, relative path, method and query parameters. It
//! holds no state and performs no I/O.

use chrono::{Datelike, Utc};
use std::collections::HashMap;

use crate::config::AppConfig;
use crate::models::SpaceLibraryFilters;

const PARAM_SEARCH_TEXT: &str = "q";
const PARAM_YEAR_START: &str = "year_start";
const PARAM_YEAR_END: &str = "year_end";
const PARAM_MEDIA_TYPE: &str = "media_type";
const PARAM_PAGE: &str = "page";

/// Page number used to probe for the last page of results.
///
/// A heuristic "definitely past the end" value, not derived from an
/// actual item count.
pub const LAST_PAGE_SENTINEL: &str = "100";

/// HTTP method of a request. The library API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// One request intent against the library API.
#[derive(Debug, Clone, PartialEq)]
pub enum NasaLibraryEndpoint {
    /// Default library page: current year, no filters.
    LibraryDefault { page: u32 },
    /// Filtered library page.
    LibraryFilters { filters: SpaceLibraryFilters },
    /// Probe for the last page in default mode.
    LastPageDefault,
    /// Probe for the last page under a filter set.
    LastPageFilters { filters: SpaceLibraryFilters },
    /// Resolve the media asset URL list behind an item's collection document.
    MediaUrls { json_url: String },
}

impl NasaLibraryEndpoint {
    /// Config-resolved base path, already normalized to end with `/`.
    pub fn base_path<'a>(&self, config: &'a AppConfig) -> &'a str {
        &config.library_base_url
    }

    /// Relative path: empty for library queries, the given URL for
    /// media-URL resolution.
    pub fn path(&self) -> &str {
        match self {
            NasaLibraryEndpoint::MediaUrls { json_url } => json_url,
            _ => "",
        }
    }

    pub fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Query parameters for this request, or `None` when the request
    /// carries no query string.
    pub fn url_parameters(&self) -> Option<HashMap<String, String>> {
        let mut parameters = HashMap::new();

        match self {
            NasaLibraryEndpoint::LibraryDefault { page } => {
                parameters.insert(PARAM_YEAR_START.to_string(), current_year());
                parameters.insert(PARAM_PAGE.to_string(), page.to_string());
            }
            NasaLibraryEndpoint::LibraryFilters { filters }
            | NasaLibraryEndpoint::LastPageFilters { filters } => {
                parameters.insert(PARAM_PAGE.to_string(), filters.page.to_string());

                if let Some(search_text) = &filters.search_text {
                    parameters.insert(PARAM_SEARCH_TEXT.to_string(), search_text.clone());
                }

                if let Some(year_end) = &filters.year_end {
                    parameters.insert(PARAM_YEAR_END.to_string(), year_end.clone());
                }

                if let Some(year_start) = &filters.year_start {
                    parameters.insert(PARAM_YEAR_START.to_string(), year_start.clone());
                }

                let media_types = match &filters.media_types {
                    Some(media_types) => media_types,
                    None => return Some(parameters),
                };

                let mut media_types_string: Option<String> = None;

                for media_type in media_types {
                    media_types_string = Some(match media_types_string {
                        None => media_type.as_str().to_string(),
                        Some(joined) => format!("{},{}", joined, media_type.as_str()),
                    });
                }

                if let Some(media_types_string) = media_types_string {
                    parameters.insert(PARAM_MEDIA_TYPE.to_string(), media_types_string);
                }
            }
            NasaLibraryEndpoint::LastPageDefault => {
                parameters.insert(PARAM_YEAR_START.to_string(), current_year());
                parameters.insert(PARAM_PAGE.to_string(), LAST_PAGE_SENTINEL.to_string());
            }
            NasaLibraryEndpoint::MediaUrls { .. } => return None,
        }

        Some(parameters)
    }

    /// Full request URL: base path, relative path and encoded query string.
    ///
    /// Parameters are emitted in sorted key order so the URL is stable.
    pub fn url(&self, config: &AppConfig) -> String {
        let mut url = match self {
            NasaLibraryEndpoint::MediaUrls { .. } => self.path().to_string(),
            _ => format!("{}{}", self.base_path(config), self.path()),
        };

        if let Some(parameters) = self.url_parameters() {
            let mut pairs: Vec<_> = parameters.into_iter().collect();
            pairs.sort();

            for (i, (key, value)) in pairs.iter().enumerate() {
                let sep = if i == 0 { '?' } else { '&' };
                url.push(sep);
                url.push_str(key);
                url.push('=');
                url.push_str(&urlencoding::encode(value));
            }
        }

        url
    }
}

/// Four-digit current calendar year.
fn current_year() -> String {
    Utc::now().year().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MediaType;

    #[test]
    fn default_mode_sets_current_year_and_page() {
        let endpoint = NasaLibraryEndpoint::LibraryDefault { page: 3 };
        let params = endpoint.url_parameters().unwrap();
        assert_eq!(params.get(PARAM_YEAR_START), Some(&current_year()));
        assert_eq!(params.get(PARAM_PAGE), Some(&"3".to_string()));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn last_page_probe_uses_sentinel_page() {
        let endpoint = NasaLibraryEndpoint::LastPageDefault;
        let params = endpoint.url_parameters().unwrap();
        assert_eq!(params.get(PARAM_PAGE), Some(&LAST_PAGE_SENTINEL.to_string()));
        assert_eq!(params.get(PARAM_YEAR_START), Some(&current_year()));
    }

    #[test]
    fn filtered_mode_sets_optional_parameters_when_present() {
        let mut filters = SpaceLibraryFilters::new(2);
        filters.search_text = Some("apollo".to_string());
        filters.year_start = Some("1960".to_string());
        filters.year_end = Some("1975".to_string());

        let endpoint = NasaLibraryEndpoint::LibraryFilters { filters };
        let params = endpoint.url_parameters().unwrap();
        assert_eq!(params.get(PARAM_PAGE), Some(&"2".to_string()));
        assert_eq!(params.get(PARAM_SEARCH_TEXT), Some(&"apollo".to_string()));
        assert_eq!(params.get(PARAM_YEAR_START), Some(&"1960".to_string()));
        assert_eq!(params.get(PARAM_YEAR_END), Some(&"1975".to_string()));
        assert!(!params.contains_key(PARAM_MEDIA_TYPE));
    }

    #[test]
    fn absent_media_types_short_circuits_without_media_type() {
        let filters = SpaceLibraryFilters::new(1);
        let endpoint = NasaLibraryEndpoint::LibraryFilters { filters };
        let params = endpoint.url_parameters().unwrap();
        assert!(!params.contains_key(PARAM_MEDIA_TYPE));
    }

    #[test]
    fn empty_media_types_omits_media_type_entirely() {
        let mut filters = SpaceLibraryFilters::new(1);
        filters.media_types = Some(vec![]);
        let endpoint = NasaLibraryEndpoint::LibraryFilters { filters };
        let params = endpoint.url_parameters().unwrap();
        assert!(!params.contains_key(PARAM_MEDIA_TYPE));
        assert_eq!(params.get(PARAM_PAGE), Some(&"1".to_string()));
    }

    #[test]
    fn media_types_join_with_commas_in_insertion_order() {
        let mut filters = SpaceLibraryFilters::new(1);
        filters.media_types = Some(vec![MediaType::Video, MediaType::Image, MediaType::Audio]);
        let endpoint = NasaLibraryEndpoint::LibraryFilters { filters };
        let params = endpoint.url_parameters().unwrap();
        assert_eq!(
            params.get(PARAM_MEDIA_TYPE),
            Some(&"video,image,audio".to_string())
        );
    }

    #[test]
    fn single_media_type_has_no_trailing_comma() {
        let mut filters = SpaceLibraryFilters::new(1);
        filters.media_types = Some(vec![MediaType::Image]);
        let endpoint = NasaLibraryEndpoint::LibraryFilters { filters };
        let params = endpoint.url_parameters().unwrap();
        assert_eq!(params.get(PARAM_MEDIA_TYPE), Some(&"image".to_string()));
    }

    #[test]
    fn media_urls_carries_no_parameters_and_uses_given_url() {
        let endpoint = NasaLibraryEndpoint::MediaUrls {
            json_url: "https://images-assets.nasa.gov/image/x/collection.json".to_string(),
        };
        assert!(endpoint.url_parameters().is_none());

        let config = AppConfig::default();
        assert_eq!(
            endpoint.url(&config),
            "https://images-assets.nasa.gov/image/x/collection.json"
        );
    }

    #[test]
    fn library_url_is_base_plus_sorted_query() {
        let config = AppConfig::default().with_library_base_url("http://localhost:9999/search");
        let endpoint = NasaLibraryEndpoint::LibraryDefault { page: 1 };
        let url = endpoint.url(&config);
        assert_eq!(
            url,
            format!("http://localhost:9999/search/?page=1&year_start={}", current_year())
        );
    }

    #[test]
    fn method_is_always_get() {
        assert_eq!(NasaLibraryEndpoint::LastPageDefault.method(), HttpMethod::Get);
        assert_eq!(HttpMethod::Get.as_str(), "GET");
    }
}
