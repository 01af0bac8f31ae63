//! Trait abstractions for dependency injection and testability.
//!
//! The app receives its HTTP client and analytics sink through these
//! traits instead of reaching for process-wide singletons, so the
//! controller can be exercised in tests without a terminal or network.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (this API is GET-only)
//! - [`AnalyticsSink`] - fire-and-forget named analytics events

pub mod analytics;
pub mod http;

pub use analytics::{AnalyticsSink, NullAnalytics, TracingAnalytics};
pub use http::{Headers, HttpClient, HttpError, Response};
