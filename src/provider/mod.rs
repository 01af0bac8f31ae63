//! Provider layer: endpoint descriptors and the typed API client.

pub mod client;
pub mod endpoint;

pub use client::SpaceLibraryClient;
pub use endpoint::{HttpMethod, NasaLibraryEndpoint, LAST_PAGE_SENTINEL};
