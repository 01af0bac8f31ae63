//! InfoSpace - a terminal client for the NASA image and video library.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod state;
pub mod traits;
pub mod ui;

pub mod prelude {
    //! Re-exports of the most frequently used types.

    pub use crate::app::{App, AppMessage, Screen};
    pub use crate::config::AppConfig;
    pub use crate::error::{ClientError, ClientResult};
    pub use crate::models::{
        MediaType, Planet, SpaceItem, SpaceItemData, SpaceLibraryFilters, SpaceLibraryItems,
    };
    pub use crate::provider::{NasaLibraryEndpoint, SpaceLibraryClient};
    pub use crate::state::SpaceLibraryState;
}
