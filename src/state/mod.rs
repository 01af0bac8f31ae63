//! State containers owned by the app.

pub mod library;

pub use library::{PageRequest, QueryMode, SpaceLibraryState};
