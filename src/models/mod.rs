//! Typed models for the documents this client consumes.

pub mod filters;
pub mod planet;
pub mod space_library;

pub use filters::SpaceLibraryFilters;
pub use planet::{Planet, PlanetImage};
pub use space_library::{
    Collection, CollectionLink, ItemLink, MediaType, SpaceItem, SpaceItemData, SpaceLibraryItems,
    LONG_DATE_FORMAT,
};
