//! This module defines where signal collections live and how they are read
//! and appended to.
pub mod collections;

pub use collections::{CollectionStore, FsCollectionStore};
