//! Ambience Catalog Library
//!
//! Music library management for business-facing curated playlists: a song
//! catalog keyed by genre and energy level, plus template playlists built
//! from curated per-business-type recipes.

pub mod config;
pub mod ingestion;
pub mod library_store;
pub mod sqlite_persistence;
pub mod templates;

// Re-export commonly used types for convenience
pub use library_store::{LibraryStore, SqliteLibraryStore};
pub use templates::{builtin_templates, Sampling, TemplateBuilder, TemplateDefinition};
