//! Common test infrastructure
//!
//! Provides a seeded in-memory library plus the stock template fixtures the
//! integration tests build against. Tests should only import from this
//! module, not from internal submodules.

mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{seeded_library, template, SEEDED_SONGS};
