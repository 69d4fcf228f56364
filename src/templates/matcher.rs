//! Candidate song matching.
//!
//! The store narrows the catalog down with SQL; the shuffle and cap happen
//! here so the randomness source can be seeded in tests.

use crate::library_store::{EnergyLevel, LibraryStore, Song, SongFilter};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Maximum number of songs a template playlist receives.
pub const DEFAULT_SAMPLE_LIMIT: usize = 50;

/// Source of randomness for candidate sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sampling {
    /// OS entropy, fresh shuffle per call.
    #[default]
    Entropy,
    /// Fixed seed, reproducible shuffle.
    Seeded(u64),
}

/// Selects a random sample of matching songs for a template.
pub struct SongMatcher<'a> {
    store: &'a dyn LibraryStore,
    sampling: Sampling,
    limit: usize,
}

impl<'a> SongMatcher<'a> {
    pub fn new(store: &'a dyn LibraryStore) -> Self {
        SongMatcher {
            store,
            sampling: Sampling::default(),
            limit: DEFAULT_SAMPLE_LIMIT,
        }
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Fetch every active song in the energy range and genre set, shuffle,
    /// and keep at most the configured limit. Fewer matches than the limit
    /// is fine; zero matches yields an empty list.
    pub fn find_candidates(
        &self,
        energy_range: &[EnergyLevel],
        genres: &[String],
    ) -> Result<Vec<Song>> {
        let mut songs = self.store.find_candidate_songs(&SongFilter {
            energy_levels: energy_range.to_vec(),
            genres: genres.to_vec(),
        })?;

        match self.sampling {
            Sampling::Entropy => songs.shuffle(&mut rand::rng()),
            Sampling::Seeded(seed) => songs.shuffle(&mut StdRng::seed_from_u64(seed)),
        }
        songs.truncate(self.limit);
        Ok(songs)
    }
}
