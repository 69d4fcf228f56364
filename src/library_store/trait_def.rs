//! LibraryStore trait definition.
//!
//! Abstracts the music library storage so the template builder and the
//! importer can be exercised against mocks or an in-memory database.

use super::models::{
    BusinessType, EnergyProfile, NewSong, Playlist, PlaylistSummary, Song, SongFilter, SongUpsert,
};
use anyhow::Result;

/// Storage backend for the song catalog and its playlists.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LibraryStore: Send + Sync {
    // =========================================================================
    // Song catalog
    // =========================================================================

    /// Get a song by id. Returns Ok(None) if the song does not exist.
    fn get_song(&self, song_id: i64) -> Result<Option<Song>>;

    /// Insert the song, or update its metadata if a song with the same
    /// (title, genre) already exists. Updated songs are re-activated.
    fn upsert_song(&self, song: &NewSong) -> Result<SongUpsert>;

    /// Set the active flag of a song. Returns false if the song does not
    /// exist.
    fn set_song_active(&self, song_id: i64, active: bool) -> Result<bool>;

    /// Number of songs in the catalog, active or not.
    fn songs_count(&self) -> Result<usize>;

    /// All active songs matching the filter, in stable (insertion) order.
    ///
    /// Genre comparison is case-insensitive. An empty result is a valid
    /// outcome, not an error.
    fn find_candidate_songs(&self, filter: &SongFilter) -> Result<Vec<Song>>;

    // =========================================================================
    // Template playlists
    // =========================================================================

    /// Atomically replace the template playlist for a business type.
    ///
    /// In one transaction: deletes any prior template playlist for
    /// `business_type` (cascade removes its song rows), inserts the new
    /// header with `is_template = true` and no creator, and inserts one
    /// positioned row per song id, positions following `song_ids` order
    /// from 0. Either everything is persisted or nothing is.
    fn replace_template_playlist(
        &self,
        name: &str,
        business_type: BusinessType,
        energy_profile: &EnergyProfile,
        song_ids: &[i64],
    ) -> Result<Playlist>;

    /// All template playlists with their song counts.
    fn template_playlists(&self) -> Result<Vec<PlaylistSummary>>;

    /// Songs of a playlist, ordered by position.
    fn playlist_songs(&self, playlist_id: i64) -> Result<Vec<Song>>;
}
