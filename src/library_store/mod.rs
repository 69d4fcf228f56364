mod models;
mod schema;
mod store;
mod trait_def;

pub use models::{
    BusinessType, EnergyLevel, EnergyProfile, NewSong, Playlist, PlaylistSummary, Song, SongFilter,
    SongUpsert,
};
pub use store::SqliteLibraryStore;
pub use trait_def::LibraryStore;

#[cfg(feature = "mock")]
pub use trait_def::MockLibraryStore;
