mod song_import;

pub use song_import::{import_songs, ImportOutcome};
