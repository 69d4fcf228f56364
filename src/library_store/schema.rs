//! SQLite schema for the music library database.
//!
//! One database file holds the song catalog and the playlists derived from
//! it, so a template build can replace a playlist and its song rows in a
//! single transaction. Join rows are removed by cascade when either side
//! disappears.

use crate::sqlite_persistence::{
    Column, ForeignKey, OnDelete, SqlType, Table, VersionedSchema, DEFAULT_TIMESTAMP,
};

const SONGS_TABLE: Table = Table {
    name: "songs",
    columns: &[
        Column::new("rowid", SqlType::Integer).primary_key(),
        Column::new("title", SqlType::Text).not_null(),
        Column::new("genre", SqlType::Text).not_null(),
        Column::new("duration_secs", SqlType::Integer).not_null(),
        Column::new("file_location", SqlType::Text).not_null(),
        Column::new("energy_level", SqlType::Text).not_null(),
        Column::new("is_active", SqlType::Integer)
            .not_null()
            .default_value("1"),
        Column::new("created_at", SqlType::Integer).default_value(DEFAULT_TIMESTAMP),
    ],
    indices: &[
        ("idx_songs_genre", "genre"),
        ("idx_songs_energy_level", "energy_level"),
    ],
    unique_constraints: &[&["title", "genre"]],
};

const PLAYLISTS_TABLE: Table = Table {
    name: "playlists",
    columns: &[
        Column::new("rowid", SqlType::Integer).primary_key(),
        Column::new("name", SqlType::Text).not_null(),
        Column::new("business_type", SqlType::Text).not_null(),
        // JSON blob; declared intent, not derived from actual matches.
        Column::new("energy_profile", SqlType::Text).not_null(),
        Column::new("is_template", SqlType::Integer)
            .not_null()
            .default_value("0"),
        Column::new("created_by", SqlType::Integer),
        Column::new("created_at", SqlType::Integer).default_value(DEFAULT_TIMESTAMP),
    ],
    indices: &[("idx_playlists_business_type", "business_type")],
    unique_constraints: &[],
};

const PLAYLIST_FK: ForeignKey = ForeignKey {
    table: "playlists",
    column: "rowid",
    on_delete: OnDelete::Cascade,
};

const SONG_FK: ForeignKey = ForeignKey {
    table: "songs",
    column: "rowid",
    on_delete: OnDelete::Cascade,
};

const PLAYLIST_SONGS_TABLE: Table = Table {
    name: "playlist_songs",
    columns: &[
        Column::new("playlist_id", SqlType::Integer)
            .not_null()
            .references(&PLAYLIST_FK),
        Column::new("song_id", SqlType::Integer)
            .not_null()
            .references(&SONG_FK),
        Column::new("position", SqlType::Integer).not_null(),
        Column::new("created_at", SqlType::Integer).default_value(DEFAULT_TIMESTAMP),
    ],
    indices: &[("idx_playlist_songs_playlist", "playlist_id")],
    unique_constraints: &[&["playlist_id", "song_id"]],
};

/// Music library schema, latest version last.
pub const LIBRARY_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[SONGS_TABLE, PLAYLISTS_TABLE, PLAYLIST_SONGS_TABLE],
    migration: None,
}];
