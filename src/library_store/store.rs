//! SQLite-backed music library store.

use super::models::*;
use super::schema::LIBRARY_VERSIONED_SCHEMAS;
use super::trait_def::LibraryStore;
use crate::sqlite_persistence::BASE_DB_VERSION;
use anyhow::{Context, Result};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::info;

/// SQLite-backed music library.
///
/// A single write connection behind a mutex; the workloads here are admin
/// batch jobs, not request serving.
#[derive(Clone)]
pub struct SqliteLibraryStore {
    conn: Arc<Mutex<Connection>>,
}

fn migrate_if_needed(conn: &mut Connection) -> Result<()> {
    let db_version: i64 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;

    let latest_version = LIBRARY_VERSIONED_SCHEMAS.len() - 1;
    let latest_schema = &LIBRARY_VERSIONED_SCHEMAS[latest_version];

    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
            [],
            |r| r.get(0),
        )
        .unwrap_or(0);

    if table_count == 0 {
        info!("Creating library db schema at version {}", latest_version);
        latest_schema.create(conn)?;
        return Ok(());
    }

    let mut current_version = if db_version < BASE_DB_VERSION as i64 {
        0
    } else {
        (db_version - BASE_DB_VERSION as i64) as usize
    };

    if current_version >= latest_version {
        latest_schema.validate(conn)?;
        return Ok(());
    }

    let tx = conn.transaction()?;
    for schema in LIBRARY_VERSIONED_SCHEMAS.iter().skip(current_version + 1) {
        if let Some(migration_fn) = schema.migration {
            info!(
                "Migrating library db from version {} to {}",
                current_version, schema.version
            );
            migration_fn(&tx)?;
            current_version = schema.version;
        }
    }
    tx.pragma_update(None, "user_version", BASE_DB_VERSION + current_version)?;
    tx.commit()?;

    latest_schema.validate(conn)?;
    Ok(())
}

fn parse_song_row(row: &rusqlite::Row) -> rusqlite::Result<Song> {
    let energy_raw: String = row.get(5)?;
    let energy_level = EnergyLevel::from_db_str(&energy_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            format!("unknown energy level '{energy_raw}'").into(),
        )
    })?;
    Ok(Song {
        id: row.get(0)?,
        title: row.get(1)?,
        genre: row.get(2)?,
        duration_secs: row.get(3)?,
        file_location: row.get(4)?,
        energy_level,
        is_active: row.get(6)?,
    })
}

const SONG_COLUMNS: &str = "rowid, title, genre, duration_secs, file_location, energy_level, is_active";

impl SqliteLibraryStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(
            db_path.as_ref(),
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI
                | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context("Failed to open library database")?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Self::from_connection(conn)
    }

    /// In-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        migrate_if_needed(&mut conn)?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        let song_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM songs", [], |r| r.get(0))
            .unwrap_or(0);
        let playlist_count: i64 = conn
            .query_row("SELECT COUNT(*) FROM playlists", [], |r| r.get(0))
            .unwrap_or(0);
        info!(
            "Opened music library: {} songs, {} playlists",
            song_count, playlist_count
        );

        Ok(SqliteLibraryStore {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn parse_playlist_row(row: &rusqlite::Row) -> rusqlite::Result<Playlist> {
        let business_raw: String = row.get(2)?;
        let profile_raw: String = row.get(3)?;
        let energy_profile = serde_json::from_str(&profile_raw).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
        })?;
        Ok(Playlist {
            id: row.get(0)?,
            name: row.get(1)?,
            business_type: BusinessType::from_db_str(&business_raw),
            energy_profile,
            is_template: row.get(4)?,
            created_by: row.get(5)?,
        })
    }
}

impl LibraryStore for SqliteLibraryStore {
    fn get_song(&self, song_id: i64) -> Result<Option<Song>> {
        let conn = self.conn.lock().unwrap();
        let song = conn
            .query_row(
                &format!("SELECT {SONG_COLUMNS} FROM songs WHERE rowid = ?1"),
                params![song_id],
                parse_song_row,
            )
            .optional()?;
        Ok(song)
    }

    fn upsert_song(&self, song: &NewSong) -> Result<SongUpsert> {
        let conn = self.conn.lock().unwrap();
        let existing_id: Option<i64> = conn
            .query_row(
                "SELECT rowid FROM songs WHERE title = ?1 AND genre = ?2",
                params![song.title, song.genre],
                |r| r.get(0),
            )
            .optional()?;

        match existing_id {
            Some(id) => {
                conn.execute(
                    "UPDATE songs
                     SET duration_secs = ?1, file_location = ?2, energy_level = ?3, is_active = 1
                     WHERE rowid = ?4",
                    params![
                        song.duration_secs,
                        song.file_location,
                        song.energy_level.to_db_str(),
                        id
                    ],
                )
                .context("Could not update song")?;
                Ok(SongUpsert::Updated(id))
            }
            None => {
                conn.execute(
                    "INSERT INTO songs (title, genre, duration_secs, file_location, energy_level)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        song.title,
                        song.genre,
                        song.duration_secs,
                        song.file_location,
                        song.energy_level.to_db_str()
                    ],
                )
                .context("Could not insert song")?;
                Ok(SongUpsert::Inserted(conn.last_insert_rowid()))
            }
        }
    }

    fn set_song_active(&self, song_id: i64, active: bool) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let changed = conn.execute(
            "UPDATE songs SET is_active = ?1 WHERE rowid = ?2",
            params![active, song_id],
        )?;
        Ok(changed > 0)
    }

    fn songs_count(&self) -> Result<usize> {
        let conn = self.conn.lock().unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM songs", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    fn find_candidate_songs(&self, filter: &SongFilter) -> Result<Vec<Song>> {
        if filter.energy_levels.is_empty() || filter.genres.is_empty() {
            return Ok(Vec::new());
        }

        let level_placeholders = (1..=filter.energy_levels.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let genre_placeholders = (filter.energy_levels.len() + 1
            ..=filter.energy_levels.len() + filter.genres.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "SELECT {SONG_COLUMNS} FROM songs
             WHERE is_active = 1
               AND energy_level IN ({level_placeholders})
               AND lower(genre) IN ({genre_placeholders})
             ORDER BY rowid"
        );

        let bindings: Vec<String> = filter
            .energy_levels
            .iter()
            .map(|l| l.to_db_str().to_string())
            .chain(filter.genres.iter().map(|g| g.to_lowercase()))
            .collect();

        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&sql)?;
        let songs = stmt
            .query_map(params_from_iter(bindings.iter()), parse_song_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(songs)
    }

    fn replace_template_playlist(
        &self,
        name: &str,
        business_type: BusinessType,
        energy_profile: &EnergyProfile,
        song_ids: &[i64],
    ) -> Result<Playlist> {
        let profile_json =
            serde_json::to_string(energy_profile).context("Could not serialize energy profile")?;

        let mut conn = self.conn.lock().unwrap();
        let tx = conn.transaction()?;

        // Cascade removes the prior template's playlist_songs rows.
        tx.execute(
            "DELETE FROM playlists WHERE is_template = 1 AND business_type = ?1",
            params![business_type.to_db_str()],
        )?;

        tx.execute(
            "INSERT INTO playlists (name, business_type, energy_profile, is_template, created_by)
             VALUES (?1, ?2, ?3, 1, NULL)",
            params![name, business_type.to_db_str(), profile_json],
        )
        .context("Could not create template playlist")?;
        let playlist_id = tx.last_insert_rowid();

        for (position, song_id) in song_ids.iter().enumerate() {
            tx.execute(
                "INSERT INTO playlist_songs (playlist_id, song_id, position) VALUES (?1, ?2, ?3)",
                params![playlist_id, song_id, position as i64],
            )?;
        }

        tx.commit()?;

        Ok(Playlist {
            id: playlist_id,
            name: name.to_string(),
            business_type,
            energy_profile: *energy_profile,
            is_template: true,
            created_by: None,
        })
    }

    fn template_playlists(&self) -> Result<Vec<PlaylistSummary>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT p.rowid, p.name, p.business_type, p.energy_profile, p.is_template,
                    p.created_by, COUNT(ps.song_id)
             FROM playlists p
             LEFT JOIN playlist_songs ps ON ps.playlist_id = p.rowid
             WHERE p.is_template = 1
             GROUP BY p.rowid
             ORDER BY p.business_type",
        )?;
        let summaries = stmt
            .query_map([], |row| {
                let playlist = Self::parse_playlist_row(row)?;
                let song_count: i64 = row.get(6)?;
                Ok(PlaylistSummary {
                    playlist,
                    song_count: song_count as usize,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(summaries)
    }

    fn playlist_songs(&self, playlist_id: i64) -> Result<Vec<Song>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT s.rowid, s.title, s.genre, s.duration_secs, s.file_location,
                    s.energy_level, s.is_active
             FROM playlist_songs ps
             JOIN songs s ON s.rowid = ps.song_id
             WHERE ps.playlist_id = ?1
             ORDER BY ps.position",
        )?;
        let songs = stmt
            .query_map(params![playlist_id], parse_song_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(songs)
    }
}
