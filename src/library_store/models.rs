//! Domain models for the music library.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Perceived intensity of a track.
///
/// The variant order is the taxonomy order: energy-range resolution relies
/// on index position, not just set membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl EnergyLevel {
    /// All levels, lowest to highest.
    pub const ALL: [EnergyLevel; 4] = [
        EnergyLevel::Low,
        EnergyLevel::Medium,
        EnergyLevel::High,
        EnergyLevel::VeryHigh,
    ];

    /// Position of this level in the taxonomy.
    pub fn index(self) -> usize {
        match self {
            EnergyLevel::Low => 0,
            EnergyLevel::Medium => 1,
            EnergyLevel::High => 2,
            EnergyLevel::VeryHigh => 3,
        }
    }

    /// Convert from database string representation.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(EnergyLevel::Low),
            "medium" => Some(EnergyLevel::Medium),
            "high" => Some(EnergyLevel::High),
            "very_high" => Some(EnergyLevel::VeryHigh),
            _ => None,
        }
    }

    /// Convert to database string representation.
    pub fn to_db_str(self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
            EnergyLevel::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// Kind of business a template playlist is curated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    Gym,
    Spa,
    Cafe,
    Retail,
    Restaurant,
    Office,
    Other,
}

impl BusinessType {
    /// Convert from database string representation.
    pub fn from_db_str(s: &str) -> Self {
        match s {
            "gym" => BusinessType::Gym,
            "spa" => BusinessType::Spa,
            "cafe" => BusinessType::Cafe,
            "retail" => BusinessType::Retail,
            "restaurant" => BusinessType::Restaurant,
            "office" => BusinessType::Office,
            _ => BusinessType::Other,
        }
    }

    /// Convert to database string representation.
    pub fn to_db_str(self) -> &'static str {
        match self {
            BusinessType::Gym => "gym",
            BusinessType::Spa => "spa",
            BusinessType::Cafe => "cafe",
            BusinessType::Retail => "retail",
            BusinessType::Restaurant => "restaurant",
            BusinessType::Office => "office",
            BusinessType::Other => "other",
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

/// Declared percentage breakdown across energy levels.
///
/// Descriptive metadata attached to a playlist; it is never recomputed
/// from the tracks actually selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyProfile {
    pub low: u8,
    pub medium: u8,
    pub high: u8,
    pub very_high: u8,
}

impl EnergyProfile {
    /// Sum of all four shares. A valid profile totals exactly 100.
    pub fn total(&self) -> u32 {
        self.low as u32 + self.medium as u32 + self.high as u32 + self.very_high as u32
    }

    pub fn share(&self, level: EnergyLevel) -> u8 {
        match level {
            EnergyLevel::Low => self.low,
            EnergyLevel::Medium => self.medium,
            EnergyLevel::High => self.high,
            EnergyLevel::VeryHigh => self.very_high,
        }
    }
}

/// A track in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub duration_secs: i64,
    pub file_location: String,
    pub energy_level: EnergyLevel,
    pub is_active: bool,
}

/// A track not yet persisted, as produced by the importer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSong {
    pub title: String,
    pub genre: String,
    pub duration_secs: i64,
    pub file_location: String,
    pub energy_level: EnergyLevel,
}

/// Result of upserting a song by (title, genre).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SongUpsert {
    Inserted(i64),
    Updated(i64),
}

impl SongUpsert {
    pub fn song_id(self) -> i64 {
        match self {
            SongUpsert::Inserted(id) | SongUpsert::Updated(id) => id,
        }
    }
}

/// A persisted playlist header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    pub business_type: BusinessType,
    pub energy_profile: EnergyProfile,
    pub is_template: bool,
    /// User id for user-created playlists; None for template playlists.
    pub created_by: Option<i64>,
}

/// Playlist header with its song count, as listed by the admin CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaylistSummary {
    pub playlist: Playlist,
    pub song_count: usize,
}

/// Filter for the candidate-song query.
///
/// Matches active songs whose energy level is in `energy_levels` and whose
/// genre, compared case-insensitively, is in `genres`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongFilter {
    pub energy_levels: Vec<EnergyLevel>,
    pub genres: Vec<String>,
}
