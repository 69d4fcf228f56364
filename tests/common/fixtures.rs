//! Test fixtures for the integration tests.

use ambience_catalog::library_store::{
    BusinessType, EnergyLevel, EnergyProfile, LibraryStore, NewSong, SqliteLibraryStore,
};
use ambience_catalog::templates::{SongCriteria, TemplateDefinition};

/// The catalog every integration test starts from: (title, genre, energy).
pub const SEEDED_SONGS: &[(&str, &str, EnergyLevel)] = &[
    ("Pump It", "Dance", EnergyLevel::High),
    ("Overdrive", "Dance", EnergyLevel::VeryHigh),
    ("Night Shift", "Dance", EnergyLevel::Medium),
    ("Bassline Rush", "Trap", EnergyLevel::VeryHigh),
    ("Sunset Drift", "Lounge", EnergyLevel::Low),
    ("Velvet Room", "Lounge", EnergyLevel::Medium),
    ("Blue Hour", "Jazz", EnergyLevel::Medium),
    ("Midnight Walk", "Jazz", EnergyLevel::Low),
    ("Open Fields", "Ambient", EnergyLevel::Low),
    ("Slow Orbit", "Ambient", EnergyLevel::Low),
];

/// In-memory library pre-loaded with [`SEEDED_SONGS`].
pub fn seeded_library() -> SqliteLibraryStore {
    let store = SqliteLibraryStore::in_memory().expect("in-memory library");
    for (title, genre, energy_level) in SEEDED_SONGS {
        store
            .upsert_song(&NewSong {
                title: title.to_string(),
                genre: genre.to_string(),
                duration_secs: 180,
                file_location: format!("{genre}/{title}.mp3"),
                energy_level: *energy_level,
            })
            .expect("seed song");
    }
    store
}

/// A template definition with a valid profile and a single energy bound.
pub fn template(
    name: &str,
    business_type: BusinessType,
    min_energy: Option<EnergyLevel>,
    max_energy: Option<EnergyLevel>,
    genres: &[&str],
) -> TemplateDefinition {
    TemplateDefinition {
        name: name.to_string(),
        business_type,
        energy_profile: EnergyProfile {
            low: 25,
            medium: 25,
            high: 25,
            very_high: 25,
        },
        song_criteria: SongCriteria {
            min_energy,
            max_energy,
            preferred_genres: genres.iter().map(|g| g.to_string()).collect(),
        },
    }
}
