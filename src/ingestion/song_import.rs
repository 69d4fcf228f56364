//! Song import from a genre-organized directory tree.
//!
//! Expects `<root>/<genre>/<file>.mp3`; the directory name becomes the
//! genre. Title and duration come from the file's tags, the energy level
//! from an "Energy N" marker in the tag comment. Files that cannot be read
//! are logged and skipped, they never abort the import.

use crate::library_store::{EnergyLevel, LibraryStore, NewSong, SongUpsert};
use anyhow::{Context, Result};
use lofty::file::{AudioFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::Accessor;
use regex::Regex;
use std::path::Path;
use tracing::{info, warn};

/// Assumed track length when the file carries no duration.
const DEFAULT_DURATION_SECS: i64 = 180;

/// Counters for one import run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub inserted: usize,
    pub updated: usize,
    pub skipped: usize,
}

/// Map a 1-10 energy score to the taxonomy.
fn energy_from_score(score: u32) -> EnergyLevel {
    match score {
        0..=3 => EnergyLevel::Low,
        4..=6 => EnergyLevel::Medium,
        7..=8 => EnergyLevel::High,
        _ => EnergyLevel::VeryHigh,
    }
}

fn energy_from_comment(energy_re: &Regex, comment: Option<&str>) -> EnergyLevel {
    comment
        .and_then(|c| energy_re.captures(c))
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .map(energy_from_score)
        .unwrap_or(EnergyLevel::Medium)
}

fn read_song(energy_re: &Regex, genre: &str, path: &Path) -> Result<NewSong> {
    let tagged_file = Probe::open(path)
        .with_context(|| format!("Could not open {}", path.display()))?
        .read()
        .with_context(|| format!("Could not read tags from {}", path.display()))?;

    let tag = tagged_file.primary_tag().or_else(|| tagged_file.first_tag());

    let title = tag
        .and_then(|t| t.title())
        .map(|t| t.to_string())
        .filter(|t| !t.trim().is_empty())
        .or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().replace('_', " "))
        })
        .context("File has neither a title tag nor a usable file name")?;

    let comment = tag.and_then(|t| t.comment()).map(|c| c.to_string());
    let energy_level = energy_from_comment(energy_re, comment.as_deref());

    let tagged_secs = tagged_file.properties().duration().as_secs() as i64;
    let duration_secs = if tagged_secs > 0 {
        tagged_secs
    } else {
        DEFAULT_DURATION_SECS
    };

    Ok(NewSong {
        title,
        genre: genre.to_string(),
        duration_secs,
        file_location: path.to_string_lossy().to_string(),
        energy_level,
    })
}

/// Walk `root` and upsert every mp3 found one genre directory deep.
pub fn import_songs(store: &dyn LibraryStore, root: &Path) -> Result<ImportOutcome> {
    if !root.is_dir() {
        anyhow::bail!("Songs directory {} does not exist", root.display());
    }

    let energy_re = Regex::new(r"Energy (\d+)").context("Invalid energy marker pattern")?;
    let mut outcome = ImportOutcome::default();

    for entry in walkdir::WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {:#}", e);
                outcome.skipped += 1;
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().and_then(|e| e.to_str()) != Some("mp3")
        {
            continue;
        }

        let genre = match path.parent().and_then(|p| p.file_name()) {
            Some(name) => name.to_string_lossy().to_string(),
            None => {
                outcome.skipped += 1;
                continue;
            }
        };

        match read_song(&energy_re, &genre, path) {
            Ok(song) => match store.upsert_song(&song)? {
                SongUpsert::Inserted(_) => outcome.inserted += 1,
                SongUpsert::Updated(_) => outcome.updated += 1,
            },
            Err(e) => {
                warn!("Skipping {}: {:#}", path.display(), e);
                outcome.skipped += 1;
            }
        }
    }

    info!(
        "Imported songs from {}: {} inserted, {} updated, {} skipped",
        root.display(),
        outcome.inserted,
        outcome.updated,
        outcome.skipped
    );
    Ok(outcome)
}
