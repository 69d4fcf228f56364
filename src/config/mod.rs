mod file_config;

pub use file_config::FileConfig;

use crate::templates::DEFAULT_SAMPLE_LIMIT;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub db_dir: Option<PathBuf>,
    pub songs_dir: Option<PathBuf>,
    pub sample_limit: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            db_dir: None,
            songs_dir: None,
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_dir: PathBuf,
    pub songs_dir: Option<PathBuf>,
    pub sample_limit: usize,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_dir = file
            .db_dir
            .map(PathBuf::from)
            .or_else(|| cli.db_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("db_dir must be specified via --db-dir or in config file")
            })?;

        if !db_dir.exists() {
            bail!("Database directory does not exist: {:?}", db_dir);
        }
        if !db_dir.is_dir() {
            bail!("db_dir is not a directory: {:?}", db_dir);
        }

        let songs_dir = file
            .songs_dir
            .map(PathBuf::from)
            .or_else(|| cli.songs_dir.clone());

        let sample_limit = file.sample_limit.unwrap_or(cli.sample_limit);
        if sample_limit == 0 {
            bail!("sample_limit must be greater than zero");
        }

        Ok(AppConfig {
            db_dir,
            songs_dir,
            sample_limit,
        })
    }

    /// Path of the library database inside the configured db dir.
    pub fn library_db_path(&self) -> PathBuf {
        self.db_dir.join("catalog.db")
    }
}
