use ambience_catalog::config::{AppConfig, CliConfig, FileConfig};
use ambience_catalog::ingestion::import_songs;
use ambience_catalog::library_store::{LibraryStore, SqliteLibraryStore};
use ambience_catalog::templates::{
    builtin_templates, Sampling, TemplateBuilder, TemplateDefinition,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[clap(name = "catalog-admin", about = "Ambience music catalog administration")]
struct CliArgs {
    /// Path to a TOML config file. Its values override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Directory holding the library database.
    #[clap(long, value_parser = parse_path)]
    pub db_dir: Option<PathBuf>,

    /// Directory of genre-organized song files.
    #[clap(long, value_parser = parse_path)]
    pub songs_dir: Option<PathBuf>,

    /// Maximum number of songs per template playlist.
    #[clap(long, default_value_t = ambience_catalog::templates::DEFAULT_SAMPLE_LIMIT)]
    pub sample_limit: usize,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create or migrate the library database schema.
    CreateSchema,
    /// Import songs from the songs directory into the catalog.
    ImportSongs {
        /// Songs directory; overrides --songs-dir and the config file.
        #[clap(value_parser = parse_path)]
        source: Option<PathBuf>,
    },
    /// Rebuild the template playlists.
    CreateTemplates {
        /// Fixed RNG seed for reproducible song selection.
        #[clap(long)]
        seed: Option<u64>,
        /// JSON file with template definitions; defaults to the stock set.
        #[clap(long, value_parser = parse_path)]
        definitions: Option<PathBuf>,
    },
    /// List template playlists and their song counts.
    ListTemplates,
}

fn load_definitions(path: &PathBuf) -> Result<Vec<TemplateDefinition>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read definitions file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse definitions file: {:?}", path))
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = cli_args.config.as_ref().map(FileConfig::load).transpose()?;
    let cli_config = CliConfig {
        db_dir: cli_args.db_dir.clone(),
        songs_dir: cli_args.songs_dir.clone(),
        sample_limit: cli_args.sample_limit,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let db_path = config.library_db_path();
    info!("Opening library database at {:?}...", db_path);
    let store = SqliteLibraryStore::new(&db_path)?;

    match cli_args.command {
        Command::CreateSchema => {
            // Opening the store creates or migrates the schema.
            info!("Library schema is up to date");
        }
        Command::ImportSongs { source } => {
            let songs_dir = source
                .or(config.songs_dir)
                .context("Songs directory must be given via argument, --songs-dir or config")?;
            let outcome = import_songs(&store, &songs_dir)?;
            info!(
                "Import finished: {} inserted, {} updated, {} skipped",
                outcome.inserted, outcome.updated, outcome.skipped
            );
        }
        Command::CreateTemplates { seed, definitions } => {
            let templates = match definitions {
                Some(path) => load_definitions(&path)?,
                None => builtin_templates(),
            };
            let sampling = match seed {
                Some(seed) => Sampling::Seeded(seed),
                None => Sampling::Entropy,
            };
            let builder = TemplateBuilder::new(&store)
                .with_sampling(sampling)
                .with_sample_limit(config.sample_limit);

            let results = builder.build_all(&templates);
            let mut failures = 0;
            for result in &results {
                match &result.outcome {
                    Ok(built) => info!(
                        "Template '{}': {} songs",
                        result.template, built.song_count
                    ),
                    Err(e) => {
                        failures += 1;
                        error!("Template '{}' failed: {:#}", result.template, e);
                    }
                }
            }
            if failures > 0 {
                bail!("{} of {} templates failed", failures, results.len());
            }
        }
        Command::ListTemplates => {
            let templates = store.template_playlists()?;
            if templates.is_empty() {
                info!("No template playlists");
            }
            for summary in templates {
                info!(
                    "{} [{}]: {} songs",
                    summary.playlist.name, summary.playlist.business_type, summary.song_count
                );
            }
        }
    }

    Ok(())
}
