//! Template playlist builder.
//!
//! Ties definition validation, energy range resolution, candidate matching
//! and the atomic store replacement together. Building the whole template
//! set keeps going past individual failures and reports them per template.

use super::definition::TemplateDefinition;
use super::matcher::{Sampling, SongMatcher, DEFAULT_SAMPLE_LIMIT};
use super::range::{resolve_range, RangeError};
use super::validation::{validate_template, ValidationFailure};
use crate::library_store::{LibraryStore, Playlist};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template '{template}' failed validation: {reason}")]
    Validation {
        template: String,
        reason: ValidationFailure,
    },
    #[error("template '{template}' has unusable song criteria: {reason}")]
    Criteria {
        template: String,
        reason: RangeError,
    },
    #[error("template '{template}' could not be built: {source:#}")]
    Build {
        template: String,
        source: anyhow::Error,
    },
}

/// A successfully rebuilt template playlist.
#[derive(Debug)]
pub struct BuiltTemplate {
    pub playlist: Playlist,
    pub song_count: usize,
}

/// Outcome of one template in a batch build.
#[derive(Debug)]
pub struct BuildResult {
    pub template: String,
    pub outcome: Result<BuiltTemplate, TemplateError>,
}

pub struct TemplateBuilder<'a> {
    store: &'a dyn LibraryStore,
    sampling: Sampling,
    sample_limit: usize,
}

impl<'a> TemplateBuilder<'a> {
    pub fn new(store: &'a dyn LibraryStore) -> Self {
        TemplateBuilder {
            store,
            sampling: Sampling::default(),
            sample_limit: DEFAULT_SAMPLE_LIMIT,
        }
    }

    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit;
        self
    }

    /// Rebuild the template playlist for one definition.
    ///
    /// Validates first, then samples candidates, then atomically replaces
    /// the prior template playlist for the definition's business type. A
    /// definition that matches no songs produces an empty playlist.
    pub fn build_template(
        &self,
        template: &TemplateDefinition,
    ) -> Result<BuiltTemplate, TemplateError> {
        validate_template(template).map_err(|reason| TemplateError::Validation {
            template: template.name.clone(),
            reason,
        })?;

        let energy_range =
            resolve_range(&template.song_criteria).map_err(|reason| TemplateError::Criteria {
                template: template.name.clone(),
                reason,
            })?;

        let matcher = SongMatcher::new(self.store)
            .with_sampling(self.sampling)
            .with_limit(self.sample_limit);
        let songs = matcher
            .find_candidates(energy_range, &template.song_criteria.preferred_genres)
            .map_err(|source| TemplateError::Build {
                template: template.name.clone(),
                source,
            })?;
        let song_ids: Vec<i64> = songs.iter().map(|s| s.id).collect();

        let playlist = self
            .store
            .replace_template_playlist(
                &template.name,
                template.business_type,
                &template.energy_profile,
                &song_ids,
            )
            .map_err(|source| TemplateError::Build {
                template: template.name.clone(),
                source,
            })?;

        info!(
            "Built template playlist '{}' for {} with {} songs",
            template.name,
            template.business_type,
            song_ids.len()
        );

        Ok(BuiltTemplate {
            playlist,
            song_count: song_ids.len(),
        })
    }

    /// Rebuild every definition, in order. A failed template is reported in
    /// its slot and does not stop the rest of the batch.
    pub fn build_all(&self, templates: &[TemplateDefinition]) -> Vec<BuildResult> {
        templates
            .iter()
            .map(|template| {
                let outcome = self.build_template(template);
                if let Err(e) = &outcome {
                    warn!("Skipping template '{}': {:#}", template.name, e);
                }
                BuildResult {
                    template: template.name.clone(),
                    outcome,
                }
            })
            .collect()
    }
}
