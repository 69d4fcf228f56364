//! Validation for template definitions.
//!
//! A definition is checked in full before any database work happens, so a
//! bad template never replaces an existing playlist.

use super::definition::TemplateDefinition;
use crate::library_store::EnergyLevel;
use std::fmt;

/// Ways a template definition can be rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationFailure {
    EmptyName,
    ProfileComponentOutOfRange { level: EnergyLevel, value: u8 },
    ProfileSumNot100 { sum: u32 },
    NoEnergyBound,
    ConflictingEnergyBounds,
    EmptyGenres,
    BlankGenre,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::EmptyName => {
                write!(f, "Template name is required but was empty")
            }
            ValidationFailure::ProfileComponentOutOfRange { level, value } => {
                write!(
                    f,
                    "Energy profile share for '{}' must be between 0 and 100, got {}",
                    level, value
                )
            }
            ValidationFailure::ProfileSumNot100 { sum } => {
                write!(f, "Energy profile shares must sum to 100, got {}", sum)
            }
            ValidationFailure::NoEnergyBound => {
                write!(f, "Song criteria must set min_energy or max_energy")
            }
            ValidationFailure::ConflictingEnergyBounds => {
                write!(f, "Song criteria must set only one of min_energy and max_energy")
            }
            ValidationFailure::EmptyGenres => {
                write!(f, "Song criteria must list at least one preferred genre")
            }
            ValidationFailure::BlankGenre => {
                write!(f, "Preferred genres must not be blank")
            }
        }
    }
}

impl std::error::Error for ValidationFailure {}

/// Validate a template definition.
pub fn validate_template(template: &TemplateDefinition) -> Result<(), ValidationFailure> {
    if template.name.trim().is_empty() {
        return Err(ValidationFailure::EmptyName);
    }

    for level in EnergyLevel::ALL {
        let value = template.energy_profile.share(level);
        if value > 100 {
            return Err(ValidationFailure::ProfileComponentOutOfRange { level, value });
        }
    }
    let sum = template.energy_profile.total();
    if sum != 100 {
        return Err(ValidationFailure::ProfileSumNot100 { sum });
    }

    match (
        template.song_criteria.min_energy,
        template.song_criteria.max_energy,
    ) {
        (None, None) => return Err(ValidationFailure::NoEnergyBound),
        (Some(_), Some(_)) => return Err(ValidationFailure::ConflictingEnergyBounds),
        _ => {}
    }

    if template.song_criteria.preferred_genres.is_empty() {
        return Err(ValidationFailure::EmptyGenres);
    }
    if template
        .song_criteria
        .preferred_genres
        .iter()
        .any(|g| g.trim().is_empty())
    {
        return Err(ValidationFailure::BlankGenre);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library_store::{BusinessType, EnergyProfile};
    use crate::templates::definition::SongCriteria;

    fn valid_template() -> TemplateDefinition {
        TemplateDefinition {
            name: "Cafe Blend".to_string(),
            business_type: BusinessType::Cafe,
            energy_profile: EnergyProfile {
                low: 40,
                medium: 60,
                high: 0,
                very_high: 0,
            },
            song_criteria: SongCriteria {
                min_energy: None,
                max_energy: Some(EnergyLevel::Medium),
                preferred_genres: vec!["Jazz".to_string()],
            },
        }
    }

    #[test]
    fn test_valid_template_passes() {
        assert_eq!(validate_template(&valid_template()), Ok(()));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut template = valid_template();
        template.name = "   ".to_string();
        assert_eq!(
            validate_template(&template),
            Err(ValidationFailure::EmptyName)
        );
    }

    #[test]
    fn test_profile_sum_must_be_exactly_100() {
        let mut template = valid_template();
        template.energy_profile.medium = 59;
        assert_eq!(
            validate_template(&template),
            Err(ValidationFailure::ProfileSumNot100 { sum: 99 })
        );

        template.energy_profile.medium = 61;
        assert_eq!(
            validate_template(&template),
            Err(ValidationFailure::ProfileSumNot100 { sum: 101 })
        );
    }

    #[test]
    fn test_profile_component_over_100_rejected() {
        let mut template = valid_template();
        template.energy_profile.low = 140;
        assert_eq!(
            validate_template(&template),
            Err(ValidationFailure::ProfileComponentOutOfRange {
                level: EnergyLevel::Low,
                value: 140
            })
        );
    }

    #[test]
    fn test_missing_energy_bound_rejected() {
        let mut template = valid_template();
        template.song_criteria.max_energy = None;
        assert_eq!(
            validate_template(&template),
            Err(ValidationFailure::NoEnergyBound)
        );
    }

    #[test]
    fn test_both_energy_bounds_rejected() {
        let mut template = valid_template();
        template.song_criteria.min_energy = Some(EnergyLevel::Low);
        assert_eq!(
            validate_template(&template),
            Err(ValidationFailure::ConflictingEnergyBounds)
        );
    }

    #[test]
    fn test_empty_genre_list_rejected() {
        let mut template = valid_template();
        template.song_criteria.preferred_genres.clear();
        assert_eq!(
            validate_template(&template),
            Err(ValidationFailure::EmptyGenres)
        );
    }

    #[test]
    fn test_blank_genre_rejected() {
        let mut template = valid_template();
        template.song_criteria.preferred_genres.push("  ".to_string());
        assert_eq!(
            validate_template(&template),
            Err(ValidationFailure::BlankGenre)
        );
    }
}
