//! Template playlist definitions.

use crate::library_store::{BusinessType, EnergyLevel, EnergyProfile};
use serde::{Deserialize, Serialize};

/// Song selection rules for a template.
///
/// Exactly one of the energy bounds must be set: `min_energy` selects that
/// level and everything above it, `max_energy` that level and everything
/// below it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongCriteria {
    #[serde(default)]
    pub min_energy: Option<EnergyLevel>,
    #[serde(default)]
    pub max_energy: Option<EnergyLevel>,
    pub preferred_genres: Vec<String>,
}

/// A curated playlist recipe for one kind of business.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDefinition {
    pub name: String,
    pub business_type: BusinessType,
    pub energy_profile: EnergyProfile,
    pub song_criteria: SongCriteria,
}

fn genres(names: &[&str]) -> Vec<String> {
    names.iter().map(|g| g.to_string()).collect()
}

/// The stock template set, one per supported business type.
pub fn builtin_templates() -> Vec<TemplateDefinition> {
    vec![
        TemplateDefinition {
            name: "Gym Energy".to_string(),
            business_type: BusinessType::Gym,
            energy_profile: EnergyProfile {
                low: 0,
                medium: 10,
                high: 50,
                very_high: 40,
            },
            song_criteria: SongCriteria {
                min_energy: Some(EnergyLevel::High),
                max_energy: None,
                preferred_genres: genres(&["Dance", "Trap", "Electronic"]),
            },
        },
        TemplateDefinition {
            name: "Spa Serenity".to_string(),
            business_type: BusinessType::Spa,
            energy_profile: EnergyProfile {
                low: 80,
                medium: 20,
                high: 0,
                very_high: 0,
            },
            song_criteria: SongCriteria {
                min_energy: None,
                max_energy: Some(EnergyLevel::Low),
                preferred_genres: genres(&["Lounge", "Ambient"]),
            },
        },
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
                preferred_genres: genres(&["Jazz", "Acoustic", "Lounge"]),
            },
        },
        TemplateDefinition {
            name: "Retail Pulse".to_string(),
            business_type: BusinessType::Retail,
            energy_profile: EnergyProfile {
                low: 0,
                medium: 50,
                high: 35,
                very_high: 15,
            },
            song_criteria: SongCriteria {
                min_energy: Some(EnergyLevel::Medium),
                max_energy: None,
                preferred_genres: genres(&["Pop", "Dance"]),
            },
        },
        TemplateDefinition {
            name: "Restaurant Evening".to_string(),
            business_type: BusinessType::Restaurant,
            energy_profile: EnergyProfile {
                low: 30,
                medium: 70,
                high: 0,
                very_high: 0,
            },
            song_criteria: SongCriteria {
                min_energy: None,
                max_energy: Some(EnergyLevel::Medium),
                preferred_genres: genres(&["Jazz", "Soul", "Lounge"]),
            },
        },
        TemplateDefinition {
            name: "Office Focus".to_string(),
            business_type: BusinessType::Office,
            energy_profile: EnergyProfile {
                low: 50,
                medium: 50,
                high: 0,
                very_high: 0,
            },
            song_criteria: SongCriteria {
                min_energy: None,
                max_energy: Some(EnergyLevel::Medium),
                preferred_genres: genres(&["Ambient", "Acoustic", "Chill"]),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::validation::validate_template;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_templates_are_valid() {
        for template in builtin_templates() {
            validate_template(&template)
                .unwrap_or_else(|e| panic!("{} is invalid: {e}", template.name));
        }
    }

    #[test]
    fn test_builtin_templates_cover_distinct_business_types() {
        let templates = builtin_templates();
        let types: HashSet<BusinessType> =
            templates.iter().map(|t| t.business_type).collect();
        assert_eq!(types.len(), templates.len());
    }

    #[test]
    fn test_definition_json_round_trip() {
        let templates = builtin_templates();
        let json = serde_json::to_string(&templates).unwrap();
        let back: Vec<TemplateDefinition> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, templates);
    }

    #[test]
    fn test_definition_json_omitted_bounds_default_to_none() {
        let json = r#"{
            "name": "Custom",
            "business_type": "other",
            "energy_profile": {"low": 100, "medium": 0, "high": 0, "very_high": 0},
            "song_criteria": {"preferred_genres": ["Ambient"]}
        }"#;
        let definition: TemplateDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(definition.song_criteria.min_energy, None);
        assert_eq!(definition.song_criteria.max_energy, None);
    }
}
