//! Energy range resolution.

use super::definition::SongCriteria;
use crate::library_store::EnergyLevel;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("song criteria set neither min_energy nor max_energy")]
    NoEnergyBound,
    #[error("song criteria set both min_energy and max_energy")]
    ConflictingBounds,
}

/// Resolve the criteria's single bound into a contiguous slice of the
/// energy taxonomy: a min bound takes that level and up, a max bound that
/// level and down.
///
/// Criteria with zero or two bounds are caught by validation first; this
/// rejects them again so the resolver is safe on its own.
pub fn resolve_range(criteria: &SongCriteria) -> Result<&'static [EnergyLevel], RangeError> {
    match (criteria.min_energy, criteria.max_energy) {
        (Some(min), None) => Ok(&EnergyLevel::ALL[min.index()..]),
        (None, Some(max)) => Ok(&EnergyLevel::ALL[..=max.index()]),
        (None, None) => Err(RangeError::NoEnergyBound),
        (Some(_), Some(_)) => Err(RangeError::ConflictingBounds),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(min: Option<EnergyLevel>, max: Option<EnergyLevel>) -> SongCriteria {
        SongCriteria {
            min_energy: min,
            max_energy: max,
            preferred_genres: vec!["Jazz".to_string()],
        }
    }

    #[test]
    fn test_min_bound_takes_suffix_of_taxonomy() {
        assert_eq!(
            resolve_range(&criteria(Some(EnergyLevel::High), None)).unwrap(),
            &[EnergyLevel::High, EnergyLevel::VeryHigh]
        );
        assert_eq!(
            resolve_range(&criteria(Some(EnergyLevel::Low), None)).unwrap(),
            &EnergyLevel::ALL
        );
    }

    #[test]
    fn test_max_bound_takes_prefix_of_taxonomy() {
        assert_eq!(
            resolve_range(&criteria(None, Some(EnergyLevel::Medium))).unwrap(),
            &[EnergyLevel::Low, EnergyLevel::Medium]
        );
        assert_eq!(
            resolve_range(&criteria(None, Some(EnergyLevel::VeryHigh))).unwrap(),
            &EnergyLevel::ALL
        );
    }

    #[test]
    fn test_single_level_ranges() {
        assert_eq!(
            resolve_range(&criteria(Some(EnergyLevel::VeryHigh), None)).unwrap(),
            &[EnergyLevel::VeryHigh]
        );
        assert_eq!(
            resolve_range(&criteria(None, Some(EnergyLevel::Low))).unwrap(),
            &[EnergyLevel::Low]
        );
    }

    #[test]
    fn test_unbounded_criteria_rejected() {
        assert_eq!(
            resolve_range(&criteria(None, None)),
            Err(RangeError::NoEnergyBound)
        );
    }

    #[test]
    fn test_doubly_bounded_criteria_rejected() {
        assert_eq!(
            resolve_range(&criteria(Some(EnergyLevel::Low), Some(EnergyLevel::High))),
            Err(RangeError::ConflictingBounds)
        );
    }
}
