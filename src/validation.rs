//! Input validation for team formation.
//!
//! Checks the data contract of a roster before it reaches the engine.
//! Detects:
//! - Duplicate or empty participant IDs
//! - Participants without a name
//! - Skill levels above 10
//! - Personality scores above 100
//!
//! Also provides the caller-side team size check.

use crate::models::{Participant, MAX_PERSONALITY_SCORE, MAX_SKILL_LEVEL};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two participants share the same ID.
    DuplicateId,
    /// A participant has a blank ID.
    EmptyId,
    /// A participant has a blank name.
    EmptyName,
    /// Skill level outside 0..=10.
    SkillOutOfRange,
    /// Personality score outside 0..=100.
    PersonalityScoreOutOfRange,
    /// Team size below the minimum.
    TeamSizeTooSmall,
    /// Team size larger than the roster.
    TeamSizeTooLarge,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster.
///
/// Checks:
/// 1. No blank participant IDs
/// 2. No duplicate participant IDs
/// 3. Every participant has a name
/// 4. Skill levels within 0..=10 (0 = unset)
/// 5. Personality scores within 0..=100
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(participants: &[Participant]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in participants {
        if p.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Participant '{}' has no ID", p.name),
            ));
        } else if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate participant ID: {}", p.id),
            ));
        }

        if p.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Participant '{}' has no name", p.id),
            ));
        }

        if p.skill_level > MAX_SKILL_LEVEL {
            errors.push(ValidationError::new(
                ValidationErrorKind::SkillOutOfRange,
                format!(
                    "Participant '{}' has skill level {} (max {MAX_SKILL_LEVEL})",
                    p.id, p.skill_level
                ),
            ));
        }

        if p.personality_score > MAX_PERSONALITY_SCORE {
            errors.push(ValidationError::new(
                ValidationErrorKind::PersonalityScoreOutOfRange,
                format!(
                    "Participant '{}' has personality score {} (max {MAX_PERSONALITY_SCORE})",
                    p.id, p.personality_score
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a requested team size against the roster size.
///
/// A team size must be at least `min_team_size` and no larger than the
/// number of participants.
pub fn validate_team_size(
    team_size: usize,
    participant_count: usize,
    min_team_size: usize,
) -> Result<(), ValidationError> {
    if team_size < min_team_size {
        return Err(ValidationError::new(
            ValidationErrorKind::TeamSizeTooSmall,
            format!("Team size {team_size} is below the minimum of {min_team_size}"),
        ));
    }
    if team_size > participant_count {
        return Err(ValidationError::new(
            ValidationErrorKind::TeamSizeTooLarge,
            format!("Team size {team_size} exceeds the {participant_count} available participants"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Vec<Participant> {
        vec![
            Participant::new("P1", "Alice").with_skill(7).with_personality_score(80),
            Participant::new("P2", "Bob").with_skill(3),
            Participant::new("P3", "Chen"),
        ]
    }

    #[test]
    fn test_valid_roster() {
        assert!(validate_roster(&sample_roster()).is_ok());
        assert!(validate_roster(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut roster = sample_roster();
        roster.push(Participant::new("P1", "Another Alice"));

        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("P1")));
    }

    #[test]
    fn test_empty_id_and_name() {
        let roster = vec![Participant::new("  ", "Ghost"), Participant::new("P9", " ")];

        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyId));
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyName));
    }

    #[test]
    fn test_out_of_range_attributes() {
        let roster = vec![
            Participant::new("P1", "Alice").with_skill(11),
            Participant::new("P2", "Bob").with_personality_score(101),
        ];

        let errors = validate_roster(&roster).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SkillOutOfRange));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PersonalityScoreOutOfRange));
    }

    #[test]
    fn test_multiple_errors() {
        let roster = vec![
            Participant::new("P1", "").with_skill(12),
            Participant::new("P1", "Bob"),
        ];

        let errors = validate_roster(&roster).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_team_size_bounds() {
        assert!(validate_team_size(3, 10, 3).is_ok());
        assert!(validate_team_size(10, 10, 3).is_ok());

        let small = validate_team_size(2, 10, 3).unwrap_err();
        assert_eq!(small.kind, ValidationErrorKind::TeamSizeTooSmall);

        let large = validate_team_size(11, 10, 3).unwrap_err();
        assert_eq!(large.kind, ValidationErrorKind::TeamSizeTooLarge);
    }
}
