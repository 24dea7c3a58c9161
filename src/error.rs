//! Error types for team formation.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors raised while forming teams.
///
/// [`TeamBuilder::build_teams`](crate::formation::TeamBuilder::build_teams)
/// never surfaces these: it reports them and returns an empty team list.
/// Use [`TeamBuilder::try_build_teams`](crate::formation::TeamBuilder::try_build_teams)
/// to inspect the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormationError {
    /// Requested team size is below the minimum viable size.
    #[error("invalid team size {requested}: teams need at least {minimum} members")]
    InvalidTeamSize {
        /// Requested team size.
        requested: usize,
        /// Minimum viable size from the configuration.
        minimum: usize,
    },

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The roster violates its data contract.
    #[error("invalid roster: {} problem(s), first: {}", .0.len(), first_message(.0))]
    InvalidRoster(Vec<ValidationError>),

    /// A survey answer was outside the 1..=5 scale.
    #[error("survey question {question} answered {value}, expected 1..=5")]
    InvalidSurveyAnswer {
        /// Question number (1-based).
        question: usize,
        /// Answer given.
        value: u8,
    },

    /// The run was cancelled before completion.
    #[error("team formation cancelled")]
    Cancelled,

    /// A placement step panicked (for example inside a custom rule).
    #[error("placement fault during {phase} for participant {participant}: {detail}")]
    PlacementFault {
        /// Formation phase that failed.
        phase: &'static str,
        /// ID of the participant being placed.
        participant: String,
        /// Panic message.
        detail: String,
    },

    /// The background worker panicked.
    #[error("team formation worker panicked")]
    WorkerPanicked,
}

fn first_message(errors: &[ValidationError]) -> &str {
    errors.first().map(|e| e.message.as_str()).unwrap_or("none")
}

/// Result alias for team formation operations.
pub type Result<T> = std::result::Result<T, FormationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_team_size() {
        let err = FormationError::InvalidTeamSize {
            requested: 2,
            minimum: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid team size 2: teams need at least 3 members"
        );
    }

    #[test]
    fn test_display_roster_uses_first_problem() {
        let err = FormationError::InvalidRoster(vec![
            ValidationError::new(ValidationErrorKind::EmptyName, "Participant 'P1' has no name"),
            ValidationError::new(ValidationErrorKind::DuplicateId, "Duplicate participant ID: P2"),
        ]);
        let text = err.to_string();
        assert!(text.contains("2 problem(s)"));
        assert!(text.contains("'P1' has no name"));
    }

    #[test]
    fn test_display_placement_fault() {
        let err = FormationError::PlacementFault {
            phase: "scored placement",
            participant: "P7".into(),
            detail: "rule failure".into(),
        };
        assert_eq!(
            err.to_string(),
            "placement fault during scored placement for participant P7: rule failure"
        );
    }
}
