//! Formation configuration.
//!
//! [`FormationConfig`] holds every parameter that controls a run: the
//! assignment strategy, the minimum viable team size, the composition
//! limits, and the random seed.

use serde::{Deserialize, Serialize};

use crate::error::{FormationError, Result};
use crate::scoring::TeamConstraints;

/// Smallest team the repair pass leaves standing.
pub const MIN_TEAM_SIZE: usize = 3;

/// How participants are distributed over the teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FormationStrategy {
    /// Greedy placement by the highest placement score.
    #[default]
    Scored,
    /// One Leader and two Thinkers per team, remaining participants
    /// balanced by team skill.
    Quota {
        /// Relabel Leaders and Thinkers beyond the quota as Balanced.
        ///
        /// This changes the personality type carried by the returned
        /// participants.
        reclassify_excess: bool,
    },
}

/// Configuration for a formation run.
///
/// # Defaults
///
/// ```
/// use u_teams::formation::{FormationConfig, FormationStrategy};
///
/// let config = FormationConfig::default();
/// assert_eq!(config.strategy, FormationStrategy::Scored);
/// assert_eq!(config.min_team_size, 3);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_teams::formation::{FormationConfig, FormationStrategy};
///
/// let config = FormationConfig::default()
///     .with_strategy(FormationStrategy::Quota { reclassify_excess: true })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationConfig {
    /// Assignment strategy.
    pub strategy: FormationStrategy,

    /// Teams below this size are disbanded by the repair pass, and
    /// requested team sizes below it are rejected.
    pub min_team_size: usize,

    /// Per-team composition limits used by the placement rules.
    pub constraints: TeamConstraints,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            strategy: FormationStrategy::Scored,
            min_team_size: MIN_TEAM_SIZE,
            constraints: TeamConstraints::default(),
            seed: None,
        }
    }
}

impl FormationConfig {
    /// Sets the assignment strategy.
    pub fn with_strategy(mut self, strategy: FormationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the minimum viable team size.
    pub fn with_min_team_size(mut self, size: usize) -> Self {
        self.min_team_size = size;
        self
    }

    /// Sets the composition limits.
    pub fn with_constraints(mut self, constraints: TeamConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.min_team_size == 0 {
            return Err(FormationError::InvalidConfig(
                "min_team_size must be at least 1".into(),
            ));
        }
        if self.constraints.max_per_game == 0 {
            return Err(FormationError::InvalidConfig(
                "max_per_game must be at least 1".into(),
            ));
        }
        if self.constraints.min_distinct_roles == 0 {
            return Err(FormationError::InvalidConfig(
                "min_distinct_roles must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
