//! Placement context for rule evaluation.

use serde::{Deserialize, Serialize};

/// Per-team composition limits.
///
/// These are soft limits: exceeding one earns a heavy penalty rather
/// than a hard block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamConstraints {
    /// Members per team sharing one game before the penalty applies.
    pub max_per_game: usize,
    /// Distinct roles a team aims for.
    pub min_distinct_roles: usize,
    /// Leaders per team before the penalty applies.
    pub max_leaders: usize,
    /// Thinkers per team before the penalty applies.
    pub max_thinkers: usize,
}

impl Default for TeamConstraints {
    fn default() -> Self {
        Self {
            max_per_game: 2,
            min_distinct_roles: 3,
            max_leaders: 2,
            max_thinkers: 3,
        }
    }
}

impl TeamConstraints {
    /// Sets the per-game cap.
    pub fn with_max_per_game(mut self, cap: usize) -> Self {
        self.max_per_game = cap;
        self
    }

    /// Sets the role diversity target.
    pub fn with_min_distinct_roles(mut self, target: usize) -> Self {
        self.min_distinct_roles = target;
        self
    }

    /// Sets the leader cap.
    pub fn with_max_leaders(mut self, cap: usize) -> Self {
        self.max_leaders = cap;
        self
    }

    /// Sets the thinker cap.
    pub fn with_max_thinkers(mut self, cap: usize) -> Self {
        self.max_thinkers = cap;
        self
    }
}

/// Run-wide state passed to placement rules.
///
/// Computed once per formation run, before any placement.
#[derive(Debug, Clone, Default)]
pub struct PlacementContext {
    /// Mean skill level across the whole roster.
    pub global_average_skill: f64,
    /// Composition limits.
    pub constraints: TeamConstraints,
}

impl PlacementContext {
    /// Creates a context with default constraints.
    pub fn new(global_average_skill: f64) -> Self {
        Self {
            global_average_skill,
            constraints: TeamConstraints::default(),
        }
    }

    /// Sets the composition limits.
    pub fn with_constraints(mut self, constraints: TeamConstraints) -> Self {
        self.constraints = constraints;
        self
    }
}
