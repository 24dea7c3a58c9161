//! Team composition summaries and formation quality metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Team count | Number of formed teams |
//! | Size range | Smallest and largest team |
//! | Skill spread | Highest minus lowest team mean skill |
//! | Game-cap violations | Teams holding more same-game members than allowed |
//! | Undersized | Teams below the minimum size |
//! | Oversized | Teams above the requested size |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{PersonalityType, Team};
use crate::scoring::TeamConstraints;

/// Composition of one team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    /// Team label.
    pub name: String,
    /// Member count.
    pub size: usize,
    /// Mean skill (0.0 for an empty team).
    pub average_skill: f64,
    /// Distinct games.
    pub games: usize,
    /// Distinct roles.
    pub roles: usize,
    /// Leaders.
    pub leaders: usize,
    /// Thinkers.
    pub thinkers: usize,
    /// Everyone who is neither Leader nor Thinker.
    pub balanced: usize,
}

impl TeamSummary {
    /// Summarizes a team.
    pub fn of(team: &Team) -> Self {
        let leaders = team.count_personality(PersonalityType::Leader);
        let thinkers = team.count_personality(PersonalityType::Thinker);
        Self {
            name: team.name.clone(),
            size: team.size(),
            average_skill: team.average_skill(),
            games: team.distinct_games().len(),
            roles: team.distinct_roles().len(),
            leaders,
            thinkers,
            balanced: team.size() - leaders - thinkers,
        }
    }
}

impl fmt::Display for TeamSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | size={} | avgSkill={:.2} | games={} | roles={} | leaders={} | thinkers={} | balanced={}",
            self.name,
            self.size,
            self.average_skill,
            self.games,
            self.roles,
            self.leaders,
            self.thinkers,
            self.balanced
        )
    }
}

/// Quality indicators for a formed set of teams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationKpi {
    /// Number of teams.
    pub team_count: usize,
    /// Participants across all teams.
    pub total_members: usize,
    /// Smallest team size (0 with no teams).
    pub min_size: usize,
    /// Largest team size (0 with no teams).
    pub max_size: usize,
    /// Highest minus lowest team mean skill.
    pub skill_spread: f64,
    /// Teams where some game exceeds the per-game cap.
    pub game_cap_violations: usize,
    /// Teams below the minimum size.
    pub undersized_teams: usize,
    /// Teams above the requested size.
    pub oversized_teams: usize,
    /// Per-team composition.
    pub summaries: Vec<TeamSummary>,
}

impl FormationKpi {
    /// Computes metrics for `teams` formed at `team_size`.
    pub fn calculate(
        teams: &[Team],
        team_size: usize,
        min_team_size: usize,
        constraints: &TeamConstraints,
    ) -> Self {
        let summaries: Vec<TeamSummary> = teams.iter().map(TeamSummary::of).collect();

        let min_size = summaries.iter().map(|s| s.size).min().unwrap_or(0);
        let max_size = summaries.iter().map(|s| s.size).max().unwrap_or(0);

        let skill_spread = if summaries.is_empty() {
            0.0
        } else {
            let (lo, hi) = summaries.iter().fold((f64::MAX, f64::MIN), |(lo, hi), s| {
                (lo.min(s.average_skill), hi.max(s.average_skill))
            });
            hi - lo
        };

        let game_cap_violations = teams
            .iter()
            .filter(|team| {
                team.distinct_games()
                    .iter()
                    .any(|game| team.count_game(game) > constraints.max_per_game)
            })
            .count();

        Self {
            team_count: teams.len(),
            total_members: summaries.iter().map(|s| s.size).sum(),
            min_size,
            max_size,
            skill_spread,
            game_cap_violations,
            undersized_teams: summaries.iter().filter(|s| s.size < min_team_size).count(),
            oversized_teams: summaries.iter().filter(|s| s.size > team_size).count(),
            summaries,
        }
    }

    /// Whether the teams meet the given quality thresholds.
    pub fn meets_thresholds(&self, max_skill_spread: f64) -> bool {
        self.skill_spread <= max_skill_spread && self.undersized_teams == 0
    }
}
