//! Team builder: the formation engine.
//!
//! # Algorithm
//!
//! 1. Create `ceil(n / team_size)` empty teams ("Team 1", "Team 2", ...).
//! 2. Shuffle the roster, then stable-sort it by skill (descending), so
//!    high-skill participants are placed first and equal skills carry no
//!    upstream ordering bias.
//! 3. Compute the roster-wide mean skill once.
//! 4. Place every participant according to the configured strategy.
//!    The scored strategy evaluates every non-full team in a freshly
//!    shuffled order and commits to the first highest score; when every
//!    team is full it falls back to the smallest team.
//! 5. Run the repair pass to disband teams below the minimum size.
//!
//! # Complexity
//! O(n * t * m) where n=participants, t=teams, m=team size.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::config::{FormationConfig, FormationStrategy};
use super::quota;
use super::repair::{ensure_min_team_size, smallest_team};
use super::summary::TeamSummary;
use crate::error::{FormationError, Result};
use crate::models::{Participant, Team};
use crate::report::{LogReporter, Reporter};
use crate::scoring::{PlacementContext, PlacementScorer};
use crate::validation::validate_roster;

/// Result of a formation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormationOutcome {
    /// Formed teams, in creation order.
    pub teams: Vec<Team>,
    /// Participants the repair pass could not place.
    pub unplaced: Vec<Participant>,
    /// Roster-wide mean skill used as the balancing target.
    pub global_average_skill: f64,
    /// Participants relabelled as Balanced by the quota strategy.
    pub reclassified: usize,
}

impl FormationOutcome {
    /// Number of participants placed into teams.
    pub fn placed_count(&self) -> usize {
        self.teams.iter().map(Team::size).sum()
    }

    /// Whether every participant was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

/// Forms teams from a roster.
///
/// The caller's roster is never modified: the builder works on its own
/// copy, and every placed participant appears in exactly one team.
///
/// # Example
///
/// ```
/// use u_teams::formation::{FormationConfig, TeamBuilder};
/// use u_teams::models::Participant;
///
/// let roster: Vec<Participant> = (1..=8)
///     .map(|i| {
///         Participant::new(format!("P{i}"), format!("Player {i}"))
///             .with_game(if i % 2 == 0 { "Valorant" } else { "FIFA" })
///             .with_skill(i as u8)
///     })
///     .collect();
///
/// let builder = TeamBuilder::new().with_config(FormationConfig::default().with_seed(7));
/// let teams = builder.build_teams(&roster, 4);
/// assert_eq!(teams.len(), 2);
/// assert_eq!(teams.iter().map(|t| t.size()).sum::<usize>(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct TeamBuilder {
    config: FormationConfig,
    scorer: PlacementScorer,
    reporter: Arc<dyn Reporter>,
}

impl TeamBuilder {
    /// Creates a builder with the default configuration, the standard
    /// placement rules, and a [`LogReporter`].
    pub fn new() -> Self {
        Self {
            config: FormationConfig::default(),
            scorer: PlacementScorer::standard(),
            reporter: Arc::new(LogReporter),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: FormationConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the placement scorer used by the scored strategy.
    pub fn with_scorer(mut self, scorer: PlacementScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Sets the diagnostics reporter.
    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &FormationConfig {
        &self.config
    }

    /// Forms teams, reporting any failure and returning no teams.
    ///
    /// Panics raised while forming teams are contained here as well.
    pub fn build_teams(&self, participants: &[Participant], team_size: usize) -> Vec<Team> {
        let attempt =
            panic::catch_unwind(AssertUnwindSafe(|| self.try_build_teams(participants, team_size)));
        match attempt {
            Ok(Ok(outcome)) => outcome.teams,
            Ok(Err(err)) => {
                self.report_failure(&err, participants.len(), team_size);
                Vec::new()
            }
            Err(payload) => {
                self.reporter.error(&format!(
                    "team formation aborted (participants={}, team_size={team_size}): {}",
                    participants.len(),
                    panic_message(payload.as_ref())
                ));
                Vec::new()
            }
        }
    }

    /// Forms teams.
    ///
    /// An empty roster yields an empty outcome. Fails on a team size below
    /// the configured minimum, an invalid configuration, or an invalid
    /// roster.
    pub fn try_build_teams(
        &self,
        participants: &[Participant],
        team_size: usize,
    ) -> Result<FormationOutcome> {
        self.build_with_cancel(participants, team_size, None)
    }

    /// Forms teams with an optional cancellation flag.
    ///
    /// The flag is checked before each placement. A cancelled run returns
    /// [`FormationError::Cancelled`] and no partial result.
    pub fn build_with_cancel(
        &self,
        participants: &[Participant],
        team_size: usize,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<FormationOutcome> {
        self.config.validate()?;

        if participants.is_empty() {
            self.reporter.info("no participants available to build teams");
            return Ok(FormationOutcome::default());
        }

        if team_size < self.config.min_team_size {
            return Err(FormationError::InvalidTeamSize {
                requested: team_size,
                minimum: self.config.min_team_size,
            });
        }

        validate_roster(participants).map_err(FormationError::InvalidRoster)?;

        self.reporter.info(&format!(
            "building teams. participants={}, team_size={team_size}, strategy={:?}",
            participants.len(),
            self.config.strategy
        ));

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let team_count = participants.len().div_ceil(team_size);
        let mut teams = Team::numbered(team_count);

        let mut roster = participants.to_vec();
        roster.shuffle(&mut rng);
        roster.sort_by(|a, b| b.skill_level.cmp(&a.skill_level));

        let global_average_skill = average_skill(&roster);
        self.reporter.info(&format!("global average skill={global_average_skill:.2}"));

        let context = PlacementContext::new(global_average_skill)
            .with_constraints(self.config.constraints);
        let cancel = cancel.as_deref();

        let (mut unplaced, reclassified) = match self.config.strategy {
            FormationStrategy::Scored => (
                self.assign_scored(&mut teams, roster, team_size, &context, &mut rng, cancel)?,
                0,
            ),
            FormationStrategy::Quota { reclassify_excess } => {
                let placed = quota::assign_by_quota(
                    &mut teams,
                    roster,
                    team_size,
                    reclassify_excess,
                    self.reporter.as_ref(),
                    cancel,
                )?;
                (placed.unplaced, placed.reclassified)
            }
        };

        unplaced.extend(ensure_min_team_size(
            &mut teams,
            self.config.min_team_size,
            self.reporter.as_ref(),
        ));

        self.reporter.info(&format!("created {} teams", teams.len()));
        for team in &teams {
            self.reporter.info(&TeamSummary::of(team).to_string());
        }

        Ok(FormationOutcome {
            teams,
            unplaced,
            global_average_skill,
            reclassified,
        })
    }

    /// Greedy placement by placement score.
    fn assign_scored<R: Rng>(
        &self,
        teams: &mut [Team],
        roster: Vec<Participant>,
        team_size: usize,
        context: &PlacementContext,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<Vec<Participant>> {
        let mut order: Vec<usize> = (0..teams.len()).collect();
        let mut unplaced = Vec::new();

        for participant in roster {
            if is_cancelled(cancel) {
                self.reporter.warn("team formation cancelled");
                return Err(FormationError::Cancelled);
            }

            order.shuffle(rng);
            let best = panic::catch_unwind(AssertUnwindSafe(|| {
                self.scorer
                    .select_best(teams, &order, &participant, context, team_size)
            }))
            .map_err(|payload| FormationError::PlacementFault {
                phase: "scored placement",
                participant: participant.id.clone(),
                detail: panic_message(payload.as_ref()),
            })?;
            let target = best.or_else(|| smallest_team(teams));

            match target {
                Some(idx) => teams[idx].add_member(participant),
                None => {
                    self.reporter.error(&format!(
                        "no team available for {} ({})",
                        participant.name, participant.id
                    ));
                    unplaced.push(participant);
                }
            }
        }

        Ok(unplaced)
    }

    fn report_failure(&self, err: &FormationError, participant_count: usize, team_size: usize) {
        self.reporter.error(&format!(
            "team formation failed (participants={participant_count}, team_size={team_size}): {err}"
        ));
        if let FormationError::InvalidRoster(problems) = err {
            for problem in problems {
                self.reporter.error(&problem.message);
            }
        }
    }
}

impl Default for TeamBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Forms teams with the default builder.
pub fn build_teams(participants: &[Participant], team_size: usize) -> Vec<Team> {
    TeamBuilder::new().build_teams(participants, team_size)
}

pub(crate) fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn average_skill(roster: &[Participant]) -> f64 {
    if roster.is_empty() {
        return 0.0;
    }
    let total: u32 = roster.iter().map(|p| u32::from(p.skill_level)).sum();
    f64::from(total) / roster.len() as f64
}
