//! Quota-based assignment.
//!
//! # Algorithm
//!
//! 1. Deal one Leader to each team, in team order.
//! 2. Deal two Thinkers to each team, round-robin.
//! 3. Leaders and Thinkers left over are either relabelled as Balanced or
//!    keep their type, and join the remaining participants.
//! 4. The remaining participants, highest skill first, each go to the
//!    non-full team with the lowest skill total (ties: fewer members, then
//!    team order). When every team is full, the smallest team takes them.
//!
//! Dealing never overfills a team, so teams smaller than the quota simply
//! receive fewer seeded members.

use std::sync::atomic::AtomicBool;

use super::builder::is_cancelled;
use super::repair::smallest_team;
use crate::error::{FormationError, Result};
use crate::models::{Participant, PersonalityType, Team};
use crate::report::Reporter;

/// Leaders dealt to each team.
pub const LEADERS_PER_TEAM: usize = 1;

/// Thinkers dealt to each team.
pub const THINKERS_PER_TEAM: usize = 2;

/// Result of a quota assignment.
#[derive(Debug, Clone, Default)]
pub struct QuotaPlacement {
    /// Participants with no team to go to.
    pub unplaced: Vec<Participant>,
    /// Participants relabelled as Balanced.
    pub reclassified: usize,
}

/// Distributes `roster` over `teams` by personality quota, then by skill.
///
/// `roster` is expected in placement order (highest skill first).
pub fn assign_by_quota(
    teams: &mut [Team],
    roster: Vec<Participant>,
    team_size: usize,
    reclassify_excess: bool,
    reporter: &dyn Reporter,
    cancel: Option<&AtomicBool>,
) -> Result<QuotaPlacement> {
    if is_cancelled(cancel) {
        reporter.warn("team formation cancelled");
        return Err(FormationError::Cancelled);
    }

    let (leaders, rest): (Vec<_>, Vec<_>) = roster
        .into_iter()
        .partition(|p| p.personality_type == PersonalityType::Leader);
    let (thinkers, mut rest): (Vec<_>, Vec<_>) = rest
        .into_iter()
        .partition(|p| p.personality_type == PersonalityType::Thinker);

    let mut excess = deal(teams, leaders, LEADERS_PER_TEAM, team_size);
    excess.extend(deal(teams, thinkers, THINKERS_PER_TEAM, team_size));

    let mut reclassified = 0;
    if reclassify_excess {
        for participant in &mut excess {
            reporter.info(&format!(
                "reclassified {} ({}) from {} to {}",
                participant.name,
                participant.id,
                participant.personality_type,
                PersonalityType::Balanced
            ));
            participant.personality_type = PersonalityType::Balanced;
            reclassified += 1;
        }
    }

    rest.extend(excess);
    rest.sort_by(|a, b| b.skill_level.cmp(&a.skill_level));

    let mut unplaced = Vec::new();
    for participant in rest {
        if is_cancelled(cancel) {
            reporter.warn("team formation cancelled");
            return Err(FormationError::Cancelled);
        }

        match lowest_skill_team(teams, team_size).or_else(|| smallest_team(teams)) {
            Some(idx) => teams[idx].add_member(participant),
            None => {
                reporter.error(&format!(
                    "no team available for {} ({})",
                    participant.name, participant.id
                ));
                unplaced.push(participant);
            }
        }
    }

    Ok(QuotaPlacement {
        unplaced,
        reclassified,
    })
}

/// Deals up to `per_team` participants to each team, round-robin.
/// Returns whoever was not dealt.
fn deal(
    teams: &mut [Team],
    participants: Vec<Participant>,
    per_team: usize,
    team_size: usize,
) -> Vec<Participant> {
    let mut pending = participants.into_iter();
    for _ in 0..per_team {
        for team in teams.iter_mut() {
            if !team.has_capacity(team_size) {
                continue;
            }
            match pending.next() {
                Some(participant) => team.add_member(participant),
                None => return Vec::new(),
            }
        }
    }
    pending.collect()
}

/// Non-full team with the lowest skill total; ties go to fewer members,
/// then to the earlier team.
fn lowest_skill_team(teams: &[Team], team_size: usize) -> Option<usize> {
    teams
        .iter()
        .enumerate()
        .filter(|(_, team)| team.has_capacity(team_size))
        .min_by_key(|(_, team)| (team.skill_sum(), team.size()))
        .map(|(idx, _)| idx)
}
