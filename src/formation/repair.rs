//! Repair pass for undersized teams.
//!
//! # Algorithm
//!
//! 1. Collect every non-empty team smaller than the minimum size.
//! 2. For each such team in order, detach all members and move them one
//!    at a time into the currently smallest team other than the one
//!    being drained. Sizes shift after each move, so members of the same
//!    team may land in different targets. Teams drained earlier are empty
//!    and therefore eligible targets.
//! 3. Drop every team left empty.
//!
//! A member with no possible target (the drained team is the only team)
//! is reported and returned as unplaced. No team is ever created.

use crate::models::{Participant, Team};
use crate::report::Reporter;

/// Index of the smallest team, first minimum wins.
pub fn smallest_team(teams: &[Team]) -> Option<usize> {
    teams
        .iter()
        .enumerate()
        .min_by_key(|&(_, team)| team.size())
        .map(|(idx, _)| idx)
}

/// Index of the smallest team other than `exclude`.
///
/// The first team with the minimum size wins. Returns `None` when no
/// other team exists.
pub fn smallest_team_excluding(teams: &[Team], exclude: usize) -> Option<usize> {
    teams
        .iter()
        .enumerate()
        .filter(|&(idx, _)| idx != exclude)
        .min_by_key(|&(_, team)| team.size())
        .map(|(idx, _)| idx)
}

/// Disbands teams below `min_size` and removes empty teams.
///
/// Returns the participants that could not be placed anywhere.
pub fn ensure_min_team_size(
    teams: &mut Vec<Team>,
    min_size: usize,
    reporter: &dyn Reporter,
) -> Vec<Participant> {
    let small: Vec<usize> = teams
        .iter()
        .enumerate()
        .filter(|(_, t)| !t.is_empty() && t.size() < min_size)
        .map(|(idx, _)| idx)
        .collect();

    if small.is_empty() {
        reporter.info(&format!("no small teams to fix (min_size={min_size})"));
        teams.retain(|t| !t.is_empty());
        return Vec::new();
    }

    for &idx in &small {
        reporter.info(&format!(
            "small team detected: {} | size={}",
            teams[idx].name,
            teams[idx].size()
        ));
    }
    reporter.info(&format!(
        "fixing small teams (<{min_size}): {} team(s)",
        small.len()
    ));

    let mut unplaced = Vec::new();

    for &idx in &small {
        let source = teams[idx].name.clone();
        reporter.info(&format!("redistributing members from {source}"));

        for member in teams[idx].take_members() {
            match smallest_team_excluding(teams, idx) {
                Some(target) => {
                    reporter.info(&format!(
                        "moving {} from {source} to {}",
                        member.name, teams[target].name
                    ));
                    teams[target].add_member(member);
                }
                None => {
                    reporter.error(&format!(
                        "no target team for {} ({}) from {source}; left unplaced",
                        member.name, member.id
                    ));
                    unplaced.push(member);
                }
            }
        }
    }

    teams.retain(|t| !t.is_empty());
    reporter.info(&format!("after fixing, total teams={}", teams.len()));

    unplaced
}
