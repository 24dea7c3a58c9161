//! Team model.
//!
//! A team is a labelled collection of participants formed by one
//! formation run. The query methods here are the composition counts that
//! placement rules and summaries read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::participant::normalize;
use super::{Participant, PersonalityType};

/// A formed team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Display label, unique within a run (e.g., "Team 1").
    pub name: String,
    /// Members in insertion order.
    pub members: Vec<Participant>,
}

impl Team {
    /// Creates an empty team.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Creates `count` empty teams labelled "Team 1", "Team 2", ...
    pub fn numbered(count: usize) -> Vec<Self> {
        (1..=count).map(|i| Self::new(format!("Team {i}"))).collect()
    }

    /// Adds a member (builder form).
    pub fn with_member(mut self, participant: Participant) -> Self {
        self.members.push(participant);
        self
    }

    /// Adds a member.
    pub fn add_member(&mut self, participant: Participant) {
        self.members.push(participant);
    }

    /// Detaches all members, leaving the team empty.
    pub fn take_members(&mut self) -> Vec<Participant> {
        std::mem::take(&mut self.members)
    }

    /// Number of members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Whether the team has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether another member fits under `capacity`.
    pub fn has_capacity(&self, capacity: usize) -> bool {
        self.members.len() < capacity
    }

    /// Whether a participant with this ID is a member.
    pub fn contains(&self, participant_id: &str) -> bool {
        self.members.iter().any(|m| m.id == participant_id)
    }

    /// Members whose game matches `game` (case-insensitive, trimmed).
    pub fn count_game(&self, game: &str) -> usize {
        let key = normalize(game);
        self.members.iter().filter(|m| m.game_key() == key).count()
    }

    /// Distinct non-empty games, normalized.
    pub fn distinct_games(&self) -> BTreeSet<String> {
        self.members
            .iter()
            .map(Participant::game_key)
            .filter(|g| !g.is_empty())
            .collect()
    }

    /// Distinct non-empty roles, normalized.
    pub fn distinct_roles(&self) -> BTreeSet<String> {
        self.members
            .iter()
            .map(Participant::role_key)
            .filter(|r| !r.is_empty())
            .collect()
    }

    /// Members with the given personality type.
    pub fn count_personality(&self, personality: PersonalityType) -> usize {
        self.members
            .iter()
            .filter(|m| m.personality_type == personality)
            .count()
    }

    /// Sum of member skill levels.
    pub fn skill_sum(&self) -> u32 {
        self.members.iter().map(|m| u32::from(m.skill_level)).sum()
    }

    /// Mean member skill level (0.0 for an empty team).
    pub fn average_skill(&self) -> f64 {
        if self.members.is_empty() {
            return 0.0;
        }
        f64::from(self.skill_sum()) / self.members.len() as f64
    }
}
