//! Participant model.
//!
//! A participant is one person to be placed into a team. It carries the
//! categorical and numeric attributes that placement rules score against:
//! preferred game, skill level, preferred role, and personality type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::survey::SurveyAnswers;

/// Highest valid skill level. `0` means "unset".
pub const MAX_SKILL_LEVEL: u8 = 10;

/// Highest valid personality score.
pub const MAX_PERSONALITY_SCORE: u8 = 100;

/// Personality classification derived from the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PersonalityType {
    /// Drives decisions; capped per team.
    Leader,
    /// Analytical; capped per team.
    Thinker,
    /// Team player.
    Balanced,
    /// Survey not completed.
    #[default]
    #[serde(rename = "Not selected")]
    NotSelected,
}

impl PersonalityType {
    /// Classifies a personality score (0..=100).
    ///
    /// `>= 80` is a Leader, `>= 50` Balanced, anything lower a Thinker.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Leader
        } else if score >= 50 {
            Self::Balanced
        } else {
            Self::Thinker
        }
    }

    /// Parses a tag, mapping anything unrecognized to `NotSelected`.
    pub fn parse_lenient(tag: &str) -> Self {
        tag.parse().unwrap_or(Self::NotSelected)
    }

    /// Display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leader => "Leader",
            Self::Thinker => "Thinker",
            Self::Balanced => "Balanced",
            Self::NotSelected => "Not selected",
        }
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "leader" => Ok(Self::Leader),
            "thinker" => Ok(Self::Thinker),
            "balanced" => Ok(Self::Balanced),
            "not selected" | "" => Ok(Self::NotSelected),
            other => Err(format!("unknown personality type '{other}'")),
        }
    }
}

/// A person to be placed into a team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique participant identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact address (may be empty).
    #[serde(default)]
    pub email: String,
    /// Preferred game (the diversity attribute).
    #[serde(default)]
    pub preferred_game: String,
    /// Skill level 1..=10, `0` = unset.
    #[serde(default)]
    pub skill_level: u8,
    /// Preferred in-team role.
    #[serde(default)]
    pub preferred_role: String,
    /// Personality classification.
    #[serde(default)]
    pub personality_type: PersonalityType,
    /// Raw questionnaire score (0..=100).
    #[serde(default)]
    pub personality_score: u8,
}

impl Participant {
    /// Creates a participant with the given ID and name.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            preferred_game: String::new(),
            skill_level: 0,
            preferred_role: String::new(),
            personality_type: PersonalityType::NotSelected,
            personality_score: 0,
        }
    }

    /// Sets the contact address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the preferred game.
    pub fn with_game(mut self, game: impl Into<String>) -> Self {
        self.preferred_game = game.into();
        self
    }

    /// Sets the skill level.
    pub fn with_skill(mut self, skill_level: u8) -> Self {
        self.skill_level = skill_level;
        self
    }

    /// Sets the preferred role.
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.preferred_role = role.into();
        self
    }

    /// Sets the personality type.
    pub fn with_personality(mut self, personality: PersonalityType) -> Self {
        self.personality_type = personality;
        self
    }

    /// Sets the personality score.
    pub fn with_personality_score(mut self, score: u8) -> Self {
        self.personality_score = score;
        self
    }

    /// Applies questionnaire results: score and classification.
    pub fn with_survey(mut self, answers: &SurveyAnswers) -> Self {
        self.personality_score = answers.personality_score();
        self.personality_type = answers.classify();
        self
    }

    /// Trimmed, lowercased game used for comparisons.
    pub fn game_key(&self) -> String {
        normalize(&self.preferred_game)
    }

    /// Trimmed, lowercased role used for comparisons.
    pub fn role_key(&self) -> String {
        normalize(&self.preferred_role)
    }

    /// Whether the skill level has been set.
    pub fn has_skill(&self) -> bool {
        self.skill_level > 0
    }
}

/// Normalization applied to categorical attributes.
pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
