//! Placement rules and the scorer that composes them.
//!
//! Decides how desirable it is to place a candidate into a partially
//! filled team. Four criteria contribute additively:
//! game diversity, role variety, personality mix, and skill balance.
//!
//! # Usage
//!
//! ```
//! use u_teams::models::{Participant, Team};
//! use u_teams::scoring::{PlacementContext, PlacementScorer};
//!
//! let scorer = PlacementScorer::standard();
//! let context = PlacementContext::new(5.5);
//!
//! let team = Team::new("Team 1");
//! let candidate = Participant::new("P1", "Alice").with_game("FIFA").with_skill(6);
//! let score = scorer.score(&team, &candidate, &context);
//! assert!(score > 0);
//! ```

mod context;
mod rules;
mod scorer;

pub use context::{PlacementContext, TeamConstraints};
pub use rules::{GameDiversity, PersonalityMix, RoleVariety, SkillBalance};
pub use scorer::{placement_score, PlacementScorer};

use crate::models::{Participant, Team};
use std::fmt::Debug;

/// Score returned by a placement rule.
///
/// **Higher score = better fit.** Scores may be negative; they are
/// compared as raw integers without clamping.
pub type PlacementScore = i32;

/// A placement rule that scores one criterion.
///
/// Rules must not mutate the team or the candidate, and must not fail
/// for any attribute value within the model's declared domains.
pub trait PlacementRule: Send + Sync + Debug {
    /// Rule name (e.g., "GAME", "ROLE").
    fn name(&self) -> &'static str;

    /// Scores placing `candidate` into `team`.
    fn evaluate(
        &self,
        team: &Team,
        candidate: &Participant,
        context: &PlacementContext,
    ) -> PlacementScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
