//! Built-in placement rules.
//!
//! # Criteria
//!
//! | Rule | Rewards | Penalty |
//! |------|---------|---------|
//! | GAME | `(cap - same_game) * 5` | `-1000` at or above cap |
//! | ROLE | `+15` new role below target, `+5` new role, `+1` repeat | none |
//! | PERSONALITY | Leader `(cap - leaders) * 10`, Thinker `(cap - thinkers) * 6`, other `+4` | `-400` / `-250` at or above cap |
//! | SKILL | none | `-trunc(2 * |global_avg - projected_avg|)` |
//!
//! # Score Convention
//! All rules return higher scores for better placements.

use super::{PlacementContext, PlacementRule, PlacementScore};
use crate::models::{Participant, PersonalityType, Team};

const GAME_SATURATED_PENALTY: PlacementScore = 1000;
const GAME_VARIETY_REWARD: PlacementScore = 5;

const ROLE_NEW_BELOW_TARGET: PlacementScore = 15;
const ROLE_NEW: PlacementScore = 5;
const ROLE_REPEAT: PlacementScore = 1;

const LEADER_EXCESS_PENALTY: PlacementScore = 400;
const LEADER_REWARD: PlacementScore = 10;
const THINKER_EXCESS_PENALTY: PlacementScore = 250;
const THINKER_REWARD: PlacementScore = 6;
const OTHER_PERSONALITY_REWARD: PlacementScore = 4;

const SKILL_DEVIATION_WEIGHT: f64 = 2.0;

fn headroom(cap: usize, count: usize) -> PlacementScore {
    PlacementScore::try_from(cap - count).unwrap_or(PlacementScore::MAX)
}

// ======================== Diversity rules ========================

/// Game diversity.
///
/// Rewards teams with fewer members sharing the candidate's game and
/// soft-blocks teams already at the per-game cap. The candidate may still
/// land in a saturated team when every open team is equally saturated.
#[derive(Debug, Clone, Copy)]
pub struct GameDiversity;

impl PlacementRule for GameDiversity {
    fn name(&self) -> &'static str {
        "GAME"
    }

    fn evaluate(
        &self,
        team: &Team,
        candidate: &Participant,
        context: &PlacementContext,
    ) -> PlacementScore {
        let cap = context.constraints.max_per_game;
        let same_game = team.count_game(&candidate.preferred_game);
        if same_game >= cap {
            -GAME_SATURATED_PENALTY
        } else {
            headroom(cap, same_game).saturating_mul(GAME_VARIETY_REWARD)
        }
    }

    fn description(&self) -> &'static str {
        "Game Diversity"
    }
}

/// Role variety.
///
/// The role target grows with the team: `min(min_distinct_roles, size + 1)`.
/// A new role earns the most while the team is below that target.
#[derive(Debug, Clone, Copy)]
pub struct RoleVariety;

impl PlacementRule for RoleVariety {
    fn name(&self) -> &'static str {
        "ROLE"
    }

    fn evaluate(
        &self,
        team: &Team,
        candidate: &Participant,
        context: &PlacementContext,
    ) -> PlacementScore {
        let roles = team.distinct_roles();
        let is_new = !roles.contains(&candidate.role_key());
        let target = context.constraints.min_distinct_roles.min(team.size() + 1);

        if is_new && roles.len() < target {
            ROLE_NEW_BELOW_TARGET
        } else if is_new {
            ROLE_NEW
        } else {
            ROLE_REPEAT
        }
    }

    fn description(&self) -> &'static str {
        "Role Variety"
    }
}

// ======================== Balance rules ========================

/// Personality mix.
///
/// Leaders and Thinkers are rewarded while their team count is below the
/// cap and heavily penalized at or above it. Every other type (Balanced,
/// Not selected) gets a small flat reward.
#[derive(Debug, Clone, Copy)]
pub struct PersonalityMix;

impl PlacementRule for PersonalityMix {
    fn name(&self) -> &'static str {
        "PERSONALITY"
    }

    fn evaluate(
        &self,
        team: &Team,
        candidate: &Participant,
        context: &PlacementContext,
    ) -> PlacementScore {
        let constraints = &context.constraints;
        match candidate.personality_type {
            PersonalityType::Leader => {
                let leaders = team.count_personality(PersonalityType::Leader);
                if leaders >= constraints.max_leaders {
                    -LEADER_EXCESS_PENALTY
                } else {
                    headroom(constraints.max_leaders, leaders).saturating_mul(LEADER_REWARD)
                }
            }
            PersonalityType::Thinker => {
                let thinkers = team.count_personality(PersonalityType::Thinker);
                if thinkers >= constraints.max_thinkers {
                    -THINKER_EXCESS_PENALTY
                } else {
                    headroom(constraints.max_thinkers, thinkers).saturating_mul(THINKER_REWARD)
                }
            }
            PersonalityType::Balanced | PersonalityType::NotSelected => OTHER_PERSONALITY_REWARD,
        }
    }

    fn description(&self) -> &'static str {
        "Personality Mix"
    }
}

/// Skill balance.
///
/// Penalizes the distance between the team's projected mean skill (with
/// the candidate added) and the roster-wide mean. The distance is doubled
/// and truncated toward zero.
#[derive(Debug, Clone, Copy)]
pub struct SkillBalance;

impl SkillBalance {
    /// Team mean skill if `candidate` joined.
    pub fn projected_average(team: &Team, candidate: &Participant) -> f64 {
        let sum = f64::from(team.skill_sum()) + f64::from(candidate.skill_level);
        sum / (team.size() + 1) as f64
    }
}

impl PlacementRule for SkillBalance {
    fn name(&self) -> &'static str {
        "SKILL"
    }

    fn evaluate(
        &self,
        team: &Team,
        candidate: &Participant,
        context: &PlacementContext,
    ) -> PlacementScore {
        let projected = Self::projected_average(team, candidate);
        let deviation = (context.global_average_skill - projected).abs();
        -((deviation * SKILL_DEVIATION_WEIGHT) as PlacementScore)
    }

    fn description(&self) -> &'static str {
        "Skill Balance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::TeamConstraints;

    fn ctx() -> PlacementContext {
        PlacementContext::new(5.5)
    }

    fn player(id: &str, game: &str, role: &str) -> Participant {
        Participant::new(id, id)
            .with_game(game)
            .with_role(role)
            .with_skill(5)
            .with_personality(PersonalityType::Balanced)
    }

    fn typed(id: &str, kind: PersonalityType) -> Participant {
        player(id, "FIFA", "Defender").with_personality(kind)
    }

    #[test]
    fn test_game_reward_and_penalty() {
        let candidate = player("X", "Valorant", "Defender");
        let empty = Team::new("T");
        assert_eq!(GameDiversity.evaluate(&empty, &candidate, &ctx()), 10);

        let one = Team::new("T").with_member(player("A", " valorant", "Attacker"));
        assert_eq!(GameDiversity.evaluate(&one, &candidate, &ctx()), 5);

        let two = one.clone().with_member(player("B", "VALORANT", "Attacker"));
        assert_eq!(GameDiversity.evaluate(&two, &candidate, &ctx()), -1000);
    }

    #[test]
    fn test_game_cap_configurable() {
        let candidate = player("X", "FIFA", "Defender");
        let team = Team::new("T")
            .with_member(player("A", "FIFA", "Attacker"))
            .with_member(player("B", "FIFA", "Attacker"));
        let context = ctx().with_constraints(TeamConstraints::default().with_max_per_game(4));
        assert_eq!(GameDiversity.evaluate(&team, &candidate, &context), 10);
    }

    #[test]
    fn test_role_new_below_target() {
        let candidate = player("X", "FIFA", "Supporter");
        // Empty team: target min(3, 1) = 1, no roles yet.
        assert_eq!(RoleVariety.evaluate(&Team::new("T"), &candidate, &ctx()), 15);

        // One role present, target min(3, 2) = 2.
        let team = Team::new("T").with_member(player("A", "FIFA", "Defender"));
        assert_eq!(RoleVariety.evaluate(&team, &candidate, &ctx()), 15);
    }

    #[test]
    fn test_role_new_target_met() {
        let candidate = player("X", "FIFA", "Supporter");
        let team = Team::new("T")
            .with_member(player("A", "FIFA", "Defender"))
            .with_member(player("B", "FIFA", "Attacker"))
            .with_member(player("C", "FIFA", "Strategist"));
        assert_eq!(RoleVariety.evaluate(&team, &candidate, &ctx()), 5);
    }

    #[test]
    fn test_role_repeat() {
        let candidate = player("X", "FIFA", "defender ");
        let team = Team::new("T").with_member(player("A", "FIFA", "Defender"));
        assert_eq!(RoleVariety.evaluate(&team, &candidate, &ctx()), 1);
    }

    #[test]
    fn test_leader_scores() {
        let leader = typed("X", PersonalityType::Leader);
        let mut team = Team::new("T");
        assert_eq!(PersonalityMix.evaluate(&team, &leader, &ctx()), 20);

        team.add_member(typed("A", PersonalityType::Leader));
        assert_eq!(PersonalityMix.evaluate(&team, &leader, &ctx()), 10);

        team.add_member(typed("B", PersonalityType::Leader));
        assert_eq!(PersonalityMix.evaluate(&team, &leader, &ctx()), -400);
    }

    #[test]
    fn test_thinker_scores() {
        let thinker = typed("X", PersonalityType::Thinker);
        let mut team = Team::new("T");
        assert_eq!(PersonalityMix.evaluate(&team, &thinker, &ctx()), 18);

        for id in ["A", "B", "C"] {
            team.add_member(typed(id, PersonalityType::Thinker));
        }
        assert_eq!(PersonalityMix.evaluate(&team, &thinker, &ctx()), -250);
    }

    #[test]
    fn test_other_personalities_flat() {
        let team = Team::new("T")
            .with_member(typed("A", PersonalityType::Leader))
            .with_member(typed("B", PersonalityType::Leader));
        for kind in [PersonalityType::Balanced, PersonalityType::NotSelected] {
            assert_eq!(PersonalityMix.evaluate(&team, &typed("X", kind), &ctx()), 4);
        }
    }

    #[test]
    fn test_skill_balance_truncates() {
        // Projected (10 + 2) / 2 = 6.0, |5.5 - 6.0| * 2 = 1.0
        let team = Team::new("T").with_member(player("A", "FIFA", "Defender").with_skill(10));
        let candidate = player("X", "FIFA", "Defender").with_skill(2);
        assert_eq!(SkillBalance.evaluate(&team, &candidate, &ctx()), -1);

        // Projected 10.0, |5.5 - 10.0| * 2 = 9.0
        let solo = player("Y", "FIFA", "Defender").with_skill(10);
        assert_eq!(SkillBalance.evaluate(&Team::new("T"), &solo, &ctx()), -9);

        // Projected 6.0 against 5.2: 1.6 truncates to 1
        let context = PlacementContext::new(5.2);
        assert_eq!(SkillBalance.evaluate(&team, &candidate, &context), -1);
    }

    #[test]
    fn test_projected_average() {
        let team = Team::new("T")
            .with_member(player("A", "FIFA", "Defender").with_skill(4))
            .with_member(player("B", "FIFA", "Defender").with_skill(8));
        let candidate = player("X", "FIFA", "Defender").with_skill(3);
        assert!((SkillBalance::projected_average(&team, &candidate) - 5.0).abs() < 1e-10);
    }
}
