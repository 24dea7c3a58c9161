//! Placement scorer.
//!
//! Composes placement rules into one additive score and selects the best
//! team for a candidate.

use std::sync::Arc;

use super::{
    GameDiversity, PersonalityMix, PlacementContext, PlacementRule, PlacementScore, RoleVariety,
    SkillBalance,
};
use crate::models::{Participant, Team};

#[derive(Clone)]
struct WeightedRule {
    rule: Arc<dyn PlacementRule>,
    weight: i32,
}

/// A composable, weighted sum of placement rules.
///
/// # Example
/// ```
/// use u_teams::scoring::{PlacementScorer, GameDiversity, SkillBalance};
///
/// let scorer = PlacementScorer::new()
///     .with_rule(GameDiversity)
///     .with_weighted_rule(SkillBalance, 3);
/// assert_eq!(scorer.rule_names(), vec!["GAME", "SKILL"]);
/// ```
#[derive(Clone)]
pub struct PlacementScorer {
    rules: Vec<WeightedRule>,
}

impl PlacementScorer {
    /// Creates a scorer with no rules (every placement scores 0).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Game diversity, role variety, personality mix, and skill balance,
    /// each with weight 1.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(GameDiversity)
            .with_rule(RoleVariety)
            .with_rule(PersonalityMix)
            .with_rule(SkillBalance)
    }

    /// Adds a rule with weight 1.
    pub fn with_rule<R: PlacementRule + 'static>(self, rule: R) -> Self {
        self.with_weighted_rule(rule, 1)
    }

    /// Adds a weighted rule.
    pub fn with_weighted_rule<R: PlacementRule + 'static>(mut self, rule: R, weight: i32) -> Self {
        self.rules.push(WeightedRule {
            rule: Arc::new(rule),
            weight,
        });
        self
    }

    /// Names of the configured rules, in order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|wr| wr.rule.name()).collect()
    }

    /// Total weighted score for placing `candidate` into `team`.
    pub fn score(
        &self,
        team: &Team,
        candidate: &Participant,
        context: &PlacementContext,
    ) -> PlacementScore {
        self.rules.iter().fold(0, |total: PlacementScore, wr| {
            total.saturating_add(
                wr.rule
                    .evaluate(team, candidate, context)
                    .saturating_mul(wr.weight),
            )
        })
    }

    /// Weighted score from each rule, in rule order.
    pub fn breakdown(
        &self,
        team: &Team,
        candidate: &Participant,
        context: &PlacementContext,
    ) -> Vec<(&'static str, PlacementScore)> {
        self.rules
            .iter()
            .map(|wr| {
                (
                    wr.rule.name(),
                    wr.rule
                        .evaluate(team, candidate, context)
                        .saturating_mul(wr.weight),
                )
            })
            .collect()
    }

    /// Picks the best team with room under `capacity`.
    ///
    /// Teams are evaluated in `order` (indices into `teams`); the first
    /// strictly highest score wins, so ties go to the team evaluated first.
    /// Returns `None` when every team in `order` is full.
    pub fn select_best(
        &self,
        teams: &[Team],
        order: &[usize],
        candidate: &Participant,
        context: &PlacementContext,
        capacity: usize,
    ) -> Option<usize> {
        let mut best: Option<(usize, PlacementScore)> = None;

        for &idx in order {
            let Some(team) = teams.get(idx) else {
                continue;
            };
            if !team.has_capacity(capacity) {
                continue;
            }
            let score = self.score(team, candidate, context);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((idx, score)),
            }
        }

        best.map(|(idx, _)| idx)
    }
}

impl Default for PlacementScorer {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for PlacementScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacementScorer")
            .field(
                "rules",
                &self
                    .rules
                    .iter()
                    .map(|r| format!("{}(w={})", r.rule.name(), r.weight))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Scores a placement with the standard rules and default constraints.
pub fn placement_score(
    team: &Team,
    candidate: &Participant,
    global_average_skill: f64,
) -> PlacementScore {
    PlacementScorer::standard().score(team, candidate, &PlacementContext::new(global_average_skill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PersonalityType;

    fn player(id: &str, game: &str, role: &str, skill: u8) -> Participant {
        Participant::new(id, id)
            .with_game(game)
            .with_role(role)
            .with_skill(skill)
            .with_personality(PersonalityType::Balanced)
    }

    #[test]
    fn test_standard_score_empty_team() {
        // game 10 + role 15 + personality 4 - skill trunc(2 * 0.5) = 28
        let candidate = player("X", "FIFA", "Defender", 6);
        assert_eq!(placement_score(&Team::new("T"), &candidate, 5.5), 28);
    }

    #[test]
    fn test_standard_score_saturated_team() {
        let team = Team::new("T")
            .with_member(player("A", "FIFA", "Defender", 5))
            .with_member(player("B", "FIFA", "Attacker", 6));
        let candidate = player("X", "fifa", "Supporter", 6);
        // game -1000, role 15 (2 roles < min(3, 3)), personality 4,
        // skill: projected 17/3 = 5.667 vs 5.5 -> trunc(0.333) = 0
        assert_eq!(placement_score(&team, &candidate, 5.5), -981);
    }

    #[test]
    fn test_breakdown_matches_score() {
        let scorer = PlacementScorer::standard();
        let context = PlacementContext::new(4.0);
        let team = Team::new("T").with_member(player("A", "Chess", "Defender", 9));
        let candidate = player("X", "Chess", "Defender", 1);

        let parts = scorer.breakdown(&team, &candidate, &context);
        let names: Vec<&str> = parts.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["GAME", "ROLE", "PERSONALITY", "SKILL"]);

        let total: i32 = parts.iter().map(|(_, s)| s).sum();
        assert_eq!(total, scorer.score(&team, &candidate, &context));
    }

    #[test]
    fn test_weighted_rule() {
        let scorer = PlacementScorer::new().with_weighted_rule(SkillBalance, 3);
        let candidate = player("X", "FIFA", "Defender", 10);
        // deviation 4.5 -> -9, weighted -27
        let context = PlacementContext::new(5.5);
        assert_eq!(scorer.score(&Team::new("T"), &candidate, &context), -27);
    }

    #[test]
    fn test_empty_scorer() {
        let scorer = PlacementScorer::new();
        let candidate = player("X", "FIFA", "Defender", 10);
        assert_eq!(
            scorer.score(&Team::new("T"), &candidate, &PlacementContext::new(1.0)),
            0
        );
    }

    #[test]
    fn test_select_best_prefers_unsaturated_game() {
        let teams = vec![
            Team::new("Team 1")
                .with_member(player("A", "FIFA", "Defender", 5))
                .with_member(player("B", "FIFA", "Attacker", 5)),
            Team::new("Team 2")
                .with_member(player("C", "Valorant", "Defender", 5))
                .with_member(player("D", "Valorant", "Attacker", 5)),
        ];
        let candidate = player("X", "FIFA", "Supporter", 5);
        let context = PlacementContext::new(5.0);
        let scorer = PlacementScorer::standard();

        assert_eq!(scorer.select_best(&teams, &[0, 1], &candidate, &context, 4), Some(1));
        assert_eq!(scorer.select_best(&teams, &[1, 0], &candidate, &context, 4), Some(1));
    }

    #[test]
    fn test_select_best_tie_goes_to_first_in_order() {
        let teams = Team::numbered(3);
        let candidate = player("X", "FIFA", "Defender", 5);
        let context = PlacementContext::new(5.0);
        let scorer = PlacementScorer::standard();

        assert_eq!(scorer.select_best(&teams, &[2, 0, 1], &candidate, &context, 3), Some(2));
        assert_eq!(scorer.select_best(&teams, &[1, 2, 0], &candidate, &context, 3), Some(1));
    }

    #[test]
    fn test_select_best_skips_full_and_saturated_still_eligible() {
        let teams = vec![
            Team::new("Team 1")
                .with_member(player("A", "FIFA", "Defender", 5))
                .with_member(player("B", "FIFA", "Defender", 5))
                .with_member(player("C", "Chess", "Defender", 5)),
            Team::new("Team 2")
                .with_member(player("D", "FIFA", "Defender", 5))
                .with_member(player("E", "FIFA", "Defender", 5)),
        ];
        let candidate = player("X", "FIFA", "Defender", 5);
        let context = PlacementContext::new(5.0);
        let scorer = PlacementScorer::standard();

        // Team 1 is full at capacity 3; Team 2 is saturated but still chosen.
        assert_eq!(scorer.select_best(&teams, &[0, 1], &candidate, &context, 3), Some(1));
    }

    #[test]
    fn test_select_best_all_full() {
        let teams = vec![Team::new("Team 1").with_member(player("A", "FIFA", "Defender", 5))];
        let candidate = player("X", "FIFA", "Defender", 5);
        let scorer = PlacementScorer::standard();
        assert_eq!(
            scorer.select_best(&teams, &[0], &candidate, &PlacementContext::new(5.0), 1),
            None
        );
    }

    #[test]
    fn test_debug_lists_rules() {
        let text = format!("{:?}", PlacementScorer::standard());
        assert!(text.contains("GAME(w=1)"));
        assert!(text.contains("SKILL(w=1)"));
    }
}
