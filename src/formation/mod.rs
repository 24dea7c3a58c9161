//! Team formation engine and quality metrics.
//!
//! Turns a roster of participants into teams of a requested size.
//!
//! # Algorithm
//!
//! `TeamBuilder` runs a greedy, score-driven heuristic: participants are
//! placed one at a time, highest skill first, into the team where the
//! placement rules score them highest. A quota strategy (one Leader and two
//! Thinkers per team, the rest balanced by skill) is available through
//! [`FormationStrategy::Quota`]. Both are followed by a repair pass that
//! disbands teams below the minimum size.
//!
//! Neither strategy is optimal. Both are fast and place every participant
//! whenever the roster holds at least the minimum team size.
//!
//! # Metrics
//!
//! `FormationKpi` reports team sizes, skill spread, and game-cap violations
//! for a formed set of teams.

mod builder;
mod config;
mod quota;
mod repair;
mod summary;
mod task;

pub use builder::{build_teams, FormationOutcome, TeamBuilder};
pub use config::{FormationConfig, FormationStrategy, MIN_TEAM_SIZE};
pub use quota::{assign_by_quota, QuotaPlacement, LEADERS_PER_TEAM, THINKERS_PER_TEAM};
pub use repair::{ensure_min_team_size, smallest_team, smallest_team_excluding};
pub use summary::{FormationKpi, TeamSummary};
pub use task::{FormationHandle, FormationTask};
