//! Team formation framework.
//!
//! Splits a roster of participants into teams of a requested size that are
//! diverse in activity, varied in role, mixed in personality, and balanced
//! in skill.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Participant`, `PersonalityType`, `Team`
//! - **`scoring`**: Placement rules and the `PlacementScorer` that composes them
//! - **`formation`**: `TeamBuilder` engine, quota strategy, repair pass,
//!   `FormationKpi` metrics, background `FormationTask`
//! - **`validation`**: Input integrity checks (duplicate IDs, value ranges, team size)
//! - **`survey`**: Personality questionnaire scoring
//! - **`report`**: Diagnostics sink (`Reporter`, `LogReporter`, `MemoryReporter`)
//!
//! # Example
//!
//! ```
//! use u_teams::formation::TeamBuilder;
//! use u_teams::models::{Participant, PersonalityType};
//!
//! let games = ["Valorant", "FIFA", "Chess"];
//! let roles = ["Strategist", "Attacker", "Defender", "Supporter"];
//! let roster: Vec<Participant> = (0..10)
//!     .map(|i| {
//!         Participant::new(format!("S{i:03}"), format!("Student {i}"))
//!             .with_game(games[i % 3])
//!             .with_role(roles[i % 4])
//!             .with_skill((i % 10 + 1) as u8)
//!             .with_personality(PersonalityType::Balanced)
//!     })
//!     .collect();
//!
//! let outcome = TeamBuilder::new().try_build_teams(&roster, 4).unwrap();
//! assert_eq!(outcome.placed_count(), 10);
//! assert!(outcome.teams.iter().all(|t| t.size() >= 3));
//! ```
//!
//! # Architecture
//!
//! The crate holds only the formation domain logic. Loading rosters and
//! displaying teams belong to the caller; diagnostics go through a
//! caller-supplied [`report::Reporter`].

pub mod error;
pub mod formation;
pub mod models;
pub mod report;
pub mod scoring;
pub mod survey;
pub mod validation;

pub use error::{FormationError, Result};
