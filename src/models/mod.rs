//! Team formation domain models.
//!
//! Provides the core data types exchanged with the collaborators that
//! load rosters and display formed teams.
//!
//! # Domain Mappings
//!
//! | u-teams | Esports club | Classroom | Hackathon |
//! |---------|--------------|-----------|-----------|
//! | Participant | Player | Student | Attendee |
//! | Preferred game | Game title | Project topic | Track |
//! | Preferred role | In-game role | Group role | Discipline |
//! | Team | Squad | Study group | Hack team |

mod participant;
mod team;

pub use participant::{Participant, PersonalityType, MAX_PERSONALITY_SCORE, MAX_SKILL_LEVEL};
pub use team::Team;
