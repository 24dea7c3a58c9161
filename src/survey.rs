//! Personality questionnaire scoring.
//!
//! Five statements rated 1 (strongly disagree) to 5 (strongly agree):
//!
//! | # | Measures |
//! |---|----------|
//! | Q1 | Taking charge |
//! | Q2 | Analysing before acting |
//! | Q3 | Working with others |
//! | Q4 | Staying calm under pressure |
//! | Q5 | Making quick decisions |

use serde::{Deserialize, Serialize};

use crate::error::{FormationError, Result};
use crate::models::PersonalityType;

/// Number of questionnaire statements.
pub const QUESTION_COUNT: usize = 5;

/// Validated answers to the personality questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    answers: [u8; QUESTION_COUNT],
}

impl SurveyAnswers {
    /// Validates and wraps five answers.
    pub fn new(answers: [u8; QUESTION_COUNT]) -> Result<Self> {
        for (i, &value) in answers.iter().enumerate() {
            if !(1..=5).contains(&value) {
                return Err(FormationError::InvalidSurveyAnswer {
                    question: i + 1,
                    value,
                });
            }
        }
        Ok(Self { answers })
    }

    /// Raw answers in question order.
    pub fn answers(&self) -> [u8; QUESTION_COUNT] {
        self.answers
    }

    /// Total score scaled to 20..=100.
    pub fn personality_score(&self) -> u8 {
        self.answers.iter().sum::<u8>() * 4
    }

    /// Classifies the respondent.
    ///
    /// Leader weight is `Q1 + Q5`, thinker weight `Q2 + Q4`, balanced
    /// weight `2 * Q3`. A leader or thinker must strictly beat both other
    /// weights; every tie resolves to Balanced.
    pub fn classify(&self) -> PersonalityType {
        let [q1, q2, q3, q4, q5] = self.answers;
        let leader = q1 + q5;
        let thinker = q2 + q4;
        let balanced = q3 * 2;

        if leader > thinker && leader > balanced {
            PersonalityType::Leader
        } else if thinker > leader && thinker > balanced {
            PersonalityType::Thinker
        } else {
            PersonalityType::Balanced
        }
    }
}
