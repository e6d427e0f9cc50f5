use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{common::AnswerValue, mongodb::Id};

/// Core answer-record data, as stored in the database. One record is a
/// single respondent's full submission for a survey; records are created
/// once and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerCore {
    /// The survey this submission answers.
    pub survey_id: Id,
    /// Submitted values, positionally aligned to the survey's questions.
    /// May be shorter than the question list; trailing questions are
    /// unanswered.
    pub answers: Vec<AnswerValue>,
    /// Submission time.
    pub submitted_at: DateTime<Utc>,
}

/// An answer record without an ID.
pub type NewAnswer = AnswerCore;

/// An answer record from the database, with its unique ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub answer: AnswerCore,
}

impl Deref for Answer {
    type Target = AnswerCore;

    fn deref(&self) -> &Self::Target {
        &self.answer
    }
}

impl DerefMut for Answer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.answer
    }
}
