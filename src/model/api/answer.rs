use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    common::AnswerValue,
    db::answer::{Answer, NewAnswer},
    mongodb::Id,
};

use super::id::ApiId;

/// A respondent submission for a survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSpec {
    /// Submitted values, positionally aligned to the survey's questions.
    pub answers: Vec<AnswerValue>,
}

impl AnswerSpec {
    /// Convert this submission into a storable answer record.
    pub fn into_answer(self, survey_id: Id) -> NewAnswer {
        NewAnswer {
            survey_id,
            answers: self.answers,
            submitted_at: Utc::now(),
        }
    }
}

/// An API-friendly answer record, for the owner's raw results view.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerDescription {
    /// Record unique ID.
    pub id: ApiId,
    /// Submitted values, positionally aligned to the survey's questions.
    pub answers: Vec<AnswerValue>,
    /// Submission time.
    pub submitted_at: DateTime<Utc>,
}

impl From<Answer> for AnswerDescription {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id.into(),
            answers: answer.answer.answers,
            submitted_at: answer.answer.submitted_at,
        }
    }
}
