use std::ops::{Deref, DerefMut};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{common::Question, mongodb::Id};

/// Core survey data, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyCore {
    /// The user this survey belongs to.
    pub owner: Id,
    /// Survey title.
    pub title: String,
    /// Survey description.
    pub description: String,
    /// Questions, in display order.
    pub questions: Vec<Question>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A survey without an ID.
pub type NewSurvey = SurveyCore;

/// A survey from the database, with its unique ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    #[serde(rename = "_id")]
    pub id: Id,
    #[serde(flatten)]
    pub survey: SurveyCore,
}

impl Deref for Survey {
    type Target = SurveyCore;

    fn deref(&self) -> &Self::Target {
        &self.survey
    }
}

impl DerefMut for Survey {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.survey
    }
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Survey {
        pub fn example(owner: Id) -> Self {
            Self {
                id: Id::new(),
                survey: SurveyCore {
                    owner,
                    title: "Office catering survey".to_string(),
                    description: "Help us plan next quarter's menu.".to_string(),
                    questions: vec![
                        Question::example_single(),
                        Question::example_multiple(),
                        Question::example_text(),
                    ],
                    created_at: Utc::now(),
                },
            }
        }
    }
}
