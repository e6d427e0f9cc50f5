use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{
    common::{Question, QuestionType},
    db::survey::{NewSurvey, Survey},
    mongodb::Id,
};

use super::id::ApiId;

/// A survey specification, as submitted by its owner on create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveySpec {
    /// Survey title.
    pub title: String,
    /// Survey description.
    pub description: String,
    /// Questions, in display order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl SurveySpec {
    /// Check the structural invariants of the spec: a non-empty title,
    /// unique question IDs, and options that match each question's type.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Survey title must not be empty".to_string());
        }

        let mut ids = HashSet::new();
        for question in &self.questions {
            if !ids.insert(&question.id) {
                return Err(format!("Duplicate question ID: {}", question.id));
            }

            match question.question_type {
                QuestionType::Single | QuestionType::Multiple => {
                    if question.options.is_empty() {
                        return Err(format!(
                            "Question {} must declare at least one option",
                            question.id
                        ));
                    }
                    let unique = question.options.iter().collect::<HashSet<_>>();
                    if unique.len() != question.options.len() {
                        return Err(format!(
                            "Question {} declares duplicate options",
                            question.id
                        ));
                    }
                }
                QuestionType::Text => {
                    if !question.options.is_empty() {
                        return Err(format!(
                            "Text question {} must not declare options",
                            question.id
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    /// Convert this spec into a storable survey owned by the given user.
    pub fn into_survey(self, owner: Id) -> NewSurvey {
        NewSurvey {
            owner,
            title: self.title,
            description: self.description,
            questions: self.questions,
            created_at: Utc::now(),
        }
    }
}

/// An API-friendly full survey description: everything a respondent needs to
/// fill the survey in.
#[derive(Debug, Clone, Serialize)]
pub struct SurveyDescription {
    /// Survey unique ID.
    pub id: ApiId,
    /// Survey title.
    pub title: String,
    /// Survey description.
    pub description: String,
    /// Questions, in display order.
    pub questions: Vec<Question>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Survey> for SurveyDescription {
    fn from(survey: Survey) -> Self {
        Self {
            id: survey.id.into(),
            title: survey.survey.title,
            description: survey.survey.description,
            questions: survey.survey.questions,
            created_at: survey.survey.created_at,
        }
    }
}

/// A condensed survey listing entry.
#[derive(Debug, Clone, Serialize)]
pub struct SurveySummary {
    /// Survey unique ID.
    pub id: ApiId,
    /// Survey title.
    pub title: String,
    /// Survey description.
    pub description: String,
    /// Number of questions.
    pub questions: usize,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<Survey> for SurveySummary {
    fn from(survey: Survey) -> Self {
        Self {
            id: survey.id.into(),
            title: survey.survey.title,
            description: survey.survey.description,
            questions: survey.survey.questions.len(),
            created_at: survey.survey.created_at,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_spec_is_valid() {
        assert!(SurveySpec::example().validate().is_ok());
    }

    #[test]
    fn empty_titles_are_rejected() {
        let mut spec = SurveySpec::example();
        spec.title = "  ".to_string();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn duplicate_question_ids_are_rejected() {
        let mut spec = SurveySpec::example();
        let duplicate = spec.questions[0].clone();
        spec.questions.push(duplicate);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn choice_questions_require_options() {
        let mut spec = SurveySpec::example();
        spec.questions[0].options.clear();
        assert!(spec.validate().is_err());
    }

    #[test]
    fn duplicate_options_are_rejected() {
        let mut spec = SurveySpec::example();
        let duplicate = spec.questions[0].options[0].clone();
        spec.questions[0].options.push(duplicate);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn text_questions_must_not_declare_options() {
        let mut spec = SurveySpec::example();
        spec.questions[2].options.push("Surprise".to_string());
        assert!(spec.validate().is_err());
    }

    #[test]
    fn specs_convert_to_owned_surveys() {
        let owner = Id::new();
        let spec = SurveySpec::example();
        let questions = spec.questions.clone();

        let survey = spec.into_survey(owner);

        assert_eq!(survey.owner, owner);
        assert_eq!(survey.questions, questions);
        assert_eq!(survey.title, "Team lunch preferences");
    }
}
