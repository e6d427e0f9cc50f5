use serde::{Deserialize, Serialize};

use super::QuestionId;

/// The answer format a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    /// Exactly one of the declared options.
    Single,
    /// Any subset of the declared options.
    Multiple,
    /// Free text; no declared options.
    Text,
}

/// A single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question unique ID, assigned by the survey editor.
    pub id: QuestionId,
    /// Question text.
    pub text: String,
    /// The answer format.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Declared options, in display order. Empty for text questions.
    #[serde(default)]
    pub options: Vec<String>,
    /// Whether respondents must answer this question.
    #[serde(default)]
    pub required: bool,
    /// Optional illustration, as an uploaded image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Example data for tests.
#[cfg(test)]
mod examples {
    use super::*;

    impl Question {
        pub fn example_single() -> Self {
            Self {
                id: "q-colour".to_string(),
                text: "What is your favourite colour?".to_string(),
                question_type: QuestionType::Single,
                options: vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
                required: true,
                image: None,
            }
        }

        pub fn example_multiple() -> Self {
            Self {
                id: "q-langs".to_string(),
                text: "Which languages do you speak?".to_string(),
                question_type: QuestionType::Multiple,
                options: vec![
                    "English".to_string(),
                    "French".to_string(),
                    "Mandarin".to_string(),
                ],
                required: false,
                image: None,
            }
        }

        pub fn example_text() -> Self {
            Self {
                id: "q-feedback".to_string(),
                text: "Any other feedback?".to_string(),
                question_type: QuestionType::Text,
                options: vec![],
                required: false,
                image: None,
            }
        }
    }
}
