mod answer;
mod question;

pub use answer::AnswerValue;
pub use question::{Question, QuestionType};

/// Our question IDs are client-assigned strings.
pub type QuestionId = String;
