//! Answer aggregation: turning a survey's submitted answer records into
//! per-question option tallies.

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::{
    common::{AnswerValue, Question, QuestionId, QuestionType},
    db::answer::Answer,
};

/// Per-question tally of respondent selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionStats {
    /// The question this tally belongs to.
    pub question_id: QuestionId,
    /// The question's answer format.
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Selection counts by option label, in declared-option order with any
    /// undeclared labels appended. Empty for text questions.
    pub counts: IndexMap<String, u64>,
}

/// Tally all submitted records against the survey's questions, producing one
/// result per question, in question order.
///
/// Aggregation is best-effort: a record with a missing, null, or mismatched
/// value at some position contributes nothing to that question's tally and
/// is otherwise ignored. Labels not present in the question's declared
/// options are still counted, under their own key.
pub fn aggregate(questions: &[Question], records: &[Answer]) -> Vec<QuestionStats> {
    questions
        .iter()
        .enumerate()
        .map(|(index, question)| tally_question(index, question, records))
        .collect()
}

/// Tally a single question, reading each record's value at the question's
/// position.
fn tally_question(index: usize, question: &Question, records: &[Answer]) -> QuestionStats {
    let mut counts = IndexMap::new();

    // Declared options appear in the result even with zero selections.
    if question.question_type != QuestionType::Text {
        for option in &question.options {
            counts.entry(option.clone()).or_insert(0);
        }
    }

    for record in records {
        // A record shorter than the question list left this question
        // unanswered.
        let value = match record.answers.get(index) {
            Some(value) => value,
            None => continue,
        };

        match question.question_type {
            QuestionType::Single => {
                if let AnswerValue::One(label) = value {
                    if !label.is_empty() {
                        *counts.entry(label.clone()).or_insert(0) += 1;
                    }
                }
            }
            QuestionType::Multiple => {
                if let AnswerValue::Many(labels) = value {
                    for label in labels {
                        *counts.entry(label.clone()).or_insert(0) += 1;
                    }
                }
            }
            // Free text is not tallied.
            QuestionType::Text => {}
        }
    }

    QuestionStats {
        question_id: question.id.clone(),
        question_type: question.question_type,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mongodb::bson::Bson;

    use crate::model::db::answer::AnswerCore;
    use crate::model::mongodb::Id;

    use super::*;

    fn question(id: &str, question_type: QuestionType, options: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            text: format!("Question {id}"),
            question_type,
            options: options.iter().map(|opt| opt.to_string()).collect(),
            required: false,
            image: None,
        }
    }

    fn record(answers: Vec<AnswerValue>) -> Answer {
        Answer {
            id: Id::new(),
            answer: AnswerCore {
                survey_id: Id::new(),
                answers,
                submitted_at: Utc::now(),
            },
        }
    }

    fn one(label: &str) -> AnswerValue {
        AnswerValue::One(label.to_string())
    }

    fn many(labels: &[&str]) -> AnswerValue {
        AnswerValue::Many(labels.iter().map(|label| label.to_string()).collect())
    }

    #[test]
    fn single_choice_answers_are_counted() {
        let questions = vec![question("q1", QuestionType::Single, &["Yes", "No"])];
        let records = vec![
            record(vec![one("Yes")]),
            record(vec![one("No")]),
            record(vec![one("Yes")]),
        ];

        let stats = aggregate(&questions, &records);

        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].counts.get("Yes"), Some(&2));
        assert_eq!(stats[0].counts.get("No"), Some(&1));
    }

    #[test]
    fn multiple_choice_answers_count_each_selection() {
        let questions = vec![question("q1", QuestionType::Multiple, &["A", "B", "C"])];
        let records = vec![record(vec![many(&["A", "B"])]), record(vec![many(&["B"])])];

        let stats = aggregate(&questions, &records);

        assert_eq!(stats[0].counts.get("A"), Some(&1));
        assert_eq!(stats[0].counts.get("B"), Some(&2));
        assert_eq!(stats[0].counts.get("C"), Some(&0));
    }

    #[test]
    fn text_questions_are_not_tallied() {
        let questions = vec![question("q1", QuestionType::Text, &[])];
        let records = vec![record(vec![one("free-form prose")]), record(vec![])];

        let stats = aggregate(&questions, &records);

        assert_eq!(stats.len(), 1);
        assert!(stats[0].counts.is_empty());
    }

    #[test]
    fn declared_options_are_seeded_with_zero_counts() {
        let questions = vec![question("q1", QuestionType::Single, &["Red", "Green", "Blue"])];

        let stats = aggregate(&questions, &[]);

        assert_eq!(
            stats[0].counts.keys().collect::<Vec<_>>(),
            vec!["Red", "Green", "Blue"]
        );
        assert!(stats[0].counts.values().all(|&count| count == 0));
    }

    #[test]
    fn undeclared_labels_are_counted_under_new_keys() {
        let questions = vec![question("q1", QuestionType::Single, &["Yes", "No"])];
        let records = vec![record(vec![one("Maybe")])];

        let stats = aggregate(&questions, &records);

        // Declared options keep their position; new labels append.
        assert_eq!(
            stats[0].counts.keys().collect::<Vec<_>>(),
            vec!["Yes", "No", "Maybe"]
        );
        assert_eq!(stats[0].counts.get("Maybe"), Some(&1));
    }

    #[test]
    fn short_records_leave_trailing_questions_unaffected() {
        let questions = vec![
            question("q1", QuestionType::Single, &["Yes", "No"]),
            question("q2", QuestionType::Single, &["A", "B"]),
        ];
        let records = vec![record(vec![one("Yes")])];

        let stats = aggregate(&questions, &records);

        assert_eq!(stats[0].counts.get("Yes"), Some(&1));
        assert!(stats[1].counts.values().all(|&count| count == 0));
    }

    #[test]
    fn empty_single_answers_are_skipped() {
        let questions = vec![question("q1", QuestionType::Single, &["Yes", "No"])];
        let records = vec![record(vec![one("")])];

        let stats = aggregate(&questions, &records);

        assert!(stats[0].counts.values().all(|&count| count == 0));
        assert!(!stats[0].counts.contains_key(""));
    }

    #[test]
    fn mismatched_values_are_skipped_without_failing() {
        let questions = vec![
            question("q1", QuestionType::Single, &["Yes", "No"]),
            question("q2", QuestionType::Multiple, &["A", "B"]),
        ];
        let records = vec![
            // A list where a string was expected, and vice versa.
            record(vec![many(&["Yes"]), one("A")]),
            // Null and a number.
            record(vec![
                AnswerValue::Other(Bson::Null),
                AnswerValue::Other(Bson::Int32(7)),
            ]),
        ];

        let stats = aggregate(&questions, &records);

        assert!(stats[0].counts.values().all(|&count| count == 0));
        assert!(stats[1].counts.values().all(|&count| count == 0));
    }

    #[test]
    fn results_follow_question_order() {
        let questions = vec![
            question("first", QuestionType::Single, &["Yes", "No"]),
            question("second", QuestionType::Text, &[]),
            question("third", QuestionType::Multiple, &["A"]),
        ];

        let stats = aggregate(&questions, &[]);

        let ids = stats
            .iter()
            .map(|stat| stat.question_id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn single_counts_sum_to_the_number_of_answering_records() {
        let questions = vec![question("q1", QuestionType::Single, &["Yes", "No"])];
        let records = vec![
            record(vec![one("Yes")]),
            record(vec![one("Maybe")]),
            record(vec![one("")]),
            record(vec![]),
        ];

        let stats = aggregate(&questions, &records);

        // Two records answered with a non-empty string.
        assert_eq!(stats[0].counts.values().sum::<u64>(), 2);
    }

    #[test]
    fn aggregation_is_pure() {
        let questions = vec![
            question("q1", QuestionType::Single, &["Yes", "No"]),
            question("q2", QuestionType::Multiple, &["A", "B"]),
        ];
        let records = vec![record(vec![one("Yes"), many(&["A", "B"])])];

        let first = aggregate(&questions, &records);
        let second = aggregate(&questions, &records);

        assert_eq!(first, second);
    }
}
