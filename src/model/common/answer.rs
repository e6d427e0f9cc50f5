use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};

/// One submitted answer value, positionally aligned to the survey's question
/// list.
///
/// Submissions are free-form: anything that is not a string or a list of
/// strings is preserved as raw BSON and ignored during aggregation rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A selected option or free text (single-choice and text questions).
    One(String),
    /// A list of selected options (multiple-choice questions).
    Many(Vec<String>),
    /// Anything else: null, numbers, mixed arrays, nested documents.
    Other(Bson),
}

#[cfg(test)]
mod tests {
    use rocket::serde::json::serde_json::{self, json};

    use super::*;

    #[test]
    fn strings_are_single_values() {
        let value: AnswerValue = serde_json::from_value(json!("Yes")).unwrap();
        assert_eq!(value, AnswerValue::One("Yes".to_string()));
    }

    #[test]
    fn string_arrays_are_multi_values() {
        let value: AnswerValue = serde_json::from_value(json!(["A", "B"])).unwrap();
        assert_eq!(
            value,
            AnswerValue::Many(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn null_is_preserved_not_rejected() {
        let value: AnswerValue = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(value, AnswerValue::Other(Bson::Null));
    }

    #[test]
    fn mismatched_shapes_are_preserved_not_rejected() {
        let number: AnswerValue = serde_json::from_value(json!(42)).unwrap();
        assert!(matches!(number, AnswerValue::Other(_)));

        let mixed: AnswerValue = serde_json::from_value(json!(["A", 1])).unwrap();
        assert!(matches!(mixed, AnswerValue::Other(_)));
    }

    #[test]
    fn values_serialize_transparently() {
        assert_eq!(
            serde_json::to_value(AnswerValue::One("Yes".to_string())).unwrap(),
            json!("Yes")
        );
        assert_eq!(
            serde_json::to_value(AnswerValue::Many(vec!["A".to_string()])).unwrap(),
            json!(["A"])
        );
    }
}
