use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::schemas::questions::QuestionResponse;

/// Body of `POST /quizzes`. The whole quiz session travels with the client:
/// it resends the growing `previous_questions` list every round.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    #[serde(default)]
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// The active category filter; 0 (or no category at all) means "any".
    pub fn category_filter(&self) -> i64 {
        self.quiz_category.as_ref().map_or(0, |c| c.id)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// The frontend submits the id as a string, the API models an integer;
    /// accept both.
    #[serde(deserialize_with = "int_or_string")]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: QuestionResponse,
}

fn int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i64),
        Str(String),
    }

    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => Ok(n),
        IntOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn category_id_accepts_number_and_string() {
        let req: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [1, 2], "quiz_category": {"type": "Science", "id": 1}}"#,
        )
        .unwrap();
        assert_eq!(req.category_filter(), 1);

        let req: QuizRequest = serde_json::from_str(
            r#"{"previous_questions": [], "quiz_category": {"type": "click", "id": "3"}}"#,
        )
        .unwrap();
        assert_eq!(req.category_filter(), 3);
    }

    #[test]
    fn non_numeric_category_id_is_rejected() {
        let result: Result<QuizRequest, _> =
            serde_json::from_str(r#"{"quiz_category": {"id": "science"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_fields_default_to_fresh_session_any_category() {
        let req: QuizRequest = serde_json::from_str("{}").unwrap();
        assert!(req.previous_questions.is_empty());
        assert_eq!(req.category_filter(), 0);
    }
}
