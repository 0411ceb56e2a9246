use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::db::QuestionRecord;

/// One question as the frontend sees it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionResponse {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl QuestionRecord {
    pub fn to_response(&self) -> QuestionResponse {
        QuestionResponse {
            id: self.id,
            question: self.question.clone(),
            answer: self.answer.clone(),
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Body of `POST /questions`, which is both the create and the search
/// endpoint: the presence of `searchTerm` selects the search branch, any
/// other combination is a create attempt validated field by field.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuestionPayload {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i64>,
    pub difficulty: Option<i64>,
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub success: bool,
    pub message: String,
    pub questions: Vec<QuestionResponse>,
    pub questions_count: i64,
    /// Resolved from the query context; the unfiltered listing has none.
    pub current_category: Option<String>,
    #[schema(value_type = Object)]
    pub categories: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub message: String,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: i64,
    pub current_category: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResultsResponse {
    pub success: bool,
    pub questions: Vec<QuestionResponse>,
    pub total_questions: i64,
    pub current_category: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateQuestionResponse {
    pub success: bool,
    pub message: String,
    /// Id of the freshly created question.
    pub created: i64,
    pub question: QuestionResponse,
}

/// Plain `{success, message}` body, used for deletions and for the
/// validation / duplicate rejections that ship with HTTP 200.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}
