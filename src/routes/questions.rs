//! Question listing, search, creation, and deletion.
//!
//! `POST /questions` is registered once and branches on the presence of
//! `searchTerm` in the body: present means search, absent means create.
//! Validation misses and duplicate texts are part of the create protocol,
//! not faults – they ship as `{success: false, message}` with HTTP 200.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::info;
use utoipa::{IntoParams, OpenApi};

use crate::db::{CategoryStore, NewQuestion, QuestionStore};
use crate::error::ServerError;
use crate::pagination::Page;
use crate::schemas::categories::category_map;
use crate::schemas::questions::{
    CategoryQuestionsResponse, CreateQuestionResponse, QuestionListResponse, QuestionPayload,
    QuestionResponse, SearchResultsResponse, StatusResponse,
};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(list_questions, create_or_search_questions, delete_question, list_questions_by_category),
    components(schemas(
        QuestionPayload,
        QuestionResponse,
        QuestionListResponse,
        CategoryQuestionsResponse,
        SearchResultsResponse,
        CreateQuestionResponse,
        StatusResponse,
    ))
)]
pub struct QuestionsApi;

/// Register question routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/questions",
            get(list_questions).post(create_or_search_questions),
        )
        .route("/questions/{id}", axum::routing::delete(delete_question))
        .route(
            "/categories/{id}/questions",
            get(list_questions_by_category),
        )
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PageQuery {
    /// 1-indexed page number; defaults to 1.
    pub page: Option<u32>,
}

/// Validate the requested window. Page 0 is malformed input; pages past the
/// end come back as an empty slice and are handled by the caller.
fn page_window(q: &PageQuery, state: &AppState) -> Result<Page, ServerError> {
    Page::new(q.page.unwrap_or(1), state.config.page_size)
        .ok_or_else(|| ServerError::BadRequest("page must be a positive integer".to_owned()))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// Paginated unfiltered question listing, plus the full category map the
/// frontend uses to label them. There is no category context here, so
/// `current_category` is null.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 400, description = "Malformed page number"),
        (status = 404, description = "Page beyond the last question"),
    )
)]
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, ServerError> {
    let page = page_window(&q, &state)?;
    let questions = state
        .store
        .list_questions(page.limit(), page.offset())
        .await?;
    // Over-paging is a distinct, visible condition, never an empty success.
    if questions.is_empty() {
        return Err(ServerError::NotFound("no questions on this page".to_owned()));
    }
    let total = state.store.count_questions().await?;
    let categories = state.store.list_categories().await?;
    Ok(Json(QuestionListResponse {
        success: true,
        message: "Questions fetched successfully".to_owned(),
        questions: questions.iter().map(|q| q.to_response()).collect(),
        questions_count: total,
        current_category: None,
        categories: category_map(&categories),
    }))
}

/// Create a question, or search when the body carries `searchTerm`.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "questions",
    request_body = QuestionPayload,
    responses(
        (status = 200, description = "Created, found, or rejected with success:false"),
        (status = 422, description = "Missing or undecodable body"),
    )
)]
pub async fn create_or_search_questions(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<QuestionPayload>>,
) -> Result<Response, ServerError> {
    let Some(Json(payload)) = payload else {
        return Err(ServerError::Unprocessable(
            "cannot process, please check your payload".to_owned(),
        ));
    };

    // Presence of searchTerm selects the search branch; an empty term is a
    // valid search matching every question.
    if let Some(term) = payload.search_term.as_deref() {
        let hits = state.store.search_questions(term).await?;
        return Ok(Json(SearchResultsResponse {
            success: true,
            total_questions: hits.len() as i64,
            questions: hits.iter().map(|q| q.to_response()).collect(),
            current_category: None,
        })
        .into_response());
    }

    // Create branch: each mandatory field gets its own rejection message.
    let Some(question) = payload.question else {
        return Ok(rejection("Please provide a question"));
    };
    let Some(answer) = payload.answer else {
        return Ok(rejection("Please provide an answer"));
    };
    let Some(category) = payload.category else {
        return Ok(rejection("Please provide a category"));
    };
    let Some(difficulty) = payload.difficulty else {
        return Ok(rejection("Please provide a difficulty level"));
    };

    // Best-effort duplicate check; concurrent identical inserts can still
    // race past it (accepted limitation).
    if state.store.find_question_by_text(&question).await?.is_some() {
        return Ok(rejection("Question already exists"));
    }

    let created = state
        .store
        .insert_question(NewQuestion { question, answer, category, difficulty })
        .await?;
    info!(id = created.id, category = created.category, "question created");
    Ok(Json(CreateQuestionResponse {
        success: true,
        message: "Question added successfully".to_owned(),
        created: created.id,
        question: created.to_response(),
    })
    .into_response())
}

fn rejection(message: &str) -> Response {
    Json(StatusResponse { success: false, message: message.to_owned() }).into_response()
}

/// Delete one question by id.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "questions",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted", body = StatusResponse),
        (status = 404, description = "No such question"),
    )
)]
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<StatusResponse>, ServerError> {
    let removed = state.store.delete_question(id).await?;
    if removed == 0 {
        return Err(ServerError::NotFound(format!("question {id} not found")));
    }
    info!(id, "question deleted");
    Ok(Json(StatusResponse {
        success: true,
        message: "Question deleted successfully".to_owned(),
    }))
}

/// Paginated listing of one category's questions. `current_category` is the
/// category's stored label, resolved per request.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "questions",
    params(("id" = i64, Path, description = "Category id"), PageQuery),
    responses(
        (status = 200, description = "One page of the category's questions", body = CategoryQuestionsResponse),
        (status = 400, description = "Malformed page number"),
        (status = 404, description = "Unknown category or page beyond the last question"),
    )
)]
pub async fn list_questions_by_category(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Query(q): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, ServerError> {
    let category = state
        .store
        .get_category(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("category {id} not found")))?;
    let page = page_window(&q, &state)?;
    let questions = state
        .store
        .list_questions_by_category(id, page.limit(), page.offset())
        .await?;
    if questions.is_empty() {
        return Err(ServerError::NotFound(format!(
            "no questions on this page of category {}",
            category.kind
        )));
    }
    let total = state.store.count_questions_by_category(id).await?;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        message: "Questions fetched successfully".to_owned(),
        questions: questions.iter().map(|q| q.to_response()).collect(),
        total_questions: total,
        current_category: category.kind,
    }))
}
