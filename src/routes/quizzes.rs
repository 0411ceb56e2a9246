//! Quiz round endpoint.
//!
//! Stateless: the caller carries the list of already-served question ids and
//! resends it each round. One eligible question is drawn uniformly at random
//! from the process-wide RNG; an exhausted pool is the expected end-of-game
//! signal and maps to 404.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::db::QuestionStore;
use crate::error::ServerError;
use crate::quiz;
use crate::schemas::quizzes::{QuizCategory, QuizRequest, QuizResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(next_quiz_question),
    components(schemas(QuizRequest, QuizCategory, QuizResponse))
)]
pub struct QuizzesApi;

/// Register quiz routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_quiz_question))
}

/// Draw the next quiz question.
///
/// A missing body starts a fresh any-category quiz; `quiz_category.id == 0`
/// likewise means "any category".
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question", body = QuizResponse),
        (status = 404, description = "No eligible question remains"),
    )
)]
pub async fn next_quiz_question(
    State(state): State<Arc<AppState>>,
    payload: Option<Json<QuizRequest>>,
) -> Result<Json<QuizResponse>, ServerError> {
    let req = payload.map_or_else(QuizRequest::default, |Json(r)| r);
    let pool = state.store.questions_in_play(req.category_filter()).await?;

    // Lock held only for the draw; no await happens inside.
    let picked = {
        let mut rng = state
            .rng
            .lock()
            .map_err(|_| ServerError::Internal("quiz RNG lock poisoned".to_owned()))?;
        quiz::draw(&pool, &req.previous_questions, &mut *rng).cloned()
    };

    let question = picked.ok_or_else(|| {
        ServerError::NotFound("no more questions, the quiz is exhausted".to_owned())
    })?;
    Ok(Json(QuizResponse { success: true, question: question.to_response() }))
}
