//! Merged OpenAPI document.

use utoipa::OpenApi;

use super::{categories, health, questions, quizzes};

#[derive(OpenApi)]
#[openapi(info(
    title = "Trivia API",
    description = "Trivia question catalogue and quiz endpoints"
))]
struct ApiDoc;

/// The complete OpenAPI spec, assembled from each route module's doc struct.
pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut spec = ApiDoc::openapi();
    spec.merge(health::HealthApi::openapi());
    spec.merge(categories::CategoriesApi::openapi());
    spec.merge(questions::QuestionsApi::openapi());
    spec.merge(quizzes::QuizzesApi::openapi());
    spec
}
