//! Category listing endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::db::CategoryStore;
use crate::error::ServerError;
use crate::schemas::categories::{category_map, CategoryListResponse};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(paths(list_categories), components(schemas(CategoryListResponse)))]
pub struct CategoriesApi;

/// Register category routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/categories", get(list_categories))
}

/// All categories as an `{id: type}` object, ascending by id. The set is
/// small and fixed, so there is no pagination.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Category map", body = CategoryListResponse),
        (status = 500, description = "Store fault"),
    )
)]
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoryListResponse>, ServerError> {
    let categories = state.store.list_categories().await?;
    Ok(Json(CategoryListResponse {
        success: true,
        message: "Categories fetched successfully".to_owned(),
        categories_count: categories.len(),
        categories: category_map(&categories),
    }))
}
