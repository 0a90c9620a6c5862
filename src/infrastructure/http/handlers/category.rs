//! Category HTTP Handlers

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{ListCategories, ListCategoryQuestions};
use crate::domain::{CategoryId, PageRequest};
use crate::infrastructure::http::dto::{
    category_map, ApiResponse, CategoriesResponse, CategoryQuestionsResponse, PageParams,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// List every category as an id to type map
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<CategoriesResponse>>, ApiError> {
    let categories = state.list_categories_handler.handle(ListCategories).await?;

    Ok(Json(ApiResponse::success(CategoriesResponse {
        categories: category_map(categories),
    })))
}

/// One page of the questions filed under a category
pub async fn list_category_questions(
    State(state): State<Arc<AppState>>,
    category_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<ApiResponse<CategoryQuestionsResponse>>, ApiError> {
    let Path(category_id) = category_id?;
    let Query(params) = params?;
    let page = params.page.map(PageRequest::new).transpose()?.unwrap_or_default();

    let result = state
        .list_category_questions_handler
        .handle(ListCategoryQuestions {
            category_id: CategoryId::new(category_id),
            page,
        })
        .await?;

    Ok(Json(ApiResponse::success(CategoryQuestionsResponse {
        categories: category_map(result.categories),
        current_category: result.current_category,
        questions: result.questions,
        total_questions: result.total_questions,
    })))
}
