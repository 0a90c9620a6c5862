//! Question HTTP Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;

use crate::application::{CreateQuestion, DeleteQuestion, ListQuestions, SearchQuestions};
use crate::domain::{PageRequest, QuestionId};
use crate::infrastructure::http::dto::{
    category_map, ApiResponse, CreateQuestionRequest, CreatedResponse, DeletedResponse,
    PageParams, QuestionsResponse, SearchRequest, SearchResponse,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

async fn questions_page(
    state: &AppState,
    page: PageRequest,
) -> Result<Json<ApiResponse<QuestionsResponse>>, ApiError> {
    let result = state
        .list_questions_handler
        .handle(ListQuestions { page })
        .await?;

    Ok(Json(ApiResponse::success(QuestionsResponse {
        categories: category_map(result.categories),
        questions: result.questions,
        total_questions: result.total_questions,
    })))
}

/// `GET /questions?page=N`, page defaults to 1
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<ApiResponse<QuestionsResponse>>, ApiError> {
    let Query(params) = params?;
    let page = params.page.map(PageRequest::new).transpose()?.unwrap_or_default();
    questions_page(&state, page).await
}

/// `GET /questions/{page}`
pub async fn list_questions_page(
    State(state): State<Arc<AppState>>,
    page: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<QuestionsResponse>>, ApiError> {
    // a non-numeric page is a malformed request here, not an unknown resource
    let Path(page) = page.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    questions_page(&state, PageRequest::new(page)?).await
}

/// Add a question
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<CreatedResponse>>, ApiError> {
    let Json(req) = payload?;
    let created = state
        .create_question_handler
        .handle(CreateQuestion::from(req))
        .await?;

    Ok(Json(ApiResponse::success(CreatedResponse { created })))
}

/// Remove a question; a missing id is reported as 422
pub async fn delete_question(
    State(state): State<Arc<AppState>>,
    question_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<ApiResponse<DeletedResponse>>, ApiError> {
    let Path(question_id) = question_id?;
    let deleted = state
        .delete_question_handler
        .handle(DeleteQuestion {
            question_id: QuestionId::new(question_id),
        })
        .await?;

    Ok(Json(ApiResponse::success(DeletedResponse { deleted })))
}

/// Case-insensitive substring search over question text
pub async fn search_questions(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<SearchResponse>>, ApiError> {
    let Json(req) = payload?;
    let result = state
        .search_questions_handler
        .handle(SearchQuestions {
            term: req.search_term,
        })
        .await?;

    Ok(Json(ApiResponse::success(SearchResponse {
        questions: result.questions,
        total_questions: result.total_questions,
        current_category: None,
    })))
}
