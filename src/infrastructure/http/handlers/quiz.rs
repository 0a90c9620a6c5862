//! Quiz HTTP Handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;

use crate::application::NextQuizQuestion;
use crate::infrastructure::http::dto::{ApiResponse, QuizRequest, QuizResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// Next random question not yet played this round, or `null` once exhausted
pub async fn play_quiz(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<QuizResponse>>, ApiError> {
    let Json(req) = payload?;
    let query = NextQuizQuestion::try_from(req)?;

    let question = state.next_quiz_question_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(QuizResponse { question })))
}
