//! HTTP Routes
//!
//! API Endpoints:
//! - /ping                              GET     health check
//! - /categories                        GET     list categories (POST accepted as an alias)
//! - /categories/:category_id/questions GET     questions in a category (?page=N)
//! - /questions                         GET     paginated questions (?page=N)
//! - /questions                         POST    create a question
//! - /questions/search                  POST    substring search
//! - /questions/:id                     GET     paginated questions, page in the path
//! - /questions/:id                     DELETE  delete a question
//! - /questions/:id/delete              DELETE  delete a question (legacy path)
//! - /quizzes                           POST    next quiz question

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(category_routes())
        .merge(question_routes())
        .route("/quizzes", post(handlers::play_quiz))
        .fallback(handlers::fallback)
}

fn category_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::list_categories),
        )
        .route(
            "/categories/:category_id/questions",
            get(handlers::list_category_questions),
        )
}

fn question_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/questions/search", post(handlers::search_questions))
        .route(
            "/questions/:id",
            get(handlers::list_questions_page).delete(handlers::delete_question),
        )
        .route("/questions/:id/delete", delete(handlers::delete_question))
}
