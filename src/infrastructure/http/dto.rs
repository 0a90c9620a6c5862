//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::deserializers::{deserialize_lenient_i64, deserialize_lenient_i64_vec};
use super::error::ApiError;
use crate::application::{CreateQuestion, NextQuizQuestion};
use crate::domain::{Category, CategoryId, Question, QuestionId, QuizScope};

// ============================================================================
// Response envelope
// ============================================================================

/// Success envelope: `success: true` next to the payload fields
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Category id to category type; JSON object keys are the ids as strings
pub type CategoryMap = BTreeMap<CategoryId, String>;

pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

// ============================================================================
// Category DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryMap,
}

#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub categories: CategoryMap,
    pub current_category: CategoryId,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

// ============================================================================
// Question DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub categories: CategoryMap,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub category: Option<i64>,
}

impl From<CreateQuestionRequest> for CreateQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        CreateQuestion {
            question: req.question,
            answer: req.answer,
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub created: QuestionId,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: QuestionId,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Search spans every category, always null
    pub current_category: Option<CategoryId>,
}

// ============================================================================
// Quiz DTOs
// ============================================================================

/// Type the web client sends when the player picks "ALL"
pub const ALL_CATEGORIES_SENTINEL: &str = "click";

#[derive(Debug, Deserialize)]
pub struct QuizCategoryRequest {
    #[serde(default, deserialize_with = "deserialize_lenient_i64")]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl QuizCategoryRequest {
    /// `type == "click"` and `id == 0` both mean every category.
    pub fn scope(&self) -> Result<QuizScope, ApiError> {
        if self.kind.as_deref() == Some(ALL_CATEGORIES_SENTINEL) {
            return Ok(QuizScope::AllCategories);
        }
        match self.id {
            Some(0) => Ok(QuizScope::AllCategories),
            Some(id) => Ok(QuizScope::Category(CategoryId::new(id))),
            None => Err(ApiError::Unprocessable(
                "quiz_category needs an id".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Absent or null plays every category
    #[serde(default)]
    pub quiz_category: Option<QuizCategoryRequest>,
    #[serde(default, deserialize_with = "deserialize_lenient_i64_vec")]
    pub previous_questions: Vec<i64>,
}

impl TryFrom<QuizRequest> for NextQuizQuestion {
    type Error = ApiError;

    fn try_from(req: QuizRequest) -> Result<Self, Self::Error> {
        let scope = match &req.quiz_category {
            Some(category) => category.scope()?,
            None => QuizScope::AllCategories,
        };
        Ok(NextQuizQuestion {
            scope,
            previous_questions: req
                .previous_questions
                .into_iter()
                .map(QuestionId::new)
                .collect(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    /// null once the round is exhausted
    pub question: Option<Question>,
}

// ============================================================================
// System DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn quiz(body: serde_json::Value) -> Result<NextQuizQuestion, ApiError> {
        let req: QuizRequest = serde_json::from_value(body).unwrap();
        NextQuizQuestion::try_from(req)
    }

    #[test]
    fn test_envelope_flattens_payload() {
        let body = ApiResponse::success(CreatedResponse {
            created: QuestionId::new(24),
        });
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"success": true, "created": 24})
        );
    }

    #[test]
    fn test_category_map_keys_are_ids() {
        let map = category_map(vec![
            Category {
                id: CategoryId::new(1),
                kind: "Science".to_string(),
            },
            Category {
                id: CategoryId::new(2),
                kind: "Art".to_string(),
            },
        ]);
        assert_eq!(
            serde_json::to_value(CategoriesResponse { categories: map }).unwrap(),
            json!({"categories": {"1": "Science", "2": "Art"}})
        );
    }

    #[test]
    fn test_search_response_has_null_category() {
        let body = SearchResponse {
            questions: Vec::new(),
            total_questions: 0,
            current_category: None,
        };
        assert_eq!(
            serde_json::to_value(body).unwrap()["current_category"],
            serde_json::Value::Null
        );
    }

    #[test]
    fn test_quiz_scope_variants() {
        let all = quiz(json!({"quiz_category": {"type": "click", "id": 0}, "previous_questions": []}))
            .unwrap();
        assert_eq!(all.scope, QuizScope::AllCategories);

        let missing = quiz(json!({"previous_questions": [1, 2]})).unwrap();
        assert_eq!(missing.scope, QuizScope::AllCategories);
        assert_eq!(missing.previous_questions.len(), 2);

        let null = quiz(json!({"quiz_category": null})).unwrap();
        assert_eq!(null.scope, QuizScope::AllCategories);

        let science = quiz(json!({"quiz_category": {"type": "Science", "id": "1"}})).unwrap();
        assert_eq!(science.scope, QuizScope::Category(CategoryId::new(1)));

        // a click sentinel wins over any id
        let click = quiz(json!({"quiz_category": {"type": "click", "id": 3}})).unwrap();
        assert_eq!(click.scope, QuizScope::AllCategories);
    }

    #[test]
    fn test_quiz_category_without_id_is_rejected() {
        assert!(quiz(json!({"quiz_category": {"type": "Science"}})).is_err());
    }

    #[test]
    fn test_create_request_accepts_string_numbers() {
        let req: CreateQuestionRequest = serde_json::from_value(json!({
            "question": "Q",
            "answer": "A",
            "difficulty": "3",
            "category": 2
        }))
        .unwrap();
        let command = CreateQuestion::from(req);
        assert_eq!(command.difficulty, Some(3));
        assert_eq!(command.category, Some(2));
    }
}
