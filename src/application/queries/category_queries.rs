//! Category Queries

use crate::domain::{CategoryId, PageRequest};

/// List every category
#[derive(Debug, Clone)]
pub struct ListCategories;

/// One page of the questions filed under a category
#[derive(Debug, Clone)]
pub struct ListCategoryQuestions {
    pub category_id: CategoryId,
    pub page: PageRequest,
}
