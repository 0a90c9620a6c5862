//! Question Queries

use crate::domain::PageRequest;

/// One page of all questions
#[derive(Debug, Clone)]
pub struct ListQuestions {
    pub page: PageRequest,
}

/// Free-text search over question text, unpaginated
#[derive(Debug, Clone)]
pub struct SearchQuestions {
    /// `None` behaves like an empty term
    pub term: Option<String>,
}
