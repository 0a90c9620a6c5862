//! Quiz round selection
//!
//! A round is stateless on the server: the client sends back the ids it has
//! already seen and gets one unseen question, or none once the pool is empty.

use rand::Rng;

use super::trivia::{CategoryId, Question};

/// Which questions a quiz round draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    AllCategories,
    Category(CategoryId),
}

impl QuizScope {
    pub fn includes(&self, question: &Question) -> bool {
        match self {
            QuizScope::AllCategories => true,
            QuizScope::Category(id) => question.category == *id,
        }
    }
}

/// Uniformly pick one candidate. `None` means the round is exhausted.
pub fn pick_question<R: Rng + ?Sized>(mut candidates: Vec<Question>, rng: &mut R) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trivia::QuestionId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id: QuestionId::new(id),
            question: format!("Question {}", id),
            answer: "answer".to_string(),
            category: CategoryId::new(category),
            difficulty: 1,
        }
    }

    #[test]
    fn test_empty_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_question(Vec::new(), &mut rng).is_none());
    }

    #[test]
    fn test_pick_comes_from_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool: Vec<Question> = (1..=5).map(|id| question(id, 1)).collect();
        let ids: HashSet<QuestionId> = pool.iter().map(|q| q.id).collect();
        for _ in 0..50 {
            let picked = pick_question(pool.clone(), &mut rng).unwrap();
            assert!(ids.contains(&picked.id));
        }
    }

    #[test]
    fn test_every_candidate_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool: Vec<Question> = (1..=3).map(|id| question(id, 1)).collect();
        let seen: HashSet<QuestionId> = (0..200)
            .filter_map(|_| pick_question(pool.clone(), &mut rng))
            .map(|q| q.id)
            .collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_scope() {
        let q = question(1, 2);
        assert!(QuizScope::AllCategories.includes(&q));
        assert!(QuizScope::Category(CategoryId::new(2)).includes(&q));
        assert!(!QuizScope::Category(CategoryId::new(3)).includes(&q));
    }
}
