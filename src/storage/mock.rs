use anyhow::*;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::quiz::definition::Quiz;
use crate::storage::QuizStore;

#[derive(Clone, Default)]
pub struct MockQuizStore {
    quiz: Arc<RwLock<Option<Quiz>>>,
    save_count: Arc<RwLock<usize>>,
    failing: Arc<RwLock<bool>>,
}

impl MockQuizStore {
    pub fn with_quiz(quiz: Quiz) -> Self {
        let store = MockQuizStore::default();
        *store.quiz.write() = Some(quiz);
        store
    }

    pub fn stored(&self) -> Option<Quiz> {
        self.quiz.read().clone()
    }

    /// Makes every following save fail, as a full disk would.
    pub fn fail_saves(&self, failing: bool) {
        *self.failing.write() = failing;
    }

    pub fn save_count(&self) -> usize {
        *self.save_count.read()
    }
}

impl QuizStore for MockQuizStore {
    fn load(&self) -> Result<Option<Quiz>> {
        Ok(self.quiz.read().clone())
    }

    fn save(&self, quiz: &Quiz) -> Result<()> {
        if *self.failing.read() {
            return Err(anyhow!("disk full"));
        }
        *self.quiz.write() = Some(quiz.clone());
        *self.save_count.write() += 1;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.quiz.write() = None;
        Ok(())
    }
}
