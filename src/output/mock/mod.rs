use parking_lot::RwLock;
use std::sync::Arc;

use crate::output::{Message, QuizOutput};

#[derive(Clone, Default)]
pub struct MockQuizOutput {
    entries: Arc<RwLock<Vec<Message>>>,
}

impl MockQuizOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Message> {
        std::mem::replace(&mut *self.entries.write(), Vec::new())
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries.read().iter().any(|m| m == message)
    }

    pub fn count_matching<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Message) -> bool,
    {
        self.entries.read().iter().filter(|m| predicate(m)).count()
    }
}

impl QuizOutput for MockQuizOutput {
    fn say(&self, message: &Message) {
        self.entries.write().push(message.clone());
    }
}
