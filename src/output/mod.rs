use crate::quiz::definition::{Answer, Question};
use crate::quiz::result::QuizResult;

#[cfg(test)]
pub mod mock;
pub mod terminal;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    AnswerCorrect(Answer),
    AnswerIncorrect {
        chosen: Answer,
        correct: Option<Answer>,
    },
    AutoAdvance(bool),
    Error(String),
    QuestionBegins {
        number: usize,
        total: usize,
        question: Question,
        is_last: bool,
        selected_answer: Option<String>,
    },
    QuizImported {
        title: String,
        questions: usize,
    },
    QuizMissing,
    QuizResults(QuizResult),
    QuizStatus {
        title: String,
        answered: usize,
        total: usize,
    },
    ReviewSlide {
        number: usize,
        total: usize,
        question: Question,
    },
    Welcome,
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
