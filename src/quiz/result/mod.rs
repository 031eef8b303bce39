use serde::Serialize;
use std::collections::BTreeMap;

use crate::quiz::definition::Question;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_id: String,
    pub score: usize,
    pub total_questions: usize,
    pub incorrect_answers: usize,
}

impl QuizResult {
    /// Scores `user_answers` (question id to answer id). Unanswered questions
    /// count as incorrect, as do questions without a correct answer.
    pub fn compute(
        quiz_id: &str,
        questions: &[Question],
        user_answers: &BTreeMap<String, String>,
    ) -> Self {
        let total_questions = questions.len();
        let score = questions
            .iter()
            .filter(|question| {
                user_answers
                    .get(&question.id)
                    .map(|answer_id| question.is_answer_correct(answer_id))
                    .unwrap_or(false)
            })
            .count();

        QuizResult {
            quiz_id: quiz_id.to_owned(),
            score,
            total_questions,
            incorrect_answers: total_questions - score,
        }
    }

    /// Share of correct answers, between 0 and 100.
    pub fn success_rate(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        100.0 * self.score as f64 / self.total_questions as f64
    }
}
