use super::*;
use crate::quiz::definition::Answer;

fn question(id: &str, correct: Option<&str>) -> Question {
    Question {
        id: id.to_owned(),
        image: None,
        question: format!("Question {}", id),
        answers: ["a", "b", "c"]
            .iter()
            .map(|answer_id| Answer {
                id: answer_id.to_string(),
                answer: answer_id.to_uppercase(),
                is_correct: Some(*answer_id) == correct,
            })
            .collect(),
    }
}

fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(q, a)| (q.to_string(), a.to_string()))
        .collect()
}

#[test]
fn counts_correct_answers() {
    let questions = vec![
        question("q1", Some("a")),
        question("q2", Some("b")),
        question("q3", Some("c")),
    ];
    let result = QuizResult::compute("quiz", &questions, &answers(&[("q1", "a"), ("q2", "c"), ("q3", "c")]));
    assert_eq!(
        result,
        QuizResult {
            quiz_id: "quiz".to_owned(),
            score: 2,
            total_questions: 3,
            incorrect_answers: 1,
        }
    );
}

#[test]
fn unanswered_questions_are_incorrect() {
    let questions = vec![question("q1", Some("a")), question("q2", None)];
    let result = QuizResult::compute("quiz", &questions, &answers(&[]));
    assert_eq!(result.score, 0);
    assert_eq!(result.incorrect_answers, 2);
}

#[test]
fn ignores_answers_to_unknown_questions() {
    let questions = vec![question("q1", Some("a"))];
    let result = QuizResult::compute("quiz", &questions, &answers(&[("q9", "a")]));
    assert_eq!(result.score, 0);
}

#[test]
fn success_rate_is_a_percentage() {
    let questions = vec![question("q1", Some("a")), question("q2", Some("a"))];
    let result = QuizResult::compute("quiz", &questions, &answers(&[("q1", "a")]));
    assert!((result.success_rate() - 50.0).abs() < f64::EPSILON);

    let empty = QuizResult::compute("quiz", &[], &answers(&[]));
    assert_eq!(empty.success_rate(), 0.0);
}
