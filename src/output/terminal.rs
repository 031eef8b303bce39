use crate::output::{Message, QuizOutput};
use crate::quiz::definition::Question;

#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    fn interpret_message(&self, message: &Message) -> String {
        use Message::*;
        match message {
            Welcome => "Welcome to Quizzy 🎉\nImport a quiz with `quizzy import <file.json|file.csv>` or type `open` to resume the stored one.".into(),
            QuizMissing => "There is no quiz to take yet, import one first.".into(),
            QuizImported { title, questions } => {
                format!("📂 Imported **{}** ({} questions)", title, questions)
            }
            QuizStatus {
                title,
                answered,
                total,
            } => format!("**{}**: {} of {} questions answered", title, answered, total),
            QuestionBegins {
                number,
                total,
                question,
                is_last,
                selected_answer,
            } => {
                let mut text = format!("\nQuestion {} ({} of {})", number, number, total);
                text += &describe_question(question);
                for (index, answer) in question.answers.iter().enumerate() {
                    let marker = match selected_answer {
                        Some(id) if *id == answer.id && answer.is_correct => "✅",
                        Some(id) if *id == answer.id => "❌",
                        Some(_) if answer.is_correct => "✅",
                        _ => "  ",
                    };
                    text += &format!("\n{} {}. {}", marker, index + 1, answer.answer);
                }
                let next_hint = if *is_last { "" } else { ", `next`" };
                text += &format!("\n(type an answer number, `prev`{} or `home`)", next_hint);
                text
            }
            AnswerCorrect(answer) => format!("✅ **{}** is correct!", answer.answer),
            AnswerIncorrect { chosen, correct } => match correct {
                Some(correct) => format!(
                    "❌ **{}** is wrong, the answer was **{}**.",
                    chosen.answer, correct.answer
                ),
                None => format!("❌ **{}** is wrong.", chosen.answer),
            },
            QuizResults(result) => format!(
                "\n🎉 Quiz results\nCorrect answers: {} / {}\nWrong answers: {}\n{:.0}% success\n(type `restart` to take the quiz again)",
                result.score,
                result.total_questions,
                result.incorrect_answers,
                result.success_rate()
            ),
            ReviewSlide {
                number,
                total,
                question,
            } => {
                let mut text = format!("\n[{}/{}]", number, total);
                text += &describe_question(question);
                match question.correct_answer() {
                    Some(answer) => text += &format!("\n➡️ {}", answer.answer),
                    None => text += "\n➡️ (no correct answer)",
                }
                text
            }
            AutoAdvance(true) => "▶️ Auto-advance on".into(),
            AutoAdvance(false) => "⏸️ Auto-advance off".into(),
            Error(error) => format!("⚠️ {}", error),
        }
    }
}

fn describe_question(question: &Question) -> String {
    let mut text = String::new();
    if let Some(image) = &question.image {
        text += &format!("\n🖼️ {}", image);
    }
    text += &format!("\n{}", question.question);
    text
}

impl QuizOutput for TerminalOutput {
    fn say(&self, message: &Message) {
        println!("{}", self.interpret_message(message));
    }
}
