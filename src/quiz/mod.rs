use anyhow::*;
use log::debug;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use self::definition::{Question, Quiz};
use self::result::QuizResult;
use crate::output::{Message, QuizOutput};
use crate::slides::{Identity, Settings, SlideObserver, SlideView, SlidesNavigator};
use crate::storage::QuizStore;

pub mod definition;
pub mod image;
pub mod result;


/// Question id to answer id, shared between a session and its renderer.
pub type AnswersHandle = Arc<RwLock<BTreeMap<String, String>>>;

pub struct QuestionRenderer<O> {
    output: O,
    answers: AnswersHandle,
}

impl<O: QuizOutput> SlideObserver<Question> for QuestionRenderer<O> {
    fn on_render(&mut self, view: SlideView<'_, Question>) {
        let selected_answer = self.answers.read().get(&view.item.id).cloned();
        self.output.say(&Message::QuestionBegins {
            number: view.index + 1,
            total: view.len,
            question: view.item.clone(),
            is_last: view.is_last,
            selected_answer,
        });
    }
}

/// One run through a quiz: the questionnaire slides plus the answers given
/// so far, saved to the store after every change.
pub struct QuizSession<S, O> {
    quiz: Quiz,
    slides: SlidesNavigator<Question, Identity, QuestionRenderer<O>>,
    answers: AnswersHandle,
    store: S,
    output: O,
}

impl<S: QuizStore, O: QuizOutput + Clone> QuizSession<S, O> {
    pub fn new(quiz: Quiz, store: S, output: O) -> Result<Self> {
        quiz.validate()?;
        let answers: AnswersHandle = Arc::new(RwLock::new(quiz.user_answers.clone()));
        let renderer = QuestionRenderer {
            output: output.clone(),
            answers: answers.clone(),
        };
        let settings = Settings {
            auto_advance: false,
            keyboard_enabled: false,
            ..Default::default()
        };
        let start_index = quiz
            .current_question_index
            .unwrap_or(0)
            .min(quiz.questions.len() - 1);
        let slides = SlidesNavigator::new(quiz.questions.clone(), settings, Identity, renderer)?
            .starting_at(start_index)?;

        Ok(QuizSession {
            quiz,
            slides,
            answers,
            store,
            output,
        })
    }

    pub async fn begin(&mut self) -> Result<()> {
        self.slides.begin().await?;
        Ok(())
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.slides.current_slide()
    }

    pub fn question_index(&self) -> Option<usize> {
        self.slides.current_index()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.read().len()
    }

    pub fn is_finished(&self) -> bool {
        let answers = self.answers.read();
        self.quiz
            .questions
            .iter()
            .all(|q| answers.contains_key(&q.id))
    }

    /// Records answer `number` (1-based, as displayed) for the current
    /// question. Each question can only be answered once.
    pub fn select_answer(&mut self, number: usize) -> Result<()> {
        let question = self
            .current_question()
            .context("There is no current question")?
            .clone();
        if self.answers.read().contains_key(&question.id) {
            return Err(anyhow!("This question was already answered"));
        }
        let answer = number
            .checked_sub(1)
            .and_then(|index| question.answers.get(index))
            .with_context(|| format!("There is no answer #{}", number))?
            .clone();

        debug!("Answering {:?} with {:?}", question.id, answer.id);
        let mut answers = self.answers.read().clone();
        answers.insert(question.id.clone(), answer.id.clone());
        self.persist(answers)?;

        if answer.is_correct {
            self.output.say(&Message::AnswerCorrect(answer));
        } else {
            self.output.say(&Message::AnswerIncorrect {
                chosen: answer,
                correct: question.correct_answer().cloned(),
            });
        }
        Ok(())
    }

    pub fn can_go_next(&self) -> bool {
        match self.current_question() {
            Some(question) => {
                !self.slides.is_last_slide() && self.answers.read().contains_key(&question.id)
            }
            None => false,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.question_index().map(|i| i > 0).unwrap_or(false)
    }

    pub async fn next(&mut self) -> Result<()> {
        if self.slides.is_last_slide() {
            return Err(anyhow!("This is the last question"));
        }
        if !self.can_go_next() {
            return Err(anyhow!("Pick an answer before moving on"));
        }
        self.slides.move_right().await?;
        Ok(())
    }

    pub async fn previous(&mut self) -> Result<()> {
        if !self.can_go_previous() {
            return Err(anyhow!("This is the first question"));
        }
        self.slides.move_left().await?;
        Ok(())
    }

    pub fn result(&self) -> QuizResult {
        QuizResult::compute(&self.quiz.id, &self.quiz.questions, &self.answers.read())
    }

    /// Forgets every answer and goes back to the first question.
    pub fn restart(&mut self) -> Result<()> {
        let mut quiz = self.quiz.clone();
        quiz.reset_progress();
        quiz.current_question_index = Some(0);
        self.store.save(&quiz)?;
        self.quiz = quiz;
        self.answers.write().clear();

        if self.question_index() == Some(0) {
            self.slides.render();
        } else {
            self.slides.set_current_index(0)?;
        }
        Ok(())
    }

    /// Saves `answers` along with the rest of the quiz, and only then makes
    /// them the session's answers.
    fn persist(&mut self, answers: BTreeMap<String, String>) -> Result<()> {
        let mut quiz = self.quiz.clone();
        quiz.current_question_index = Some(answers.len());
        quiz.user_answers = answers;
        self.store.save(&quiz)?;
        *self.answers.write() = quiz.user_answers.clone();
        self.quiz = quiz;
        Ok(())
    }
}
