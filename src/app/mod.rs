use anyhow::*;
use std::result::Result::Ok;
use log::info;
use std::path::Path;

use crate::output::{Message, QuizOutput};
use crate::quiz::definition::Quiz;
use crate::quiz::QuizSession;
use crate::storage::QuizStore;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Page {
    Home,
    Quiz,
    Results,
}

enum Phase<S, O> {
    Home,
    Quiz(QuizSession<S, O>),
    Results(QuizSession<S, O>),
}

impl<S, O> Phase<S, O> {
    fn page(&self) -> Page {
        match self {
            Phase::Home => Page::Home,
            Phase::Quiz(_) => Page::Quiz,
            Phase::Results(_) => Page::Results,
        }
    }
}

/// Routes between the home page, the questionnaire and the results.
pub struct App<S, O> {
    current_phase: Phase<S, O>,
    store: S,
    output: O,
}

impl<S: QuizStore + Clone, O: QuizOutput + Clone> App<S, O> {
    pub fn new(store: S, output: O) -> Self {
        App {
            current_phase: Phase::Home,
            store,
            output,
        }
    }

    pub fn page(&self) -> Page {
        self.current_phase.page()
    }

    pub fn session(&self) -> Option<&QuizSession<S, O>> {
        match &self.current_phase {
            Phase::Home => None,
            Phase::Quiz(session) | Phase::Results(session) => Some(session),
        }
    }

    fn set_current_phase(&mut self, phase: Phase<S, O>) {
        info!("Entering page: {:?}", phase.page());
        if let Phase::Results(session) = &phase {
            self.output.say(&Message::QuizResults(session.result()));
        }
        self.current_phase = phase;
    }

    /// Reads a quiz file, stores it and opens the questionnaire on it.
    pub async fn import(&mut self, path: &Path) -> Result<()> {
        let quiz =
            Quiz::open(path).with_context(|| format!("Could not import quiz {:?}", path))?;
        self.store.save(&quiz)?;
        self.output.say(&Message::QuizImported {
            title: quiz.title.clone(),
            questions: quiz.questions.len(),
        });
        self.open_quiz().await
    }

    /// Opens the stored quiz, or stays home when there is none.
    pub async fn open_quiz(&mut self) -> Result<()> {
        let quiz = match self.store.load()? {
            Some(quiz) => quiz,
            None => {
                self.output.say(&Message::QuizMissing);
                self.set_current_phase(Phase::Home);
                return Ok(());
            }
        };

        let mut session = QuizSession::new(quiz, self.store.clone(), self.output.clone())?;
        if session.is_finished() {
            self.set_current_phase(Phase::Results(session));
        } else {
            session.begin().await?;
            self.set_current_phase(Phase::Quiz(session));
        }
        Ok(())
    }

    /// Reports progress on the quiz being taken, or on the stored one when
    /// no quiz is open.
    pub fn status(&self) -> Result<()> {
        if let Some(session) = self.session() {
            let quiz = session.quiz();
            self.output.say(&Message::QuizStatus {
                title: quiz.title.clone(),
                answered: session.answered_count(),
                total: quiz.questions.len(),
            });
            return Ok(());
        }
        match self.store.load()? {
            Some(quiz) => self.output.say(&Message::QuizStatus {
                answered: quiz.user_answers.len(),
                total: quiz.questions.len(),
                title: quiz.title,
            }),
            None => self.output.say(&Message::QuizMissing),
        }
        Ok(())
    }

    pub fn select_answer(&mut self, number: usize) -> Result<()> {
        let finished = match &mut self.current_phase {
            Phase::Quiz(session) => {
                session.select_answer(number)?;
                session.is_finished()
            }
            _ => return Err(anyhow!("There is no question to answer")),
        };
        if finished {
            if let Phase::Quiz(session) = std::mem::replace(&mut self.current_phase, Phase::Home) {
                self.set_current_phase(Phase::Results(session));
            }
        }
        Ok(())
    }

    pub async fn next(&mut self) -> Result<()> {
        match &mut self.current_phase {
            Phase::Quiz(session) => session.next().await,
            _ => Err(anyhow!("There is no question to move on from")),
        }
    }

    pub async fn previous(&mut self) -> Result<()> {
        match &mut self.current_phase {
            Phase::Quiz(session) => session.previous().await,
            _ => Err(anyhow!("There is no question to go back from")),
        }
    }

    pub fn restart(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.current_phase, Phase::Home) {
            Phase::Results(mut session) => match session.restart() {
                Ok(()) => {
                    self.set_current_phase(Phase::Quiz(session));
                    Ok(())
                }
                Err(e) => {
                    self.current_phase = Phase::Results(session);
                    Err(e)
                }
            },
            phase => {
                self.current_phase = phase;
                Err(anyhow!("The quiz can only be restarted from the results"))
            }
        }
    }

    pub fn go_home(&mut self) {
        self.set_current_phase(Phase::Home);
        self.output.say(&Message::Welcome);
    }
}
