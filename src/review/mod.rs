use anyhow::*;
use log::debug;
use std::path::PathBuf;
use std::time::Duration;

use crate::output::{Message, QuizOutput};
use crate::quiz::definition::{Question, Quiz};
use crate::quiz::image::ImageResolver;
use crate::slides::{KeyOutcome, Settings, SlideObserver, SlideView, SlidesNavigator};

#[cfg(test)]
mod tests;

pub struct ReviewRenderer<O> {
    output: O,
}

impl<O: QuizOutput> SlideObserver<Question> for ReviewRenderer<O> {
    fn on_render(&mut self, view: SlideView<'_, Question>) {
        self.output.say(&Message::ReviewSlide {
            number: view.index + 1,
            total: view.len,
            question: view.item.clone(),
        });
    }

    fn on_slide_change(&mut self, question: &Question) {
        debug!("Reviewing question {:?}", question.id);
    }

    fn on_auto_advance_change(&mut self, enabled: bool) {
        self.output.say(&Message::AutoAdvance(enabled));
    }
}

/// Flashcard slideshow over a quiz, showing each question with its answer.
pub struct ReviewSlideshow<O> {
    slides: SlidesNavigator<Question, ImageResolver, ReviewRenderer<O>>,
}

impl<O: QuizOutput> ReviewSlideshow<O> {
    pub fn new(quiz: &Quiz, settings: Settings, images_dir: PathBuf, output: O) -> Result<Self> {
        let slides = SlidesNavigator::new(
            quiz.questions.clone(),
            settings,
            ImageResolver::new(images_dir),
            ReviewRenderer { output },
        )?;
        Ok(ReviewSlideshow { slides })
    }

    /// Shows the first question. Images that fail to load are reported but do
    /// not stop the slideshow.
    pub async fn begin(&mut self) -> Result<()> {
        if let Err(e) = self.slides.begin().await {
            self.slides.observer().output.say(&Message::Error(e.to_string()));
        }
        Ok(())
    }

    pub async fn handle_key(&mut self, code: &str) -> KeyOutcome {
        self.slides.handle_key(code).await
    }

    pub async fn tick(&mut self, dt: Duration) -> usize {
        self.slides.tick(dt).await
    }
}
