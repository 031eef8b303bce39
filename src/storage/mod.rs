use anyhow::*;
use directories_next::BaseDirs;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

use crate::quiz::definition::Quiz;

#[cfg(test)]
pub mod mock;

const QUIZ_FILE_NAME: &str = "quiz.json";

/// Keeps the one quiz being taken, progress included.
pub trait QuizStore {
    fn load(&self) -> Result<Option<Quiz>>;
    fn save(&self, quiz: &Quiz) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

pub fn get_data_dir() -> Result<PathBuf> {
    let mut dir = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("quizzy");
    Ok(dir)
}

#[derive(Clone, Debug)]
pub struct FileQuizStore {
    path: PathBuf,
}

impl FileQuizStore {
    /// Stores the quiz under `data_dir`, or the system data directory.
    pub fn open(data_dir: Option<&Path>) -> Result<Self> {
        let dir = match data_dir {
            Some(dir) => dir.to_path_buf(),
            None => get_data_dir()?,
        };
        fs::create_dir_all(&dir)
            .with_context(|| format!("Could not create data directory {:?}", dir))?;
        let path = dir.join(QUIZ_FILE_NAME);
        info!("Quiz storage: {:?}", path);
        Ok(FileQuizStore { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl QuizStore for FileQuizStore {
    fn load(&self) -> Result<Option<Quiz>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let quiz = serde_json::from_str(&content)
            .with_context(|| format!("Stored quiz {:?} is corrupted", self.path))?;
        Ok(Some(quiz))
    }

    fn save(&self, quiz: &Quiz) -> Result<()> {
        debug!("Saving quiz {:?} to {:?}", quiz.id, self.path);
        let content = serde_json::to_string(quiz)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Could not write quiz to {:?}", self.path))?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
