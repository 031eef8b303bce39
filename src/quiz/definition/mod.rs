use anyhow::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub mod question;

pub use question::{slugify, Answer, Question, RawAnswer};


/// A quiz along with the progress of whoever is taking it. This is the blob
/// kept in storage.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub questions: Vec<Question>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_question_index: Option<usize>,
    /// Question id to answer id.
    #[serde(default)]
    pub user_answers: BTreeMap<String, String>,
}

impl Quiz {
    pub fn open(source: &Path) -> Result<Quiz> {
        let extension = source
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let quiz = match extension.as_str() {
            "json" => Quiz::from_json_file(source)?,
            "csv" => Quiz::from_csv_file(source)?,
            _ => {
                return Err(anyhow!(
                    "Unsupported quiz file {:?}, expected .json or .csv",
                    source
                ))
            }
        };
        quiz.validate()?;
        Ok(quiz)
    }

    fn from_json_file(source: &Path) -> Result<Quiz> {
        let file = File::open(source)?;
        let quiz = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse quiz JSON in {:?}", source))?;
        Ok(quiz)
    }

    fn from_csv_file(source: &Path) -> Result<Quiz> {
        let file = File::open(source)?;
        let mut csv_reader = csv::Reader::from_reader(file);
        let mut rows = Vec::new();
        for row in csv_reader.deserialize() {
            let row: RawAnswer = row?;
            rows.push(row);
        }

        let title = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Quiz::from_rows(&title, rows))
    }

    pub fn from_rows(title: &str, rows: Vec<RawAnswer>) -> Quiz {
        let questions = rows
            .into_iter()
            .group_by(|row| row.question.clone())
            .into_iter()
            .map(|(_text, rows)| rows.collect::<Vec<_>>())
            .enumerate()
            .map(|(index, rows)| Question::from_rows(index + 1, rows))
            .collect();

        Quiz {
            id: slugify(title),
            title: title.to_owned(),
            questions,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.questions.is_empty() {
            return Err(anyhow!("Quiz {:?} has no questions", self.title));
        }

        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(anyhow!("Duplicate question id {:?}", question.id));
            }
            if question.answers.is_empty() {
                return Err(anyhow!("Question {:?} has no answers", question.question));
            }
            let answer_ids: HashSet<&str> =
                question.answers.iter().map(|a| a.id.as_str()).collect();
            if answer_ids.len() != question.answers.len() {
                return Err(anyhow!(
                    "Question {:?} has duplicate answer ids",
                    question.question
                ));
            }
        }

        Ok(())
    }

    /// Forgets all recorded answers.
    pub fn reset_progress(&mut self) {
        self.current_question_index = None;
        self.user_answers.clear();
    }
}
