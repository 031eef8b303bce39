use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use unidecode::unidecode;

lazy_static! {
    static ref FORBIDDEN_SLUG_CHARACTERS_REGEX: Regex = Regex::new("[^\\sa-z0-9-]").unwrap();
    static ref WHITESPACE_REGEX: Regex = Regex::new("\\s+").unwrap();
}

/// Turns free text into an identifier made of lowercase ascii words joined
/// by dashes. Returns an empty string when nothing usable is left.
pub fn slugify(text: &str) -> String {
    let text = unidecode(text);
    let text: String = FORBIDDEN_SLUG_CHARACTERS_REGEX
        .replace_all(&text.to_lowercase(), "")
        .into();
    WHITESPACE_REGEX.replace_all(text.trim(), "-").into()
}

fn bool_from_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match String::deserialize(deserializer)?
        .trim()
        .to_lowercase()
        .as_ref()
    {
        "true" | "yes" | "x" => Ok(true),
        "false" | "no" | "" => Ok(false),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"true, false or blank",
        )),
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: String,
    pub answer: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Question {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub question: String,
    pub answers: Vec<Answer>,
}

impl Question {
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.is_correct)
    }

    pub fn is_answer_correct(&self, answer_id: &str) -> bool {
        self.correct_answer()
            .map(|a| a.id == answer_id)
            .unwrap_or(false)
    }
}

/// One spreadsheet row. Consecutive rows sharing the same `question` make up
/// a single question.
#[derive(Debug, Deserialize, PartialEq)]
pub struct RawAnswer {
    pub question: String,
    pub image: Option<String>,
    pub answer: String,
    #[serde(deserialize_with = "bool_from_string")]
    pub is_correct: bool,
}

impl Question {
    /// Builds the `number`th question (1-based) out of its spreadsheet rows.
    pub fn from_rows(number: usize, rows: Vec<RawAnswer>) -> Question {
        let text = rows
            .first()
            .map(|r| r.question.clone())
            .unwrap_or_default();
        let image = rows
            .iter()
            .filter_map(|r| r.image.clone())
            .find(|i| !i.trim().is_empty());
        let answers = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| Answer {
                id: format!("{}-{}", index + 1, slugify(&row.answer)),
                answer: row.answer,
                is_correct: row.is_correct,
            })
            .collect();

        Question {
            id: format!("{}-{}", number, slugify(&text)),
            image,
            question: text,
            answers,
        }
    }
}
