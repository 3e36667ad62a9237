//! Core question domain types.

use serde::{Deserialize, Serialize};

use crate::{Error, category::CategoryId, id_param::IdParam};

/// Database identifier for a question.
pub type QuestionId = i64;

/// How hard a question is, conventionally from 1 to 5.
pub type Difficulty = i64;

/// A trivia question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub struct Question {
    /// The ID of the question.
    pub id: QuestionId,
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// The ID of the category the question belongs to.
    pub category: CategoryId,
    /// How hard the question is.
    pub difficulty: Difficulty,
}

/// A validated question that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    question: String,
    answer: String,
    category: CategoryId,
    difficulty: Difficulty,
}

impl NewQuestion {
    /// Create a new question.
    ///
    /// The category is not checked against the stored categories.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::MissingFields] if `question` or
    /// `answer` is empty or just whitespace, or if `category` or `difficulty`
    /// is zero.
    pub fn new(
        question: &str,
        answer: &str,
        category: CategoryId,
        difficulty: Difficulty,
    ) -> Result<Self, Error> {
        let question = question.trim();
        let answer = answer.trim();

        if question.is_empty() || answer.is_empty() || category == 0 || difficulty == 0 {
            return Err(Error::MissingFields);
        }

        Ok(Self {
            question: question.to_owned(),
            answer: answer.to_owned(),
            category,
            difficulty,
        })
    }

    /// The question text.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The answer text.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// The ID of the category the question belongs to.
    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// How hard the question is.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// The JSON body for creating a question.
///
/// Every field is optional so that missing fields are reported as
/// [Error::MissingFields] rather than as a malformed body.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct NewQuestionForm {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<IdParam>,
    #[serde(default)]
    pub difficulty: Option<IdParam>,
}

impl TryFrom<NewQuestionForm> for NewQuestion {
    type Error = Error;

    fn try_from(form: NewQuestionForm) -> Result<Self, Self::Error> {
        let (Some(question), Some(answer), Some(category), Some(difficulty)) = (
            form.question,
            form.answer,
            form.category.as_ref().and_then(IdParam::to_integer),
            form.difficulty.as_ref().and_then(IdParam::to_integer),
        ) else {
            return Err(Error::MissingFields);
        };

        NewQuestion::new(&question, &answer, category, difficulty)
    }
}
