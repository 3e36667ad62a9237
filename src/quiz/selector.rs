//! Random quiz question draws without repeats.

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};
use rusqlite::Connection;

use crate::{
    Error,
    category::{CategoryDirectory, CategoryId},
    question::{Question, QuestionId, get_question, get_question_ids},
};

/// Draws quiz questions uniformly at random, skipping questions already asked.
///
/// The IDs of the eligible questions are loaded into memory before drawing,
/// so each draw costs time linear in the number of questions in the category.
#[derive(Debug, Clone, Copy)]
pub struct QuizSelector<'a> {
    connection: &'a Connection,
}

impl<'a> QuizSelector<'a> {
    /// Create a selector that reads from `connection`.
    pub fn new(connection: &'a Connection) -> Self {
        Self { connection }
    }

    /// Draw the next quiz question.
    ///
    /// Only questions in `category_id` are eligible if it is given, and
    /// questions whose IDs are in `previous_question_ids` are never drawn.
    /// Returns `Ok(None)` once every eligible question has been asked.
    ///
    /// # Errors
    ///
    /// Returns [Error::CategoryNotFound] if `category_id` does not refer to a
    /// category.
    pub fn next_question<R>(
        &self,
        category_id: Option<CategoryId>,
        previous_question_ids: &HashSet<QuestionId>,
        rng: &mut R,
    ) -> Result<Option<Question>, Error>
    where
        R: Rng + ?Sized,
    {
        if let Some(category_id) = category_id {
            if !CategoryDirectory::new(self.connection).exists(category_id)? {
                return Err(Error::CategoryNotFound(category_id));
            }
        }

        let eligible_ids: Vec<QuestionId> = get_question_ids(category_id, self.connection)?
            .into_iter()
            .filter(|id| !previous_question_ids.contains(id))
            .collect();

        let Some(&question_id) = eligible_ids.choose(rng) else {
            tracing::debug!(
                "No questions left in category {category_id:?} after {} previous questions",
                previous_question_ids.len()
            );
            return Ok(None);
        };

        get_question(question_id, self.connection).map(Some)
    }
}
