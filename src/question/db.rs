//! Database operations for questions.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::CategoryId,
    question::{NewQuestion, Question, QuestionId},
};

/// Store a question and return it with its generated ID.
pub fn insert_question(question: &NewQuestion, connection: &Connection) -> Result<Question, Error> {
    connection.execute(
        "INSERT INTO question (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4);",
        (
            question.question(),
            question.answer(),
            question.category(),
            question.difficulty(),
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Question {
        id,
        question: question.question().to_owned(),
        answer: question.answer().to_owned(),
        category: question.category(),
        difficulty: question.difficulty(),
    })
}

/// Retrieve a single question by ID.
///
/// # Errors
///
/// Returns [Error::QuestionNotFound] if there is no question with `question_id`.
pub fn get_question(question_id: QuestionId, connection: &Connection) -> Result<Question, Error> {
    connection
        .prepare(
            "SELECT id, question, answer, category, difficulty FROM question WHERE id = :id;",
        )?
        .query_row(&[(":id", &question_id)], map_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::QuestionNotFound(question_id),
            error => error.into(),
        })
}

/// Delete a question by ID. Returns an error if the question doesn't exist.
pub fn delete_question(question_id: QuestionId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM question WHERE id = ?1", [question_id])?;

    if rows_affected == 0 {
        return Err(Error::QuestionNotFound(question_id));
    }

    Ok(())
}

/// Count every stored question.
pub fn count_questions(connection: &Connection) -> Result<u64, Error> {
    let count: i64 = connection.query_row("SELECT COUNT(*) FROM question;", [], |row| row.get(0))?;

    Ok(u64::try_from(count).unwrap_or_default())
}

/// Retrieve at most `limit` questions ordered by ID, skipping the first `offset`.
pub fn get_question_page(
    limit: u64,
    offset: u64,
    connection: &Connection,
) -> Result<Vec<Question>, Error> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let offset = i64::try_from(offset).unwrap_or(i64::MAX);

    connection
        .prepare(
            "SELECT id, question, answer, category, difficulty FROM question
            ORDER BY id ASC LIMIT :limit OFFSET :offset;",
        )?
        .query_map(&[(":limit", &limit), (":offset", &offset)], map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Retrieve every question whose text contains `term`, ignoring case.
///
/// Both sides are lowercased with Unicode case mapping, so non-ASCII letters
/// such as 'É' match their lowercase forms.
pub fn search_questions(term: &str, connection: &Connection) -> Result<Vec<Question>, Error> {
    let term = term.to_lowercase();

    let mut questions = Vec::new();
    let mut statement = connection.prepare(
        "SELECT id, question, answer, category, difficulty FROM question ORDER BY id ASC;",
    )?;

    for maybe_question in statement.query_map([], map_row)? {
        let question = maybe_question?;

        if question.question.to_lowercase().contains(&term) {
            questions.push(question);
        }
    }

    Ok(questions)
}

/// Retrieve every question in the category with `category_id`, ordered by ID.
pub fn get_questions_by_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Vec<Question>, Error> {
    connection
        .prepare(
            "SELECT id, question, answer, category, difficulty FROM question
            WHERE category = :category ORDER BY id ASC;",
        )?
        .query_map(&[(":category", &category_id)], map_row)?
        .map(|maybe_question| maybe_question.map_err(|error| error.into()))
        .collect()
}

/// Retrieve the IDs of every question, or only those in `category_id` if given.
pub fn get_question_ids(
    category_id: Option<CategoryId>,
    connection: &Connection,
) -> Result<Vec<QuestionId>, Error> {
    connection
        .prepare(
            "SELECT id FROM question
            WHERE :category IS NULL OR category = :category ORDER BY id ASC;",
        )?
        .query_map(&[(":category", &category_id)], |row| row.get(0))?
        .map(|maybe_id| maybe_id.map_err(|error| error.into()))
        .collect()
}

/// Initialize the question table and indexes.
pub fn create_question_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS question (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL,
            difficulty INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_question_category ON question(category);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Question, rusqlite::Error> {
    Ok(Question {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
        difficulty: row.get(4)?,
    })
}
