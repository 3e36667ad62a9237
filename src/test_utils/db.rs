use rusqlite::Connection;

use crate::{
    AppState, Category, CategoryName, NewQuestion, Question, ResultPolicy, create_category,
    initialize_db, insert_question,
};

/// An in-memory database with every table created.
pub(crate) fn get_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize_db(&connection).expect("Could not initialize database");
    connection
}

/// App state backed by an empty in-memory database.
pub(crate) fn get_test_state() -> AppState {
    AppState::new(get_test_connection(), ResultPolicy::Strict)
        .expect("Could not create app state")
}

/// Create a category for each name, in order.
#[track_caller]
pub(crate) fn seed_categories(connection: &Connection, names: &[&str]) -> Vec<Category> {
    names
        .iter()
        .map(|name| {
            create_category(CategoryName::new_unchecked(name), connection)
                .expect("Could not create test category")
        })
        .collect()
}

/// Create `count` questions in `category_id`, in ID order.
#[track_caller]
pub(crate) fn seed_questions(
    connection: &Connection,
    category_id: i64,
    count: usize,
) -> Vec<Question> {
    (1..=count)
        .map(|i| {
            let new_question = NewQuestion::new(
                &format!("Question {i} in category {category_id}?"),
                &format!("Answer {i}"),
                category_id,
                (i % 5 + 1) as i64,
            )
            .expect("Could not create test question");

            insert_question(&new_question, connection).expect("Could not insert test question")
        })
        .collect()
}
