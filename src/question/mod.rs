//! Trivia questions: storage, the question catalog and its endpoints.

mod by_category;
mod catalog;
mod create;
mod db;
mod delete;
mod domain;
mod list;
mod search;
mod state;

pub use by_category::get_category_questions_endpoint;
pub use catalog::{CategoryQuestions, QuestionCatalog, QuestionPage};
pub use create::create_question_endpoint;
pub use db::{create_question_table, get_question, get_question_ids, insert_question};
pub use delete::delete_question_endpoint;
pub use domain::{NewQuestion, Question, QuestionId};
pub use list::get_questions_endpoint;
pub use search::search_questions_endpoint;
