//! Quiz play: drawing random questions that have not been asked yet.

mod endpoint;
mod selector;

pub use endpoint::next_quiz_question_endpoint;
pub use selector::QuizSelector;
