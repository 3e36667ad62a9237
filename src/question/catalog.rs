//! Listing, searching, creating and deleting questions.

use std::collections::BTreeMap;

use rusqlite::Connection;

use crate::{
    Error, ResultPolicy,
    category::{Category, CategoryDirectory, CategoryId, CategoryName},
    pagination::{QUESTIONS_PER_PAGE, page_count, page_offset},
    question::{
        NewQuestion, Question, QuestionId,
        db::{
            count_questions, delete_question, get_question_page, get_questions_by_category,
            insert_question, search_questions,
        },
    },
};

/// One page of the question list.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPage {
    /// The questions on the page, ordered by ID.
    pub questions: Vec<Question>,
    /// The number of questions across all pages.
    pub total_questions: u64,
    /// The number of pages needed to show every question.
    pub total_pages: u64,
    /// The name of every category, keyed by ID.
    pub categories: BTreeMap<CategoryId, CategoryName>,
}

/// The questions in a single category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryQuestions {
    /// The category the questions belong to.
    pub category: Category,
    /// The questions in the category, ordered by ID.
    pub questions: Vec<Question>,
}

/// Lists, searches, creates and deletes questions.
///
/// The catalog borrows a database connection for the duration of one request.
#[derive(Debug, Clone, Copy)]
pub struct QuestionCatalog<'a> {
    connection: &'a Connection,
    page_size: u64,
    policy: ResultPolicy,
}

impl<'a> QuestionCatalog<'a> {
    /// Create a catalog with [QUESTIONS_PER_PAGE] questions per page and the
    /// strict result policy.
    pub fn new(connection: &'a Connection) -> Self {
        Self {
            connection,
            page_size: QUESTIONS_PER_PAGE,
            policy: ResultPolicy::Strict,
        }
    }

    /// Use `page_size` questions per page.
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Use `policy` for out-of-range pages and empty searches.
    pub fn with_policy(mut self, policy: ResultPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Get the 1-indexed `page` of questions along with the totals and the category names.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidPage] if `page` is zero. Under the strict policy
    /// it is also returned for a page past the last page, unless there are no
    /// questions at all.
    pub fn list(&self, page: u64) -> Result<QuestionPage, Error> {
        if page == 0 {
            return Err(Error::InvalidPage(page));
        }

        let total_questions = count_questions(self.connection)?;
        let total_pages = page_count(total_questions, self.page_size);

        if self.policy == ResultPolicy::Strict && total_pages > 0 && page > total_pages {
            return Err(Error::InvalidPage(page));
        }

        let questions = get_question_page(
            self.page_size,
            page_offset(page, self.page_size),
            self.connection,
        )?;
        let categories = CategoryDirectory::new(self.connection).all()?;

        Ok(QuestionPage {
            questions,
            total_questions,
            total_pages,
            categories,
        })
    }

    /// Get every question whose text contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Under the strict policy, returns [Error::NoMatchingQuestions] if no
    /// question matches.
    pub fn search(&self, term: &str) -> Result<Vec<Question>, Error> {
        let questions = search_questions(term, self.connection)?;

        if questions.is_empty() && self.policy == ResultPolicy::Strict {
            return Err(Error::NoMatchingQuestions(term.to_owned()));
        }

        Ok(questions)
    }

    /// Get every question in the category with `category_id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::CategoryNotFound] if the category does not exist. A
    /// category without questions is not an error.
    pub fn list_by_category(&self, category_id: CategoryId) -> Result<CategoryQuestions, Error> {
        let name = CategoryDirectory::new(self.connection)
            .name_of(category_id)?
            .ok_or(Error::CategoryNotFound(category_id))?;
        let category = Category {
            id: category_id,
            name,
        };
        let questions = get_questions_by_category(category_id, self.connection)?;

        Ok(CategoryQuestions {
            category,
            questions,
        })
    }

    /// Store a new question and return it with its assigned ID.
    pub fn add(&self, question: &NewQuestion) -> Result<Question, Error> {
        let question = insert_question(question, self.connection)?;
        tracing::info!("Created question {}", question.id);

        Ok(question)
    }

    /// Delete the question with `question_id`.
    ///
    /// # Errors
    ///
    /// Returns [Error::QuestionNotFound] if there is no such question,
    /// including when it has already been deleted.
    pub fn delete(&self, question_id: QuestionId) -> Result<(), Error> {
        delete_question(question_id, self.connection)?;
        tracing::info!("Deleted question {question_id}");

        Ok(())
    }
}
