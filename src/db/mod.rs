//! Database abstraction layer.
//!
//! [`CategoryStore`] and [`QuestionStore`] define the interface the handlers
//! talk to. The default implementation is [`sqlite::SqliteStore`]. To swap to
//! another database (Postgres, MySQL, …), implement both traits for your new
//! type and change the concrete type in [`crate::state::AppState`].
//!
//! All trait methods use `impl Future` in their signatures (stable since Rust
//! 1.75) so no extra `async-trait` crate is required.

pub mod sqlite;

use std::future::Future;

/// A row in the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub id: i64,
    /// Display label, e.g. `"Science"`. Serialized as `type` on the wire.
    pub kind: String,
}

/// A row in the `questions` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
    /// Foreign key into `categories.id`. Not enforced at this layer.
    pub category: i64,
    pub difficulty: i64,
}

/// Field values for a question about to be inserted.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Read access to the (small, fixed) category set.
pub trait CategoryStore: Send + Sync + 'static {
    /// All categories, ascending by id. The set is small enough that no
    /// pagination is offered.
    fn list_categories(
        &self,
    ) -> impl Future<Output = Result<Vec<CategoryRecord>, sqlx::Error>> + Send;

    /// Resolve one category by id.
    fn get_category(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<CategoryRecord>, sqlx::Error>> + Send;
}

/// Query and mutation access to the question set.
pub trait QuestionStore: Send + Sync + 'static {
    /// One pagination window of questions, ascending by id.
    fn list_questions(
        &self,
        limit: i64,
        offset: i64,
    ) -> impl Future<Output = Result<Vec<QuestionRecord>, sqlx::Error>> + Send;

    /// Total unfiltered question count.
    fn count_questions(&self) -> impl Future<Output = Result<i64, sqlx::Error>> + Send;

    /// One pagination window of a single category's questions, ascending by id.
    fn list_questions_by_category(
        &self,
        category: i64,
        limit: i64,
        offset: i64,
    ) -> impl Future<Output = Result<Vec<QuestionRecord>, sqlx::Error>> + Send;

    /// Total question count within one category.
    fn count_questions_by_category(
        &self,
        category: i64,
    ) -> impl Future<Output = Result<i64, sqlx::Error>> + Send;

    /// Case-insensitive substring match on the question text. An empty term
    /// matches every question.
    fn search_questions(
        &self,
        term: &str,
    ) -> impl Future<Output = Result<Vec<QuestionRecord>, sqlx::Error>> + Send;

    /// Exact-text probe used for best-effort duplicate rejection.
    fn find_question_by_text(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Option<QuestionRecord>, sqlx::Error>> + Send;

    /// Fetch one question by id.
    fn get_question(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<QuestionRecord>, sqlx::Error>> + Send;

    /// Insert a question and return the stored row (with its assigned id).
    fn insert_question(
        &self,
        new: NewQuestion,
    ) -> impl Future<Output = Result<QuestionRecord, sqlx::Error>> + Send;

    /// Delete one question. Returns the number of rows removed (0 or 1).
    fn delete_question(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<u64, sqlx::Error>> + Send;

    /// The quiz candidate pool: every question, or every question in one
    /// category when `category_filter` is non-zero.
    fn questions_in_play(
        &self,
        category_filter: i64,
    ) -> impl Future<Output = Result<Vec<QuestionRecord>, sqlx::Error>> + Send;
}
