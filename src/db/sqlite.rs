//! SQLite implementation of [`CategoryStore`] and [`QuestionStore`].
//!
//! Uses [`sqlx`] with the `sqlite` feature. Migrations are run automatically
//! on startup via [`SqliteStore::connect`].
//!
//! # Migrations path
//!
//! `sqlx::migrate!("./migrations")` resolves the path **at compile time**
//! relative to `CARGO_MANIFEST_DIR` (the crate root), so the directory is
//! embedded into the binary. The database file location is determined at
//! runtime by the `TRIVIA_DATABASE_URL` environment variable and is **not**
//! related to the current working directory at runtime.
//!
//! # Queries
//!
//! The `sqlx::query` (runtime-verified) form is used deliberately so that no
//! `DATABASE_URL` environment variable is needed at compile time.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use super::{CategoryRecord, CategoryStore, NewQuestion, QuestionRecord, QuestionStore};

type QuestionRow = (i64, String, String, i64, i64);

fn to_question((id, question, answer, category, difficulty): QuestionRow) -> QuestionRecord {
    QuestionRecord { id, question, answer, category, difficulty }
}

/// Escape `LIKE` wildcards so the search term matches as a literal substring,
/// then wrap it for containment. Pairs with `ESCAPE '\'` in the query.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// SQLite-backed trivia store.
#[derive(Clone, Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the SQLite database at `url` and run pending
    /// migrations.
    ///
    /// `url` should be a sqlx-compatible SQLite URL, e.g.
    /// `"sqlite://trivia.db"`. The database file is created if missing so a
    /// fresh deployment boots without manual setup.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        // Path is resolved relative to CARGO_MANIFEST_DIR at compile time.
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }

    /// In-memory database on a single-connection pool. A pooled `:memory:`
    /// URL would otherwise hand each connection its own empty database.
    #[cfg(test)]
    pub async fn connect_in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        sqlx::migrate!("./migrations").run(&pool).await?;
        Ok(Self { pool })
    }
}

impl CategoryStore for SqliteStore {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, sqlx::Error> {
        let rows: Vec<(i64, String)> =
            sqlx::query_as("SELECT id, type FROM categories ORDER BY id ASC")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows
            .into_iter()
            .map(|(id, kind)| CategoryRecord { id, kind })
            .collect())
    }

    async fn get_category(&self, id: i64) -> Result<Option<CategoryRecord>, sqlx::Error> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT id, type FROM categories WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(id, kind)| CategoryRecord { id, kind }))
    }
}

impl QuestionStore for SqliteStore {
    async fn list_questions(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<QuestionRecord>, sqlx::Error> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty \
             FROM questions ORDER BY id ASC LIMIT ?1 OFFSET ?2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(to_question).collect())
    }

    async fn count_questions(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn list_questions_by_category(
        &self,
        category: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<QuestionRecord>, sqlx::Error> {
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty \
             FROM questions WHERE category = ?1 ORDER BY id ASC LIMIT ?2 OFFSET ?3",
        )
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(to_question).collect())
    }

    async fn count_questions_by_category(&self, category: i64) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM questions WHERE category = ?1")
                .bind(category)
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<QuestionRecord>, sqlx::Error> {
        // SQLite LIKE is case-insensitive for ASCII. An empty term yields
        // '%%', i.e. every question.
        let rows: Vec<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty \
             FROM questions WHERE question LIKE ?1 ESCAPE '\\' ORDER BY id ASC",
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(to_question).collect())
    }

    async fn find_question_by_text(
        &self,
        text: &str,
    ) -> Result<Option<QuestionRecord>, sqlx::Error> {
        let row: Option<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty \
             FROM questions WHERE question = ?1 LIMIT 1",
        )
        .bind(text)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(to_question))
    }

    async fn get_question(&self, id: i64) -> Result<Option<QuestionRecord>, sqlx::Error> {
        let row: Option<QuestionRow> = sqlx::query_as(
            "SELECT id, question, answer, category, difficulty \
             FROM questions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(to_question))
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<QuestionRecord, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?;
        Ok(QuestionRecord {
            id: result.last_insert_rowid(),
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        })
    }

    async fn delete_question(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn questions_in_play(
        &self,
        category_filter: i64,
    ) -> Result<Vec<QuestionRecord>, sqlx::Error> {
        let rows: Vec<QuestionRow> = if category_filter == 0 {
            sqlx::query_as(
                "SELECT id, question, answer, category, difficulty \
                 FROM questions ORDER BY id ASC",
            )
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query_as(
                "SELECT id, question, answer, category, difficulty \
                 FROM questions WHERE category = ?1 ORDER BY id ASC",
            )
            .bind(category_filter)
            .fetch_all(&self.pool)
            .await?
        };
        Ok(rows.into_iter().map(to_question).collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    async fn seeded_store() -> SqliteStore {
        let store = SqliteStore::connect_in_memory().await.expect("connect");
        for (question, answer, category, difficulty) in [
            ("What is the chemical symbol for gold?", "Au", 1, 2),
            ("Which planet is closest to the sun?", "Mercury", 1, 1),
            ("Who painted the Mona Lisa?", "Leonardo da Vinci", 2, 2),
        ] {
            store
                .insert_question(NewQuestion {
                    question: question.to_owned(),
                    answer: answer.to_owned(),
                    category,
                    difficulty,
                })
                .await
                .expect("insert");
        }
        store
    }

    #[tokio::test]
    async fn migrations_seed_the_six_categories() {
        let store = SqliteStore::connect_in_memory().await.unwrap();
        let cats = store.list_categories().await.unwrap();
        assert_eq!(cats.len(), 6);
        assert_eq!(cats[0].kind, "Science");
        assert_eq!(cats[5].kind, "Sports");
        // Ascending by id.
        assert!(cats.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn get_category_hit_and_miss() {
        let store = SqliteStore::connect_in_memory().await.unwrap();
        let art = store.get_category(2).await.unwrap().unwrap();
        assert_eq!(art.kind, "Art");
        assert!(store.get_category(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_assigns_id_and_roundtrips() {
        let store = SqliteStore::connect_in_memory().await.unwrap();
        let created = store
            .insert_question(NewQuestion {
                question: "What is the heaviest organ in the human body?".to_owned(),
                answer: "The liver".to_owned(),
                category: 1,
                difficulty: 4,
            })
            .await
            .unwrap();
        assert!(created.id > 0);
        let fetched = store.get_question(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn pagination_window_and_count_agree() {
        let store = seeded_store().await;
        assert_eq!(store.count_questions().await.unwrap(), 3);

        let first_two = store.list_questions(2, 0).await.unwrap();
        assert_eq!(first_two.len(), 2);
        assert!(first_two[0].id < first_two[1].id);

        let rest = store.list_questions(2, 2).await.unwrap();
        assert_eq!(rest.len(), 1);

        // Window past the end is empty, not an error.
        assert!(store.list_questions(10, 100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn category_filter_restricts_listing_and_count() {
        let store = seeded_store().await;
        let science = store.list_questions_by_category(1, 10, 0).await.unwrap();
        assert_eq!(science.len(), 2);
        assert!(science.iter().all(|q| q.category == 1));
        assert_eq!(store.count_questions_by_category(1).await.unwrap(), 2);
        assert_eq!(store.count_questions_by_category(2).await.unwrap(), 1);
        assert_eq!(store.count_questions_by_category(6).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let store = seeded_store().await;
        let hits = store.search_questions("MONA LISA").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].answer, "Leonardo da Vinci");
        assert!(store.search_questions("nonexistent").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_search_term_returns_everything() {
        let store = seeded_store().await;
        assert_eq!(store.search_questions("").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn search_treats_wildcards_literally() {
        let store = seeded_store().await;
        // '%' appears in no question text, so it must match nothing instead
        // of acting as a LIKE wildcard.
        assert!(store.search_questions("%").await.unwrap().is_empty());
        assert!(store.search_questions("_").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_probe_matches_exact_text_only() {
        let store = seeded_store().await;
        let hit = store
            .find_question_by_text("Who painted the Mona Lisa?")
            .await
            .unwrap();
        assert!(hit.is_some());
        let miss = store.find_question_by_text("Who painted the Mona").await.unwrap();
        assert!(miss.is_none());
    }

    #[tokio::test]
    async fn delete_reports_rows_affected() {
        let store = seeded_store().await;
        let victim = store.list_questions(1, 0).await.unwrap().remove(0);
        assert_eq!(store.delete_question(victim.id).await.unwrap(), 1);
        assert!(store.get_question(victim.id).await.unwrap().is_none());
        assert_eq!(store.delete_question(victim.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn quiz_pool_respects_category_filter() {
        let store = seeded_store().await;
        assert_eq!(store.questions_in_play(0).await.unwrap().len(), 3);
        let art_only = store.questions_in_play(2).await.unwrap();
        assert_eq!(art_only.len(), 1);
        assert!(art_only.iter().all(|q| q.category == 2));
    }
}
