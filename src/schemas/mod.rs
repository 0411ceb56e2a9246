//! Wire request/response types.
//!
//! Handlers stay thin by mapping store records into these serde types; the
//! field layout here is the compatibility contract with the existing
//! frontend and must not change shape casually.

pub mod categories;
pub mod questions;
pub mod quizzes;
