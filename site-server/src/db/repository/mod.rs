//! Repository Module
//!
//! Free-function CRUD per table over `&SqlitePool`. Reads that feed the
//! public page always order by `(sort_order, id)` — the id is the explicit
//! tie-break so two rows sharing a rank render deterministically.

pub mod admin_user;
pub mod config;
pub mod faq_item;
pub mod gallery_photo;
pub mod service_item;
pub mod specialty;
pub mod testimonial;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
