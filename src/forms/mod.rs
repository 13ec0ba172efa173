//! Form definitions backing the site and admin routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod auth;
pub mod tools;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid email address")]
    InvalidEmail,

    #[error("invalid {0}")]
    InvalidOption(&'static str),

    #[error("{0} must be a whole number")]
    InvalidNumber(&'static str),
}
