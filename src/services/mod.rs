//! Use cases shared by the HTML routes and the JSON API.
//!
//! Services never touch HTTP types. They take their repositories and the
//! signed-in [`SessionUser`] explicitly and return page data or a
//! [`ServiceError`] that routes translate into flash messages and redirects.

use thiserror::Error;

use crate::domain::session::SessionUser;
use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod catalog;
pub mod connections;
pub mod tools;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error("{0}")]
    Form(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Fails with [`ServiceError::Unauthorized`] unless `user` holds `role`.
pub fn ensure_role(user: &SessionUser, role: &str) -> ServiceResult<()> {
    if user.has_role(role) {
        Ok(())
    } else {
        Err(ServiceError::Unauthorized)
    }
}
