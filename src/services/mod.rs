use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod filters;
pub mod lovers;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("form error: {0}")]
    Form(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
