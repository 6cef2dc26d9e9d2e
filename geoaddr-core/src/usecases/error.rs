use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The field '{0}' must not be empty")]
    EmptyField(&'static str),
    #[error("No fields to update")]
    NoFields,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
