use super::json_error_response;
use anyhow::anyhow;
use geoaddr_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        Self::Usecase(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Usecase(err) => match err {
                // The 401 here is a long-standing quirk of the public API
                // that clients depend on, so it stays.
                UsecaseError::NoFields => json_error_response(req, &err, Status::Unauthorized),
                UsecaseError::EmptyField(_) => json_error_response(req, &err, Status::BadRequest),
                UsecaseError::Repo(RepoError::NotFound) => {
                    json_error_response(req, &err, Status::NotFound)
                }
                UsecaseError::Repo(_) => {
                    error!("Error: {err}");
                    Err(Status::InternalServerError)
                }
            },
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
