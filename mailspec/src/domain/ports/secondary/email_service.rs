/// Interface to a service for sending email.
///
/// The application's mailer is built on top of an implementation of this
/// trait, so that acceptance tests can substitute a capturing fake for the
/// real delivery service.
use async_trait::async_trait;
use common::err_context::ErrorContext;
use std::fmt;

use crate::domain::Email;

#[cfg(test)]
use mockall::predicate::*;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailService {
    async fn send_email(&self, email: Email) -> Result<(), Error>;
}

#[derive(Debug)]
pub enum Error {
    /// The email could not be handed over to the delivery service.
    Delivery { context: String },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Delivery { context } => {
                write!(fmt, "Email Delivery: {context}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<ErrorContext<Error>> for Error {
    fn from(err: ErrorContext<Error>) -> Self {
        match err.1 {
            Error::Delivery { context } => Error::Delivery {
                context: format!("{}: {context}", err.0),
            },
        }
    }
}
