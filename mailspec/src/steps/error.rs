use std::fmt;

/// Reasons a step fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The step refers to "the email" but no previous step matched one.
    /// The scenario itself is malformed.
    Precondition { context: String },
    /// The expectation of the step does not hold.
    Assertion { context: String },
    /// No step definition matches the step text.
    Undefined { context: String },
    /// The step expects a data table.
    Table { context: String },
}

impl Error {
    pub fn assertion(context: impl Into<String>) -> Self {
        Error::Assertion {
            context: context.into(),
        }
    }

    pub(crate) fn no_matched_email() -> Self {
        Error::Precondition {
            context: "No matched email found from previous step".to_string(),
        }
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, Error::Precondition { .. })
    }

    pub fn is_assertion(&self) -> bool {
        matches!(self, Error::Assertion { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Precondition { context } => {
                write!(fmt, "Scenario Logic Error: {context}")
            }
            Error::Assertion { context } => {
                write!(fmt, "Assertion Failed: {context}")
            }
            Error::Undefined { context } => {
                write!(fmt, "Undefined Step: {context}")
            }
            Error::Table { context } => {
                write!(fmt, "Data Table: {context}")
            }
        }
    }
}

impl std::error::Error for Error {}
