use crate::values::ValidationError;
use thiserror::Error;

/// Coarse classification of a [`TutzError`], for callers that branch on the
/// kind of failure rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    UnknownCommand,
    InvalidFormat,
    NotFound,
    DuplicateIdentity,
    NoFieldsEdited,
    Storage,
    Config,
}

/// Which stage of parsing rejected the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnknownCommand,
    InvalidFormat,
}

#[derive(Error, Debug)]
pub enum TutzError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{message}")]
    Parse {
        kind: ParseErrorKind,
        message: String,
    },

    #[error("Tutorial not found: {0}")]
    TutorialNotFound(String),

    #[error("A tutorial with id {0} already exists")]
    DuplicateTutorial(String),

    #[error("At least one field to edit must be provided")]
    NoFieldsEdited,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TutzError {
    pub fn unknown_command(keyword: &str) -> Self {
        TutzError::Parse {
            kind: ParseErrorKind::UnknownCommand,
            message: format!("Unknown command: {}", keyword),
        }
    }

    /// A malformed-argument failure for a recognized command, carrying its usage.
    pub fn invalid_format(usage: &str) -> Self {
        TutzError::Parse {
            kind: ParseErrorKind::InvalidFormat,
            message: format!("Invalid command format!\n{}", usage),
        }
    }

    pub fn invalid_format_with(reason: impl std::fmt::Display, usage: &str) -> Self {
        TutzError::Parse {
            kind: ParseErrorKind::InvalidFormat,
            message: format!("Invalid command format: {}\n{}", reason, usage),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TutzError::Validation(_) => ErrorKind::Validation,
            TutzError::Parse {
                kind: ParseErrorKind::UnknownCommand,
                ..
            } => ErrorKind::UnknownCommand,
            TutzError::Parse {
                kind: ParseErrorKind::InvalidFormat,
                ..
            } => ErrorKind::InvalidFormat,
            TutzError::TutorialNotFound(_) => ErrorKind::NotFound,
            TutzError::DuplicateTutorial(_) => ErrorKind::DuplicateIdentity,
            TutzError::NoFieldsEdited => ErrorKind::NoFieldsEdited,
            TutzError::Io(_) | TutzError::Serialization(_) | TutzError::Store(_) => {
                ErrorKind::Storage
            }
            TutzError::Config(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, TutzError>;
