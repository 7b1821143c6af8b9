//! Error taxonomy shared by the store, the validators, the codec and the flows.
use std::path::PathBuf;
use thiserror::Error;

/// Filesystem failures raised by the collection store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Something went wrong reading the collections directory {}. Does it exist?", .path.display())]
    DirectoryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Something went wrong creating the collection file {}", .path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error ingesting data from collection {}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Something happened trying to write a log to {}", .path.display())]
    AppendFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Rejected user input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Message cannot contain {0:?}")]
    ForbiddenCharacter(char),

    #[error("Collection name cannot be empty")]
    EmptyName,

    #[error("Collection name '{0}' is not a safe file name")]
    UnsafeName(String),

    #[error("A collection named '{0}' already exists")]
    DuplicateName(String),

    #[error("There is no collection named '{0}'")]
    UnknownCollection(String),

    #[error("'{0}' is not a data point type (expected Signal or Event)")]
    UnknownKind(String),

    #[error("'{0}' is not a visualisation type")]
    UnknownVisualisation(String),
}

/// A stored line that does not follow `KIND|timestamp|message`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: expected 3 fields separated by '|', found {found}")]
    MissingField { line: usize, found: usize },

    #[error("line {line}: unknown entry kind '{kind}'")]
    UnknownKind { line: usize, kind: String },

    #[error("line {line}: invalid timestamp '{value}'")]
    InvalidTimestamp { line: usize, value: String },
}

/// Failures of the interactive prompt.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Prompt cancelled")]
    Cancelled,

    #[error("No answer was given for '{0}'")]
    MissingAnswer(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Everything a flow can fail with.
#[derive(Debug, Error)]
pub enum SignalsError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Collection is malformed")]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Prompt(#[from] PromptError),
}

pub type Result<T, E = SignalsError> = std::result::Result<T, E>;
