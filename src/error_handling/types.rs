use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for contact store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The operation needs an open connection and there is none.
    #[error("Database not connected")]
    NotConnected,

    /// The database file could not be opened or created.
    #[error("Failed to connect: {0}")]
    Connect(#[source] sqlx::Error),

    /// Creating the `contacts` table failed.
    #[error("Failed to create table: {0}")]
    Schema(#[source] sqlx::Error),

    /// First or last name is empty, or an update has no usable id.
    #[error("Invalid contact data")]
    InvalidContact,

    /// Ids are assigned from 1 upwards.
    #[error("Invalid contact ID: {0}")]
    InvalidId(i64),

    /// No row with this id (or no connection to look in).
    #[error("Contact not found: {0}")]
    NotFound(i64),

    /// Any other backend failure, tagged with what was being attempted.
    #[error("Failed to {action}: {source}")]
    Storage {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

/// Error types for the random contact request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// A request is already outstanding; the new call was not started.
    #[error("Network request already in progress")]
    Busy,

    /// Transport failure, including non-success HTTP status.
    #[error("Network error: {0}")]
    Network(String),

    /// The response did not contain a usable contact.
    #[error("{0}")]
    Parse(String),
}

/// Categories shared by all core errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorKind {
    NotConnected,
    ConnectError,
    SchemaError,
    InvalidContact,
    InvalidId,
    NotFound,
    StorageError,
    NetworkError,
    ParseError,
    Busy,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotConnected => "NotConnected",
            ErrorKind::ConnectError => "ConnectError",
            ErrorKind::SchemaError => "SchemaError",
            ErrorKind::InvalidContact => "InvalidContact",
            ErrorKind::InvalidId => "InvalidId",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::StorageError => "StorageError",
            ErrorKind::NetworkError => "NetworkError",
            ErrorKind::ParseError => "ParseError",
            ErrorKind::Busy => "Busy",
        }
    }
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::NotConnected => ErrorKind::NotConnected,
            StoreError::Connect(_) => ErrorKind::ConnectError,
            StoreError::Schema(_) => ErrorKind::SchemaError,
            StoreError::InvalidContact => ErrorKind::InvalidContact,
            StoreError::InvalidId(_) => ErrorKind::InvalidId,
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::Storage { .. } => ErrorKind::StorageError,
        }
    }
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Busy => ErrorKind::Busy,
            FetchError::Network(_) => ErrorKind::NetworkError,
            FetchError::Parse(_) => ErrorKind::ParseError,
        }
    }
}
