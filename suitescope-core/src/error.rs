//! Error types for `SuiteScope` core operations
//!
//! Each concern gets its own `thiserror` enum and a `Result` alias. The GUI
//! maps every error that reaches it to a modal warning; the error text is
//! therefore written for end users, not for logs.

use thiserror::Error;

/// Errors from constructing or querying a [`crate::client::SuiteClient`]
#[derive(Debug, Error)]
pub enum ClientError {
    /// The entered hostname is malformed. Recoverable - the user may edit
    /// the address and retry.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The HTTP request itself failed (DNS, TLS, connection refused, ...)
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("Server returned HTTP {status} for {endpoint}")]
    Api {
        /// HTTP status code returned by the server
        status: u16,
        /// Endpoint path that was queried
        endpoint: String,
    },

    /// The response body did not have the expected shape
    #[error("Unexpected response from {endpoint}: {reason}")]
    Parse {
        /// Endpoint path that was queried
        endpoint: String,
        /// What was missing or malformed
        reason: String,
    },
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors from interpreting a table selection
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    /// The selection spans more than one row
    #[error("Please only select one row.")]
    MultipleRows,

    /// The selected row does not expose the expected column
    #[error("Could not find one or both of Name or UUID of resource selected.")]
    MissingField,

    /// Nothing is selected
    #[error("Nothing is selected.")]
    Empty,
}

/// Errors surfaced by the [`crate::browser::Browser`] command handlers
#[derive(Debug, Error)]
pub enum BrowserError {
    /// A client construction or fetch failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The table selection was unusable
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// A command that needs a connection ran before `connect` succeeded
    #[error("Not connected to a server.")]
    NotConnected,

    /// A selector index no longer maps to a known entry
    #[error("Selection is out of date.")]
    StaleSelection,
}

/// Result type for browser operations
pub type BrowserResult<T> = Result<T, BrowserError>;
