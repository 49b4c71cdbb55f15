//! Error types for the Wordsmith library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordsmithError`] enum. Negative answers such as "word not found" or
//! "no ladder exists" are ordinary return values, not errors; this type is
//! reserved for I/O failures, bad configuration and caller contract
//! violations like inserting an empty word.
//!
//! # Examples
//!
//! ```
//! use wordsmith::error::{WordsmithError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordsmithError::invalid_argument("word must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Wordsmith operations.
#[derive(Error, Debug)]
pub enum WordsmithError {
    /// I/O errors (reading word lists, text files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Text analysis errors (training, scoring)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// A caller passed malformed input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordsmithError.
pub type Result<T> = std::result::Result<T, WordsmithError>;

impl WordsmithError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordsmithError::Analysis(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        WordsmithError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        WordsmithError::InvalidArgument(msg.into())
    }
}
