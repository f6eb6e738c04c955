//! Error types shared by the rule chain and the reconciliation entry points.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No rule in the chain recognized the string. Carries the raw input.
    #[error("could not parse date \"{input}\"")]
    UnknownDateFormat { input: String },

    /// Bad construction parameters or a misuse of a single-value entry point.
    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
