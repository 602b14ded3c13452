//! The module contains the error the engine can throw.
//!
//! The only error is [`InvalidEntry`], thrown when an entry is built with a
//! negative unit price or a quantity below one. Every other engine operation
//! is total.
//!
//!  [`InvalidEntry`]: EngineError::InvalidEntry
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
}
