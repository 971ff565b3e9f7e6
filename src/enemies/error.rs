//! Error types for species data loading.

use thiserror::Error;

/// Errors that can occur when loading a species definition file.
#[derive(Debug, Error)]
pub enum SpeciesLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },
}
