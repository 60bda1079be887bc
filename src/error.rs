use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while extracting README examples
#[derive(Error, Debug)]
pub enum ExtractError {
  #[error("Could not find \"## Example\" header in document")]
  MissingSection,

  #[error("Unexpected language {language:?} for code block at line {line}")]
  UnexpectedLanguage { language: String, line: usize },

  #[error("Could not find end of code block opened at line {line}")]
  UnterminatedBlock { line: usize },

  #[error("Failed to read document: {path}")]
  ReadFailed {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Failed to write generated tests: {path}")]
  WriteFailed {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Regex error: {0}")]
  Regex(#[from] regex::Error),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
