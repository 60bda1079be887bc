use std::path::PathBuf;

use crate::extractor::DEFAULT_LANGUAGE;
use crate::formatter::GENERATED_FILE_HEADER;

/// Where examples are read from and written to
#[derive(Debug, Clone)]
pub struct ExtractConfig {
  /// Documentation file scanned for examples
  pub readme_path: PathBuf,
  /// Generated test file, overwritten on every run
  pub output_path: PathBuf,
  /// Language tag accepted on code blocks
  pub language: String,
  /// Lines written verbatim at the top of the generated file
  pub header: Vec<String>,
}

impl ExtractConfig {
  /// Create a config with the default language and header
  pub fn new(readme_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
    Self {
      readme_path: readme_path.into(),
      output_path: output_path.into(),
      language: DEFAULT_LANGUAGE.to_string(),
      header: GENERATED_FILE_HEADER.iter().map(|s| s.to_string()).collect(),
    }
  }

  pub fn with_language(mut self, language: &str) -> Self {
    self.language = language.to_string();
    self
  }

  pub fn with_header<S: AsRef<str>>(mut self, header: &[S]) -> Self {
    self.header = header.iter().map(|s| s.as_ref().to_string()).collect();
    self
  }
}

impl Default for ExtractConfig {
  fn default() -> Self {
    Self::new("README.md", "tests/readme.rs")
  }
}
