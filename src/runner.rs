use std::fs;

use tracing::info;

use crate::config::ExtractConfig;
use crate::error::{ExtractError, Result};
use crate::extractor::extract_examples;
use crate::formatter::format_example_tests;

/// Extract the examples from the configured document and overwrite the
/// generated test file. Returns the number of examples written.
///
/// The output is rendered completely before the file is touched, so a failed
/// run leaves any previous output in place.
pub fn run(config: &ExtractConfig) -> Result<usize> {
  let readme_path = &config.readme_path;
  let text = fs::read_to_string(readme_path).map_err(|source| ExtractError::ReadFailed {
    path: readme_path.to_path_buf(),
    source,
  })?;

  let examples = extract_examples(&text, &config.language)?;
  let content = format_example_tests(&examples, &config.header);

  let output_path = &config.output_path;
  fs::write(output_path, content).map_err(|source| ExtractError::WriteFailed {
    path: output_path.to_path_buf(),
    source,
  })?;

  info!(
    "extracted {} example(s) from {} into {}",
    examples.len(),
    readme_path.display(),
    output_path.display()
  );

  Ok(examples.len())
}
