use regex::Regex;
use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::utils::{line_number_at, next_line_start};

/// Language tag accepted on example code blocks unless configured otherwise
pub const DEFAULT_LANGUAGE: &str = "rust";

const EXAMPLE_HEADING_PATTERN: &str = r"(?im)^\s*#+\s*examples?";
const CODE_BEGIN_PATTERN: &str = r"(?m)^```(\w+)?[^\S\n]*$";
const CODE_END_PATTERN: &str = r"(?m)^```[^\S\n]*$";

/// A fenced code block found in the example section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock<'a> {
  /// Language named on the opening fence, if any
  pub language: Option<&'a str>,
  /// Trimmed contents of the block
  pub code: &'a str,
  /// 1-based line of the opening fence
  pub line: usize,
}

/// Find the example heading and return the byte offset right after it
pub fn find_example_section(text: &str) -> Result<usize> {
  let heading = Regex::new(EXAMPLE_HEADING_PATTERN).map_err(ExtractError::Regex)?;
  heading
    .find(text)
    .map(|m| m.end())
    .ok_or(ExtractError::MissingSection)
}

/// Iterator over the code blocks following the example heading.
///
/// Yields blocks in document order. The first error ends the iteration.
pub struct CodeBlocks<'a> {
  text: &'a str,
  expected_language: &'a str,
  begin_pattern: Regex,
  end_pattern: Regex,
  /// Where the search for the next opening fence starts
  cursor: usize,
  done: bool,
}

impl<'a> CodeBlocks<'a> {
  /// Locate the example section of `text` and prepare to scan it
  pub fn new(text: &'a str, expected_language: &'a str) -> Result<Self> {
    let cursor = find_example_section(text)?;

    Ok(Self {
      text,
      expected_language,
      begin_pattern: Regex::new(CODE_BEGIN_PATTERN).map_err(ExtractError::Regex)?,
      end_pattern: Regex::new(CODE_END_PATTERN).map_err(ExtractError::Regex)?,
      cursor,
      done: false,
    })
  }

  fn next_block(&mut self) -> Option<Result<CodeBlock<'a>>> {
    let text = self.text;
    let begin = self.begin_pattern.captures_at(text, self.cursor)?;
    let fence = begin.get(0)?;
    let line = line_number_at(text, fence.start());
    let language = begin.get(1).map(|m| m.as_str());

    if let Some(language) = language {
      if language != self.expected_language {
        return Some(Err(ExtractError::UnexpectedLanguage {
          language: language.to_string(),
          line,
        }));
      }
    }

    let body_start = next_line_start(text, fence.end());
    let end = match self.end_pattern.find_at(text, body_start) {
      Some(end) => end,
      None => return Some(Err(ExtractError::UnterminatedBlock { line })),
    };

    self.cursor = next_line_start(text, end.end());

    Some(Ok(CodeBlock {
      language,
      code: text[fence.end()..end.start()].trim(),
      line,
    }))
  }
}

impl<'a> Iterator for CodeBlocks<'a> {
  type Item = Result<CodeBlock<'a>>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }

    let item = self.next_block();
    if !matches!(item, Some(Ok(_))) {
      self.done = true;
    }
    item
  }
}

/// Extract the trimmed contents of every code block in the example section
pub fn extract_examples(text: &str, expected_language: &str) -> Result<Vec<String>> {
  let mut examples = Vec::new();

  for block in CodeBlocks::new(text, expected_language)? {
    let block = block?;
    debug!(
      line = block.line,
      language = block.language.unwrap_or("<none>"),
      "extracted example {}",
      examples.len() + 1
    );
    examples.push(block.code.to_string());
  }

  Ok(examples)
}
