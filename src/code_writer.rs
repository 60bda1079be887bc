/// Number of spaces per indentation level
const INDENT_SIZE: usize = 4;

/// A writer for generating Rust source with uniform indentation.
///
/// Lines are separated by `\n`; the last line is not terminated.
pub struct CodeWriter {
  /// Rendered text so far
  buffer: String,
  /// Current indentation level
  indent_level: usize,
  /// Whether nothing has been written yet
  at_start: bool,
}

impl CodeWriter {
  /// Create a new, empty CodeWriter
  pub fn new() -> Self {
    Self {
      buffer: String::new(),
      indent_level: 0,
      at_start: true,
    }
  }

  /// Increase the indentation level
  pub fn indent(&mut self) {
    self.indent_level += 1;
  }

  /// Decrease the indentation level
  pub fn dedent(&mut self) {
    if self.indent_level > 0 {
      self.indent_level -= 1;
    }
  }

  fn start_line(&mut self) {
    if !self.at_start {
      self.buffer.push('\n');
    }
    self.at_start = false;
  }

  /// Write every line of `content` prefixed with the current indentation.
  ///
  /// Blank lines inside `content` are indented too; empty `content` writes a
  /// blank line.
  pub fn write_lines(&mut self, content: &str) {
    if content.is_empty() {
      self.newline();
      return;
    }

    let indent = " ".repeat(self.indent_level * INDENT_SIZE);

    for line in content.lines() {
      self.start_line();
      self.buffer.push_str(&indent);
      self.buffer.push_str(line);
    }
  }

  /// Write a blank line
  pub fn newline(&mut self) {
    self.start_line();
  }

  /// Begin a module definition
  pub fn begin_module(&mut self, name: &str) {
    self.write_lines(&format!("mod {} {{", name));
    self.indent();
  }

  /// End a module definition
  pub fn end_module(&mut self) {
    self.dedent();
    self.write_lines("}");
  }

  /// Consume the CodeWriter and return the rendered text
  pub fn finish(self) -> String {
    self.buffer
  }
}

impl Default for CodeWriter {
  fn default() -> Self {
    Self::new()
  }
}
