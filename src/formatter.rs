use std::io::Write;

use crate::code_writer::CodeWriter;
use crate::error::Result;

/// Header marking the generated file as machine-written
pub const GENERATED_FILE_HEADER: [&str; 4] = [
  "// !!! WARNING !!!",
  "//",
  "// Automatically extracted from README.md by extract_example.py",
  "// Please do not edit directly",
];

/// Render the header followed by one `mod exampleN` per snippet.
///
/// The text has no trailing newline after the last line.
pub fn format_example_tests<S, H>(examples: &[S], header: &[H]) -> String
where
  S: AsRef<str>,
  H: AsRef<str>,
{
  let mut writer = CodeWriter::new();

  for line in header {
    writer.write_lines(line.as_ref());
  }

  for (idx, example) in examples.iter().enumerate() {
    writer.newline();
    writer.newline();
    writer.begin_module(&format!("example{}", idx + 1));
    let example = example.as_ref();
    if !example.is_empty() {
      writer.write_lines(example);
    }
    writer.end_module();
  }

  writer.finish()
}

/// Write the generated test file into `writer`
pub fn write_example_tests<W, S, H>(mut writer: W, examples: &[S], header: &[H]) -> Result<()>
where
  W: Write,
  S: AsRef<str>,
  H: AsRef<str>,
{
  writer.write_all(format_example_tests(examples, header).as_bytes())?;
  writer.flush()?;
  Ok(())
}
