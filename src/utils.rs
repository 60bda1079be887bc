/// 1-based line number of the byte offset `pos` in `text`
pub fn line_number_at(text: &str, pos: usize) -> usize {
  let pos = pos.min(text.len());
  text.as_bytes()[..pos].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Position of the first byte after the line break following `pos`, clamped to
/// the end of `text`
pub fn next_line_start(text: &str, pos: usize) -> usize {
  match text.get(pos..).and_then(|rest| rest.find('\n')) {
    Some(offset) => pos + offset + 1,
    None => text.len(),
  }
}
