/// Literal substring matcher shared by all workers.
///
/// The pattern matches as a contiguous byte sequence, case-sensitive, with no
/// regex semantics. An empty pattern matches every line at column 0, which is
/// the natural result of literal search and is relied on by callers.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    pattern: String,
}

impl LiteralMatcher {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// 0-based byte offset of the first occurrence of the pattern in `line`,
    /// if any.
    pub fn find_in_line(&self, line: &str) -> Option<usize> {
        line.find(&self.pattern)
    }
}
