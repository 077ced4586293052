//! Content emission surface.
//!
//! The host generator exposes an append-a-line API with caller-managed
//! indentation; [`ContentSink`] models that surface and [`StringSink`] is
//! the in-memory implementation used by the file generator and the tests.

/// Receives rendered documentation lines.
pub trait ContentSink {
    /// Appends a single line, applying the current indent prefix.
    fn add_line(&mut self, line: &str);

    /// Returns the current indent prefix.
    fn indent(&self) -> String;

    /// Replaces the current indent prefix.
    fn set_indent(&mut self, indent: String);

    /// Appends an empty line (never indented).
    fn add_blank(&mut self) {
        let previous = self.indent();
        self.set_indent(String::new());
        self.add_line("");
        self.set_indent(previous);
    }
}

/// A [`ContentSink`] that accumulates lines into a string buffer.
#[derive(Debug, Default)]
pub struct StringSink {
    lines: Vec<String>,
    indent: String,
}

impl StringSink {
    /// Creates an empty sink with no indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the accumulated lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the sink and returns its content as a single string with
    /// a trailing newline.
    pub fn into_string(self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}

impl ContentSink for StringSink {
    fn add_line(&mut self, line: &str) {
        if line.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", self.indent, line));
        }
    }

    fn indent(&self) -> String {
        self.indent.clone()
    }

    fn set_indent(&mut self, indent: String) {
        self.indent = indent;
    }
}
