/// Accumulates the lines of one emitted block, tracking indentation.
#[derive(Debug, Clone)]
pub struct EmitContext {
    /// Current indentation level
    indent_level: usize,
    /// Spaces per indent level
    indent_width: usize,
    /// Lines emitted so far, indentation already applied
    lines: Vec<String>,
}

impl EmitContext {
    pub fn new(indent_width: usize) -> Self {
        Self {
            indent_level: 0,
            indent_width,
            lines: Vec::new(),
        }
    }

    /// Get the current indentation string.
    pub fn indent(&self) -> String {
        " ".repeat(self.indent_level * self.indent_width)
    }

    /// Increase indentation by one level.
    pub fn push_indent(&mut self) {
        self.indent_level += 1;
    }

    /// Decrease indentation by one level.
    pub fn pop_indent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Append a line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let line = format!("{}{}", self.indent(), text.as_ref());
        self.lines.push(line);
    }

    /// Append an empty line (never indented).
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Join the emitted lines, terminating each with a newline.
    pub fn finish(self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}
