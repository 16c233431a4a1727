//! Config-text builders for tests.

/// Builds config file text line by line.
#[derive(Debug, Default)]
pub struct ConfigText {
    lines: Vec<String>,
}

impl ConfigText {
    pub fn new() -> Self {
        Self::default()
    }

    /// `<glob> -> <template>`
    pub fn rule(mut self, glob: &str, template: &str) -> Self {
        self.lines.push(format!("{glob} -> {template}"));
        self
    }

    /// `& /<pattern>/<flags> => <replacement>`
    pub fn macro_def(mut self, pattern: &str, flags: &str, replacement: &str) -> Self {
        self.lines
            .push(format!("& /{pattern}/{flags} => {replacement}"));
        self
    }

    pub fn comment(mut self, text: &str) -> Self {
        self.lines.push(format!("# {text}"));
        self
    }

    /// A line emitted exactly as given.
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}
