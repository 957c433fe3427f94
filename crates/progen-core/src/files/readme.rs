//! README assembly.

use std::fmt::Write as _;

/// Builds a `README.md` from titles, paragraphs and fenced code blocks.
#[derive(Debug, Default)]
pub struct ReadmeBuilder {
    content: String,
}

/// One README section a generator contributes.
#[derive(Debug, Clone)]
pub enum Section {
    Title(String, u8),
    Paragraph(String),
    Code { code: String, language: Option<String> },
}

impl ReadmeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a title. The degree maps to the number of `#` markers and must
    /// be between 1 and 4.
    pub fn title(&mut self, title: &str, degree: u8) -> &mut Self {
        assert!(
            (1..=4).contains(&degree),
            "title degree must be between 1 and 4, got {degree}"
        );
        let _ = writeln!(self.content, "{} {title}\n", "#".repeat(degree as usize));
        self
    }

    pub fn paragraph(&mut self, paragraph: &str) -> &mut Self {
        let _ = writeln!(self.content, "{paragraph}\n");
        self
    }

    /// Append a fenced code block, optionally tagged with a language for
    /// syntax highlighting.
    pub fn code(&mut self, code: &str, language: Option<&str>) -> &mut Self {
        let _ = writeln!(self.content, "```{}\n{code}\n```\n", language.unwrap_or(""));
        self
    }

    pub fn section(&mut self, section: &Section) -> &mut Self {
        match section {
            Section::Title(text, degree) => self.title(text, *degree),
            Section::Paragraph(text) => self.paragraph(text),
            Section::Code { code, language } => self.code(code, language.as_deref()),
        }
    }

    pub fn build(self) -> String {
        self.content
    }
}
