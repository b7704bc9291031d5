//! Code fragments and indent-aware rendering.
//!
//! Fragments are the intermediate representation for generated method bodies:
//! composable pieces of code that customizers accumulate and the outer class
//! assembler eventually emits. Rendering a fragment tree to text here is the
//! inspection/test view of that IR, not final artifact emission.

/// Indentation style for rendered fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 4 whitespaces
            Self::Spaces(_) => "    ",
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

/// Represents a fragment of generated code.
///
/// Fragments form an intermediate representation between the generation
/// model and the final string output, enabling composition without coupling
/// producers to a rendering target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// Raw text without newline.
    Raw(String),
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a raw text fragment.
    pub fn raw(s: impl Into<String>) -> Self {
        Self::Raw(s.into())
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }

    /// Render this fragment to text with the given indentation style.
    pub fn render(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);
        builder.apply_fragment(self);
        builder.build()
    }
}

/// Builder for assembling properly indented code from fragments.
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: &CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(c);
                }
            }
            CodeFragment::Indent(fragments) => {
                self.push_indent();
                for f in fragments {
                    self.apply_fragment(f);
                }
                self.push_dedent();
            }
            CodeFragment::Sequence(fragments) => {
                for f in fragments {
                    self.apply_fragment(f);
                }
            }
        }
    }

    /// Consume the builder and return the assembled code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Tab.as_str(), "\t");
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }

    #[test]
    fn test_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(CodeFragment::blank(), CodeFragment::Blank);
        assert_eq!(CodeFragment::raw("raw"), CodeFragment::Raw("raw".to_string()));
    }

    #[test]
    fn test_block_renders_with_indent_and_close() {
        let block = CodeFragment::block(
            "if enabled {",
            vec![CodeFragment::line("emit();")],
            Some("}".to_string()),
        );

        assert_eq!(block.render(Indent::default()), "if enabled {\n    emit();\n}\n");
    }

    #[test]
    fn test_nested_blocks() {
        let inner = CodeFragment::block(
            "inner {",
            vec![CodeFragment::line("leaf")],
            Some("}".to_string()),
        );
        let outer = CodeFragment::block("outer {", vec![inner], Some("}".to_string()));

        assert_eq!(
            outer.render(Indent::Spaces(2)),
            "outer {\n  inner {\n    leaf\n  }\n}\n"
        );
    }

    #[test]
    fn test_sequence_and_blank() {
        let seq = CodeFragment::sequence(vec![
            CodeFragment::line("first"),
            CodeFragment::blank(),
            CodeFragment::line("second"),
        ]);

        assert_eq!(seq.render(Indent::default()), "first\n\nsecond\n");
    }
}
