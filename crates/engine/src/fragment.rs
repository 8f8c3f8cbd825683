//! Multi-line replacement values with relative indentation.

/// Marker line in template text that indents the lines after it.
pub const INDENT_INCREASE_MARKER: &str = "~INDENT_INCREASE~";
/// Marker line in template text that undoes one [`INDENT_INCREASE_MARKER`].
pub const INDENT_DECREASE_MARKER: &str = "~INDENT_DECREASE~";
/// Whitespace added per indentation level.
pub const INDENT_UNIT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece {
    Line(String),
    IndentIncrease,
    IndentDecrease,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// A block of lines plus indentation changes.
///
/// Indentation is relative: when the fragment is placed on a template line,
/// every line after the first inherits that line's leading whitespace plus
/// one [`INDENT_UNIT`] per open level. Levels never go below zero.
pub struct Fragment {
    pieces: Vec<Piece>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment holding a single line.
    pub fn single(text: impl Into<String>) -> Self {
        let mut f = Self::new();
        f.line(text);
        f
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut f = Self::new();
        for l in lines {
            f.line(l);
        }
        f
    }

    /// Parses raw template text, turning marker lines into indentation
    /// changes. Everything else is kept verbatim.
    pub fn parse(text: &str) -> Self {
        let pieces = text
            .lines()
            .map(|line| match line.trim() {
                INDENT_INCREASE_MARKER => Piece::IndentIncrease,
                INDENT_DECREASE_MARKER => Piece::IndentDecrease,
                _ => Piece::Line(line.to_string()),
            })
            .collect();
        Self { pieces }
    }

    /// Appends a line. Embedded newlines split it into several lines.
    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if text.contains('\n') {
            for l in text.lines() {
                self.pieces.push(Piece::Line(l.to_string()));
            }
        } else {
            self.pieces.push(Piece::Line(text));
        }
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.pieces.push(Piece::Line(String::new()));
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.pieces.push(Piece::IndentIncrease);
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.pieces.push(Piece::IndentDecrease);
        self
    }

    /// Appends `other`, keeping its indentation relative to the current level.
    pub fn extend(&mut self, other: Fragment) -> &mut Self {
        self.pieces.extend(other.pieces);
        self
    }

    /// Appends `other` one level deeper than the current one.
    pub fn nest(&mut self, other: Fragment) -> &mut Self {
        self.indent();
        self.extend(other);
        self.dedent()
    }

    /// True when there is no line at all. Markers alone still count as empty.
    pub fn is_empty(&self) -> bool {
        !self.pieces.iter().any(|p| matches!(p, Piece::Line(_)))
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Renders the lines with indentation applied from level zero.
    pub fn render(&self, unit: &str) -> Vec<String> {
        let mut level = 0usize;
        let mut out = Vec::new();
        for piece in &self.pieces {
            match piece {
                Piece::Line(text) if text.is_empty() => out.push(String::new()),
                Piece::Line(text) => out.push(format!("{}{}", unit.repeat(level), text)),
                Piece::IndentIncrease => level += 1,
                Piece::IndentDecrease => level = level.saturating_sub(1),
            }
        }
        out
    }
}
