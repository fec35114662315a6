//! Render Configuration
//!
//! Controls the whitespace the text formatter produces. Token order and
//! content never depend on configuration; only indentation and line endings
//! do.

/// Default spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// How one indentation level is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IndentStyle {
    /// A fixed number of spaces per level.
    Spaces(usize),
    /// One tab character per level.
    Tabs,
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(INDENT_WIDTH)
    }
}

/// Line terminator written for each line break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration for the text formatter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub indent: IndentStyle,
    pub line_ending: LineEnding,
}

impl RenderConfig {
    /// Create a config indenting with `width` spaces per level.
    pub fn with_indent_width(width: usize) -> Self {
        Self {
            indent: IndentStyle::Spaces(width),
            ..Default::default()
        }
    }

    /// Create a config indenting with tabs.
    pub fn with_tabs() -> Self {
        Self {
            indent: IndentStyle::Tabs,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Indentation text for one level.
    pub fn indent_unit(&self) -> String {
        match self.indent {
            IndentStyle::Spaces(width) => " ".repeat(width),
            IndentStyle::Tabs => "\t".to_owned(),
        }
    }
}

#[cfg(test)]
mod tests;
