//! Output Formatter
//!
//! The renderer never builds text itself. It calls the primitives of a
//! [`Formatter`] in strict left-to-right order, and the formatter decides
//! what that sequence becomes: a string, a token log, or anything else.
//!
//! Two implementations are provided:
//! - [`TextFormatter`]: builds C# source text in memory
//! - [`RecordingFormatter`]: records the call sequence for golden tests

use csx_ir::{ExprId, LabelId, Type, VarId};

use crate::context::RenderConfig;

/// What an identifier written by the renderer stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A parameter or local variable.
    Variable(VarId),
    /// A jump target.
    Label(LabelId),
    /// The name of a lambda.
    Lambda(ExprId),
}

/// What a symbolic reference written by the renderer points at.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Reference<'a> {
    Type(&'a Type),
    Member {
        declaring_type: &'a Type,
        name: &'a str,
    },
}

/// Output primitives driven by the renderer.
pub trait Formatter {
    /// Emit punctuation or an operator.
    fn write_token(&mut self, token: &str);

    /// Emit a language keyword.
    fn write_keyword(&mut self, keyword: &str);

    /// Emit the name of a declared or referenced binding.
    fn write_identifier(&mut self, name: &str, symbol: Symbol);

    /// Emit the spelling of a type or member.
    fn write_reference(&mut self, text: &str, reference: Reference<'_>);

    /// Emit a literal value.
    fn write_literal(&mut self, literal: &str);

    /// Emit a single space.
    fn write_space(&mut self);

    /// End the current line.
    fn write_line(&mut self);

    /// Increase the indentation of subsequent lines.
    fn indent(&mut self);

    /// Decrease the indentation of subsequent lines.
    fn dedent(&mut self);
}

/// String-based formatter.
///
/// Indentation is written lazily before the first text on a line, so blank
/// lines carry no trailing whitespace.
pub struct TextFormatter {
    buffer: String,
    config: RenderConfig,
    indent_unit: String,
    level: usize,
    at_line_start: bool,
}

impl TextFormatter {
    /// Create a text formatter with the default config.
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a text formatter with a custom config.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            buffer: String::new(),
            indent_unit: config.indent_unit(),
            config,
            level: 0,
            at_line_start: true,
        }
    }

    /// Get the formatted output.
    pub fn output(self) -> String {
        self.buffer
    }

    fn write_text(&mut self, text: &str) {
        if self.at_line_start {
            for _ in 0..self.level {
                self.buffer.push_str(&self.indent_unit);
            }
            self.at_line_start = false;
        }
        self.buffer.push_str(text);
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for TextFormatter {
    fn write_token(&mut self, token: &str) {
        self.write_text(token);
    }

    fn write_keyword(&mut self, keyword: &str) {
        self.write_text(keyword);
    }

    fn write_identifier(&mut self, name: &str, _symbol: Symbol) {
        self.write_text(name);
    }

    fn write_reference(&mut self, text: &str, _reference: Reference<'_>) {
        self.write_text(text);
    }

    fn write_literal(&mut self, literal: &str) {
        self.write_text(literal);
    }

    fn write_space(&mut self) {
        self.write_text(" ");
    }

    fn write_line(&mut self) {
        self.buffer.push_str(self.config.line_ending.as_str());
        self.at_line_start = true;
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn dedent(&mut self) {
        debug_assert!(self.level > 0, "dedent below zero");
        self.level = self.level.saturating_sub(1);
    }
}

/// One recorded formatter call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatterCall {
    Token(String),
    Keyword(String),
    Identifier(String, Symbol),
    Reference(String),
    Literal(String),
    Space,
    Line,
    Indent,
    Dedent,
}

/// Formatter that records every call.
///
/// The recorded sequence is the renderer's complete output; comparing it
/// against a golden sequence checks token kinds as well as text.
#[derive(Default, Debug)]
pub struct RecordingFormatter {
    calls: Vec<FormatterCall>,
}

impl RecordingFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[FormatterCall] {
        &self.calls
    }

    /// Net indentation of the recorded sequence (zero when balanced).
    pub fn indent_balance(&self) -> isize {
        self.calls.iter().fold(0, |depth, call| match call {
            FormatterCall::Indent => depth + 1,
            FormatterCall::Dedent => depth - 1,
            _ => depth,
        })
    }
}

impl Formatter for RecordingFormatter {
    fn write_token(&mut self, token: &str) {
        self.calls.push(FormatterCall::Token(token.to_owned()));
    }

    fn write_keyword(&mut self, keyword: &str) {
        self.calls.push(FormatterCall::Keyword(keyword.to_owned()));
    }

    fn write_identifier(&mut self, name: &str, symbol: Symbol) {
        self.calls
            .push(FormatterCall::Identifier(name.to_owned(), symbol));
    }

    fn write_reference(&mut self, text: &str, _reference: Reference<'_>) {
        self.calls.push(FormatterCall::Reference(text.to_owned()));
    }

    fn write_literal(&mut self, literal: &str) {
        self.calls.push(FormatterCall::Literal(literal.to_owned()));
    }

    fn write_space(&mut self) {
        self.calls.push(FormatterCall::Space);
    }

    fn write_line(&mut self) {
        self.calls.push(FormatterCall::Line);
    }

    fn indent(&mut self) {
        self.calls.push(FormatterCall::Indent);
    }

    fn dedent(&mut self) {
        self.calls.push(FormatterCall::Dedent);
    }
}
