//! csx Renderer
//!
//! Renders an expression tree from a [`csx_ir::ExprArena`] as C# source text.
//!
//! # Architecture
//!
//! One recursive-descent pass drives an abstract [`Formatter`]:
//!
//! 1. **Classify**: decide whether each node sits in a statement slot as a
//!    terminated statement or brings its own braces
//! 2. **Lower**: rewrite sugar kinds (`Power`, `Increment`, `TypeEqual`, ...)
//!    into primitive shapes
//! 3. **Emit**: write tokens, identifiers and references left to right,
//!    parenthesizing operator operands conservatively
//!
//! # Modules
//!
//! - [`types`]: Type descriptor to surface spelling
//! - [`classify`]: Statement/expression classification
//! - [`sugar`]: Sugar lowering
//! - [`operators`]: Operator tokens and parenthesization
//! - [`naming`]: Names for anonymous bindings
//! - [`renderer`]: The rendering pass
//! - [`emitter`]: Formatter trait with text and recording implementations
//! - [`context`]: Whitespace configuration

pub mod classify;
pub mod context;
pub mod emitter;
pub mod error;
pub mod naming;
pub mod operators;
pub mod renderer;
pub mod sugar;
pub mod types;

#[cfg(test)]
mod test_helpers;

pub use context::{IndentStyle, LineEnding, RenderConfig, INDENT_WIDTH};
pub use emitter::{
    Formatter, FormatterCall, RecordingFormatter, Reference, Symbol, TextFormatter,
};
pub use error::{RenderError, RenderResult};
pub use naming::{NameKey, NameTable, SYNTHETIC_PREFIX};
pub use renderer::Renderer;
pub use types::type_name;

use csx_ir::{ExprArena, ExprId};

/// Render the lambda `id` as C# source with the default config.
///
/// # Example
///
/// ```
/// use csx_ir::{BinaryOp, ExprArena, ExprKind, Type};
///
/// let mut arena = ExprArena::new();
/// let a = arena.alloc_var(Some("a"), Type::INT);
/// let b = arena.alloc_var(Some("b"), Type::INT);
/// let left = arena.alloc(ExprKind::Parameter(a), Type::INT);
/// let right = arena.alloc(ExprKind::Parameter(b), Type::INT);
/// let sum = arena.alloc(
///     ExprKind::Binary { op: BinaryOp::Add, left, right },
///     Type::INT,
/// );
/// let lambda = arena.alloc(
///     ExprKind::Lambda { name: None, params: vec![a, b], body: sum },
///     Type::INT,
/// );
///
/// let text = csx_fmt::render_lambda(&arena, lambda).unwrap();
/// assert_eq!(text, "int (int a, int b)\n{\n    return a + b;\n}\n");
/// ```
pub fn render_lambda(arena: &ExprArena, id: ExprId) -> RenderResult<String> {
    render_lambda_with_config(arena, id, RenderConfig::default())
}

/// Render the lambda `id` as C# source with a custom config.
pub fn render_lambda_with_config(
    arena: &ExprArena,
    id: ExprId,
    config: RenderConfig,
) -> RenderResult<String> {
    let mut renderer = Renderer::new(arena, TextFormatter::with_config(config));
    renderer.render_lambda(id)?;
    Ok(renderer.into_formatter().output())
}
