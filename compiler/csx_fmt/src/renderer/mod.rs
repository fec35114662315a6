//! Renderer Core
//!
//! One recursive-descent pass over the tree that drives a [`Formatter`].
//! Every node kind is matched exhaustively in [`Renderer::emit`]; sugar kinds
//! are lowered first and rendered through their primitive shape.
//!
//! # Modules
//!
//! - [`blocks`]: lambdas, blocks and statement slots
//! - [`control`]: conditionals, loops, switch, try, jumps and labels
//! - [`expressions`]: operators, member access, calls and lowered shapes
//! - [`construct`]: object, array and initializer construction
//! - [`literals`]: constant values

mod blocks;
mod construct;
mod control;
mod expressions;
mod literals;
#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]

use csx_ir::{BinaryOp, ExprArena, ExprId, ExprKind, LabelId, Type, UnaryOp, VarId};

use crate::emitter::{Formatter, Reference, Symbol};
use crate::error::{RenderError, RenderResult};
use crate::naming::{NameKey, NameTable};
use crate::operators::needs_parens;
use crate::sugar;
use crate::types::type_name;

/// Renders expression trees from one arena into a [`Formatter`].
///
/// Synthesized names persist for the renderer's lifetime: rendering two
/// lambdas through the same renderer never reuses a `var_$<n>` name.
pub struct Renderer<'a, F: Formatter> {
    arena: &'a ExprArena,
    out: F,
    names: NameTable,
}

impl<'a, F: Formatter> Renderer<'a, F> {
    pub fn new(arena: &'a ExprArena, out: F) -> Self {
        Renderer {
            arena,
            out,
            names: NameTable::new(),
        }
    }

    /// Render a lambda: signature line, then body, then a line break.
    ///
    /// On error the formatter holds partial output and should be discarded.
    pub fn render_lambda(&mut self, id: ExprId) -> RenderResult {
        let arena = self.arena;
        let kind = arena.kind(id);
        let ExprKind::Lambda { name, params, body } = kind else {
            return Err(RenderError::NotALambda { found: kind.name() });
        };
        tracing::debug!(lambda = ?id, params = params.len(), "rendering lambda");
        self.emit_signature(id, name.as_deref(), params)?;
        self.out.write_line();
        self.emit_lambda_body(*body, !arena.ty(id).is_void())?;
        self.out.write_line();
        Ok(())
    }

    /// Render a single node in expression position.
    pub fn render_expression(&mut self, id: ExprId) -> RenderResult {
        self.emit(id)
    }

    pub fn into_formatter(self) -> F {
        self.out
    }

    /// Emit any node.
    pub(crate) fn emit(&mut self, id: ExprId) -> RenderResult {
        let arena = self.arena;
        match arena.kind(id) {
            ExprKind::Binary {
                op: BinaryOp::Power | BinaryOp::PowerAssign,
                ..
            }
            | ExprKind::Unary {
                op:
                    UnaryOp::Increment
                    | UnaryOp::Decrement
                    | UnaryOp::ArrayLength
                    | UnaryOp::IsTrue
                    | UnaryOp::IsFalse,
                ..
            }
            | ExprKind::TypeEqual { .. } => self.emit_sugar(id),

            ExprKind::Lambda { params, body, .. } => self.emit_nested_lambda(params, *body),
            // Outside a statement slot nothing here may produce `return`.
            ExprKind::Block { .. }
            | ExprKind::Conditional { .. }
            | ExprKind::Switch { .. }
            | ExprKind::Try { .. } => self.emit_in_slot(id, false),
            ExprKind::Binary { op, left, right } => self.emit_binary(*op, *left, *right),
            ExprKind::Unary { op, operand } => self.emit_unary(id, *op, *operand),
            ExprKind::Rethrow => {
                self.out.write_keyword("throw");
                Ok(())
            }
            ExprKind::Loop { body } => self.emit_loop(*body),
            ExprKind::Goto {
                kind,
                target,
                value,
            } => self.emit_goto(*kind, *target, *value),
            ExprKind::Label { target } => {
                self.emit_label(*target);
                Ok(())
            }
            ExprKind::Constant(constant) => self.emit_constant(constant),
            ExprKind::Parameter(var) => {
                self.emit_var(*var);
                Ok(())
            }
            ExprKind::Default => {
                self.emit_default(arena.ty(id));
                Ok(())
            }
            ExprKind::MemberAccess { receiver, member } => {
                self.emit_member_access(*receiver, member)
            }
            ExprKind::Call {
                receiver,
                method,
                args,
            } => self.emit_call(*receiver, method, args),
            ExprKind::Invoke { target, args } => {
                self.emit_wrapped(*target)?;
                self.emit_args("(", args, ")")
            }
            ExprKind::Index { receiver, args } => {
                self.emit_wrapped(*receiver)?;
                self.emit_args("[", args, "]")
            }
            ExprKind::New { args } => self.emit_new(arena.ty(id), args),
            ExprKind::NewArrayBounds { element, bounds } => {
                self.emit_new_array_bounds(element, bounds)
            }
            ExprKind::NewArrayInit { element, elements } => {
                self.emit_new_array_init(element, elements)
            }
            ExprKind::ListInit {
                new_expr,
                initializers,
            } => self.emit_list_init(*new_expr, initializers),
            ExprKind::MemberInit { new_expr, bindings } => {
                self.emit_member_init(*new_expr, bindings)
            }
            ExprKind::TypeIs { operand, test } => self.emit_type_is(*operand, test),
            ExprKind::For {
                variable,
                initializer,
                test,
                step,
                body,
            } => self.emit_for(*variable, *initializer, *test, *step, *body),
            ExprKind::ForEach {
                variable,
                collection,
                body,
            } => self.emit_foreach(*variable, *collection, *body),
            ExprKind::While { test, body } => self.emit_while(*test, *body),
            ExprKind::DoWhile { body, test } => self.emit_do_while(*body, *test),
            ExprKind::Using {
                variable,
                resource,
                body,
            } => self.emit_using(*variable, *resource, *body),
            ExprKind::Extension { name } => {
                Err(RenderError::unsupported(format!("extension node `{name}`")))
            }
        }
    }

    fn emit_sugar(&mut self, id: ExprId) -> RenderResult {
        let lowered = sugar::lower(self.arena, id)
            .ok_or_else(|| RenderError::unsupported(self.arena.kind(id).name()))?;
        self.emit_lowered(&lowered)
    }

    /// Emit an operand, parenthesized when its kind requires it.
    pub(crate) fn emit_wrapped(&mut self, id: ExprId) -> RenderResult {
        if needs_parens(self.arena, id) {
            self.out.write_token("(");
            self.emit(id)?;
            self.out.write_token(")");
            Ok(())
        } else {
            self.emit(id)
        }
    }

    /// Run `f` one indentation level deeper.
    ///
    /// The dedent happens before any error from `f` is propagated.
    pub(crate) fn indented(
        &mut self,
        f: impl FnOnce(&mut Self) -> RenderResult,
    ) -> RenderResult {
        self.out.indent();
        let result = f(self);
        self.out.dedent();
        result
    }

    /// Emit `open`, comma-separated expressions, `close`.
    pub(crate) fn emit_args(&mut self, open: &str, args: &[ExprId], close: &str) -> RenderResult {
        self.out.write_token(open);
        for (i, &arg) in args.iter().enumerate() {
            if i > 0 {
                self.emit_separator();
            }
            self.emit(arg)?;
        }
        self.out.write_token(close);
        Ok(())
    }

    /// `, `
    pub(crate) fn emit_separator(&mut self) {
        self.out.write_token(",");
        self.out.write_space();
    }

    pub(crate) fn emit_type(&mut self, ty: &Type) {
        let text = type_name(ty);
        self.out.write_reference(&text, Reference::Type(ty));
    }

    pub(crate) fn emit_var(&mut self, var: VarId) {
        let declared = self.arena.var(var).name.as_deref();
        let name = self.names.name_for(NameKey::Var(var), declared);
        self.out.write_identifier(&name, Symbol::Variable(var));
    }

    /// `Type name`
    pub(crate) fn emit_declaration(&mut self, var: VarId) {
        let arena = self.arena;
        self.emit_type(&arena.var(var).ty);
        self.out.write_space();
        self.emit_var(var);
    }

    pub(crate) fn emit_label_name(&mut self, label: LabelId) {
        let declared = self.arena.label(label).name.as_deref();
        let name = self.names.name_for(NameKey::Label(label), declared);
        self.out.write_identifier(&name, Symbol::Label(label));
    }

    /// `keyword (`, `f`, `)`
    pub(crate) fn emit_keyword_parens(
        &mut self,
        keyword: &str,
        f: impl FnOnce(&mut Self) -> RenderResult,
    ) -> RenderResult {
        self.out.write_keyword(keyword);
        self.out.write_space();
        self.out.write_token("(");
        f(self)?;
        self.out.write_token(")");
        Ok(())
    }
}
