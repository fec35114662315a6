//! Lambdas, Blocks and Statement Slots
//!
//! A statement slot holds one child of a block. Actual statements get a
//! terminator; statement-shaped children bring their own braces. Only the
//! last child of a value-producing block is prefixed with `return`.

use csx_ir::{ExprId, ExprKind, VarId};

use super::Renderer;
use crate::classify::{is_actual_statement, is_block, is_empty_statement, is_jump};
use crate::emitter::{Formatter, Symbol};
use crate::error::RenderResult;

impl<F: Formatter> Renderer<'_, F> {
    /// `ReturnType [name](Type a, Type b)`
    pub(super) fn emit_signature(
        &mut self,
        id: ExprId,
        name: Option<&str>,
        params: &[VarId],
    ) -> RenderResult {
        let arena = self.arena;
        self.emit_type(arena.ty(id));
        self.out.write_space();
        if let Some(name) = name {
            self.out.write_identifier(name, Symbol::Lambda(id));
        }
        self.emit_parameters(params);
        Ok(())
    }

    fn emit_parameters(&mut self, params: &[VarId]) {
        self.out.write_token("(");
        for (i, &param) in params.iter().enumerate() {
            if i > 0 {
                self.emit_separator();
            }
            self.emit_declaration(param);
        }
        self.out.write_token(")");
    }

    /// Body of a top-level lambda, always braced.
    pub(super) fn emit_lambda_body(&mut self, body: ExprId, returns_value: bool) -> RenderResult {
        self.emit_as_block(body, returns_value)
    }

    /// `(Type a) => expr`, or `(Type a) =>` followed by a block.
    pub(super) fn emit_nested_lambda(&mut self, params: &[VarId], body: ExprId) -> RenderResult {
        self.emit_parameters(params);
        self.out.write_space();
        self.out.write_token("=>");
        if is_block(self.arena, body) {
            self.out.write_line();
            self.emit_block(body, true)
        } else {
            self.out.write_space();
            self.emit(body)
        }
    }

    /// `{`, declarations, children, `}`. No trailing line break.
    ///
    /// The last child gets `return` only when the block itself sits in a
    /// return slot and produces a value.
    pub(super) fn emit_block(&mut self, id: ExprId, returns_value: bool) -> RenderResult {
        let arena = self.arena;
        let ExprKind::Block { variables, exprs } = arena.kind(id) else {
            return self.emit_braced_statement(id, false);
        };
        let returns_value = returns_value && !arena.ty(id).is_void();
        let last = exprs
            .iter()
            .rposition(|&child| !is_empty_statement(arena, child));

        self.out.write_token("{");
        self.out.write_line();
        self.indented(|r| {
            for &var in variables {
                r.emit_declaration(var);
                r.out.write_token(";");
                r.out.write_line();
            }
            if !variables.is_empty() {
                r.out.write_line();
            }
            for (i, &child) in exprs.iter().enumerate() {
                r.emit_statement(child, returns_value && Some(i) == last)?;
            }
            Ok(())
        })?;
        self.out.write_token("}");
        Ok(())
    }

    /// Render `id` as a braced body: a Block as itself, anything else
    /// wrapped in braces as a single statement.
    pub(super) fn emit_as_block(&mut self, id: ExprId, returns_value: bool) -> RenderResult {
        if is_block(self.arena, id) {
            self.emit_block(id, returns_value)
        } else {
            self.emit_braced_statement(id, returns_value)
        }
    }

    fn emit_braced_statement(&mut self, id: ExprId, returns_value: bool) -> RenderResult {
        self.out.write_token("{");
        self.out.write_line();
        self.indented(|r| r.emit_statement(id, returns_value))?;
        self.out.write_token("}");
        Ok(())
    }

    /// One statement slot, ending with a line break.
    ///
    /// Empty statements produce no output at all.
    pub(super) fn emit_statement(&mut self, id: ExprId, returns_value: bool) -> RenderResult {
        let arena = self.arena;
        if is_empty_statement(arena, id) {
            return Ok(());
        }
        let actual = is_actual_statement(arena, id);
        if returns_value && actual && !is_jump(arena, id) {
            self.out.write_keyword("return");
            self.out.write_space();
        }
        self.emit_in_slot(id, returns_value)?;
        if actual {
            self.out.write_token(";");
        }
        self.out.write_line();
        Ok(())
    }

    /// Emit a statement slot's node. Statement-shaped nodes learn from the
    /// slot whether their branches end in `return`; everything else renders
    /// as an expression.
    pub(super) fn emit_in_slot(&mut self, id: ExprId, returns_value: bool) -> RenderResult {
        let arena = self.arena;
        let returns_value = returns_value && !arena.ty(id).is_void();
        match arena.kind(id) {
            ExprKind::Block { .. } => self.emit_block(id, returns_value),
            ExprKind::Conditional {
                test,
                if_true,
                if_false,
            } => self.emit_conditional(id, *test, *if_true, *if_false, returns_value),
            ExprKind::Switch {
                value,
                cases,
                default,
            } => self.emit_switch(*value, cases, *default, returns_value),
            ExprKind::Try {
                body,
                handlers,
                fault,
                finally,
            } => self.emit_try(*body, handlers, *fault, *finally, returns_value),
            _ => self.emit(id),
        }
    }
}
