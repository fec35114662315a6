//! Control Flow
//!
//! Conditionals, loops, `switch`, `try`, jumps and labels. Every body is
//! normalized to a braced block; none of these constructs writes its own
//! trailing line break.

use csx_ir::{CatchBlock, ExprArena, ExprId, ExprKind, GotoKind, LabelId, SwitchCase, VarId};

use super::Renderer;
use crate::classify::{
    ends_in_jump, is_actual_statement, is_empty_statement, is_ternary, last_statement,
};
use crate::emitter::Formatter;
use crate::error::{RenderError, RenderResult};

impl<F: Formatter> Renderer<'_, F> {
    pub(super) fn emit_conditional(
        &mut self,
        id: ExprId,
        test: ExprId,
        if_true: ExprId,
        if_false: Option<ExprId>,
        returns_value: bool,
    ) -> RenderResult {
        let arena = self.arena;
        if is_ternary(arena, id) {
            self.emit_wrapped(test)?;
            self.out.write_space();
            self.out.write_token("?");
            self.out.write_space();
            self.emit_wrapped(if_true)?;
            self.out.write_space();
            self.out.write_token(":");
            self.out.write_space();
            return match if_false {
                Some(branch) => self.emit_wrapped(branch),
                None => {
                    self.emit_default(arena.ty(id));
                    Ok(())
                }
            };
        }

        self.emit_keyword_parens("if", |r| r.emit(test))?;
        self.out.write_line();
        self.emit_as_block(if_true, returns_value)?;

        let Some(branch) = if_false.filter(|&branch| !is_empty_statement(arena, branch)) else {
            return Ok(());
        };
        self.out.write_line();
        self.out.write_keyword("else");
        if is_else_if(arena, branch) {
            self.out.write_space();
            self.emit_in_slot(branch, returns_value)
        } else {
            self.out.write_line();
            self.emit_as_block(branch, returns_value)
        }
    }

    /// `for (;;)`
    pub(super) fn emit_loop(&mut self, body: ExprId) -> RenderResult {
        self.out.write_keyword("for");
        self.out.write_space();
        self.out.write_token("(;;)");
        self.out.write_line();
        self.emit_as_block(body, false)
    }

    /// `for (T v = init; test; step)`
    pub(super) fn emit_for(
        &mut self,
        variable: VarId,
        initializer: ExprId,
        test: ExprId,
        step: ExprId,
        body: ExprId,
    ) -> RenderResult {
        self.emit_keyword_parens("for", |r| {
            r.emit_declaration(variable);
            r.out.write_space();
            r.out.write_token("=");
            r.out.write_space();
            r.emit(initializer)?;
            r.out.write_token(";");
            r.out.write_space();
            r.emit(test)?;
            r.out.write_token(";");
            r.out.write_space();
            r.emit(step)
        })?;
        self.out.write_line();
        self.emit_as_block(body, false)
    }

    /// `foreach (T v in collection)`
    pub(super) fn emit_foreach(
        &mut self,
        variable: VarId,
        collection: ExprId,
        body: ExprId,
    ) -> RenderResult {
        self.emit_keyword_parens("foreach", |r| {
            r.emit_declaration(variable);
            r.out.write_space();
            r.out.write_keyword("in");
            r.out.write_space();
            r.emit(collection)
        })?;
        self.out.write_line();
        self.emit_as_block(body, false)
    }

    pub(super) fn emit_while(&mut self, test: ExprId, body: ExprId) -> RenderResult {
        self.emit_keyword_parens("while", |r| r.emit(test))?;
        self.out.write_line();
        self.emit_as_block(body, false)
    }

    /// `do`, body, `while (test);`
    pub(super) fn emit_do_while(&mut self, body: ExprId, test: ExprId) -> RenderResult {
        self.out.write_keyword("do");
        self.out.write_line();
        self.emit_as_block(body, false)?;
        self.out.write_line();
        self.emit_keyword_parens("while", |r| r.emit(test))?;
        self.out.write_token(";");
        Ok(())
    }

    /// `using (resource)` or `using (T v = resource)`
    pub(super) fn emit_using(
        &mut self,
        variable: Option<VarId>,
        resource: ExprId,
        body: ExprId,
    ) -> RenderResult {
        self.emit_keyword_parens("using", |r| {
            if let Some(variable) = variable {
                r.emit_declaration(variable);
                r.out.write_space();
                r.out.write_token("=");
                r.out.write_space();
            }
            r.emit(resource)
        })?;
        self.out.write_line();
        self.emit_as_block(body, false)
    }

    pub(super) fn emit_switch(
        &mut self,
        value: ExprId,
        cases: &[SwitchCase],
        default: Option<ExprId>,
        returns_value: bool,
    ) -> RenderResult {
        self.emit_keyword_parens("switch", |r| r.emit(value))?;
        self.out.write_line();
        self.out.write_token("{");
        self.out.write_line();
        self.indented(|r| {
            for case in cases {
                for &test in &case.test_values {
                    r.out.write_keyword("case");
                    r.out.write_space();
                    r.emit(test)?;
                    r.out.write_token(":");
                    r.out.write_line();
                }
                r.emit_switch_section(case.body, returns_value)?;
            }
            if let Some(default) = default {
                r.out.write_keyword("default");
                r.out.write_token(":");
                r.out.write_line();
                r.emit_switch_section(default, returns_value)?;
            }
            Ok(())
        })?;
        self.out.write_token("}");
        Ok(())
    }

    /// Section body one level below its labels, closed with `break;` when
    /// control would otherwise fall through.
    fn emit_switch_section(&mut self, body: ExprId, returns_value: bool) -> RenderResult {
        let arena = self.arena;
        let returned = returns_value
            && last_statement(arena, body).is_some_and(|last| is_actual_statement(arena, last));
        self.indented(|r| {
            r.emit_as_block(body, returns_value)?;
            r.out.write_line();
            if !returned && !ends_in_jump(arena, body) {
                r.out.write_keyword("break");
                r.out.write_token(";");
                r.out.write_line();
            }
            Ok(())
        })
    }

    pub(super) fn emit_try(
        &mut self,
        body: ExprId,
        handlers: &[CatchBlock],
        fault: Option<ExprId>,
        finally: Option<ExprId>,
        returns_value: bool,
    ) -> RenderResult {
        self.out.write_keyword("try");
        self.out.write_line();
        self.emit_as_block(body, returns_value)?;

        for handler in handlers {
            self.out.write_line();
            self.out.write_keyword("catch");
            self.out.write_space();
            self.out.write_token("(");
            self.emit_type(&handler.test);
            if let Some(variable) = handler.variable {
                self.out.write_space();
                self.emit_var(variable);
            }
            self.out.write_token(")");
            if let Some(filter) = handler.filter {
                self.out.write_space();
                self.emit_keyword_parens("if", |r| r.emit(filter))?;
            }
            self.out.write_line();
            self.emit_as_block(handler.body, returns_value)?;
        }

        for (keyword, block) in [("fault", fault), ("finally", finally)] {
            if let Some(block) = block {
                self.out.write_line();
                self.out.write_keyword(keyword);
                self.out.write_line();
                self.emit_as_block(block, false)?;
            }
        }
        Ok(())
    }

    pub(super) fn emit_goto(
        &mut self,
        kind: GotoKind,
        target: LabelId,
        value: Option<ExprId>,
    ) -> RenderResult {
        match kind {
            GotoKind::Goto => {
                self.out.write_keyword("goto");
                self.out.write_space();
                self.emit_label_name(target);
                Ok(())
            }
            GotoKind::Return => {
                self.out.write_keyword("return");
                if let Some(value) = value {
                    self.out.write_space();
                    self.emit(value)?;
                }
                Ok(())
            }
            GotoKind::Break | GotoKind::Continue if value.is_some() => Err(
                RenderError::unsupported(format!("{kind:?} carrying a value")),
            ),
            GotoKind::Break => {
                self.out.write_keyword("break");
                Ok(())
            }
            GotoKind::Continue => {
                self.out.write_keyword("continue");
                Ok(())
            }
        }
    }

    /// `name:` one level shallower than the surrounding statements.
    pub(super) fn emit_label(&mut self, target: LabelId) {
        self.out.dedent();
        self.emit_label_name(target);
        self.out.write_token(":");
        self.out.indent();
    }
}

/// A false branch that chains as `else if`.
fn is_else_if(arena: &ExprArena, id: ExprId) -> bool {
    matches!(arena.kind(id), ExprKind::Conditional { .. }) && !is_ternary(arena, id)
}
