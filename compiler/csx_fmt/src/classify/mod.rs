//! Statement/Expression Classification
//!
//! Decides, per node kind, how a node sits in a statement slot:
//!
//! - [`is_statement`]: the node brings its own line structure (`if`, loops,
//!   `switch`, `try`, nested blocks) and takes no `;`.
//! - [`is_actual_statement`]: the node is an ordinary statement inside a
//!   block. It gets a `;` and may receive an implicit `return`.
//!
//! The two differ on labels: a label is neither. It never produces a value
//! and never takes a terminator.

use csx_ir::{ExprArena, ExprId, ExprKind, UnaryOp};

/// A Conditional rendered as `test ? a : b`.
///
/// Requires a non-void result and no Block-shaped branch.
pub fn is_ternary(arena: &ExprArena, id: ExprId) -> bool {
    let ExprKind::Conditional {
        if_true, if_false, ..
    } = arena.kind(id)
    else {
        return false;
    };
    !arena.ty(id).is_void()
        && !is_block(arena, *if_true)
        && !if_false.is_some_and(|branch| is_block(arena, branch))
}

/// Node renders with its own line structure and no terminator.
pub fn is_statement(arena: &ExprArena, id: ExprId) -> bool {
    match arena.kind(id) {
        ExprKind::Conditional { .. } => !is_ternary(arena, id),
        ExprKind::Try { .. }
        | ExprKind::Loop { .. }
        | ExprKind::Switch { .. }
        | ExprKind::Block { .. }
        | ExprKind::For { .. }
        | ExprKind::ForEach { .. }
        | ExprKind::While { .. }
        | ExprKind::DoWhile { .. }
        | ExprKind::Using { .. } => true,
        _ => false,
    }
}

/// Node is an ordinary statement: terminated with `;`, eligible for an
/// implicit `return`.
pub fn is_actual_statement(arena: &ExprArena, id: ExprId) -> bool {
    match arena.kind(id) {
        ExprKind::Label { .. } => false,
        _ => !is_statement(arena, id),
    }
}

/// Node transfers control and must not be prefixed with `return`.
pub fn is_jump(arena: &ExprArena, id: ExprId) -> bool {
    matches!(
        arena.kind(id),
        ExprKind::Goto { .. }
            | ExprKind::Rethrow
            | ExprKind::Unary {
                op: UnaryOp::Throw,
                ..
            }
    )
}

/// A void `default` in statement position: renders as nothing.
pub fn is_empty_statement(arena: &ExprArena, id: ExprId) -> bool {
    matches!(arena.kind(id), ExprKind::Default) && arena.ty(id).is_void()
}

#[inline]
pub fn is_block(arena: &ExprArena, id: ExprId) -> bool {
    matches!(arena.kind(id), ExprKind::Block { .. })
}

/// Last statement a body ends with, looking through blocks.
pub fn last_statement(arena: &ExprArena, id: ExprId) -> Option<ExprId> {
    match arena.kind(id) {
        ExprKind::Block { exprs, .. } => exprs
            .iter()
            .rev()
            .copied()
            .find(|&child| !is_empty_statement(arena, child))
            .and_then(|child| last_statement(arena, child)),
        _ if is_empty_statement(arena, id) => None,
        _ => Some(id),
    }
}

/// Body cannot complete normally because its last statement jumps.
pub fn ends_in_jump(arena: &ExprArena, id: ExprId) -> bool {
    last_statement(arena, id).is_some_and(|last| is_jump(arena, last))
}
