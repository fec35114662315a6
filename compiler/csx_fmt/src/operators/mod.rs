//! Operator Tokens and Parenthesization
//!
//! Token lookup is table-driven: a kind missing from the table has no infix
//! or prefix spelling and is rejected rather than guessed.
//!
//! Parenthesization is conservative. Operands are wrapped whenever their
//! node kind is an operator of any precedence, so output never depends on a
//! precedence table being right, at the cost of some redundant parentheses.

use csx_ir::{BinaryOp, ExprArena, ExprId, ExprKind, UnaryOp};

use crate::classify::is_ternary;
use crate::error::{RenderError, RenderResult};
use crate::sugar::{Lowered, Operand};

/// Infix token for each binary kind that has one.
///
/// `Power`, `PowerAssign` and `ArrayIndex` are absent: the first two are
/// lowered to calls and the last renders as an indexer.
pub const BINARY_TOKENS: [(BinaryOp, &str); 36] = [
    (BinaryOp::Add, "+"),
    (BinaryOp::AddChecked, "+"),
    (BinaryOp::Subtract, "-"),
    (BinaryOp::SubtractChecked, "-"),
    (BinaryOp::Multiply, "*"),
    (BinaryOp::MultiplyChecked, "*"),
    (BinaryOp::Divide, "/"),
    (BinaryOp::Modulo, "%"),
    (BinaryOp::And, "&"),
    (BinaryOp::Or, "|"),
    (BinaryOp::ExclusiveOr, "^"),
    (BinaryOp::LeftShift, "<<"),
    (BinaryOp::RightShift, ">>"),
    (BinaryOp::AndAlso, "&&"),
    (BinaryOp::OrElse, "||"),
    (BinaryOp::Equal, "=="),
    (BinaryOp::NotEqual, "!="),
    (BinaryOp::LessThan, "<"),
    (BinaryOp::LessThanOrEqual, "<="),
    (BinaryOp::GreaterThan, ">"),
    (BinaryOp::GreaterThanOrEqual, ">="),
    (BinaryOp::Coalesce, "??"),
    (BinaryOp::Assign, "="),
    (BinaryOp::AddAssign, "+="),
    (BinaryOp::AddAssignChecked, "+="),
    (BinaryOp::SubtractAssign, "-="),
    (BinaryOp::SubtractAssignChecked, "-="),
    (BinaryOp::MultiplyAssign, "*="),
    (BinaryOp::MultiplyAssignChecked, "*="),
    (BinaryOp::DivideAssign, "/="),
    (BinaryOp::ModuloAssign, "%="),
    (BinaryOp::AndAssign, "&="),
    (BinaryOp::OrAssign, "|="),
    (BinaryOp::ExclusiveOrAssign, "^="),
    (BinaryOp::LeftShiftAssign, "<<="),
    (BinaryOp::RightShiftAssign, ">>="),
];

/// Prefix or postfix token for each unary kind that has one.
pub const UNARY_TOKENS: [(UnaryOp, &str); 9] = [
    (UnaryOp::Negate, "-"),
    (UnaryOp::NegateChecked, "-"),
    (UnaryOp::UnaryPlus, "+"),
    (UnaryOp::Not, "!"),
    (UnaryOp::OnesComplement, "~"),
    (UnaryOp::PreIncrementAssign, "++"),
    (UnaryOp::PreDecrementAssign, "--"),
    (UnaryOp::PostIncrementAssign, "++"),
    (UnaryOp::PostDecrementAssign, "--"),
];

/// Token for a binary operator.
pub fn binary_token(op: BinaryOp) -> RenderResult<&'static str> {
    BINARY_TOKENS
        .iter()
        .find(|(kind, _)| *kind == op)
        .map(|&(_, token)| token)
        .ok_or_else(|| RenderError::unsupported(format!("binary operator {op:?}")))
}

/// Token for a unary operator.
pub fn unary_token(op: UnaryOp) -> RenderResult<&'static str> {
    UNARY_TOKENS
        .iter()
        .find(|(kind, _)| *kind == op)
        .map(|&(_, token)| token)
        .ok_or_else(|| RenderError::unsupported(format!("unary operator {op:?}")))
}

/// Binary kinds wrapped in parentheses when used as an operand.
///
/// Every kind except indexing, which binds as tightly as member access.
#[inline]
fn binary_needs_parens(op: BinaryOp) -> bool {
    !matches!(op, BinaryOp::ArrayIndex)
}

/// Unary kinds wrapped in parentheses when used as an operand.
#[inline]
fn unary_needs_parens(op: UnaryOp) -> bool {
    matches!(
        op,
        UnaryOp::Negate
            | UnaryOp::NegateChecked
            | UnaryOp::UnaryPlus
            | UnaryOp::Not
            | UnaryOp::OnesComplement
            | UnaryOp::Increment
            | UnaryOp::Decrement
            | UnaryOp::PreIncrementAssign
            | UnaryOp::PreDecrementAssign
            | UnaryOp::PostIncrementAssign
            | UnaryOp::PostDecrementAssign
            | UnaryOp::IsTrue
            | UnaryOp::IsFalse
            | UnaryOp::Convert
            | UnaryOp::ConvertChecked
            | UnaryOp::TypeAs
            | UnaryOp::Throw
    )
}

/// Check if a node needs parentheses as an operand or receiver.
pub fn needs_parens(arena: &ExprArena, id: ExprId) -> bool {
    match arena.kind(id) {
        ExprKind::Binary { op, .. } => binary_needs_parens(*op),
        ExprKind::Unary { op, .. } => unary_needs_parens(*op),
        ExprKind::Conditional { .. } => is_ternary(arena, id),
        ExprKind::TypeIs { .. } | ExprKind::TypeEqual { .. } | ExprKind::Lambda { .. } => true,
        _ => false,
    }
}

/// Check if a lowered shape needs parentheses as an operand.
pub fn lowered_needs_parens(lowered: &Lowered) -> bool {
    matches!(lowered, Lowered::Binary { .. } | Lowered::Assign { .. })
}

/// Check if a lowered operand needs parentheses.
pub fn operand_needs_parens(arena: &ExprArena, operand: &Operand) -> bool {
    match operand {
        Operand::Expr(id) => needs_parens(arena, *id),
        Operand::Constant(_) => false,
        Operand::Lowered(lowered) => lowered_needs_parens(lowered),
    }
}

#[cfg(test)]
mod tests;
