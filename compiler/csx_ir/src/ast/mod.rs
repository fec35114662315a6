//! Expression tree node types.

mod constant;
mod expr;
mod members;
mod operators;

pub use constant::Constant;
pub use expr::{
    CatchBlock, ElementInit, Expr, ExprKind, GotoKind, MemberBinding, SwitchCase,
};
pub use members::{MemberRef, MethodRef};
pub use operators::{BinaryOp, UnaryOp};
