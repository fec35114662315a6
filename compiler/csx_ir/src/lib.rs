//! csx IR - Expression Tree Types
//!
//! The input data model rendered by `csx_fmt`:
//! - Arena allocation for expressions, bindings and label targets
//! - Expression node kinds, operators and constants
//! - Type descriptors and member references
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: children are `ExprId(u32)` indices, not `Box<Expr>`
//! - **Identity by Index**: a `VarId` or `LabelId` *is* the identity of the
//!   binding or label, so anonymous bindings stay distinguishable
//! - **Read-only Consumers**: renderers borrow the arena immutably

mod arena;
pub mod ast;
mod ids;
mod types;

pub use arena::{ExprArena, LabelTarget, Variable};
pub use ast::{
    BinaryOp, CatchBlock, Constant, ElementInit, Expr, ExprKind, GotoKind, MemberBinding,
    MemberRef, MethodRef, SwitchCase, UnaryOp,
};
pub use ids::{ExprId, LabelId, VarId};
pub use types::{EnumMember, EnumType, NamedType, Primitive, Type};
