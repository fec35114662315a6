//! Sugar Lowering
//!
//! Rewrites derived node kinds into primitive shapes before emission:
//!
//! | Node | Lowered |
//! |------|---------|
//! | `Power(a, b)` | `Math.Pow(a, b)` |
//! | `PowerAssign(a, b)` | `a = Math.Pow(a, b)` |
//! | `Increment(x)` / `Decrement(x)` | `x + 1` / `x - 1` |
//! | `ArrayLength(x)` | `x.Length` |
//! | `IsTrue(x)` / `IsFalse(x)` | `x == true` / `x == false` |
//! | `TypeEqual(x, T)` | `x.GetType() == typeof(T)` |
//!
//! The arena is borrowed immutably, so a lowering is a separate value whose
//! leaves point back at the original children. An operand that appears twice
//! in the lowered shape (the target of `PowerAssign`) is rendered, and
//! therefore evaluated, twice.

use csx_ir::{
    BinaryOp, Constant, ExprArena, ExprId, ExprKind, MemberRef, MethodRef, Primitive, Type,
    UnaryOp,
};

/// A primitive shape standing in for a sugar node.
#[derive(Clone, Debug, PartialEq)]
pub enum Lowered {
    /// `left op right`
    Binary {
        op: BinaryOp,
        left: Operand,
        right: Operand,
    },
    /// `target = value`
    Assign { target: ExprId, value: Box<Lowered> },
    /// `Type.Method(args)`
    StaticCall { method: MethodRef, args: Vec<Operand> },
    /// `receiver.Method(args)`
    InstanceCall {
        receiver: Operand,
        method: MethodRef,
        args: Vec<Operand>,
    },
    /// `receiver.Member`
    Member { receiver: ExprId, member: MemberRef },
}

/// A leaf of a lowered shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    /// An original child node.
    Expr(ExprId),
    /// A constant introduced by the rewrite.
    Constant(Constant),
    /// A nested lowered shape.
    Lowered(Box<Lowered>),
}

/// Lower `id` if it is a sugar node; `None` for primitive kinds.
pub fn lower(arena: &ExprArena, id: ExprId) -> Option<Lowered> {
    let lowered = match arena.kind(id) {
        ExprKind::Binary { op, left, right } => lower_binary(*op, *left, *right)?,
        ExprKind::Unary { op, operand } => lower_unary(arena, *op, *operand)?,
        ExprKind::TypeEqual { operand, test } => Lowered::Binary {
            op: BinaryOp::Equal,
            left: Operand::Lowered(Box::new(Lowered::InstanceCall {
                receiver: Operand::Expr(*operand),
                method: MethodRef::new(Type::OBJECT, "GetType"),
                args: Vec::new(),
            })),
            right: Operand::Constant(Constant::Type(test.clone())),
        },
        _ => return None,
    };
    tracing::trace!(expr = ?id, kind = arena.kind(id).name(), "lowered sugar node");
    Some(lowered)
}

fn lower_binary(op: BinaryOp, left: ExprId, right: ExprId) -> Option<Lowered> {
    match op {
        BinaryOp::Power => Some(math_pow(left, right)),
        BinaryOp::PowerAssign => Some(Lowered::Assign {
            target: left,
            value: Box::new(math_pow(left, right)),
        }),
        _ => None,
    }
}

fn lower_unary(arena: &ExprArena, op: UnaryOp, operand: ExprId) -> Option<Lowered> {
    let lowered = match op {
        UnaryOp::Increment | UnaryOp::Decrement => Lowered::Binary {
            op: if op == UnaryOp::Increment {
                BinaryOp::Add
            } else {
                BinaryOp::Subtract
            },
            left: Operand::Expr(operand),
            right: Operand::Constant(one_of(arena.ty(operand))),
        },
        UnaryOp::ArrayLength => Lowered::Member {
            receiver: operand,
            member: MemberRef::new(arena.ty(operand).clone(), "Length"),
        },
        UnaryOp::IsTrue | UnaryOp::IsFalse => Lowered::Binary {
            op: BinaryOp::Equal,
            left: Operand::Expr(operand),
            right: Operand::Constant(Constant::Bool(op == UnaryOp::IsTrue)),
        },
        _ => return None,
    };
    Some(lowered)
}

fn math_pow(left: ExprId, right: ExprId) -> Lowered {
    Lowered::StaticCall {
        method: MethodRef::new(Type::named(Some("System"), "Math"), "Pow"),
        args: vec![Operand::Expr(left), Operand::Expr(right)],
    }
}

/// The constant `1` in the operand's own numeric type.
fn one_of(ty: &Type) -> Constant {
    match ty {
        Type::Primitive(Primitive::SByte) => Constant::SByte(1),
        Type::Primitive(Primitive::Byte) => Constant::Byte(1),
        Type::Primitive(Primitive::Int16) => Constant::Int16(1),
        Type::Primitive(Primitive::UInt16) => Constant::UInt16(1),
        Type::Primitive(Primitive::UInt32) => Constant::UInt32(1),
        Type::Primitive(Primitive::Int64) => Constant::Int64(1),
        Type::Primitive(Primitive::UInt64) => Constant::UInt64(1),
        Type::Primitive(Primitive::Single) => Constant::Single(1.0),
        Type::Primitive(Primitive::Double) => Constant::Double(1.0),
        Type::Primitive(Primitive::Decimal) => Constant::Decimal("1".to_owned()),
        _ => Constant::Int32(1),
    }
}
