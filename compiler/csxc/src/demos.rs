//! Sample Trees
//!
//! A small catalogue of lambdas, each built into its own arena. The CLI
//! renders them by name.

use csx_ir::{
    BinaryOp, Constant, EnumType, ExprArena, ExprId, ExprKind, MemberRef, MethodRef, Type,
    UnaryOp, VarId,
};

/// One named sample.
pub struct Demo {
    pub name: &'static str,
    pub summary: &'static str,
    build: fn(&mut ExprArena) -> ExprId,
}

impl Demo {
    /// Build the sample into a fresh arena; returns the arena and the lambda.
    pub fn build(&self) -> (ExprArena, ExprId) {
        let mut arena = ExprArena::new();
        let lambda = (self.build)(&mut arena);
        (arena, lambda)
    }
}

pub const DEMOS: &[Demo] = &[
    Demo {
        name: "max",
        summary: "conditional expression",
        build: max,
    },
    Demo {
        name: "power",
        summary: "exponentiation lowered to Math.Pow",
        build: power,
    },
    Demo {
        name: "total",
        summary: "foreach over a generic list",
        build: total,
    },
    Demo {
        name: "adder",
        summary: "nested lambda capturing a parameter",
        build: adder,
    },
    Demo {
        name: "flags",
        summary: "flags enum combination",
        build: flags,
    },
    Demo {
        name: "checked",
        summary: "checked arithmetic and conversion",
        build: checked,
    },
    Demo {
        name: "anonymous",
        summary: "synthesized names for unnamed bindings",
        build: anonymous,
    },
];

/// Look up a sample by name.
pub fn find(name: &str) -> Option<&'static Demo> {
    DEMOS.iter().find(|demo| demo.name == name)
}

fn param(arena: &mut ExprArena, var: VarId) -> ExprId {
    let ty = arena.var(var).ty.clone();
    arena.alloc(ExprKind::Parameter(var), ty)
}

fn constant(arena: &mut ExprArena, value: Constant) -> ExprId {
    let ty = value.value_type();
    arena.alloc(ExprKind::Constant(value), ty)
}

fn binary(arena: &mut ExprArena, op: BinaryOp, left: ExprId, right: ExprId, ty: Type) -> ExprId {
    arena.alloc(ExprKind::Binary { op, left, right }, ty)
}

fn lambda(arena: &mut ExprArena, name: Option<&str>, params: Vec<VarId>, body: ExprId) -> ExprId {
    let ty = arena.ty(body).clone();
    arena.alloc(
        ExprKind::Lambda {
            name: name.map(str::to_owned),
            params,
            body,
        },
        ty,
    )
}

/// `a > b ? a : b`
fn max(arena: &mut ExprArena) -> ExprId {
    let a = arena.alloc_var(Some("a"), Type::INT);
    let b = arena.alloc_var(Some("b"), Type::INT);
    let pa = param(arena, a);
    let pb = param(arena, b);
    let test = binary(arena, BinaryOp::GreaterThan, pa, pb, Type::BOOL);
    let pick = arena.alloc(
        ExprKind::Conditional {
            test,
            if_true: pa,
            if_false: Some(pb),
        },
        Type::INT,
    );
    lambda(arena, Some("Max"), vec![a, b], pick)
}

fn power(arena: &mut ExprArena) -> ExprId {
    let x = arena.alloc_var(Some("x"), Type::DOUBLE);
    let px = param(arena, x);
    let three = constant(arena, Constant::Double(3.0));
    let cube = binary(arena, BinaryOp::Power, px, three, Type::DOUBLE);
    lambda(arena, Some("Cube"), vec![x], cube)
}

fn total(arena: &mut ExprArena) -> ExprId {
    let list = Type::generic(Some("System.Collections.Generic"), "List`1", vec![Type::INT]);
    let values = arena.alloc_var(Some("values"), list);
    let sum = arena.alloc_var(Some("total"), Type::INT);
    let value = arena.alloc_var(Some("value"), Type::INT);
    let p_values = param(arena, values);
    let p_sum = param(arena, sum);
    let p_value = param(arena, value);

    let zero = constant(arena, Constant::Int32(0));
    let init = binary(arena, BinaryOp::Assign, p_sum, zero, Type::INT);
    let add = binary(arena, BinaryOp::AddAssign, p_sum, p_value, Type::INT);
    let each = arena.alloc(
        ExprKind::ForEach {
            variable: value,
            collection: p_values,
            body: add,
        },
        Type::VOID,
    );
    let body = arena.alloc(
        ExprKind::Block {
            variables: vec![sum],
            exprs: vec![init, each, p_sum],
        },
        Type::INT,
    );
    lambda(arena, Some("Total"), vec![values], body)
}

fn adder(arena: &mut ExprArena) -> ExprId {
    let func = Type::generic(Some("System"), "Func`2", vec![Type::INT, Type::INT]);
    let n = arena.alloc_var(Some("n"), Type::INT);
    let x = arena.alloc_var(Some("x"), Type::INT);
    let pn = param(arena, n);
    let px = param(arena, x);
    let sum = binary(arena, BinaryOp::Add, px, pn, Type::INT);
    let inner = lambda(arena, None, vec![x], sum);
    arena.alloc(
        ExprKind::Lambda {
            name: Some("MakeAdder".to_owned()),
            params: vec![n],
            body: inner,
        },
        func,
    )
}

fn flags(arena: &mut ExprArena) -> ExprId {
    let access = EnumType::new(
        "Access",
        &[("None", 0), ("Read", 1), ("Write", 2), ("Execute", 4)],
    )
    .with_flags();
    let value = constant(
        arena,
        Constant::Enum {
            ty: access,
            value: 3,
        },
    );
    lambda(arena, Some("ReadWrite"), vec![], value)
}

/// `checked((long)x * 1000L)`, then `checked((int)scaled)` back down.
fn checked(arena: &mut ExprArena) -> ExprId {
    let x = arena.alloc_var(Some("x"), Type::INT);
    let scaled = arena.alloc_var(Some("scaled"), Type::LONG);
    let px = param(arena, x);
    let p_scaled = param(arena, scaled);

    let widened = arena.alloc(
        ExprKind::Unary {
            op: UnaryOp::Convert,
            operand: px,
        },
        Type::LONG,
    );
    let factor = constant(arena, Constant::Int64(1000));
    let product = binary(arena, BinaryOp::MultiplyChecked, widened, factor, Type::LONG);
    let store = binary(arena, BinaryOp::Assign, p_scaled, product, Type::LONG);
    let narrowed = arena.alloc(
        ExprKind::Unary {
            op: UnaryOp::ConvertChecked,
            operand: p_scaled,
        },
        Type::INT,
    );
    let body = arena.alloc(
        ExprKind::Block {
            variables: vec![scaled],
            exprs: vec![store, narrowed],
        },
        Type::INT,
    );
    lambda(arena, Some("Scale"), vec![x], body)
}

/// Unnamed parameter and local, with a static call on the local.
fn anonymous(arena: &mut ExprArena) -> ExprId {
    let input = arena.alloc_var(None, Type::STRING);
    let trimmed = arena.alloc_var(None, Type::STRING);
    let p_input = param(arena, input);
    let p_trimmed = param(arena, trimmed);

    let trim = arena.alloc(
        ExprKind::Call {
            receiver: Some(p_input),
            method: MethodRef::new(Type::STRING, "Trim"),
            args: vec![],
        },
        Type::STRING,
    );
    let store = binary(arena, BinaryOp::Assign, p_trimmed, trim, Type::STRING);
    let empty = arena.alloc(
        ExprKind::Call {
            receiver: None,
            method: MethodRef::new(Type::STRING, "IsNullOrEmpty"),
            args: vec![p_trimmed],
        },
        Type::BOOL,
    );
    let length = arena.alloc(
        ExprKind::MemberAccess {
            receiver: Some(p_trimmed),
            member: MemberRef::new(Type::STRING, "Length"),
        },
        Type::INT,
    );
    let zero = constant(arena, Constant::Int32(0));
    let pick = arena.alloc(
        ExprKind::Conditional {
            test: empty,
            if_true: zero,
            if_false: Some(length),
        },
        Type::INT,
    );
    let body = arena.alloc(
        ExprKind::Block {
            variables: vec![trimmed],
            exprs: vec![store, pick],
        },
        Type::INT,
    );
    lambda(arena, None, vec![input], body)
}
