//! Tree construction shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use csx_ir::{BinaryOp, Constant, ExprArena, ExprId, ExprKind, MethodRef, Type, UnaryOp, VarId};

#[derive(Default)]
pub struct Tree {
    pub arena: ExprArena,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node(&mut self, kind: ExprKind, ty: Type) -> ExprId {
        self.arena.alloc(kind, ty)
    }

    pub fn var(&mut self, name: Option<&str>, ty: Type) -> VarId {
        self.arena.alloc_var(name, ty)
    }

    pub fn param(&mut self, var: VarId) -> ExprId {
        let ty = self.arena.var(var).ty.clone();
        self.node(ExprKind::Parameter(var), ty)
    }

    pub fn constant(&mut self, value: Constant) -> ExprId {
        let ty = value.value_type();
        self.node(ExprKind::Constant(value), ty)
    }

    pub fn int(&mut self, value: i32) -> ExprId {
        self.constant(Constant::Int32(value))
    }

    pub fn string(&mut self, value: &str) -> ExprId {
        self.constant(Constant::String(value.to_owned()))
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId, ty: Type) -> ExprId {
        self.node(ExprKind::Binary { op, left, right }, ty)
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId, ty: Type) -> ExprId {
        self.node(ExprKind::Unary { op, operand }, ty)
    }

    pub fn assign(&mut self, target: ExprId, value: ExprId) -> ExprId {
        let ty = self.arena.ty(target).clone();
        self.binary(BinaryOp::Assign, target, value, ty)
    }

    pub fn block(&mut self, variables: Vec<VarId>, exprs: Vec<ExprId>, ty: Type) -> ExprId {
        self.node(ExprKind::Block { variables, exprs }, ty)
    }

    pub fn lambda(&mut self, name: &str, params: Vec<VarId>, body: ExprId, ret: Type) -> ExprId {
        let name = (!name.is_empty()).then(|| name.to_owned());
        self.node(ExprKind::Lambda { name, params, body }, ret)
    }

    pub fn static_call(
        &mut self,
        declaring_type: Type,
        name: &str,
        args: Vec<ExprId>,
        ty: Type,
    ) -> ExprId {
        self.node(
            ExprKind::Call {
                receiver: None,
                method: MethodRef::new(declaring_type, name),
                args,
            },
            ty,
        )
    }

    pub fn write_line(&mut self, arg: ExprId) -> ExprId {
        self.static_call(
            Type::named(Some("System"), "Console"),
            "WriteLine",
            vec![arg],
            Type::VOID,
        )
    }
}
