//! Shared test utilities for renderer passes.
//!
//! Factory methods for building small trees in unit tests. Only compiled in
//! test builds.

use csx_ir::{
    BinaryOp, Constant, ExprArena, ExprId, ExprKind, GotoKind, LabelId, MemberRef, MethodRef,
    Type, UnaryOp, VarId,
};

use crate::emitter::TextFormatter;
use crate::renderer::Renderer;

/// Arena wrapper with one-line node constructors.
#[derive(Default)]
pub(crate) struct TreeBuilder {
    pub(crate) arena: ExprArena,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        <Self as Default>::default()
    }

    pub(crate) fn alloc(&mut self, kind: ExprKind, ty: Type) -> ExprId {
        self.arena.alloc(kind, ty)
    }

    pub(crate) fn var(&mut self, name: Option<&str>, ty: Type) -> VarId {
        self.arena.alloc_var(name, ty)
    }

    /// Reference to an existing binding.
    pub(crate) fn param(&mut self, var: VarId) -> ExprId {
        let ty = self.arena.var(var).ty.clone();
        self.alloc(ExprKind::Parameter(var), ty)
    }

    pub(crate) fn constant(&mut self, value: Constant) -> ExprId {
        let ty = value.value_type();
        self.alloc(ExprKind::Constant(value), ty)
    }

    pub(crate) fn int(&mut self, value: i32) -> ExprId {
        self.constant(Constant::Int32(value))
    }

    pub(crate) fn boolean(&mut self, value: bool) -> ExprId {
        self.constant(Constant::Bool(value))
    }

    pub(crate) fn string(&mut self, value: &str) -> ExprId {
        self.constant(Constant::String(value.to_owned()))
    }

    /// Binary node typed `bool` for comparisons and logic, left operand type otherwise.
    pub(crate) fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let ty = match op {
            BinaryOp::Equal
            | BinaryOp::NotEqual
            | BinaryOp::LessThan
            | BinaryOp::LessThanOrEqual
            | BinaryOp::GreaterThan
            | BinaryOp::GreaterThanOrEqual
            | BinaryOp::AndAlso
            | BinaryOp::OrElse => Type::BOOL,
            _ => self.arena.ty(left).clone(),
        };
        self.alloc(ExprKind::Binary { op, left, right }, ty)
    }

    pub(crate) fn unary(&mut self, op: UnaryOp, operand: ExprId, ty: Type) -> ExprId {
        self.alloc(ExprKind::Unary { op, operand }, ty)
    }

    pub(crate) fn block(&mut self, variables: Vec<VarId>, exprs: Vec<ExprId>, ty: Type) -> ExprId {
        self.alloc(ExprKind::Block { variables, exprs }, ty)
    }

    pub(crate) fn cond(
        &mut self,
        test: ExprId,
        if_true: ExprId,
        if_false: Option<ExprId>,
        ty: Type,
    ) -> ExprId {
        self.alloc(
            ExprKind::Conditional {
                test,
                if_true,
                if_false,
            },
            ty,
        )
    }

    pub(crate) fn lambda(
        &mut self,
        name: Option<&str>,
        params: Vec<VarId>,
        body: ExprId,
        return_type: Type,
    ) -> ExprId {
        self.alloc(
            ExprKind::Lambda {
                name: name.map(str::to_owned),
                params,
                body,
            },
            return_type,
        )
    }

    pub(crate) fn static_call(
        &mut self,
        declaring_type: Type,
        name: &str,
        args: Vec<ExprId>,
        ty: Type,
    ) -> ExprId {
        self.alloc(
            ExprKind::Call {
                receiver: None,
                method: MethodRef::new(declaring_type, name),
                args,
            },
            ty,
        )
    }

    pub(crate) fn call(
        &mut self,
        receiver: ExprId,
        name: &str,
        args: Vec<ExprId>,
        ty: Type,
    ) -> ExprId {
        let declaring_type = self.arena.ty(receiver).clone();
        self.alloc(
            ExprKind::Call {
                receiver: Some(receiver),
                method: MethodRef::new(declaring_type, name),
                args,
            },
            ty,
        )
    }

    pub(crate) fn member(&mut self, receiver: ExprId, name: &str, ty: Type) -> ExprId {
        let declaring_type = self.arena.ty(receiver).clone();
        self.alloc(
            ExprKind::MemberAccess {
                receiver: Some(receiver),
                member: MemberRef::new(declaring_type, name),
            },
            ty,
        )
    }

    pub(crate) fn label_target(&mut self, name: Option<&str>) -> LabelId {
        self.arena.alloc_label(name, Type::VOID)
    }

    pub(crate) fn goto(&mut self, kind: GotoKind, target: LabelId, value: Option<ExprId>) -> ExprId {
        self.alloc(ExprKind::Goto { kind, target, value }, Type::VOID)
    }

    pub(crate) fn label(&mut self, target: LabelId) -> ExprId {
        self.alloc(ExprKind::Label { target }, Type::VOID)
    }

    pub(crate) fn default(&mut self, ty: Type) -> ExprId {
        self.alloc(ExprKind::Default, ty)
    }

    /// `Console.WriteLine(arg)`, a typical void statement.
    pub(crate) fn write_line(&mut self, arg: ExprId) -> ExprId {
        self.static_call(
            Type::named(Some("System"), "Console"),
            "WriteLine",
            vec![arg],
            Type::VOID,
        )
    }

    /// Render `lambda` with a fresh renderer, panicking on error.
    pub(crate) fn render(&self, lambda: ExprId) -> String {
        let mut renderer = Renderer::new(&self.arena, TextFormatter::new());
        match renderer.render_lambda(lambda) {
            Ok(()) => renderer.into_formatter().output(),
            Err(err) => panic!("render failed: {err}"),
        }
    }

    /// Render a single expression in expression position.
    pub(crate) fn render_expr(&self, id: ExprId) -> String {
        let mut renderer = Renderer::new(&self.arena, TextFormatter::new());
        match renderer.render_expression(id) {
            Ok(()) => renderer.into_formatter().output(),
            Err(err) => panic!("render failed: {err}"),
        }
    }
}
