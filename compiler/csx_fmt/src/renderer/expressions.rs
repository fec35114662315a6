//! Expression Rendering
//!
//! Operators, casts, member access, calls and the primitive shapes produced
//! by sugar lowering.

use csx_ir::{
    BinaryOp, Constant, ExprArena, ExprId, ExprKind, MemberRef, MethodRef, Primitive, Type,
    UnaryOp,
};

use super::Renderer;
use crate::emitter::{Formatter, Reference};
use crate::error::RenderResult;
use crate::operators::{binary_token, operand_needs_parens, unary_token};
use crate::sugar::{Lowered, Operand};

impl<F: Formatter> Renderer<'_, F> {
    pub(super) fn emit_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> RenderResult {
        if op == BinaryOp::ArrayIndex {
            self.emit_wrapped(left)?;
            self.out.write_token("[");
            self.emit(right)?;
            self.out.write_token("]");
            return Ok(());
        }
        if op.is_checked() {
            self.emit_checked(|r| r.emit_infix(op, left, right))
        } else {
            self.emit_infix(op, left, right)
        }
    }

    fn emit_infix(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> RenderResult {
        let token = binary_token(op)?;
        self.emit_wrapped(left)?;
        self.out.write_space();
        self.out.write_token(token);
        self.out.write_space();
        self.emit_wrapped(right)
    }

    /// `checked(...)`
    fn emit_checked(&mut self, f: impl FnOnce(&mut Self) -> RenderResult) -> RenderResult {
        self.out.write_keyword("checked");
        self.out.write_token("(");
        f(self)?;
        self.out.write_token(")");
        Ok(())
    }

    pub(super) fn emit_unary(&mut self, id: ExprId, op: UnaryOp, operand: ExprId) -> RenderResult {
        match op {
            UnaryOp::Convert => self.emit_cast(id, operand),
            UnaryOp::ConvertChecked => self.emit_checked(|r| r.emit_cast(id, operand)),
            UnaryOp::TypeAs => {
                let arena = self.arena;
                self.emit_wrapped(operand)?;
                self.out.write_space();
                self.out.write_keyword("as");
                self.out.write_space();
                self.emit_type(arena.ty(id));
                Ok(())
            }
            UnaryOp::Throw => {
                self.out.write_keyword("throw");
                self.out.write_space();
                self.emit(operand)
            }
            UnaryOp::NegateChecked => self.emit_checked(|r| r.emit_prefix(op, operand)),
            _ if op.is_postfix() => {
                let token = unary_token(op)?;
                self.emit_wrapped(operand)?;
                self.out.write_token(token);
                Ok(())
            }
            _ => self.emit_prefix(op, operand),
        }
    }

    /// `(T)operand`
    fn emit_cast(&mut self, id: ExprId, operand: ExprId) -> RenderResult {
        let arena = self.arena;
        self.out.write_token("(");
        self.emit_type(arena.ty(id));
        self.out.write_token(")");
        self.emit_wrapped(operand)
    }

    fn emit_prefix(&mut self, op: UnaryOp, operand: ExprId) -> RenderResult {
        let arena = self.arena;
        let token = if op == UnaryOp::Not && is_integral(arena.ty(operand)) {
            "~"
        } else {
            unary_token(op)?
        };
        self.out.write_token(token);
        let signed_literal =
            matches!(op, UnaryOp::Negate | UnaryOp::NegateChecked | UnaryOp::UnaryPlus)
                && is_negative_literal(arena, operand);
        if signed_literal {
            self.out.write_token("(");
            self.emit(operand)?;
            self.out.write_token(")");
            Ok(())
        } else {
            self.emit_wrapped(operand)
        }
    }

    /// `operand is T`
    pub(super) fn emit_type_is(&mut self, operand: ExprId, test: &Type) -> RenderResult {
        self.emit_wrapped(operand)?;
        self.out.write_space();
        self.out.write_keyword("is");
        self.out.write_space();
        self.emit_type(test);
        Ok(())
    }

    /// `default(T)`
    pub(super) fn emit_default(&mut self, ty: &Type) {
        self.out.write_keyword("default");
        self.out.write_token("(");
        self.emit_type(ty);
        self.out.write_token(")");
    }

    /// Receiver, or the declaring type of a static member, then `.`.
    fn emit_receiver(&mut self, receiver: Option<ExprId>, declaring_type: &Type) -> RenderResult {
        match receiver {
            Some(receiver) if is_negative_literal(self.arena, receiver) => {
                self.out.write_token("(");
                self.emit(receiver)?;
                self.out.write_token(")");
            }
            Some(receiver) => self.emit_wrapped(receiver)?,
            None => self.emit_type(declaring_type),
        }
        self.out.write_token(".");
        Ok(())
    }

    fn emit_member_name(&mut self, declaring_type: &Type, name: &str) {
        self.out.write_reference(
            name,
            Reference::Member {
                declaring_type,
                name,
            },
        );
    }

    fn emit_generic_arguments(&mut self, arguments: &[Type]) {
        if arguments.is_empty() {
            return;
        }
        self.out.write_token("<");
        for (i, argument) in arguments.iter().enumerate() {
            if i > 0 {
                self.emit_separator();
            }
            self.emit_type(argument);
        }
        self.out.write_token(">");
    }

    pub(super) fn emit_member_access(
        &mut self,
        receiver: Option<ExprId>,
        member: &MemberRef,
    ) -> RenderResult {
        self.emit_receiver(receiver, &member.declaring_type)?;
        self.emit_member_name(&member.declaring_type, &member.name);
        Ok(())
    }

    pub(super) fn emit_call(
        &mut self,
        receiver: Option<ExprId>,
        method: &MethodRef,
        args: &[ExprId],
    ) -> RenderResult {
        self.emit_receiver(receiver, &method.declaring_type)?;
        self.emit_member_name(&method.declaring_type, &method.name);
        self.emit_generic_arguments(&method.generic_arguments);
        self.emit_args("(", args, ")")
    }

    /// Emit the primitive shape a sugar node lowered to.
    pub(super) fn emit_lowered(&mut self, lowered: &Lowered) -> RenderResult {
        match lowered {
            Lowered::Binary { op, left, right } => {
                let token = binary_token(*op)?;
                self.emit_operand(left)?;
                self.out.write_space();
                self.out.write_token(token);
                self.out.write_space();
                self.emit_operand(right)
            }
            Lowered::Assign { target, value } => {
                self.emit_wrapped(*target)?;
                self.out.write_space();
                self.out.write_token("=");
                self.out.write_space();
                self.emit_lowered(value)
            }
            Lowered::StaticCall { method, args } => {
                self.emit_type(&method.declaring_type);
                self.out.write_token(".");
                self.emit_member_name(&method.declaring_type, &method.name);
                self.emit_operand_args(args)
            }
            Lowered::InstanceCall {
                receiver,
                method,
                args,
            } => {
                let signed = match receiver {
                    Operand::Expr(id) => is_negative_literal(self.arena, *id),
                    Operand::Constant(constant) => is_negative(constant),
                    Operand::Lowered(_) => false,
                };
                if signed {
                    self.out.write_token("(");
                }
                self.emit_operand(receiver)?;
                if signed {
                    self.out.write_token(")");
                }
                self.out.write_token(".");
                self.emit_member_name(&method.declaring_type, &method.name);
                self.emit_operand_args(args)
            }
            Lowered::Member { receiver, member } => {
                self.emit_member_access(Some(*receiver), member)
            }
        }
    }

    fn emit_operand(&mut self, operand: &Operand) -> RenderResult {
        let parens = operand_needs_parens(self.arena, operand);
        if parens {
            self.out.write_token("(");
        }
        match operand {
            Operand::Expr(id) => self.emit(*id)?,
            Operand::Constant(constant) => self.emit_constant(constant)?,
            Operand::Lowered(lowered) => self.emit_lowered(lowered)?,
        }
        if parens {
            self.out.write_token(")");
        }
        Ok(())
    }

    fn emit_operand_args(&mut self, args: &[Operand]) -> RenderResult {
        self.out.write_token("(");
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.emit_separator();
            }
            self.emit_operand(arg)?;
        }
        self.out.write_token(")");
        Ok(())
    }
}

fn is_integral(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Primitive(
            Primitive::SByte
                | Primitive::Byte
                | Primitive::Int16
                | Primitive::UInt16
                | Primitive::Int32
                | Primitive::UInt32
                | Primitive::Int64
                | Primitive::UInt64
        )
    )
}

/// A literal whose spelling starts with `-`; it binds looser than `.` and
/// prefix operators.
fn is_negative_literal(arena: &ExprArena, id: ExprId) -> bool {
    matches!(arena.kind(id), ExprKind::Constant(c) if is_negative(c))
}

fn is_negative(constant: &Constant) -> bool {
    match constant {
        Constant::SByte(v) => *v < 0,
        Constant::Int16(v) => *v < 0,
        Constant::Int32(v) => *v < 0,
        Constant::Int64(v) => *v < 0,
        Constant::Single(v) => v.is_sign_negative(),
        Constant::Double(v) => v.is_sign_negative(),
        Constant::Decimal(text) => text.starts_with('-'),
        _ => false,
    }
}
