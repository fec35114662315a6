//! Construction
//!
//! `new` expressions, arrays, and collection/object initializers. Initializer
//! lists are always broken: one element or binding per line inside a braced
//! block that starts on its own line.

use csx_ir::{ElementInit, ExprId, MemberBinding, MemberRef, Type};

use super::Renderer;
use crate::emitter::{Formatter, Reference};
use crate::error::RenderResult;
use crate::types::push_rank;

impl<F: Formatter> Renderer<'_, F> {
    /// `new T(args)`
    pub(super) fn emit_new(&mut self, ty: &Type, args: &[ExprId]) -> RenderResult {
        self.out.write_keyword("new");
        self.out.write_space();
        self.emit_type(ty);
        self.emit_args("(", args, ")")
    }

    /// `new int[n, m]`, with nested array ranks of the element after the
    /// bounds: `new int[n][]`.
    pub(super) fn emit_new_array_bounds(&mut self, element: &Type, bounds: &[ExprId]) -> RenderResult {
        let mut base = element;
        let mut ranks = Vec::new();
        while let Type::Array { element, rank } = base {
            ranks.push(*rank);
            base = element;
        }
        let mut suffix = String::new();
        for rank in ranks.into_iter().rev() {
            push_rank(rank, &mut suffix);
        }

        self.out.write_keyword("new");
        self.out.write_space();
        self.emit_type(base);
        self.emit_args("[", bounds, "]")?;
        if !suffix.is_empty() {
            self.out.write_token(&suffix);
        }
        Ok(())
    }

    /// `new T[] { a, b }`
    pub(super) fn emit_new_array_init(&mut self, element: &Type, elements: &[ExprId]) -> RenderResult {
        self.out.write_keyword("new");
        self.out.write_space();
        self.emit_type(element);
        self.out.write_token("[]");
        self.out.write_space();
        self.out.write_token("{");
        self.out.write_space();
        for (i, &item) in elements.iter().enumerate() {
            if i > 0 {
                self.emit_separator();
            }
            self.emit(item)?;
        }
        if !elements.is_empty() {
            self.out.write_space();
        }
        self.out.write_token("}");
        Ok(())
    }

    pub(super) fn emit_list_init(
        &mut self,
        new_expr: ExprId,
        initializers: &[ElementInit],
    ) -> RenderResult {
        self.emit(new_expr)?;
        self.emit_element_block(initializers)
    }

    pub(super) fn emit_member_init(
        &mut self,
        new_expr: ExprId,
        bindings: &[MemberBinding],
    ) -> RenderResult {
        self.emit(new_expr)?;
        self.emit_binding_block(bindings)
    }

    fn emit_element_block(&mut self, initializers: &[ElementInit]) -> RenderResult {
        self.emit_initializer_block(initializers, Self::emit_element_init)
    }

    fn emit_binding_block(&mut self, bindings: &[MemberBinding]) -> RenderResult {
        self.emit_initializer_block(bindings, Self::emit_binding)
    }

    /// Line break, `{`, items separated by `,` one per line, `}`.
    fn emit_initializer_block<T>(
        &mut self,
        items: &[T],
        mut emit_item: impl FnMut(&mut Self, &T) -> RenderResult,
    ) -> RenderResult {
        self.out.write_line();
        self.out.write_token("{");
        self.out.write_line();
        self.indented(|r| {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    r.out.write_token(",");
                    r.out.write_line();
                }
                emit_item(r, item)?;
            }
            if !items.is_empty() {
                r.out.write_line();
            }
            Ok(())
        })?;
        self.out.write_token("}");
        Ok(())
    }

    /// `a`, or `{ a, b }` for a multi-argument `Add`.
    fn emit_element_init(&mut self, init: &ElementInit) -> RenderResult {
        if let [single] = init.args.as_slice() {
            return self.emit(*single);
        }
        self.out.write_token("{");
        self.out.write_space();
        for (i, &arg) in init.args.iter().enumerate() {
            if i > 0 {
                self.emit_separator();
            }
            self.emit(arg)?;
        }
        self.out.write_space();
        self.out.write_token("}");
        Ok(())
    }

    fn emit_binding(&mut self, binding: &MemberBinding) -> RenderResult {
        match binding {
            MemberBinding::Assignment { member, value } => {
                self.emit_binding_target(member);
                self.out.write_space();
                self.emit(*value)
            }
            MemberBinding::List {
                member,
                initializers,
            } => {
                self.emit_binding_target(member);
                self.emit_element_block(initializers)
            }
            MemberBinding::Member { member, bindings } => {
                self.emit_binding_target(member);
                self.emit_binding_block(bindings)
            }
        }
    }

    /// `Member =`
    fn emit_binding_target(&mut self, member: &MemberRef) {
        self.out.write_reference(
            &member.name,
            Reference::Member {
                declaring_type: &member.declaring_type,
                name: &member.name,
            },
        );
        self.out.write_space();
        self.out.write_token("=");
    }
}
