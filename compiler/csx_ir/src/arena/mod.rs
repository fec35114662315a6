//! Expression arena.
//!
//! Owns every node, binding and label target of one tree family. Nodes are
//! appended and never removed; an id handed out by an arena stays valid for
//! the arena's lifetime.

use crate::ast::{Expr, ExprKind};
use crate::ids::{ExprId, LabelId, VarId};
use crate::types::Type;

/// A parameter or local variable.
///
/// `name` is `None` for anonymous bindings; those get synthesized names at
/// render time.
#[derive(Clone, PartialEq, Debug)]
pub struct Variable {
    pub name: Option<String>,
    pub ty: Type,
}

/// A jump target referenced by Goto and Label nodes.
#[derive(Clone, PartialEq, Debug)]
pub struct LabelTarget {
    pub name: Option<String>,
    pub ty: Type,
}

/// Convert an arena length to a `u32` index.
///
/// # Panics
/// Panics if the arena grew past `u32::MAX` entries.
#[inline]
fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what} in arena (max {})", u32::MAX))
}

/// Arena for expression trees.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    vars: Vec<Variable>,
    labels: Vec<LabelTarget>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate an expression, returning its ID.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        id
    }

    /// Allocate a node from its parts.
    #[inline]
    pub fn alloc(&mut self, kind: ExprKind, ty: Type) -> ExprId {
        self.alloc_expr(Expr::new(kind, ty))
    }

    /// Allocate a binding. `name` may be `None` for an anonymous binding.
    pub fn alloc_var(&mut self, name: Option<&str>, ty: Type) -> VarId {
        let id = VarId::new(to_u32(self.vars.len(), "variables"));
        self.vars.push(Variable {
            name: name.map(str::to_owned),
            ty,
        });
        id
    }

    /// Allocate a label target.
    pub fn alloc_label(&mut self, name: Option<&str>, ty: Type) -> LabelId {
        let id = LabelId::new(to_u32(self.labels.len(), "labels"));
        self.labels.push(LabelTarget {
            name: name.map(str::to_owned),
            ty,
        });
        id
    }

    #[inline]
    pub fn get_expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn kind(&self, id: ExprId) -> &ExprKind {
        &self.exprs[id.index()].kind
    }

    #[inline]
    pub fn ty(&self, id: ExprId) -> &Type {
        &self.exprs[id.index()].ty
    }

    #[inline]
    pub fn var(&self, id: VarId) -> &Variable {
        &self.vars[id.index()]
    }

    #[inline]
    pub fn label(&self, id: LabelId) -> &LabelTarget {
        &self.labels[id.index()]
    }

    /// Number of expressions allocated.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
