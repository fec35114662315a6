//! Expression nodes.
//!
//! Children are referenced by [`ExprId`]; bindings by [`VarId`]; jump targets
//! by [`LabelId`]. The only edges that are not ownership edges are label
//! references.

use crate::ast::{BinaryOp, Constant, MemberRef, MethodRef, UnaryOp};
use crate::ids::{ExprId, LabelId, VarId};
use crate::types::Type;

/// Expression node: a kind plus the semantic result type.
///
/// For a `Lambda` node, `ty` is the lambda's return type.
#[derive(Clone, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub ty: Type,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, ty: Type) -> Self {
        Expr { kind, ty }
    }
}

/// How a `Goto` node leaves the current position.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GotoKind {
    Goto,
    Return,
    Break,
    Continue,
}

/// One section of a `Switch`: several test values sharing one body.
#[derive(Clone, PartialEq, Debug)]
pub struct SwitchCase {
    pub test_values: Vec<ExprId>,
    pub body: ExprId,
}

/// One `catch` handler of a `Try`.
#[derive(Clone, PartialEq, Debug)]
pub struct CatchBlock {
    /// Exception type caught.
    pub test: Type,
    /// Variable bound to the caught exception, if any.
    pub variable: Option<VarId>,
    pub filter: Option<ExprId>,
    pub body: ExprId,
}

/// Arguments of one collection `Add` call in a list initializer.
#[derive(Clone, PartialEq, Debug)]
pub struct ElementInit {
    pub args: Vec<ExprId>,
}

/// One binding in an object initializer.
#[derive(Clone, PartialEq, Debug)]
pub enum MemberBinding {
    /// `member = value`
    Assignment { member: MemberRef, value: ExprId },
    /// `member = { elements }` (adds to an existing collection)
    List {
        member: MemberRef,
        initializers: Vec<ElementInit>,
    },
    /// `member = { bindings }` (initializes members of an existing object)
    Member {
        member: MemberRef,
        bindings: Vec<MemberBinding>,
    },
}

/// Expression kinds.
#[derive(Clone, PartialEq, Debug)]
pub enum ExprKind {
    /// Lambda: optional name, parameters, body.
    Lambda {
        name: Option<String>,
        params: Vec<VarId>,
        body: ExprId,
    },

    /// Block with scoped local variables.
    Block {
        variables: Vec<VarId>,
        exprs: Vec<ExprId>,
    },

    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    Unary {
        op: UnaryOp,
        operand: ExprId,
    },

    /// Rethrow of the exception being handled (`throw;`).
    Rethrow,

    /// `test ? if_true : if_false`, or `if`/`else` in statement form.
    Conditional {
        test: ExprId,
        if_true: ExprId,
        if_false: Option<ExprId>,
    },

    /// Unconditional loop.
    Loop { body: ExprId },

    Switch {
        value: ExprId,
        cases: Vec<SwitchCase>,
        default: Option<ExprId>,
    },

    Try {
        body: ExprId,
        handlers: Vec<CatchBlock>,
        fault: Option<ExprId>,
        finally: Option<ExprId>,
    },

    Goto {
        kind: GotoKind,
        target: LabelId,
        value: Option<ExprId>,
    },

    /// Position of a jump target.
    Label { target: LabelId },

    Constant(Constant),

    /// Reference to a parameter or local variable.
    Parameter(VarId),

    /// Default value of the node's type.
    Default,

    /// Field or property access; `receiver` is `None` for static members.
    MemberAccess {
        receiver: Option<ExprId>,
        member: MemberRef,
    },

    /// Method call; `receiver` is `None` for static methods.
    Call {
        receiver: Option<ExprId>,
        method: MethodRef,
        args: Vec<ExprId>,
    },

    /// Delegate invocation.
    Invoke { target: ExprId, args: Vec<ExprId> },

    /// Indexer access (`receiver[args]`).
    Index { receiver: ExprId, args: Vec<ExprId> },

    /// Constructor call; the constructed type is the node type.
    New { args: Vec<ExprId> },

    /// Array creation from dimension lengths.
    NewArrayBounds { element: Type, bounds: Vec<ExprId> },

    /// Single-dimension array creation from elements.
    NewArrayInit { element: Type, elements: Vec<ExprId> },

    /// Constructor call followed by a collection initializer.
    ListInit {
        new_expr: ExprId,
        initializers: Vec<ElementInit>,
    },

    /// Constructor call followed by an object initializer.
    MemberInit {
        new_expr: ExprId,
        bindings: Vec<MemberBinding>,
    },

    /// `operand is test`
    TypeIs { operand: ExprId, test: Type },

    /// Exact runtime type test.
    TypeEqual { operand: ExprId, test: Type },

    /// `for (variable = initializer; test; step) body`
    For {
        variable: VarId,
        initializer: ExprId,
        test: ExprId,
        step: ExprId,
        body: ExprId,
    },

    /// `foreach (variable in collection) body`
    ForEach {
        variable: VarId,
        collection: ExprId,
        body: ExprId,
    },

    While { test: ExprId, body: ExprId },

    DoWhile { body: ExprId, test: ExprId },

    /// `using (resource) body`, optionally binding the resource to `variable`.
    Using {
        variable: Option<VarId>,
        resource: ExprId,
        body: ExprId,
    },

    /// A custom node kind outside this vocabulary.
    Extension { name: String },
}

impl ExprKind {
    /// Short name of the node kind, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            ExprKind::Lambda { .. } => "Lambda",
            ExprKind::Block { .. } => "Block",
            ExprKind::Binary { .. } => "Binary",
            ExprKind::Unary { .. } => "Unary",
            ExprKind::Rethrow => "Rethrow",
            ExprKind::Conditional { .. } => "Conditional",
            ExprKind::Loop { .. } => "Loop",
            ExprKind::Switch { .. } => "Switch",
            ExprKind::Try { .. } => "Try",
            ExprKind::Goto { .. } => "Goto",
            ExprKind::Label { .. } => "Label",
            ExprKind::Constant(_) => "Constant",
            ExprKind::Parameter(_) => "Parameter",
            ExprKind::Default => "Default",
            ExprKind::MemberAccess { .. } => "MemberAccess",
            ExprKind::Call { .. } => "Call",
            ExprKind::Invoke { .. } => "Invoke",
            ExprKind::Index { .. } => "Index",
            ExprKind::New { .. } => "New",
            ExprKind::NewArrayBounds { .. } => "NewArrayBounds",
            ExprKind::NewArrayInit { .. } => "NewArrayInit",
            ExprKind::ListInit { .. } => "ListInit",
            ExprKind::MemberInit { .. } => "MemberInit",
            ExprKind::TypeIs { .. } => "TypeIs",
            ExprKind::TypeEqual { .. } => "TypeEqual",
            ExprKind::For { .. } => "For",
            ExprKind::ForEach { .. } => "ForEach",
            ExprKind::While { .. } => "While",
            ExprKind::DoWhile { .. } => "DoWhile",
            ExprKind::Using { .. } => "Using",
            ExprKind::Extension { .. } => "Extension",
        }
    }
}
