//! Binary and Unary Operators
//!
//! Operator node kinds as they appear in an expression tree. This is the
//! tree's vocabulary, not the surface syntax: several kinds (`Power`,
//! `Increment`, `ArrayLength`, ...) have no direct surface token and are
//! rewritten before rendering.

/// Binary operator kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    AddChecked,
    Subtract,
    SubtractChecked,
    Multiply,
    MultiplyChecked,
    Divide,
    Modulo,
    Power,

    // Bitwise
    And,
    Or,
    ExclusiveOr,
    LeftShift,
    RightShift,

    // Logical
    AndAlso,
    OrElse,

    // Comparison
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,

    // Other
    Coalesce,
    ArrayIndex,

    // Assignment
    Assign,
    AddAssign,
    AddAssignChecked,
    SubtractAssign,
    SubtractAssignChecked,
    MultiplyAssign,
    MultiplyAssignChecked,
    DivideAssign,
    ModuloAssign,
    PowerAssign,
    AndAssign,
    OrAssign,
    ExclusiveOrAssign,
    LeftShiftAssign,
    RightShiftAssign,
}

impl BinaryOp {
    /// Every binary operator kind.
    pub const ALL: [BinaryOp; 39] = [
        BinaryOp::Add,
        BinaryOp::AddChecked,
        BinaryOp::Subtract,
        BinaryOp::SubtractChecked,
        BinaryOp::Multiply,
        BinaryOp::MultiplyChecked,
        BinaryOp::Divide,
        BinaryOp::Modulo,
        BinaryOp::Power,
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::ExclusiveOr,
        BinaryOp::LeftShift,
        BinaryOp::RightShift,
        BinaryOp::AndAlso,
        BinaryOp::OrElse,
        BinaryOp::Equal,
        BinaryOp::NotEqual,
        BinaryOp::LessThan,
        BinaryOp::LessThanOrEqual,
        BinaryOp::GreaterThan,
        BinaryOp::GreaterThanOrEqual,
        BinaryOp::Coalesce,
        BinaryOp::ArrayIndex,
        BinaryOp::Assign,
        BinaryOp::AddAssign,
        BinaryOp::AddAssignChecked,
        BinaryOp::SubtractAssign,
        BinaryOp::SubtractAssignChecked,
        BinaryOp::MultiplyAssign,
        BinaryOp::MultiplyAssignChecked,
        BinaryOp::DivideAssign,
        BinaryOp::ModuloAssign,
        BinaryOp::PowerAssign,
        BinaryOp::AndAssign,
        BinaryOp::OrAssign,
        BinaryOp::ExclusiveOrAssign,
        BinaryOp::LeftShiftAssign,
        BinaryOp::RightShiftAssign,
    ];

    /// Overflow-checked arithmetic, rendered inside a `checked` context.
    pub const fn is_checked(self) -> bool {
        matches!(
            self,
            BinaryOp::AddChecked
                | BinaryOp::SubtractChecked
                | BinaryOp::MultiplyChecked
                | BinaryOp::AddAssignChecked
                | BinaryOp::SubtractAssignChecked
                | BinaryOp::MultiplyAssignChecked
        )
    }

    /// Plain or compound assignment.
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            BinaryOp::Assign
                | BinaryOp::AddAssign
                | BinaryOp::AddAssignChecked
                | BinaryOp::SubtractAssign
                | BinaryOp::SubtractAssignChecked
                | BinaryOp::MultiplyAssign
                | BinaryOp::MultiplyAssignChecked
                | BinaryOp::DivideAssign
                | BinaryOp::ModuloAssign
                | BinaryOp::PowerAssign
                | BinaryOp::AndAssign
                | BinaryOp::OrAssign
                | BinaryOp::ExclusiveOrAssign
                | BinaryOp::LeftShiftAssign
                | BinaryOp::RightShiftAssign
        )
    }
}

/// Unary operator kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    // Sign and complement
    Negate,
    NegateChecked,
    UnaryPlus,
    Not,
    OnesComplement,

    // Value-producing increment/decrement (`x + 1`, no store)
    Increment,
    Decrement,

    // Increment/decrement with store
    PreIncrementAssign,
    PreDecrementAssign,
    PostIncrementAssign,
    PostDecrementAssign,

    // Conversions
    Convert,
    ConvertChecked,
    TypeAs,

    // Derived tests and accessors
    ArrayLength,
    IsTrue,
    IsFalse,

    // Control
    Throw,

    // No surface syntax
    Quote,
    Unbox,
}

impl UnaryOp {
    /// Every unary operator kind.
    pub const ALL: [UnaryOp; 20] = [
        UnaryOp::Negate,
        UnaryOp::NegateChecked,
        UnaryOp::UnaryPlus,
        UnaryOp::Not,
        UnaryOp::OnesComplement,
        UnaryOp::Increment,
        UnaryOp::Decrement,
        UnaryOp::PreIncrementAssign,
        UnaryOp::PreDecrementAssign,
        UnaryOp::PostIncrementAssign,
        UnaryOp::PostDecrementAssign,
        UnaryOp::Convert,
        UnaryOp::ConvertChecked,
        UnaryOp::TypeAs,
        UnaryOp::ArrayLength,
        UnaryOp::IsTrue,
        UnaryOp::IsFalse,
        UnaryOp::Throw,
        UnaryOp::Quote,
        UnaryOp::Unbox,
    ];

    pub const fn is_checked(self) -> bool {
        matches!(self, UnaryOp::NegateChecked | UnaryOp::ConvertChecked)
    }

    /// Postfix `x++` / `x--` forms.
    pub const fn is_postfix(self) -> bool {
        matches!(
            self,
            UnaryOp::PostIncrementAssign | UnaryOp::PostDecrementAssign
        )
    }
}
