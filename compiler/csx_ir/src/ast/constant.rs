//! Constant values.

use crate::types::{EnumType, Type};

/// A literal value held by a `Constant` node.
///
/// Integral widths are kept distinct so each renders with its own suffix.
/// Decimal values are carried as their canonical text; the tree never does
/// arithmetic on them.
#[derive(Clone, PartialEq, Debug)]
pub enum Constant {
    Null,
    Bool(bool),
    Char(char),
    String(String),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Single(f32),
    Double(f64),
    Decimal(String),
    /// A value of an enum type, by underlying integral value.
    Enum { ty: EnumType, value: i64 },
    /// A type token (`typeof(T)`).
    Type(Type),
}

impl Constant {
    /// Type of the value this constant produces.
    pub fn value_type(&self) -> Type {
        use crate::types::Primitive as P;
        match self {
            Constant::Null => Type::OBJECT,
            Constant::Bool(_) => Type::Primitive(P::Bool),
            Constant::Char(_) => Type::Primitive(P::Char),
            Constant::String(_) => Type::Primitive(P::String),
            Constant::SByte(_) => Type::Primitive(P::SByte),
            Constant::Byte(_) => Type::Primitive(P::Byte),
            Constant::Int16(_) => Type::Primitive(P::Int16),
            Constant::UInt16(_) => Type::Primitive(P::UInt16),
            Constant::Int32(_) => Type::Primitive(P::Int32),
            Constant::UInt32(_) => Type::Primitive(P::UInt32),
            Constant::Int64(_) => Type::Primitive(P::Int64),
            Constant::UInt64(_) => Type::Primitive(P::UInt64),
            Constant::Single(_) => Type::Primitive(P::Single),
            Constant::Double(_) => Type::Primitive(P::Double),
            Constant::Decimal(_) => Type::Primitive(P::Decimal),
            Constant::Enum { ty, .. } => Type::Enum(ty.clone()),
            Constant::Type(_) => Type::named(Some("System"), "Type"),
        }
    }
}
