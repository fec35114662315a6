//! Type descriptors carried by every node.
//!
//! A [`Type`] describes a runtime type the way a reflection API would: by
//! shape (array, generic parameter, open or closed generic) and by declared
//! name. Generic type names keep their arity marker (``List`1``); stripping it
//! is a rendering concern.

/// Built-in types with a fixed surface alias.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Primitive {
    Void,
    Object,
    Bool,
    Byte,
    Char,
    Decimal,
    Double,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    String,
    UInt16,
    UInt32,
    UInt64,
}

impl Primitive {
    /// Every primitive, in declaration order.
    pub const ALL: [Primitive; 16] = [
        Primitive::Void,
        Primitive::Object,
        Primitive::Bool,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Decimal,
        Primitive::Double,
        Primitive::Int16,
        Primitive::Int32,
        Primitive::Int64,
        Primitive::SByte,
        Primitive::Single,
        Primitive::String,
        Primitive::UInt16,
        Primitive::UInt32,
        Primitive::UInt64,
    ];

    /// Runtime (framework) name of the type, without namespace.
    pub const fn runtime_name(self) -> &'static str {
        match self {
            Primitive::Void => "Void",
            Primitive::Object => "Object",
            Primitive::Bool => "Boolean",
            Primitive::Byte => "Byte",
            Primitive::Char => "Char",
            Primitive::Decimal => "Decimal",
            Primitive::Double => "Double",
            Primitive::Int16 => "Int16",
            Primitive::Int32 => "Int32",
            Primitive::Int64 => "Int64",
            Primitive::SByte => "SByte",
            Primitive::Single => "Single",
            Primitive::String => "String",
            Primitive::UInt16 => "UInt16",
            Primitive::UInt32 => "UInt32",
            Primitive::UInt64 => "UInt64",
        }
    }
}

/// A non-generic class or struct, identified by namespace and declared name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct NamedType {
    pub namespace: Option<String>,
    pub name: String,
}

impl NamedType {
    pub fn new(namespace: Option<&str>, name: &str) -> Self {
        NamedType {
            namespace: namespace.map(str::to_owned),
            name: name.to_owned(),
        }
    }
}

/// A defined member of an enum type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumMember {
    pub name: String,
    pub value: i64,
}

/// An enum type and its defined members.
///
/// `flags` marks enums whose values combine members bitwise.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumType {
    pub name: String,
    pub members: Vec<EnumMember>,
    pub flags: bool,
}

impl EnumType {
    pub fn new(name: &str, members: &[(&str, i64)]) -> Self {
        EnumType {
            name: name.to_owned(),
            members: members
                .iter()
                .map(|&(name, value)| EnumMember {
                    name: name.to_owned(),
                    value,
                })
                .collect(),
            flags: false,
        }
    }

    #[must_use]
    pub fn with_flags(mut self) -> Self {
        self.flags = true;
        self
    }

    /// Find the member defined with exactly `value`.
    pub fn member_for(&self, value: i64) -> Option<&EnumMember> {
        self.members.iter().find(|member| member.value == value)
    }
}

/// Type descriptor.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Type {
    /// One of the aliased built-in types.
    Primitive(Primitive),
    /// A non-generic named type.
    Named(NamedType),
    /// An enum type with its member table.
    Enum(EnumType),
    /// Array of `element` with `rank` dimensions (rank 1 is `T[]`).
    Array { element: Box<Type>, rank: u32 },
    /// A generic type parameter such as `T`.
    GenericParameter(String),
    /// An open generic type: ``Dictionary`2`` with parameters `TKey, TValue`.
    GenericDefinition {
        definition: NamedType,
        parameters: Vec<String>,
    },
    /// A closed generic type: ``List`1`` applied to `int`.
    GenericInstance {
        definition: NamedType,
        arguments: Vec<Type>,
    },
}

impl Type {
    pub const VOID: Type = Type::Primitive(Primitive::Void);
    pub const OBJECT: Type = Type::Primitive(Primitive::Object);
    pub const BOOL: Type = Type::Primitive(Primitive::Bool);
    pub const INT: Type = Type::Primitive(Primitive::Int32);
    pub const LONG: Type = Type::Primitive(Primitive::Int64);
    pub const DOUBLE: Type = Type::Primitive(Primitive::Double);
    pub const STRING: Type = Type::Primitive(Primitive::String);

    /// Named type in `namespace`.
    pub fn named(namespace: Option<&str>, name: &str) -> Type {
        Type::Named(NamedType::new(namespace, name))
    }

    /// Array type of the given rank.
    pub fn array(element: Type, rank: u32) -> Type {
        Type::Array {
            element: Box::new(element),
            rank,
        }
    }

    /// Closed generic type, e.g. `generic(Some("System.Collections.Generic"), "List`1", [int])`.
    pub fn generic(namespace: Option<&str>, name: &str, arguments: Vec<Type>) -> Type {
        Type::GenericInstance {
            definition: NamedType::new(namespace, name),
            arguments,
        }
    }

    /// Open generic type with the given parameter names.
    pub fn generic_definition(namespace: Option<&str>, name: &str, parameters: &[&str]) -> Type {
        Type::GenericDefinition {
            definition: NamedType::new(namespace, name),
            parameters: parameters.iter().map(|&p| p.to_owned()).collect(),
        }
    }

    /// `System.Nullable<T>` over `inner`.
    pub fn nullable(inner: Type) -> Type {
        Type::generic(Some("System"), "Nullable`1", vec![inner])
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        matches!(self, Type::Primitive(Primitive::Void))
    }

    #[inline]
    pub fn is_bool(&self) -> bool {
        matches!(self, Type::Primitive(Primitive::Bool))
    }

    /// Declared name, including any arity marker.
    pub fn declared_name(&self) -> &str {
        match self {
            Type::Primitive(p) => p.runtime_name(),
            Type::Named(named) => &named.name,
            Type::Enum(enum_ty) => &enum_ty.name,
            Type::Array { element, .. } => element.declared_name(),
            Type::GenericParameter(name) => name,
            Type::GenericDefinition { definition, .. }
            | Type::GenericInstance { definition, .. } => &definition.name,
        }
    }
}
