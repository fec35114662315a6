//! Type Name Resolution
//!
//! Maps a [`Type`] descriptor to the spelling a C# author would write:
//! primitive aliases (`int`, not `Int32`), array rank brackets, and generic
//! argument lists with the arity marker (``List`1``) stripped.

use csx_ir::{NamedType, Primitive, Type};

/// Surface alias of a primitive type.
pub const fn primitive_alias(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::Void => "void",
        Primitive::Object => "object",
        Primitive::Bool => "bool",
        Primitive::Byte => "byte",
        Primitive::Char => "char",
        Primitive::Decimal => "decimal",
        Primitive::Double => "double",
        Primitive::Int16 => "short",
        Primitive::Int32 => "int",
        Primitive::Int64 => "long",
        Primitive::SByte => "sbyte",
        Primitive::Single => "float",
        Primitive::String => "string",
        Primitive::UInt16 => "ushort",
        Primitive::UInt32 => "uint",
        Primitive::UInt64 => "ulong",
    }
}

/// Strip the generic arity marker: ``Dictionary`2`` becomes `Dictionary`.
pub fn clean_generic_name(name: &str) -> &str {
    match name.rfind('`') {
        Some(pos) if name[pos + 1..].bytes().all(|b| b.is_ascii_digit()) => &name[..pos],
        _ => name,
    }
}

/// Resolve a type to its surface spelling.
pub fn type_name(ty: &Type) -> String {
    let mut out = String::new();
    write_type_name(ty, &mut out);
    out
}

fn write_type_name(ty: &Type, out: &mut String) {
    match ty {
        Type::Primitive(primitive) => out.push_str(primitive_alias(*primitive)),
        Type::Named(named) => out.push_str(&named.name),
        Type::Enum(enum_ty) => out.push_str(&enum_ty.name),
        Type::GenericParameter(name) => out.push_str(name),
        Type::Array { element, rank } => {
            write_type_name(element, out);
            push_rank(*rank, out);
        }
        Type::GenericDefinition {
            definition,
            parameters,
        } => {
            out.push_str(clean_generic_name(&definition.name));
            out.push('<');
            for _ in 1..parameters.len() {
                out.push(',');
            }
            out.push('>');
        }
        Type::GenericInstance {
            definition,
            arguments,
        } => {
            if let [inner] = arguments.as_slice() {
                if is_nullable(definition) {
                    write_type_name(inner, out);
                    out.push('?');
                    return;
                }
            }
            out.push_str(clean_generic_name(&definition.name));
            out.push('<');
            for (i, argument) in arguments.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_type_name(argument, out);
            }
            out.push('>');
        }
    }
}

/// Append `[` + `rank - 1` commas + `]`.
pub(crate) fn push_rank(rank: u32, out: &mut String) {
    out.push('[');
    for _ in 1..rank {
        out.push(',');
    }
    out.push(']');
}

fn is_nullable(definition: &NamedType) -> bool {
    definition.namespace.as_deref() == Some("System")
        && clean_generic_name(&definition.name) == "Nullable"
}

#[cfg(test)]
mod tests;
