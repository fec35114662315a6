use super::*;
use csx_ir::EnumType;
use pretty_assertions::assert_eq;

#[test]
fn primitive_aliases() {
    let expected = [
        (Primitive::Void, "void"),
        (Primitive::Object, "object"),
        (Primitive::Bool, "bool"),
        (Primitive::Byte, "byte"),
        (Primitive::Char, "char"),
        (Primitive::Decimal, "decimal"),
        (Primitive::Double, "double"),
        (Primitive::Int16, "short"),
        (Primitive::Int32, "int"),
        (Primitive::Int64, "long"),
        (Primitive::SByte, "sbyte"),
        (Primitive::Single, "float"),
        (Primitive::String, "string"),
        (Primitive::UInt16, "ushort"),
        (Primitive::UInt32, "uint"),
        (Primitive::UInt64, "ulong"),
    ];
    assert_eq!(expected.len(), Primitive::ALL.len());
    for (primitive, alias) in expected {
        assert_eq!(type_name(&Type::Primitive(primitive)), alias);
    }
}

#[test]
fn named_types_use_declared_name() {
    assert_eq!(type_name(&Type::named(Some("System"), "DateTime")), "DateTime");
    assert_eq!(type_name(&Type::named(None, "Person")), "Person");
    let color = EnumType::new("Color", &[("Red", 0)]);
    assert_eq!(type_name(&Type::Enum(color)), "Color");
}

#[test]
fn array_ranks() {
    assert_eq!(type_name(&Type::array(Type::INT, 1)), "int[]");
    assert_eq!(type_name(&Type::array(Type::INT, 2)), "int[,]");
    assert_eq!(type_name(&Type::array(Type::STRING, 3)), "string[,,]");
}

#[test]
fn jagged_arrays() {
    let jagged = Type::array(Type::array(Type::INT, 1), 1);
    assert_eq!(type_name(&jagged), "int[][]");
}

#[test]
fn generic_parameter() {
    assert_eq!(type_name(&Type::GenericParameter("TKey".into())), "TKey");
}

#[test]
fn unbound_generic_definitions() {
    let list = Type::generic_definition(Some("System.Collections.Generic"), "List`1", &["T"]);
    assert_eq!(type_name(&list), "List<>");

    let dictionary = Type::generic_definition(
        Some("System.Collections.Generic"),
        "Dictionary`2",
        &["TKey", "TValue"],
    );
    assert_eq!(type_name(&dictionary), "Dictionary<,>");

    let func = Type::generic_definition(Some("System"), "Func`3", &["T1", "T2", "TResult"]);
    assert_eq!(type_name(&func), "Func<,,>");
}

#[test]
fn bound_generic_instances() {
    let list = Type::generic(Some("System.Collections.Generic"), "List`1", vec![Type::INT]);
    assert_eq!(type_name(&list), "List<int>");

    let dictionary = Type::generic(
        Some("System.Collections.Generic"),
        "Dictionary`2",
        vec![Type::STRING, list],
    );
    assert_eq!(type_name(&dictionary), "Dictionary<string, List<int>>");
}

#[test]
fn generic_arrays() {
    let list = Type::generic(Some("System.Collections.Generic"), "List`1", vec![Type::INT]);
    assert_eq!(type_name(&Type::array(list, 2)), "List<int>[,]");
}

#[test]
fn nullable_uses_question_mark() {
    assert_eq!(type_name(&Type::nullable(Type::INT)), "int?");
    // Only System.Nullable gets the shorthand.
    let other = Type::generic(Some("Acme"), "Nullable`1", vec![Type::INT]);
    assert_eq!(type_name(&other), "Nullable<int>");
}

#[test]
fn clean_generic_names() {
    assert_eq!(clean_generic_name("List`1"), "List");
    assert_eq!(clean_generic_name("Tuple`12"), "Tuple");
    assert_eq!(clean_generic_name("Plain"), "Plain");
    assert_eq!(clean_generic_name("Odd`x"), "Odd`x");
}
