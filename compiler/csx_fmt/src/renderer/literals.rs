//! Literal Value Rendering
//!
//! Constants render as source literals with the suffix their width needs
//! (`5U`, `5L`, `5UL`, `1.5f`, `2.5M`). Enum values render by member name.

use std::fmt::Write;

use csx_ir::{Constant, EnumType, Type};

use super::Renderer;
use crate::emitter::{Formatter, Reference};
use crate::error::{RenderError, RenderResult};

impl<F: Formatter> Renderer<'_, F> {
    pub(super) fn emit_constant(&mut self, constant: &Constant) -> RenderResult {
        match constant {
            Constant::Null => self.out.write_keyword("null"),
            Constant::Bool(true) => self.out.write_keyword("true"),
            Constant::Bool(false) => self.out.write_keyword("false"),
            Constant::Char(c) => self.out.write_literal(&char_literal(*c)),
            Constant::String(s) => self.out.write_literal(&string_literal(s)),
            Constant::SByte(v) => self.out.write_literal(&v.to_string()),
            Constant::Byte(v) => self.out.write_literal(&v.to_string()),
            Constant::Int16(v) => self.out.write_literal(&v.to_string()),
            Constant::UInt16(v) => self.out.write_literal(&v.to_string()),
            Constant::Int32(v) => self.out.write_literal(&v.to_string()),
            Constant::UInt32(v) => self.out.write_literal(&format!("{v}U")),
            Constant::Int64(v) => self.out.write_literal(&format!("{v}L")),
            Constant::UInt64(v) => self.out.write_literal(&format!("{v}UL")),
            Constant::Single(v) => self.out.write_literal(&single_literal(*v)),
            Constant::Double(v) => self.out.write_literal(&double_literal(*v)),
            Constant::Decimal(text) => self.out.write_literal(&format!("{text}M")),
            Constant::Enum { ty, value } => return self.emit_enum_value(ty, *value),
            Constant::Type(ty) => {
                self.out.write_keyword("typeof");
                self.out.write_token("(");
                self.emit_type(ty);
                self.out.write_token(")");
            }
        }
        Ok(())
    }

    /// `Color.Red`, or `Access.Read | Access.Write` for a flags combination.
    fn emit_enum_value(&mut self, enum_ty: &EnumType, value: i64) -> RenderResult {
        if let Some(member) = enum_ty.member_for(value) {
            self.emit_enum_member(enum_ty, &member.name);
            return Ok(());
        }
        let parts = flag_members(enum_ty, value).ok_or_else(|| RenderError::UndefinedEnumValue {
            enum_name: enum_ty.name.clone(),
            value,
        })?;
        for (i, name) in parts.into_iter().enumerate() {
            if i > 0 {
                self.out.write_space();
                self.out.write_token("|");
                self.out.write_space();
            }
            self.emit_enum_member(enum_ty, name);
        }
        Ok(())
    }

    fn emit_enum_member(&mut self, enum_ty: &EnumType, name: &str) {
        let ty = Type::Enum(enum_ty.clone());
        self.emit_type(&ty);
        self.out.write_token(".");
        self.out.write_reference(
            name,
            Reference::Member {
                declaring_type: &ty,
                name,
            },
        );
    }
}

/// Single-bit or composite members whose union is exactly `value`.
fn flag_members(enum_ty: &EnumType, value: i64) -> Option<Vec<&str>> {
    if !enum_ty.flags || value == 0 {
        return None;
    }
    let mut covered = 0;
    let mut names = Vec::new();
    for member in &enum_ty.members {
        let bits = member.value;
        if bits != 0 && value & bits == bits && covered & bits != bits {
            covered |= bits;
            names.push(member.name.as_str());
        }
    }
    (covered == value).then_some(names)
}

fn char_literal(c: char) -> String {
    let mut out = String::from("'");
    escape_into(c, '\'', &mut out);
    out.push('\'');
    out
}

fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        escape_into(c, '"', &mut out);
    }
    out.push('"');
    out
}

fn escape_into(c: char, quote: char, out: &mut String) {
    match c {
        '\\' => out.push_str("\\\\"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\0' => out.push_str("\\0"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        // U+2028 and U+2029 end a line inside a C# literal.
        c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}') => {
            // Writing to a String is infallible
            let _ = write!(out, "\\u{:04X}", u32::from(c));
        }
        c => out.push(c),
    }
}

fn double_literal(v: f64) -> String {
    if v.is_nan() {
        "double.NaN".to_owned()
    } else if v.is_infinite() {
        if v > 0.0 {
            "double.PositiveInfinity".to_owned()
        } else {
            "double.NegativeInfinity".to_owned()
        }
    } else {
        format!("{v:?}")
    }
}

fn single_literal(v: f32) -> String {
    if v.is_nan() {
        "float.NaN".to_owned()
    } else if v.is_infinite() {
        if v > 0.0 {
            "float.PositiveInfinity".to_owned()
        } else {
            "float.NegativeInfinity".to_owned()
        }
    } else {
        format!("{v:?}f")
    }
}
