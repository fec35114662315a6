//! References to fields, properties and methods.

use crate::types::Type;

/// A field or property on `declaring_type`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MemberRef {
    pub declaring_type: Type,
    pub name: String,
}

impl MemberRef {
    pub fn new(declaring_type: Type, name: &str) -> Self {
        MemberRef {
            declaring_type,
            name: name.to_owned(),
        }
    }
}

/// A method on `declaring_type`.
///
/// `generic_arguments` is non-empty for a constructed generic method
/// (`Enumerable.Cast<int>`), and empty otherwise.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodRef {
    pub declaring_type: Type,
    pub name: String,
    pub generic_arguments: Vec<Type>,
}

impl MethodRef {
    pub fn new(declaring_type: Type, name: &str) -> Self {
        MethodRef {
            declaring_type,
            name: name.to_owned(),
            generic_arguments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_generic_arguments(mut self, arguments: Vec<Type>) -> Self {
        self.generic_arguments = arguments;
        self
    }
}
