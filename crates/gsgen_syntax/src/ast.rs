//! Declaration records: the parsed shape of a line and the fully resolved declaration.

use crate::span::Location;
use std::fmt;
use std::num::NonZeroU32;

/// Kind of a primitive declaration; decides setter passing and initializer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Bool,
    Char,
    String,
    /// int/short/long/double/float and compounds such as `unsigned long long`.
    Numeric,
}

/// Generation category. Selects the rendering template and initializer form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Pointer,
    CharArray,
    StructOrClass,
    Primitive(PrimitiveKind),
}

impl Category {
    /// True if the setter takes its argument by reference (`T &p`).
    pub fn setter_by_reference(&self) -> bool {
        match self {
            Category::Pointer | Category::CharArray => false,
            Category::StructOrClass => true,
            Category::Primitive(kind) => matches!(kind, PrimitiveKind::String | PrimitiveKind::Numeric),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Pointer => "pointer",
            Category::CharArray => "char array",
            Category::StructOrClass => "struct/class",
            Category::Primitive(PrimitiveKind::Bool) => "bool",
            Category::Primitive(PrimitiveKind::Char) => "char",
            Category::Primitive(PrimitiveKind::String) => "string",
            Category::Primitive(PrimitiveKind::Numeric) => "numeric",
        };
        f.write_str(s)
    }
}

/// One line as matched by the grammar, before name and category resolution.
/// Pointer stars are already stripped from `data_type` and `variable_name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclSyntax {
    pub location: Location,
    pub raw_line: String,
    pub data_type: String,
    pub variable_name: String,
    pub is_pointer: bool,
    pub array_size: Option<NonZeroU32>,
}

impl DeclSyntax {
    pub fn is_array(&self) -> bool {
        self.array_size.is_some()
    }
}

/// A fully classified declaration, ready for emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub location: Location,
    /// Trimmed input text.
    pub raw_line: String,
    pub data_type: String,
    pub variable_name: String,
    pub is_pointer: bool,
    pub array_size: Option<NonZeroU32>,
    pub meaningful_name: String,
    pub capitalized_name: String,
    pub category: Category,
    pub param_prefix: String,
}
