//! Setter parameter prefix inference from the Hungarian type code embedded in a member name.
//!
//! `mcsi_Magi` carries scope letter `c` and type code `si`, giving `siL`.
//! `mb_Active` has no extended code, so the letter itself (`b`) is the code, giving `bL`.

use gsgen_syntax::accessors::STRUCT_MARKER;
use regex::Regex;
use std::sync::OnceLock;

/// Prefix used when no type code is recognized.
pub const DEFAULT_PREFIX: &str = "CL";

/// Prefix forced by the structure marker `mcS_`.
pub const STRUCT_PREFIX: &str = "SL";

/// Closed set of Hungarian type codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeCode {
    Bool,
    Char,
    SignedChar,
    Short,
    Int,
    Long,
    Float,
    Double,
    LongDouble,
    ULongLong,
    ULong,
    UInt,
    UShort,
    UChar,
    Class,
}

impl TypeCode {
    pub fn from_code(code: &str) -> Option<Self> {
        let tc = match code {
            "b" => TypeCode::Bool,
            "c" => TypeCode::Char,
            "sc" => TypeCode::SignedChar,
            "s" | "si" => TypeCode::Short,
            "i" => TypeCode::Int,
            "l" => TypeCode::Long,
            "f" => TypeCode::Float,
            "d" => TypeCode::Double,
            "ld" => TypeCode::LongDouble,
            "ull" => TypeCode::ULongLong,
            "ul" => TypeCode::ULong,
            "ui" => TypeCode::UInt,
            "us" => TypeCode::UShort,
            "uc" => TypeCode::UChar,
            "C" => TypeCode::Class,
            _ => return None,
        };
        Some(tc)
    }

    pub fn param_prefix(self) -> &'static str {
        match self {
            TypeCode::Bool => "bL",
            TypeCode::Char => "cL",
            TypeCode::SignedChar => "scL",
            TypeCode::Short => "siL",
            TypeCode::Int => "iL",
            TypeCode::Long => "slL",
            TypeCode::Float => "fL",
            TypeCode::Double => "dL",
            TypeCode::LongDouble => "ldL",
            TypeCode::ULongLong => "ullL",
            TypeCode::ULong => "ulL",
            TypeCode::UInt => "uiL",
            TypeCode::UShort => "usL",
            TypeCode::UChar => "ucL",
            TypeCode::Class => "CL",
        }
    }
}

// Greedy `.*` picks the last marker; alternation order keeps longer codes ahead of their prefixes.
fn code_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^.*m([a-z])(ull|ul|ld|ui|us|uc|sc|si|s|i|l|f|d|b|c|C)?_")
            .expect("type code pattern is valid")
    })
}

/// Type code text embedded in `variable_name`, if any.
pub fn embedded_code(variable_name: &str) -> Option<&str> {
    let caps = code_regex().captures(variable_name)?;
    caps.get(2).or_else(|| caps.get(1)).map(|m| m.as_str())
}

/// Infer the setter parameter prefix for a declaration.
/// Custom (non-keyword) types take the table prefix like built-ins; only `mcS_` overrides it.
pub fn infer_param_prefix(variable_name: &str, is_pointer: bool) -> String {
    let prefix = if variable_name.starts_with(STRUCT_MARKER) {
        STRUCT_PREFIX
    } else {
        embedded_code(variable_name)
            .and_then(TypeCode::from_code)
            .map(TypeCode::param_prefix)
            .unwrap_or(DEFAULT_PREFIX)
    };
    tracing::trace!(variable_name, prefix, is_pointer, "parameter prefix");

    if is_pointer {
        format!("p{}", prefix)
    } else {
        prefix.to_string()
    }
}
