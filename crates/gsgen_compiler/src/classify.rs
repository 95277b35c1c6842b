//! Category resolution: declaration syntax → fully classified declaration.

use crate::prefix::infer_param_prefix;
use gsgen_syntax::accessors::{capitalize, meaningful_name};
use gsgen_syntax::ast::{Category, DeclSyntax, Declaration, PrimitiveKind};
use gsgen_syntax::diagnostics::Diagnostic;

const NUMERIC_KEYWORDS: [&str; 5] = ["int", "short", "long", "double", "float"];

/// Primitive kind of a type by keyword substring; bool, char, string checked before numerics.
pub fn primitive_kind(data_type: &str) -> Option<PrimitiveKind> {
    if data_type.contains("bool") {
        Some(PrimitiveKind::Bool)
    } else if data_type.contains("char") {
        Some(PrimitiveKind::Char)
    } else if data_type.contains("string") {
        Some(PrimitiveKind::String)
    } else if NUMERIC_KEYWORDS.iter().any(|k| data_type.contains(k)) {
        Some(PrimitiveKind::Numeric)
    } else {
        None
    }
}

/// First matching rule wins: pointer, char array, (non-char array rejected), primitive, struct/class.
pub fn resolve_category(decl: &DeclSyntax) -> Result<Category, Diagnostic> {
    if decl.is_pointer {
        return Ok(Category::Pointer);
    }
    if decl.is_array() {
        if decl.data_type.contains("char") {
            return Ok(Category::CharArray);
        }
        return Err(Diagnostic::unsupported_array(&decl.raw_line, decl.location));
    }
    Ok(primitive_kind(&decl.data_type)
        .map(Category::Primitive)
        .unwrap_or(Category::StructOrClass))
}

/// Resolve names, prefix and category for a parsed line.
pub fn classify(decl: DeclSyntax) -> Result<Declaration, Diagnostic> {
    let category = resolve_category(&decl)?;
    let meaningful = meaningful_name(&decl.variable_name).to_string();
    let capitalized_name = capitalize(&meaningful);
    let param_prefix = infer_param_prefix(&decl.variable_name, decl.is_pointer);
    Ok(Declaration {
        location: decl.location,
        raw_line: decl.raw_line,
        data_type: decl.data_type,
        variable_name: decl.variable_name,
        is_pointer: decl.is_pointer,
        array_size: decl.array_size,
        meaningful_name: meaningful,
        capitalized_name,
        category,
        param_prefix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;
    use gsgen_syntax::diagnostics::DiagnosticKind;
    use gsgen_syntax::span::{Location, Span};

    fn classify_line(line: &str) -> Result<Declaration, Diagnostic> {
        let loc = Location::new(1, Span::new(0, line.len() as u32));
        classify(parse_line(line, loc)?)
    }

    #[test]
    fn primitive_kinds() {
        assert_eq!(primitive_kind("bool"), Some(PrimitiveKind::Bool));
        assert_eq!(primitive_kind("unsigned char"), Some(PrimitiveKind::Char));
        assert_eq!(primitive_kind("std::string"), Some(PrimitiveKind::String));
        assert_eq!(primitive_kind("long double"), Some(PrimitiveKind::Numeric));
        assert_eq!(primitive_kind("unsigned long long"), Some(PrimitiveKind::Numeric));
        assert_eq!(primitive_kind("SResponse"), None);
        assert_eq!(primitive_kind("void"), None);
    }

    #[test]
    fn pointer_wins_over_everything() {
        for line in ["CHello *pmeC_Hello;", "int *mcsi_Ptr;", "char *mcac_Name[8];", "bool* mb_Flag;"] {
            let d = classify_line(line).unwrap();
            assert_eq!(d.category, Category::Pointer, "{}", line);
            assert!(d.param_prefix.starts_with('p'), "{}", line);
        }
    }

    #[test]
    fn char_array_and_unsupported_array() {
        let d = classify_line("char mcac_Buf[32];").unwrap();
        assert_eq!(d.category, Category::CharArray);
        let err = classify_line("int mcp_Count[10];").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::UnsupportedArrayElement);
        assert_eq!(err.message, "Unsupported array type: \"int mcp_Count[10];\"");
    }

    #[test]
    fn struct_declaration() {
        let d = classify_line("SResponse mcS_Response;").unwrap();
        assert_eq!(d.category, Category::StructOrClass);
        assert_eq!(d.param_prefix, "SL");
        assert_eq!(d.meaningful_name, "Response");
        assert_eq!(d.capitalized_name, "Response");
    }

    #[test]
    fn names_resolved() {
        let d = classify_line("int mcsi_magi;").unwrap();
        assert_eq!(d.meaningful_name, "magi");
        assert_eq!(d.capitalized_name, "Magi");
        assert_eq!(d.param_prefix, "siL");
        assert_eq!(d.category, Category::Primitive(PrimitiveKind::Numeric));
    }
}
