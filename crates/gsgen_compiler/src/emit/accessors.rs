//! Getter/setter rendering. Out-of-line and inline text come from the same function,
//! differing only in the `inline` marker line and the `Class::` qualifier.

use gsgen_syntax::accessors::{getter_name, param_name, setter_name};
use gsgen_syntax::ast::{Category, Declaration};

/// Setter parameter prefix of fixed-size character buffers.
pub const CHAR_ARRAY_PARAM_PREFIX: &str = "pscL";

/// Where the accessor definitions live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Free-standing signatures.
    OutOfLine,
    /// `inline` definitions qualified with `<class>::`.
    Inline { class: &'a str },
}

impl Scope<'_> {
    fn marker(&self) -> &'static str {
        match self {
            Scope::OutOfLine => "",
            Scope::Inline { .. } => "inline\n",
        }
    }

    fn qualifier(&self) -> String {
        match self {
            Scope::OutOfLine => String::new(),
            Scope::Inline { class } => format!("{}::", class),
        }
    }
}

/// Render `// For <var>`, the getter and the setter, followed by a blank line.
pub fn render_accessors(decl: &Declaration, scope: Scope<'_>) -> String {
    let ty = &decl.data_type;
    let var = &decl.variable_name;
    let cap = &decl.capitalized_name;
    let marker = scope.marker();
    let qual = scope.qualifier();

    let (return_ty, param_decl, body) = match decl.category {
        Category::Pointer => {
            let p = param_name(&decl.param_prefix, cap);
            (format!("{}*", ty), format!("{}* {}", ty, p), format!("{} = {};", var, p))
        }
        Category::CharArray => {
            let p = param_name(CHAR_ARRAY_PARAM_PREFIX, cap);
            (
                format!("{}*", ty),
                format!("{}* {}", ty, p),
                format!(
                    "strncpy({v}, {p}, sizeof({v}) - 1); {v}[sizeof({v}) - 1] = '\\0';",
                    v = var,
                    p = p
                ),
            )
        }
        category => {
            let p = param_name(&decl.param_prefix, cap);
            let param_decl = if category.setter_by_reference() {
                format!("{} &{}", ty, p)
            } else {
                format!("{} {}", ty, p)
            };
            (ty.clone(), param_decl, format!("{} = {};", var, p))
        }
    };

    format!(
        "// For {var}\n\
         {marker}{ret} {qual}{getter}() {{return {var}; }}\n\
         {marker}void {qual}{setter}({param}) {{{body} }}\n\n",
        var = var,
        marker = marker,
        ret = return_ty,
        qual = qual,
        getter = getter_name(cap),
        setter = setter_name(cap),
        param = param_decl,
        body = body,
    )
}
