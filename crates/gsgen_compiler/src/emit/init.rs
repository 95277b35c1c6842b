//! Default-initialization statements, one per declaration.

use gsgen_syntax::ast::{Category, Declaration, PrimitiveKind};

pub fn render_initializer(decl: &Declaration) -> String {
    let v = &decl.variable_name;
    match decl.category {
        Category::Pointer => format!("{} = nullptr;\n", v),
        Category::CharArray => format!("memset({v}, 0x00, sizeof({v}));\n", v = v),
        Category::Primitive(PrimitiveKind::Bool) => format!("{} = false;\n", v),
        Category::Primitive(PrimitiveKind::Char) => format!("{} = '\\0';\n", v),
        Category::Primitive(PrimitiveKind::String) => format!("{} = \"\";\n", v),
        Category::Primitive(PrimitiveKind::Numeric) => format!("{} = 0;\n", v),
        Category::StructOrClass => format!("{} = {{}};\n", v),
    }
}
