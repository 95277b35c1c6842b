//! gsgen compiler: line lexer, declaration parser, classifier, accessor and initializer emitters.
//!
//! Each call to [`generate`] is a pure function of the raw text and the class name:
//! every line yields either one declaration or one diagnostic, in input order.

mod classify;
mod emit;
mod error;
mod lexer;
mod parser;
mod prefix;

pub use classify::{classify, primitive_kind, resolve_category};
pub use emit::{render_accessors, render_initializer, Scope};
pub use error::GenerateError;
pub use parser::parse_line;
pub use prefix::{embedded_code, infer_param_prefix, TypeCode};

use gsgen_syntax::ast::Declaration;
use gsgen_syntax::diagnostics::{format_diagnostic, Diagnostic};
use gsgen_syntax::span::{Location, Span};
use std::path::Path;

/// Inline accessor output: scoped definitions, or an explicit skip when no class name was given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InlineOutput {
    Scoped(String),
    Skipped,
}

/// Everything one generate call produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    pub accessors: String,
    pub inline: InlineOutput,
    pub initializers: String,
    pub diagnostics: Vec<Diagnostic>,
    pub declarations: Vec<Declaration>,
}

impl Generated {
    /// Diagnostic messages in input order.
    pub fn warnings(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| d.message.clone()).collect()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }
}

/// Print diagnostics to stderr with source context.
pub fn print_diagnostics(source: &str, origin: &str, diags: &[Diagnostic]) {
    for d in diags {
        eprintln!("{}", format_diagnostic(source, origin, d));
    }
}

/// Non-blank lines, trimmed, with their 1-based line number and span in `raw`.
fn source_lines(raw: &str) -> Vec<(&str, Location)> {
    let mut out = Vec::new();
    let mut offset = 0usize;
    for (idx, line) in raw.split('\n').enumerate() {
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            let lead = line.len() - line.trim_start().len();
            let start = (offset + lead) as u32;
            let span = Span::new(start, start + trimmed.len() as u32);
            out.push((trimmed, Location::new(idx as u32 + 1, span)));
        }
        offset += line.len() + 1;
    }
    out
}

/// Generate accessors, inline accessors and initializers for `raw`.
/// A class name that is blank after trimming skips the inline output.
pub fn generate(raw: &str, class_name: Option<&str>) -> Generated {
    let class = class_name.map(str::trim).filter(|c| !c.is_empty());
    let lines = source_lines(raw);

    if lines.is_empty() {
        tracing::warn!("no declarations supplied");
        return Generated {
            accessors: String::new(),
            inline: match class {
                Some(_) => InlineOutput::Scoped(String::new()),
                None => InlineOutput::Skipped,
            },
            initializers: String::new(),
            diagnostics: vec![Diagnostic::empty_input()],
            declarations: Vec::new(),
        };
    }

    let mut accessors = String::new();
    let mut inline = String::new();
    let mut initializers = String::new();
    let mut diagnostics = Vec::new();
    let mut declarations = Vec::new();

    for (line, location) in lines {
        let decl = match parse_line(line, location).and_then(classify) {
            Ok(d) => d,
            Err(diag) => {
                tracing::debug!(line = location.line, kind = ?diag.kind, "line rejected");
                diagnostics.push(diag);
                continue;
            }
        };
        tracing::debug!(
            line = location.line,
            variable = %decl.variable_name,
            category = %decl.category,
            prefix = %decl.param_prefix,
            "declaration classified"
        );
        accessors.push_str(&render_accessors(&decl, Scope::OutOfLine));
        if let Some(class) = class {
            inline.push_str(&render_accessors(&decl, Scope::Inline { class }));
        }
        initializers.push_str(&render_initializer(&decl));
        declarations.push(decl);
    }

    tracing::debug!(
        declarations = declarations.len(),
        diagnostics = diagnostics.len(),
        inline = class.is_some(),
        "generation finished"
    );

    Generated {
        accessors,
        inline: match class {
            Some(_) => InlineOutput::Scoped(inline),
            None => InlineOutput::Skipped,
        },
        initializers,
        diagnostics,
        declarations,
    }
}

/// Read a declaration file. The text is kept by the caller for diagnostics rendering.
pub fn read_declarations(path: &Path) -> Result<String, GenerateError> {
    let source = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read declarations");
    Ok(source)
}
