//! Diagnostics (errors, warnings) with input line locations.

use crate::span::Location;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub kind: DiagnosticKind,
    pub message: String,
    pub location: Option<Location>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

/// Why a line produced no declaration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// No non-blank lines at all. The only whole-invocation failure.
    EmptyInput,
    /// Line matches neither the standard nor the array form.
    GrammarMismatch,
    /// Bracketed size is empty, non-numeric, zero or negative.
    InvalidArraySize,
    /// Array over a non-character element type.
    UnsupportedArrayElement,
    /// Stripping `*` left an empty type or name.
    EmptyAfterStrip,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, message: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            level: Level::Error,
            kind,
            message: message.into(),
            location,
        }
    }

    pub fn warning(kind: DiagnosticKind, message: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            level: Level::Warning,
            kind,
            message: message.into(),
            location,
        }
    }

    pub fn empty_input() -> Self {
        Self::error(
            DiagnosticKind::EmptyInput,
            "Please enter at least one variable declaration.",
            None,
        )
    }

    pub fn grammar_mismatch(line: &str, location: Location) -> Self {
        Self::warning(
            DiagnosticKind::GrammarMismatch,
            format!("Invalid declaration: \"{}\"", line),
            Some(location),
        )
    }

    pub fn invalid_array_size(line: &str, location: Location) -> Self {
        Self::warning(
            DiagnosticKind::InvalidArraySize,
            format!("Invalid array size in \"{}\"", line),
            Some(location),
        )
    }

    pub fn unsupported_array(line: &str, location: Location) -> Self {
        Self::warning(
            DiagnosticKind::UnsupportedArrayElement,
            format!("Unsupported array type: \"{}\"", line),
            Some(location),
        )
    }

    pub fn empty_after_strip(line: &str, location: Location) -> Self {
        Self::warning(
            DiagnosticKind::EmptyAfterStrip,
            format!("Could not parse declaration: \"{}\"", line),
            Some(location),
        )
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.level {
            Level::Error => "error",
            Level::Warning => "warning",
        };
        if let Some(loc) = &self.location {
            write!(f, "{} at line {}: {}", level, loc.line, self.message)
        } else {
            write!(f, "{}: {}", level, self.message)
        }
    }
}

/// Convert byte offset to line/column (1-based) given source.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = offset as usize;
    if offset >= source.len() {
        let lines = source.lines().count() as u32;
        let last_line_len = source.lines().last().map(|l| l.len()).unwrap_or(0) as u32;
        return (lines.max(1), last_line_len + 1);
    }
    let mut line = 1u32;
    let mut col = 1u32;
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Format a diagnostic with its source line underlined (for printing).
/// `origin` names the input, e.g. a file path or `<stdin>`.
pub fn format_diagnostic(source: &str, origin: &str, diag: &Diagnostic) -> String {
    let level = match diag.level {
        Level::Error => "error",
        Level::Warning => "warning",
    };
    let loc = match &diag.location {
        Some(l) => l,
        None => return format!("{}: {}", level, diag.message),
    };
    let (line, col) = offset_to_line_col(source, loc.span.start);
    let line_content = source
        .lines()
        .nth((line as usize).saturating_sub(1))
        .unwrap_or("");
    let (_, col_end) = offset_to_line_col(source, loc.span.end);
    let underline = if col_end > col && (col_end as usize) <= line_content.len() + 1 {
        " ".repeat((col as usize).saturating_sub(1)) + &"^".repeat((col_end - col) as usize)
    } else {
        " ".repeat((col as usize).saturating_sub(1)) + "^"
    };
    let gutter = " ".repeat(line.to_string().len());
    format!(
        "{}:{}:{}: {}: {}\n  {} | {}\n  {} | {}",
        origin, line, col, level, diag.message, line, line_content, gutter, underline
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn line_col_counts_from_one() {
        let src = "int a;\n  bad line\n";
        assert_eq!(offset_to_line_col(src, 0), (1, 1));
        assert_eq!(offset_to_line_col(src, 9), (2, 3));
    }

    #[test]
    fn format_underlines_offending_line() {
        let src = "int a;\n  bad line\n";
        let diag = Diagnostic::grammar_mismatch("bad line", Location::new(2, Span::new(9, 17)));
        let out = format_diagnostic(src, "members.decl", &diag);
        assert_eq!(
            out,
            "members.decl:2:3: warning: Invalid declaration: \"bad line\"\n  2 |   bad line\n    |   ^^^^^^^^"
        );
    }

    #[test]
    fn format_without_location() {
        let out = format_diagnostic("", "<stdin>", &Diagnostic::empty_input());
        assert_eq!(out, "error: Please enter at least one variable declaration.");
    }

    #[test]
    fn message_texts() {
        let loc = Location::new(1, Span::default());
        assert_eq!(
            Diagnostic::invalid_array_size("char a[0];", loc).message,
            "Invalid array size in \"char a[0];\""
        );
        assert_eq!(
            Diagnostic::unsupported_array("int a[2];", loc).message,
            "Unsupported array type: \"int a[2];\""
        );
        assert_eq!(
            Diagnostic::empty_after_strip("* p;", loc).message,
            "Could not parse declaration: \"* p;\""
        );
        assert_eq!(
            Diagnostic::grammar_mismatch("x", loc).to_string(),
            "warning at line 1: Invalid declaration: \"x\""
        );
    }
}
