//! gsgen syntax: line tokens, declaration records, spans, diagnostics, accessor naming.

pub mod accessors;
pub mod ast;
pub mod diagnostics;
pub mod span;
pub mod token;

pub use accessors::*;
pub use ast::*;
pub use diagnostics::*;
pub use span::*;
pub use token::*;
