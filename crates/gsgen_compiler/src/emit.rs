//! Emission: classified declarations → accessor, inline accessor and initializer text.

pub mod accessors;
pub mod init;

pub use accessors::{render_accessors, Scope};
pub use init::render_initializer;
