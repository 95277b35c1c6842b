//! gsgen project manifest: gsgen.toml (class name, input file, output paths).

mod error;
mod manifest;

pub use error::ManifestError;
pub use manifest::{load_manifest, Manifest, OutputPaths, MANIFEST_FILE};
