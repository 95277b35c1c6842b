//! gsgen.toml manifest parsing.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const MANIFEST_FILE: &str = "gsgen.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub name: String,
    /// Class name for inline (`Class::`) accessors; inline output is skipped when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// Declaration file, relative to the project root.
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default)]
    pub output: OutputPaths,
}

/// Output file names, relative to `dir`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub dir: String,
    pub accessors: String,
    pub inline: String,
    pub init: String,
}

fn default_input() -> String {
    "members.decl".to_string()
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            dir: "dist".to_string(),
            accessors: "accessors.hpp".to_string(),
            inline: "accessors_inline.hpp".to_string(),
            init: "init.inc".to_string(),
        }
    }
}

impl Manifest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class: None,
            input: default_input(),
            output: OutputPaths::default(),
        }
    }

    /// Class name with surrounding whitespace removed; `None` if blank.
    pub fn class_name(&self) -> Option<&str> {
        self.class.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    pub fn input_path(&self, root: &Path) -> PathBuf {
        root.join(&self.input)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

impl OutputPaths {
    pub fn dir_path(&self, root: &Path) -> PathBuf {
        root.join(&self.dir)
    }

    pub fn accessors_path(&self, root: &Path) -> PathBuf {
        self.dir_path(root).join(&self.accessors)
    }

    pub fn inline_path(&self, root: &Path) -> PathBuf {
        self.dir_path(root).join(&self.inline)
    }

    pub fn init_path(&self, root: &Path) -> PathBuf {
        self.dir_path(root).join(&self.init)
    }
}

pub fn load_manifest(path: &Path) -> Result<Manifest, ManifestError> {
    let s = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&s).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply() {
        let m: Manifest = toml::from_str(r#"name = "hello""#).unwrap();
        assert_eq!(m.name, "hello");
        assert_eq!(m.class, None);
        assert_eq!(m.input, "members.decl");
        assert_eq!(m.output, OutputPaths::default());
    }

    #[test]
    fn partial_output_table() {
        let m: Manifest = toml::from_str(
            r#"
name = "hello"
class = "CHello"
input = "decls/hello.decl"

[output]
dir = "gen"
"#,
        )
        .unwrap();
        assert_eq!(m.class_name(), Some("CHello"));
        assert_eq!(m.output.dir, "gen");
        assert_eq!(m.output.accessors, "accessors.hpp");
        let root = Path::new("/p");
        assert_eq!(m.input_path(root), PathBuf::from("/p/decls/hello.decl"));
        assert_eq!(m.output.init_path(root), PathBuf::from("/p/gen/init.inc"));
    }

    #[test]
    fn blank_class_is_none() {
        let mut m = Manifest::new("x");
        m.class = Some("   ".to_string());
        assert_eq!(m.class_name(), None);
    }

    #[test]
    fn toml_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        let mut m = Manifest::new("demo");
        m.class = Some("CDemo".to_string());
        std::fs::write(&path, m.to_toml().unwrap()).unwrap();
        assert_eq!(load_manifest(&path).unwrap(), m);
    }

    #[test]
    fn load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(MANIFEST_FILE);
        assert!(matches!(load_manifest(&missing), Err(ManifestError::Io { .. })));

        std::fs::write(&missing, "name = 3").unwrap();
        let err = load_manifest(&missing).unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(err.to_string().starts_with("invalid manifest"));
    }
}
