//! gsgen CLI: new, build, gen, types.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gsgen_compiler::{generate, print_diagnostics, read_declarations, Generated, InlineOutput};
use gsgen_pkg::{load_manifest, Manifest, MANIFEST_FILE};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const INLINE_SKIPPED: &str = "No class name provided - inline version skipped.";

const SAMPLE_DECLS: &str = "int mcsi_Magi;
bool mb_Active;
char mcac_Buf[32];
SResponse mcS_Response;
CHello *pmeC_Hello;
";

const SUPPORTED_TYPES: &str = "Supported data types:
  Primitive types: int, bool, char, float, double, long double, short, long
  Standard types:  string
  Arrays:          char arrays with size, e.g. char mcac_Buf[32];
  Structures:      SResponse mcS_Response; (uses SL_ prefix)
  Pointers:        any pointer, e.g. CHello *pmeC_Hello;
  Custom types:    any user-defined class/struct

Naming convention:
  The generator takes the name after the last underscore:
  int mcsi_Magi;  ->  mcfn_getMagi() / mcfn_setMagi(int &siL_Magi)
";

#[derive(Parser)]
#[command(name = "gsgen")]
#[command(about = "Getter/setter generator for Hungarian-notation member declarations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new gsgen project
    New { name: String },
    /// Generate the accessor files of a project (reads gsgen.toml)
    Build {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Generate from a declaration file (or stdin) and print to stdout
    Gen {
        /// Declaration file; `-` or absent reads stdin
        file: Option<PathBuf>,
        /// Class name for inline accessors
        #[arg(long)]
        class: Option<String>,
    },
    /// List supported data types and the naming convention
    Types,
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env("GSGEN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::New { name } => cmd_new(Path::new(&name)),
        Commands::Build { path } => cmd_build(&path),
        Commands::Gen { file, class } => cmd_gen(file.as_deref(), class.as_deref()),
        Commands::Types => {
            print!("{}", SUPPORTED_TYPES);
            Ok(())
        }
    }
}

fn cmd_new(dir: &Path) -> Result<()> {
    if dir.exists() {
        bail!("Directory already exists: {}", dir.display());
    }
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("project name must not be empty")?;
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let manifest = Manifest::new(name.clone());
    let toml = manifest.to_toml().context("serializing manifest")?;
    let contents = format!("# class = \"CMyClass\"   # uncomment to generate inline accessors\n{}", toml);
    std::fs::write(dir.join(MANIFEST_FILE), contents)?;
    std::fs::write(manifest.input_path(dir), SAMPLE_DECLS)?;
    println!("Created project {}", name);
    Ok(())
}

/// Project root for `path`: the directory itself, or the parent of a gsgen.toml path.
fn project_root(path: &Path) -> PathBuf {
    if path.file_name().map(|n| n == MANIFEST_FILE).unwrap_or(false) {
        path.parent().unwrap_or(Path::new(".")).to_path_buf()
    } else {
        path.to_path_buf()
    }
}

fn cmd_build(path: &Path) -> Result<()> {
    let root = project_root(path);
    let manifest = load_manifest(&root.join(MANIFEST_FILE))?;
    let input = manifest.input_path(&root);
    let source = read_declarations(&input)?;
    tracing::debug!(project = %manifest.name, input = %input.display(), "building");

    let generated = generate(&source, manifest.class_name());
    print_diagnostics(&source, &input.display().to_string(), &generated.diagnostics);
    if generated.has_errors() {
        bail!("Generation failed");
    }

    let out = &manifest.output;
    std::fs::create_dir_all(out.dir_path(&root))?;
    write_output(&out.accessors_path(&root), &generated.accessors)?;
    match &generated.inline {
        InlineOutput::Scoped(text) => write_output(&out.inline_path(&root), text)?,
        InlineOutput::Skipped => println!("{}", INLINE_SKIPPED),
    }
    write_output(&out.init_path(&root), &generated.initializers)?;
    Ok(())
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn cmd_gen(file: Option<&Path>, class: Option<&str>) -> Result<()> {
    let (source, origin) = match file {
        Some(p) if p != Path::new("-") => (read_declarations(p)?, p.display().to_string()),
        _ => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s).context("reading stdin")?;
            (s, "<stdin>".to_string())
        }
    };

    let generated = generate(&source, class);
    print_diagnostics(&source, &origin, &generated.diagnostics);
    if generated.has_errors() {
        bail!("Generation failed");
    }
    print!("{}", render_report(&generated, class));
    Ok(())
}

/// The three output sections as printed by `gsgen gen`.
fn render_report(generated: &Generated, class: Option<&str>) -> String {
    let mut out = String::from("// ===== Generated Getters/Setters =====\n");
    out.push_str(&generated.accessors);
    match &generated.inline {
        InlineOutput::Scoped(text) => {
            out.push_str(&format!(
                "// ===== Inline (with {}::) =====\n",
                class.map(str::trim).unwrap_or_default()
            ));
            out.push_str(text);
        }
        InlineOutput::Skipped => out.push_str(&format!("// {}\n\n", INLINE_SKIPPED)),
    }
    out.push_str("// ===== Initialization Code =====\n");
    out.push_str(&generated.initializers);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_then_build_writes_outputs() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("hello");
        cmd_new(&dir).expect("new");
        assert!(dir.join(MANIFEST_FILE).exists());
        assert_eq!(std::fs::read_to_string(dir.join("members.decl")).unwrap(), SAMPLE_DECLS);

        // Manifest written by `new` has no class: inline output is skipped.
        cmd_build(&dir).expect("build");
        let dist = dir.join("dist");
        let accessors = std::fs::read_to_string(dist.join("accessors.hpp")).unwrap();
        assert!(accessors.contains("void mcfn_setMagi(int &siL_Magi) {mcsi_Magi = siL_Magi; }"));
        assert!(accessors.contains("void mcfn_setHello(CHello* pCL_Hello) {pmeC_Hello = pCL_Hello; }"));
        assert!(!dist.join("accessors_inline.hpp").exists());
        let init = std::fs::read_to_string(dist.join("init.inc")).unwrap();
        assert_eq!(init.lines().count(), 5);
        assert!(init.contains("mcS_Response = {};"));
    }

    #[test]
    fn build_with_class_writes_inline() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::write(
            root.join(MANIFEST_FILE),
            "name = \"demo\"\nclass = \"CDemo\"\ninput = \"d.decl\"\n\n[output]\ndir = \"gen\"\n",
        )
        .unwrap();
        std::fs::write(root.join("d.decl"), "bool mb_Active;\nint bad[3];\n").unwrap();
        cmd_build(&root.join(MANIFEST_FILE)).expect("build");
        let inline = std::fs::read_to_string(root.join("gen/accessors_inline.hpp")).unwrap();
        assert!(inline.contains("inline\nbool CDemo::mcfn_getActive() {return mb_Active; }\n"));
    }

    #[test]
    fn build_reports_missing_declaration_file() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::write(root.join(MANIFEST_FILE), "name = \"demo\"\ninput = \"gone.decl\"\n").unwrap();
        let err = cmd_build(root).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("failed to read"), "{}", msg);
        assert!(msg.contains("gone.decl"), "{}", msg);
    }

    #[test]
    fn gen_reports_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.decl");
        let err = cmd_gen(Some(&missing), None).unwrap_err();
        assert!(err.downcast_ref::<gsgen_compiler::GenerateError>().is_some());
    }

    #[test]
    fn new_refuses_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(cmd_new(tmp.path()).is_err());
    }

    #[test]
    fn build_fails_on_empty_input() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        std::fs::write(root.join(MANIFEST_FILE), "name = \"empty\"\n").unwrap();
        std::fs::write(root.join("members.decl"), "\n   \n").unwrap();
        assert!(cmd_build(root).is_err());
    }

    #[test]
    fn build_without_manifest_errors() {
        let tmp = tempfile::tempdir().unwrap();
        let err = cmd_build(tmp.path()).unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }

    #[test]
    fn report_sections() {
        let g = generate("bool mb_Active;", None);
        let report = render_report(&g, None);
        assert!(report.starts_with("// ===== Generated Getters/Setters =====\n// For mb_Active\n"));
        assert!(report.contains("// No class name provided - inline version skipped.\n"));
        assert!(report.ends_with("// ===== Initialization Code =====\nmb_Active = false;\n"));

        let g = generate("bool mb_Active;", Some(" CFlag "));
        let report = render_report(&g, Some(" CFlag "));
        assert!(report.contains("// ===== Inline (with CFlag::) =====\n// For mb_Active\ninline\n"));
    }
}
