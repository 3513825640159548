//! dirsketch command line interface.
//!
//! Parses free-form tree diagrams into a canonical model and turns them
//! into scaffolding scripts, archives, AI prompts, or JSON:
//!
//! ```text
//! dsk sketch.txt                    # preview the parsed tree
//! dsk preview sketch.txt            # same, spelled out
//! dsk generate sketch.txt -f bash   # emit a scaffolding script
//! dsk archive sketch.txt -f tar-gz  # pack the tree into an archive
//! dsk prompt sketch.txt             # emit an AI scaffolding prompt
//! dsk export sketch.txt             # dump the parsed model as JSON
//! dsk templates                     # list the bundled starter diagrams
//! ```
//!
//! Every command reads a diagram file, or stdin when the path is `-`
//! (the default), so templates pipe straight back in:
//! `dsk templates fastapi | dsk generate -f python`.

mod templates;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, Context, Result};
use dirsketch_core::{ParseConfig, ParseError, SketchTree};
use dirsketch_emit::{
    generate_archive, generate_prompt, generate_script, ArchiveFormat, ScriptFlavor,
};
use dirsketch_parse::TreeParser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "dsk",
    version,
    about = "Turn tree diagrams into directories, scripts, and archives",
    long_about = "dirsketch parses free-form tree diagrams (box-drawing glyphs, plain \
                  indentation, or a mix of both) into a canonical tree model, then emits \
                  scaffolding scripts, archives, AI prompts, or JSON from that model.\n\n\
                  Run with no subcommand to preview a diagram."
)]
struct Cli {
    /// Tree diagram file to preview (`-` reads stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Root directory name prepended to every path
    #[arg(short, long)]
    root_name: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the parsed tree as an outline with summary stats
    Preview {
        /// Tree diagram file (`-` reads stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Root directory name prepended to every path
        #[arg(short, long)]
        root_name: Option<String>,

        /// Spaces per nesting level for plain-indented lines
        #[arg(long)]
        indent_unit: Option<usize>,
    },

    /// Emit a script that recreates the tree on disk
    Generate {
        /// Tree diagram file (`-` reads stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Script language to emit
        #[arg(short, long, value_enum, default_value = "python")]
        flavor: ScriptTarget,

        /// Root directory name prepended to every path
        #[arg(short, long)]
        root_name: Option<String>,

        /// Write the script here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spaces per nesting level for plain-indented lines
        #[arg(long)]
        indent_unit: Option<usize>,
    },

    /// Pack the tree into an archive of empty scaffolding
    Archive {
        /// Tree diagram file (`-` reads stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Archive container to produce
        #[arg(short, long, value_enum, default_value = "zip")]
        format: ArchiveKind,

        /// Root directory name prepended to every path
        #[arg(short, long)]
        root_name: Option<String>,

        /// Write the archive here instead of `<root>.<ext>`
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spaces per nesting level for plain-indented lines
        #[arg(long)]
        indent_unit: Option<usize>,
    },

    /// Emit a natural-language prompt describing the tree
    Prompt {
        /// Tree diagram file (`-` reads stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Project name to mention in the prompt
        #[arg(short, long)]
        root_name: Option<String>,
    },

    /// Dump the parsed tree model as pretty-printed JSON
    Export {
        /// Tree diagram file (`-` reads stdin)
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Write the JSON here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List bundled template diagrams, or print one by name
    Templates {
        /// Template to print (omit to list all)
        name: Option<String>,
    },
}

/// Script languages selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ScriptTarget {
    #[default]
    Python,
    Bash,
    Batch,
    Powershell,
    Node,
}

impl ScriptTarget {
    fn flavor(self) -> ScriptFlavor {
        match self {
            Self::Python => ScriptFlavor::Python,
            Self::Bash => ScriptFlavor::Bash,
            Self::Batch => ScriptFlavor::Batch,
            Self::Powershell => ScriptFlavor::PowerShell,
            Self::Node => ScriptFlavor::Node,
        }
    }
}

/// Archive containers selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ArchiveKind {
    #[default]
    Zip,
    TarGz,
}

impl ArchiveKind {
    fn format(self) -> ArchiveFormat {
        match self {
            Self::Zip => ArchiveFormat::Zip,
            Self::TarGz => ArchiveFormat::TarGz,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    tracing::debug!("Starting dirsketch CLI");

    let cli = Cli::parse();

    match cli.command {
        Some(Command::Preview {
            input,
            root_name,
            indent_unit,
        }) => run_preview(&input, root_name.as_deref(), indent_unit),
        Some(Command::Generate {
            input,
            flavor,
            root_name,
            output,
            indent_unit,
        }) => run_generate(
            &input,
            flavor.flavor(),
            root_name.as_deref(),
            output.as_deref(),
            indent_unit,
        ),
        Some(Command::Archive {
            input,
            format,
            root_name,
            output,
            indent_unit,
        }) => run_archive(
            &input,
            format.format(),
            root_name.as_deref(),
            output.as_deref(),
            indent_unit,
        ),
        Some(Command::Prompt { input, root_name }) => run_prompt(&input, root_name.as_deref()),
        Some(Command::Export { input, output }) => run_export(&input, output.as_deref()),
        Some(Command::Templates { name }) => run_templates(name.as_deref()),
        None => run_preview(&cli.input, cli.root_name.as_deref(), None),
    }
}

/// Install the tracing subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("dirsketch=info,dirsketch_parse=info,dirsketch_emit=info")
        }))
        .with_target(false)
        .init();
}

/// Read the diagram text from a file, or stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read tree diagram from stdin")?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read tree diagram from {}", path.display()))
    }
}

/// Read and parse a diagram into the canonical tree model.
fn parse_input(path: &Path, indent_unit: Option<usize>) -> Result<SketchTree> {
    let text = read_input(path)?;

    let mut builder = ParseConfig::builder();
    if let Some(unit) = indent_unit {
        builder.indent_unit(unit);
    }
    let config = builder
        .build()
        .map_err(|e| ParseError::invalid_config(e.to_string()))?;

    let tree = TreeParser::with_config(config).parse(&text)?;
    tracing::debug!(
        directories = tree.total_dirs(),
        files = tree.total_files(),
        "parsed tree diagram"
    );
    Ok(tree)
}

fn run_preview(input: &Path, root_name: Option<&str>, indent_unit: Option<usize>) -> Result<()> {
    let tree = parse_input(input, indent_unit)?;

    if tree.is_empty() {
        println!("Nothing to preview: the diagram contained no entries.");
        return Ok(());
    }

    println!("{}", render_outline(&tree, root_name));
    println!("{}", "─".repeat(60));
    println!(
        " {} directories, {} files, max depth {}",
        tree.total_dirs(),
        tree.total_files(),
        tree.stats.max_depth
    );

    Ok(())
}

/// Render the parsed tree as a box-drawing outline.
///
/// Flat listings (and trees given an explicit root name) gain a synthetic
/// root line so every connector hangs off a single root. Indentation
/// follows each entry's recorded level, so a diagram drawn deeper than
/// its structure renders deeper too.
fn render_outline(tree: &SketchTree, root_name: Option<&str>) -> String {
    let mut lines = Vec::new();
    let mut levels: Vec<usize> = tree.structure.iter().map(|entry| entry.level).collect();

    let root = tree.effective_root(root_name);
    if !root.is_empty() {
        lines.push(format!("{root}/"));
        for level in &mut levels {
            *level += 1;
        }
    }

    for (idx, entry) in tree.structure.iter().enumerate() {
        let depth = levels[idx];
        let mut line = String::new();

        if depth > 0 {
            for rail in 1..depth {
                line.push_str(if rail_continues(&levels, idx, rail) {
                    "│   "
                } else {
                    "    "
                });
            }
            line.push_str(if rail_continues(&levels, idx, depth) {
                "├── "
            } else {
                "└── "
            });
        }

        line.push_str(&entry.name);
        if entry.is_dir() && !entry.name.ends_with('/') {
            line.push('/');
        }
        if entry.has_content() {
            line.push_str("  [");
            line.push_str(&truncate(&entry.content, 40));
            line.push(']');
        }
        lines.push(line);
    }

    lines.join("\n")
}

/// True when a later entry still hangs at `depth` before the branch closes.
fn rail_continues(levels: &[usize], idx: usize, depth: usize) -> bool {
    for &level in &levels[idx + 1..] {
        if level < depth {
            return false;
        }
        if level == depth {
            return true;
        }
    }
    false
}

fn run_generate(
    input: &Path,
    flavor: ScriptFlavor,
    root_name: Option<&str>,
    output: Option<&Path>,
    indent_unit: Option<usize>,
) -> Result<()> {
    let tree = parse_input(input, indent_unit)?;
    let script = generate_script(&tree, flavor, root_name);

    match output {
        Some(path) => {
            std::fs::write(path, &script)
                .with_context(|| format!("Failed to write script to {}", path.display()))?;
            eprintln!("Wrote {flavor} script to {}", path.display());
        }
        None => print!("{script}"),
    }

    Ok(())
}

fn run_archive(
    input: &Path,
    format: ArchiveFormat,
    root_name: Option<&str>,
    output: Option<&Path>,
    indent_unit: Option<usize>,
) -> Result<()> {
    let tree = parse_input(input, indent_unit)?;
    let bytes = generate_archive(&tree, format, root_name)?;

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_archive_name(&tree, root_name, format)),
    };
    std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write archive to {}", path.display()))?;
    eprintln!(
        "Wrote {} ({})",
        path.display(),
        format_size(bytes.len() as u64)
    );

    Ok(())
}

/// Default archive file name, derived from the tree's root.
fn default_archive_name(
    tree: &SketchTree,
    root_name: Option<&str>,
    format: ArchiveFormat,
) -> String {
    let mut root = tree.effective_root(root_name);
    if root.is_empty() {
        root = tree.root_dir.clone();
    }
    if root.is_empty() {
        root = "project".to_string();
    }
    format!("{}.{}", root, format.extension())
}

fn run_prompt(input: &Path, root_name: Option<&str>) -> Result<()> {
    let tree = parse_input(input, None)?;
    print!("{}", generate_prompt(&tree, root_name));
    Ok(())
}

fn run_export(input: &Path, output: Option<&Path>) -> Result<()> {
    let tree = parse_input(input, None)?;
    let json = serde_json::to_string_pretty(&tree)?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write JSON to {}", path.display()))?;
            eprintln!("Exported to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn run_templates(name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => match templates::find(name) {
            Some(template) => print!("{}", template.diagram),
            None => {
                let available = templates::TEMPLATES
                    .iter()
                    .map(|template| template.name)
                    .collect::<Vec<_>>()
                    .join(", ");
                bail!("Unknown template '{name}' (available: {available})");
            }
        },
        None => {
            println!("Bundled templates:");
            println!();
            for template in templates::TEMPLATES {
                println!("  {:<12} {}", template.name, template.description);
            }
            println!();
            println!("Print one with `dsk templates <name>`, or pipe it straight back in:");
            println!("  dsk templates fastapi | dsk generate -f python");
        }
    }

    Ok(())
}

/// Truncate a string for display, appending `...` when shortened.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

/// Format a byte count as a human-readable size.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
