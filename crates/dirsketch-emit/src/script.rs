//! Scaffolding script generation.
//!
//! Every flavor renders the same plan: create each directory first, in
//! discovery order, then each file, then announce completion. Paths are
//! joined under the resolved root name and quoted for the target language.

use dirsketch_core::SketchTree;
use strum::{Display, EnumString};

use crate::content::unescape_content;
use crate::GENERATED_BY;

/// Target language for a generated scaffolding script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ScriptFlavor {
    /// `os.makedirs` and `open` scaffolding.
    Python,
    /// POSIX shell with `mkdir -p` and `touch`.
    Bash,
    /// Windows batch file.
    Batch,
    /// PowerShell with `New-Item`.
    PowerShell,
    /// Node.js script driving the `fs` module.
    Node,
}

impl ScriptFlavor {
    /// File extension of the generated script, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::Bash => "sh",
            Self::Batch => "bat",
            Self::PowerShell => "ps1",
            Self::Node => "js",
        }
    }

    /// Conventional file name for a saved script.
    pub fn script_name(&self) -> String {
        format!("create_structure.{}", self.extension())
    }
}

/// Render a scaffolding script for the given flavor.
///
/// The root name resolved via [`SketchTree::effective_root`] is joined
/// ahead of every path; duplicate separators collapse. Directories are
/// created before any file, in the order the parse discovered them.
pub fn generate_script(tree: &SketchTree, flavor: ScriptFlavor, root_name: Option<&str>) -> String {
    let root = tree.effective_root(root_name);
    tracing::debug!(
        flavor = %flavor,
        directories = tree.total_dirs(),
        files = tree.total_files(),
        "rendering scaffolding script"
    );
    match flavor {
        ScriptFlavor::Python => render_python(tree, &root),
        ScriptFlavor::Bash => render_bash(tree, &root),
        ScriptFlavor::Batch => render_batch(tree, &root),
        ScriptFlavor::PowerShell => render_powershell(tree, &root),
        ScriptFlavor::Node => render_node(tree, &root),
    }
}

fn render_python(tree: &SketchTree, root: &str) -> String {
    let mut script = format!("import os\n\n# Create directory structure\n# {GENERATED_BY}\n\n");

    if !tree.directories.is_empty() {
        script.push_str("# Create directories\n");
        for dir in &tree.directories {
            let path = escape_single_quoted(&posix_path(root, dir));
            script.push_str(&format!("os.makedirs('{path}', exist_ok=True)\n"));
        }
        script.push('\n');
    }

    if !tree.files.is_empty() {
        script.push_str("# Create files\n");
        for (path, content) in &tree.files {
            let quoted = escape_single_quoted(&posix_path(root, path));
            if content.is_empty() {
                script.push_str(&format!(
                    "with open('{quoted}', 'w') as f:\n    pass  # Empty file\n"
                ));
            } else {
                let body = escape_single_quoted(&unescape_content(content));
                script.push_str(&format!(
                    "with open('{quoted}', 'w') as f:\n    f.write('{body}')\n"
                ));
            }
        }
    }

    script.push_str("\nprint(\"Directory structure created successfully!\")\n");
    script
}

fn render_bash(tree: &SketchTree, root: &str) -> String {
    let mut script = format!("#!/bin/bash\n# Create directory structure\n# {GENERATED_BY}\n\n");
    script.push_str("set -e\necho \"Creating directory structure...\"\n\n");

    if !tree.directories.is_empty() {
        script.push_str("# Create directories\n");
        for dir in &tree.directories {
            let path = escape_bash_double(&posix_path(root, dir));
            script.push_str(&format!("mkdir -p \"{path}\"\n"));
        }
        script.push('\n');
    }

    if !tree.files.is_empty() {
        script.push_str("# Create files\n");
        for (path, content) in &tree.files {
            let quoted = escape_bash_double(&posix_path(root, path));
            if content.is_empty() {
                script.push_str(&format!("touch \"{quoted}\"\n"));
            } else {
                let body = escape_bash_single(&unescape_content(content));
                script.push_str(&format!("printf '%s' '{body}' > \"{quoted}\"\n"));
            }
        }
    }

    script.push_str("\necho \"Directory structure created successfully!\"\n");
    script
}

fn render_batch(tree: &SketchTree, root: &str) -> String {
    let mut script = format!("@echo off\nREM Create directory structure\nREM {GENERATED_BY}\n\n");
    script.push_str("echo Creating directory structure...\n\n");

    if !tree.directories.is_empty() {
        script.push_str("REM Create directories\n");
        for dir in &tree.directories {
            let path = escape_batch_path(&windows_path(root, dir));
            script.push_str(&format!("if not exist \"{path}\" mkdir \"{path}\"\n"));
        }
        script.push('\n');
    }

    if !tree.files.is_empty() {
        script.push_str("REM Create files\n");
        for (path, content) in &tree.files {
            let quoted = escape_batch_path(&windows_path(root, path));
            if content.is_empty() {
                script.push_str(&format!(
                    "if not exist \"{quoted}\" type nul > \"{quoted}\"\n"
                ));
            } else {
                script.push_str(&format!("type nul > \"{quoted}\"\n"));
                // Redirect first so a line ending in a digit cannot turn
                // the append into a stream redirect.
                for line in unescape_content(content).split('\n') {
                    let line = line.trim_end_matches('\r');
                    if line.is_empty() {
                        script.push_str(&format!(">> \"{quoted}\" echo.\n"));
                    } else {
                        script.push_str(&format!(
                            ">> \"{quoted}\" echo {}\n",
                            escape_batch_line(line)
                        ));
                    }
                }
            }
        }
    }

    script.push_str("\necho Directory structure created successfully!\npause\n");
    script
}

fn render_powershell(tree: &SketchTree, root: &str) -> String {
    let mut script = format!("# Create directory structure\n# {GENERATED_BY}\n\n");
    script.push_str("Write-Host \"Creating directory structure...\"\n\n");

    if !tree.directories.is_empty() {
        script.push_str("# Create directories\n");
        for dir in &tree.directories {
            let path = escape_powershell_double(&windows_path(root, dir));
            script.push_str(&format!(
                "New-Item -ItemType Directory -Force -Path \"{path}\" | Out-Null\n"
            ));
        }
        script.push('\n');
    }

    if !tree.files.is_empty() {
        script.push_str("# Create files\n");
        for (path, content) in &tree.files {
            let quoted = escape_powershell_double(&windows_path(root, path));
            if content.is_empty() {
                script.push_str(&format!(
                    "New-Item -ItemType File -Force -Path \"{quoted}\" | Out-Null\n"
                ));
            } else {
                let body = escape_powershell_single(&unescape_content(content));
                script.push_str(&format!("Set-Content -Path \"{quoted}\" -Value '{body}'\n"));
            }
        }
    }

    script.push_str("\nWrite-Host \"Directory structure created successfully!\"\n");
    script
}

fn render_node(tree: &SketchTree, root: &str) -> String {
    let mut script = format!(
        "const fs = require('fs');\n\n// Create directory structure\n// {GENERATED_BY}\n\n"
    );
    script.push_str("console.log('Creating directory structure...');\n\n");

    if !tree.directories.is_empty() {
        script.push_str("// Create directories\n");
        for dir in &tree.directories {
            let path = escape_single_quoted(&posix_path(root, dir));
            script.push_str(&format!("fs.mkdirSync('{path}', {{ recursive: true }});\n"));
        }
        script.push('\n');
    }

    if !tree.files.is_empty() {
        script.push_str("// Create files\n");
        for (path, content) in &tree.files {
            let quoted = escape_single_quoted(&posix_path(root, path));
            let body = escape_single_quoted(&unescape_content(content));
            script.push_str(&format!("fs.writeFileSync('{quoted}', '{body}');\n"));
        }
    }

    script.push_str("\nconsole.log('Directory structure created successfully!');\n");
    script
}

/// Join a path under the root prefix with `/`, collapsing repeated slashes.
pub(crate) fn posix_path(root: &str, path: &str) -> String {
    let joined = if root.is_empty() {
        path.to_string()
    } else {
        format!("{root}/{path}")
    };
    collapse_repeats(&joined, '/')
}

/// Join under the root prefix with `\`, converting existing `/` separators.
fn windows_path(root: &str, path: &str) -> String {
    let joined = if root.is_empty() {
        path.to_string()
    } else {
        format!("{root}/{path}")
    };
    collapse_repeats(&joined.replace('/', "\\"), '\\')
}

fn collapse_repeats(path: &str, sep: char) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_was_sep = false;
    for ch in path.chars() {
        if ch == sep {
            if !previous_was_sep {
                out.push(ch);
            }
            previous_was_sep = true;
        } else {
            out.push(ch);
            previous_was_sep = false;
        }
    }
    out
}

/// Escape for a single-quoted Python or JavaScript string literal.
fn escape_single_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape for a double-quoted shell word.
fn escape_bash_double(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Escape for a single-quoted shell word. An embedded quote closes the
/// quoting, emits an escaped quote, and reopens it.
fn escape_bash_single(text: &str) -> String {
    text.replace('\'', "'\\''")
}

/// Double `%` so cmd.exe does not expand it inside a quoted path.
fn escape_batch_path(text: &str) -> String {
    text.replace('%', "%%")
}

/// Escape an unquoted `echo` argument line for cmd.exe.
fn escape_batch_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for ch in line.chars() {
        match ch {
            '%' => out.push_str("%%"),
            '^' | '&' | '<' | '>' | '|' | '(' | ')' => {
                out.push('^');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Escape for a double-quoted PowerShell string.
fn escape_powershell_double(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '`' | '"' | '$') {
            out.push('`');
        }
        out.push(ch);
    }
    out
}

/// Escape for a single-quoted PowerShell string.
fn escape_powershell_single(text: &str) -> String {
    text.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_path_joins_and_collapses() {
        assert_eq!(posix_path("demo", "app/src"), "demo/app/src");
        assert_eq!(posix_path("", "app/src"), "app/src");
        assert_eq!(posix_path("demo/", "/app"), "demo/app");
    }

    #[test]
    fn test_windows_path_converts_separators() {
        assert_eq!(windows_path("demo", "app/src"), "demo\\app\\src");
        assert_eq!(windows_path("", "app/src"), "app\\src");
    }

    #[test]
    fn test_escape_single_quoted() {
        assert_eq!(escape_single_quoted("it's\nfine"), "it\\'s\\nfine");
        assert_eq!(escape_single_quoted("a\\b"), "a\\\\b");
    }

    #[test]
    fn test_escape_bash_single_handles_quotes() {
        assert_eq!(escape_bash_single("it's"), "it'\\''s");
    }

    #[test]
    fn test_escape_bash_double_guards_expansion() {
        assert_eq!(escape_bash_double("a\"$b`c"), "a\\\"\\$b\\`c");
    }

    #[test]
    fn test_escape_batch_line_specials() {
        assert_eq!(escape_batch_line("100% & done"), "100%% ^& done");
        assert_eq!(escape_batch_line("a<b>c|d"), "a^<b^>c^|d");
    }

    #[test]
    fn test_escape_powershell_variants() {
        assert_eq!(escape_powershell_double("say \"$hi\""), "say `\"`$hi`\"");
        assert_eq!(escape_powershell_single("it's"), "it''s");
    }

    #[test]
    fn test_script_names() {
        assert_eq!(ScriptFlavor::Python.script_name(), "create_structure.py");
        assert_eq!(ScriptFlavor::PowerShell.script_name(), "create_structure.ps1");
    }

    #[test]
    fn test_flavor_labels_round_trip() {
        assert_eq!(ScriptFlavor::PowerShell.to_string(), "powershell");
        assert_eq!("bash".parse(), Ok(ScriptFlavor::Bash));
        assert_eq!("Node".parse(), Ok(ScriptFlavor::Node));
    }
}
