//! Plain-text listing generation for AI scaffolding prompts.

use dirsketch_core::SketchTree;
use itertools::Itertools;

/// Serialize the parsed structure into a prompt for an AI assistant.
///
/// One line per entry in document order, indented two spaces per level,
/// with `[dir]`/`[file]` markers. Content annotations stay in their
/// single-line escaped form, quoted inline.
pub fn generate_prompt(tree: &SketchTree, root_name: Option<&str>) -> String {
    let mut root = tree.effective_root(root_name);
    if root.is_empty() {
        // A wrapped tree needs no prefix for generators, but the prompt
        // still names the wrapper itself.
        root = tree.root_dir.clone();
    }

    let mut prompt = String::from("Create the following directory structure");
    if !root.is_empty() {
        prompt.push_str(&format!(" for a project named \"{root}\""));
    }
    prompt.push_str(":\n\n");

    let listing = tree
        .structure
        .iter()
        .map(|entry| {
            let indent = "  ".repeat(entry.level);
            let marker = if entry.is_dir() { "[dir]" } else { "[file]" };
            if entry.has_content() {
                format!(
                    "{indent}{marker} {} (content: \"{}\")",
                    entry.name, entry.content
                )
            } else {
                format!("{indent}{marker} {}", entry.name)
            }
        })
        .join("\n");
    prompt.push_str(&listing);

    prompt.push_str(
        "\n\nCreate every directory before the files inside it. Files without \
         a content note must be created empty; files with one must contain \
         exactly that content, with \\n and \\t expanded.\n",
    );
    prompt
}
