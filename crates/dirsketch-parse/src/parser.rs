//! Tree diagram parsing engine.

use indexmap::{IndexMap, IndexSet};

use dirsketch_core::{EntryKind, ParseConfig, ParseError, SketchTree, TreeEntry, TreeStats};

use crate::classify::classify;
use crate::tokenizer::{LineToken, LineTokenizer};

/// Parser turning diagram text into a [`SketchTree`].
pub struct TreeParser {
    config: ParseConfig,
}

impl TreeParser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self {
            config: ParseConfig::default(),
        }
    }

    /// Create a parser with a custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Parse one tree diagram.
    ///
    /// Lines are tokenized in document order and folded onto a directory
    /// stack: a directory entry at level `n` becomes the parent of every
    /// following entry deeper than `n`, until a shallower entry pops it
    /// back off. Over-indented entries attach to the deepest directory
    /// seen so far rather than failing.
    pub fn parse(&self, input: &str) -> Result<SketchTree, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let mut tokenizer = LineTokenizer::new(&self.config);
        let mut structure: Vec<TreeEntry> = Vec::new();
        let mut directories: IndexSet<String> = IndexSet::new();
        let mut files: IndexMap<String, String> = IndexMap::new();
        let mut dir_stack: Vec<String> = Vec::new();
        let mut root_dir = String::new();

        for line in input.lines() {
            let Some(token) = tokenizer.tokenize(line) else {
                continue;
            };
            let LineToken {
                name,
                level,
                content,
            } = token;
            let kind = classify(&name, &self.config);

            if structure.is_empty() {
                root_dir = trim_dir_slash(&name).to_string();

                // A level-0 directory up front wraps everything below it
                if level == 0 && kind.is_dir() {
                    directories.insert(root_dir.clone());
                    dir_stack.push(root_dir.clone());
                    structure.push(TreeEntry::new_directory(name, 0, root_dir.clone()));
                    continue;
                }
            }

            while dir_stack.len() > level {
                dir_stack.pop();
            }

            match kind {
                EntryKind::File => {
                    let path = join_path(&dir_stack, &name);
                    files.entry(path.clone()).or_insert_with(|| content.clone());
                    structure.push(TreeEntry::new_file(name, level, path, content));
                }
                EntryKind::Directory => {
                    let dir_name = trim_dir_slash(&name).to_string();
                    let path = join_path(&dir_stack, &dir_name);
                    directories.insert(path.clone());
                    dir_stack.push(dir_name);
                    structure.push(TreeEntry::new_directory(name, level, path));
                }
            }
        }

        let has_root_wrapper = wraps_whole_tree(&structure);

        tracing::debug!(
            entries = structure.len(),
            directories = directories.len(),
            files = files.len(),
            root_wrapper = has_root_wrapper,
            "parsed tree diagram"
        );

        let stats = TreeStats::from_entries(&structure);
        Ok(SketchTree {
            structure,
            directories,
            files,
            root_dir,
            has_root_wrapper,
            stats,
        })
    }
}

impl Default for TreeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a diagram with the default configuration.
pub fn parse(input: &str) -> Result<SketchTree, ParseError> {
    TreeParser::new().parse(input)
}

/// Check whether the first entry is a lone level-0 directory enclosing
/// the rest of the document. Decided after the full scan so a later
/// top-level sibling retracts the optimistic assumption.
fn wraps_whole_tree(structure: &[TreeEntry]) -> bool {
    let Some(first) = structure.first() else {
        return false;
    };
    if first.level != 0 || !first.is_dir() {
        return false;
    }
    structure.iter().filter(|entry| entry.level == 0).count() == 1
}

/// Strip the display slash from a directory name.
fn trim_dir_slash(name: &str) -> &str {
    name.strip_suffix('/').unwrap_or(name)
}

/// Join an entry name onto the current directory stack.
fn join_path(stack: &[String], name: &str) -> String {
    if stack.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", stack.join("/"), name)
    }
}
