//! Line tokenizer for tree diagram text.

use dirsketch_core::ParseConfig;

/// Connectors that mark a line as glyph-drawn.
const BRANCH_GLYPHS: &[char] = &['├', '└', '╣', '║', '╚', '╬'];

/// Drawing characters stripped from the front of a line before the name.
const DRAWING_GLYPHS: &[char] = &[
    '├', '└', '│', '╣', '║', '╚', '╬', '─', '┌', '┐', '┘', '┴', '┬', '┤',
];

/// One successfully tokenized diagram line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineToken {
    /// Cleaned entry name. Directories keep their trailing `/`.
    pub name: String,
    /// Inferred nesting depth, 0 = top.
    pub level: usize,
    /// Literal content captured from a trailing `[...]` annotation.
    pub content: String,
}

/// Splits raw diagram lines into name, level and content.
///
/// Glyph-drawn lines take their depth from the drawing prefix. Plain
/// indented lines learn the indentation width from the first indented
/// line and keep it for the rest of the document, so the tokenizer is
/// stateful and consumed line by line.
#[derive(Debug)]
pub struct LineTokenizer {
    indent_unit: Option<usize>,
    strip_comments: bool,
}

impl LineTokenizer {
    /// Create a tokenizer following the given config.
    pub fn new(config: &ParseConfig) -> Self {
        Self {
            indent_unit: config.indent_unit,
            strip_comments: config.strip_comments,
        }
    }

    /// Tokenize one line. Returns `None` for lines carrying no entry.
    pub fn tokenize(&mut self, line: &str) -> Option<LineToken> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }
        if self.strip_comments && trimmed.starts_with('#') {
            return None;
        }

        let level = self.measure_level(line);
        let cleaned = self.clean_name(line);
        if cleaned.is_empty() {
            return None;
        }

        let (name, content) = split_content(&cleaned);
        if name.is_empty() {
            return None;
        }

        Some(LineToken {
            name,
            level,
            content,
        })
    }

    /// Get the indentation width learned so far, if any.
    pub fn indent_unit(&self) -> Option<usize> {
        self.indent_unit
    }

    /// Infer the nesting depth from the glyph prefix or plain indentation.
    fn measure_level(&mut self, line: &str) -> usize {
        if let Some((pipes, fill)) = branch_prefix(line) {
            // The connector itself sits one level below its parent rail
            return pipes + fill / 2 + 1;
        }

        let leading_spaces = line.chars().take_while(|c| *c == ' ').count();
        if leading_spaces == 0 {
            return 0;
        }

        let unit = match self.indent_unit {
            Some(unit) if unit > 0 => unit,
            _ => {
                tracing::debug!(unit = leading_spaces, "learned indent unit");
                self.indent_unit = Some(leading_spaces);
                leading_spaces
            }
        };
        (leading_spaces as f64 / unit as f64).round() as usize
    }

    /// Strip drawing characters, surrounding whitespace and trailing
    /// comments from a line, leaving just the entry text.
    fn clean_name(&self, line: &str) -> String {
        let mut name = line
            .trim_start_matches(|c: char| c.is_whitespace() || DRAWING_GLYPHS.contains(&c))
            .trim_end();

        if self.strip_comments {
            if let Some(idx) = name.find('#') {
                name = &name[..idx];
            }
            if let Some(idx) = name.find("//") {
                name = &name[..idx];
            }
        }

        name.trim().to_string()
    }
}

/// Measure the drawing prefix before the first branch connector.
///
/// Returns `(pipe count, other prefix chars)` for glyph-drawn lines and
/// `None` for plain ones.
fn branch_prefix(line: &str) -> Option<(usize, usize)> {
    let mut pipes = 0;
    let mut fill = 0;
    for c in line.chars() {
        if BRANCH_GLYPHS.contains(&c) {
            return Some((pipes, fill));
        }
        if c == '│' {
            pipes += 1;
        } else if c.is_whitespace() {
            fill += 1;
        } else {
            return None;
        }
    }
    None
}

/// Split a trailing `[...]` annotation off a cleaned name.
fn split_content(name: &str) -> (String, String) {
    if name.ends_with(']') {
        if let Some(open) = name.find('[') {
            let content = name[open + 1..name.len() - 1].to_string();
            let name = name[..open].trim_end().to_string();
            return (name, content);
        }
    }
    (name.to_string(), String::new())
}
