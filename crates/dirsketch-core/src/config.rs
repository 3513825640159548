//! Parse configuration types.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// File extensions the default classifier treats as files. Lookup is
/// case-insensitive and includes the leading dot.
pub const KNOWN_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".json", ".txt", ".md", ".html", ".css", ".xml", ".yml", ".yaml", ".conf",
    ".ini", ".ts", ".jsx", ".tsx", ".php", ".rb", ".go", ".rs", ".cpp", ".c", ".java", ".kt",
    ".swift",
];

/// Well-known file names that carry no extension.
pub const EXTENSIONLESS_FILES: &[&str] = &[
    "dockerfile",
    "makefile",
    "readme",
    "license",
    ".env",
    ".gitignore",
    ".dockerignore",
];

/// Configuration for parsing operations.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ParseConfig {
    /// Extensions classified as files (leading dot, lowercase).
    #[builder(default = "default_known_extensions()")]
    #[serde(default = "default_known_extensions")]
    pub known_extensions: Vec<String>,

    /// Extensionless names classified as files (lowercase).
    #[builder(default = "default_extensionless_files()")]
    #[serde(default = "default_extensionless_files")]
    pub extensionless_files: Vec<String>,

    /// Spaces per nesting level for plain-indented lines. None means the
    /// first indented line decides.
    #[builder(default)]
    #[serde(default)]
    pub indent_unit: Option<usize>,

    /// Strip `#` and `//` trailing comments from entry names.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub strip_comments: bool,
}

fn default_known_extensions() -> Vec<String> {
    KNOWN_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_extensionless_files() -> Vec<String> {
    EXTENSIONLESS_FILES.iter().map(|n| n.to_string()).collect()
}

fn default_true() -> bool {
    true
}

impl ParseConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(0)) = self.indent_unit {
            return Err("Indent unit must be at least 1".to_string());
        }
        Ok(())
    }
}

impl ParseConfig {
    /// Create a new parse config builder.
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder::default()
    }

    /// Check if an extension (leading dot included) is a known file
    /// extension.
    pub fn knows_extension(&self, ext: &str) -> bool {
        let ext = ext.to_ascii_lowercase();
        self.known_extensions.iter().any(|known| *known == ext)
    }

    /// Check if a name is a well-known extensionless file.
    pub fn is_extensionless_file(&self, name: &str) -> bool {
        let name = name.to_ascii_lowercase();
        self.extensionless_files.iter().any(|known| *known == name)
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            known_extensions: default_known_extensions(),
            extensionless_files: default_extensionless_files(),
            indent_unit: None,
            strip_comments: true,
        }
    }
}
