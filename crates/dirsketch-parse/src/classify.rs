//! Entry classification.

use dirsketch_core::{EntryKind, ParseConfig};

/// Shortest plausible extension, dot included.
const MIN_EXT_LEN: usize = 2;
/// Longest plausible extension, dot included.
const MAX_EXT_LEN: usize = 6;

/// Decide whether a cleaned entry name denotes a file or a directory.
///
/// A trailing `/` always marks a directory and a name from the
/// extensionless table always marks a file. Otherwise the suffix after
/// the last dot decides: a known extension makes a file, as does a
/// plausibly sized suffix on a non-hidden name. Everything else is a
/// directory.
pub fn classify(name: &str, config: &ParseConfig) -> EntryKind {
    if name.ends_with('/') {
        return EntryKind::Directory;
    }

    if config.is_extensionless_file(name) {
        return EntryKind::File;
    }

    let Some(last_dot) = name.rfind('.') else {
        return EntryKind::Directory;
    };

    let ext = &name[last_dot..];
    if config.knows_extension(ext) {
        return EntryKind::File;
    }

    // The size heuristic skips hidden names whose only dot is the first char.
    let ext_len = ext.chars().count();
    if last_dot > 0 && (MIN_EXT_LEN..=MAX_EXT_LEN).contains(&ext_len) {
        EntryKind::File
    } else {
        EntryKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(name: &str) -> EntryKind {
        classify(name, &ParseConfig::default())
    }

    #[test]
    fn test_trailing_slash_is_directory() {
        assert_eq!(kind("src/"), EntryKind::Directory);
        assert_eq!(kind("v1.2/"), EntryKind::Directory);
    }

    #[test]
    fn test_known_extensions_are_files() {
        assert_eq!(kind("main.py"), EntryKind::File);
        assert_eq!(kind("lib.rs"), EntryKind::File);
        assert_eq!(kind("INDEX.HTML"), EntryKind::File);
    }

    #[test]
    fn test_extensionless_table() {
        assert_eq!(kind("Dockerfile"), EntryKind::File);
        assert_eq!(kind("Makefile"), EntryKind::File);
        assert_eq!(kind("README"), EntryKind::File);
        assert_eq!(kind(".env"), EntryKind::File);
        assert_eq!(kind(".gitignore"), EntryKind::File);
    }

    #[test]
    fn test_dotless_names_are_directories() {
        assert_eq!(kind("no-extension"), EntryKind::Directory);
        assert_eq!(kind("src"), EntryKind::Directory);
        assert_eq!(kind("node_modules"), EntryKind::Directory);
    }

    #[test]
    fn test_plausible_unknown_extension_is_a_file() {
        // ".2" is not in the table but sits in the plausible size range
        assert_eq!(kind("v1.2"), EntryKind::File);
        assert_eq!(kind("archive.tar.gz"), EntryKind::File);
        assert_eq!(kind("notes.bak"), EntryKind::File);
    }

    #[test]
    fn test_implausible_extension_is_a_directory() {
        // Suffix longer than six characters, unknown
        assert_eq!(kind("project.workspace"), EntryKind::Directory);
        assert_eq!(kind(".hiddenfolder"), EntryKind::Directory);
        // Bare trailing dot is too short to be an extension
        assert_eq!(kind("ends."), EntryKind::Directory);
    }

    #[test]
    fn test_leading_dot_with_unknown_suffix_is_a_directory() {
        assert_eq!(kind(".rc"), EntryKind::Directory);
        assert_eq!(kind(".cache"), EntryKind::Directory);
        // A known extension wins even when it is the whole name
        assert_eq!(kind(".rs"), EntryKind::File);
    }

    #[test]
    fn test_custom_tables() {
        let config = ParseConfig::builder()
            .known_extensions(vec![".zig".to_string(), ".workspace".to_string()])
            .extensionless_files(vec!["justfile".to_string()])
            .build()
            .unwrap();

        assert_eq!(classify("build.zig", &config), EntryKind::File);
        assert_eq!(classify("app.workspace", &config), EntryKind::File);
        assert_eq!(classify("Justfile", &config), EntryKind::File);
        assert_eq!(classify("Dockerfile", &config), EntryKind::Directory);
    }
}
