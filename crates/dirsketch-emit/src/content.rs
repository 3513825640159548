//! Escape handling for inline scaffold content.
//!
//! A content annotation is captured from a single diagram line, so real
//! newlines cannot appear in it. The `\n`, `\t`, and `\\` sequences encode
//! them instead; this module expands those once, before the text is
//! re-quoted for a target language or written into an archive.

/// Expand `\n`, `\t`, and `\\` sequences into real characters.
///
/// Unrecognized escapes are kept as written, so content that never used
/// the convention passes through unchanged.
pub fn unescape_content(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_newline_and_tab() {
        assert_eq!(unescape_content("a\\nb\\tc"), "a\nb\tc");
    }

    #[test]
    fn test_double_backslash_is_literal() {
        assert_eq!(unescape_content("a\\\\nb"), "a\\nb");
    }

    #[test]
    fn test_unknown_escape_passes_through() {
        assert_eq!(unescape_content("C:\\dir"), "C:\\dir");
    }

    #[test]
    fn test_trailing_backslash_survives() {
        assert_eq!(unescape_content("end\\"), "end\\");
    }

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(unescape_content("print('hi')"), "print('hi')");
    }
}
