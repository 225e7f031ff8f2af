use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Canonicalises line endings and collapses whitespace runs to one space.
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");
    WHITESPACE_RUN
        .replace_all(unified.trim(), " ")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(normalize("one.\r\ntwo.\rthree."), "one. two. three.");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(normalize(" \n\t "), "");
    }
}
