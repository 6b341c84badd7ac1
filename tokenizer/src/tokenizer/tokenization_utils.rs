/// Is this one of the characters a whitespace split breaks on?
///
/// This is Unicode whitespace plus the ASCII file, group, record, and unit
/// separators (U+001C to U+001F).
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split a string on runs of whitespace, discarding empty pieces.
pub(crate) fn whitespace_tokenize(text: &str) -> Vec<&str> {
    text.split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_run_of_whitespace() {
        let tokens = whitespace_tokenize("  Gal (b1-4)\tGlcNAc\n\n Man ");

        assert_eq!(tokens, vec!["Gal", "(b1-4)", "GlcNAc", "Man"]);
    }

    #[test]
    fn blank_text_has_no_tokens() {
        assert!(whitespace_tokenize("").is_empty());
        assert!(whitespace_tokenize(" \t\r\n").is_empty());
    }

    #[test]
    fn unicode_and_separator_characters_split() {
        let tokens = whitespace_tokenize("a\u{a0}b\u{1f}c\u{3000}d");

        assert_eq!(tokens, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn punctuation_is_not_split() {
        let tokens = whitespace_tokenize("Neu5Ac(a2-3)Gal");

        assert_eq!(tokens, vec!["Neu5Ac(a2-3)Gal"]);
    }
}
