/// Split text into whitespace-delimited tokens. Case is preserved; folding happens at index time.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Case-fold a token (or a whole query) into its index key.
pub fn normalize(token: &str) -> String {
    token.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_tokenize() {
        let t = tokenize("Call me  Ishmael.\nSome years ago,\tnever mind");
        assert_eq!(t, vec!["Call", "me", "Ishmael.", "Some", "years", "ago,", "never", "mind"]);
    }

    #[test]
    fn blank_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn normalize_only_folds_case() {
        assert_eq!(normalize("WHALE,"), "whale,");
        assert_eq!(normalize("Ahab's"), "ahab's");
    }
}
